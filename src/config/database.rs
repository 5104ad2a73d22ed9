//! Database configuration module.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the on-disk schema always matches the Rust models, foreign keys included.
//!
//! [`bootstrap`] is the single entry point used at startup: it opens the store, makes
//! sure every table exists and is readable, recreates the file once if it is corrupt or
//! incompatible, and seeds an empty store with the sample dataset.

use crate::config::AppConfig;
use crate::core::seed::{self, SeedOutcome};
use crate::entities::{Agent, Inquiry, Marketing, Property, User};
use crate::errors::Result;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, EntityTrait, QuerySelect, Schema,
};
use std::path::PathBuf;
use tracing::{debug, error, info, instrument, warn};

/// Resolves the database URL.
///
/// `DATABASE_URL` from the environment wins; otherwise the configured file path is
/// opened in read-write-create mode.
#[must_use]
pub fn get_database_url(config: &AppConfig) -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| format!("sqlite://{}?mode=rwc", config.database_path))
}

/// Extracts the on-disk path from a `SQLite` URL. In-memory URLs have no file.
#[must_use]
pub fn sqlite_file_path(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();

    if path.is_empty() || path.contains(":memory:") {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Establishes a connection to the `SQLite` database at `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database: {}", database_url);
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all tables that do not exist yet, parents before children.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statements = [
        schema.create_table_from_entity(Agent),
        schema.create_table_from_entity(Property),
        schema.create_table_from_entity(Inquiry),
        schema.create_table_from_entity(Marketing),
        schema.create_table_from_entity(User),
    ];

    for statement in &mut statements {
        statement.if_not_exists();
        db.execute(builder.build(statement)).await?;
    }

    Ok(())
}

/// Reads one row from every table, selecting every mapped column.
///
/// Fails when a table or column is missing or the file is not a database at all.
pub async fn verify_schema(db: &DatabaseConnection) -> Result<()> {
    Agent::find().limit(1).all(db).await?;
    Property::find().limit(1).all(db).await?;
    Inquiry::find().limit(1).all(db).await?;
    Marketing::find().limit(1).all(db).await?;
    User::find().limit(1).all(db).await?;
    Ok(())
}

async fn open_store(database_url: &str) -> Result<DatabaseConnection> {
    let db = create_connection(database_url).await?;
    create_tables(&db).await?;
    verify_schema(&db).await?;
    Ok(db)
}

/// Opens the store for the application, recreating it once if it cannot be used.
///
/// A store that fails to open, to create its tables, or to pass [`verify_schema`] is
/// treated as unrecoverable in place: the file is deleted and a fresh store is built
/// (and seeded, when enabled). A second failure is returned to the caller.
#[instrument(skip(config))]
pub async fn bootstrap(config: &AppConfig) -> Result<DatabaseConnection> {
    let database_url = get_database_url(config);

    let db = match open_store(&database_url).await {
        Ok(db) => db,
        Err(e) => {
            warn!("Store at {database_url} is unusable ({e}); recreating it");
            if let Some(path) = sqlite_file_path(&database_url)
                && path.exists()
            {
                std::fs::remove_file(&path)?;
                info!("Removed damaged database file {}", path.display());
            }
            open_store(&database_url)
                .await
                .inspect_err(|e| error!("Failed to recreate database: {}", e))?
        }
    };
    info!("Database ready at {}", database_url);

    if config.seed_sample_data {
        match seed::seed_sample_data(&db).await? {
            SeedOutcome::Seeded {
                agents,
                properties,
                inquiries,
            } => info!(agents, properties, inquiries, "Seeded sample data"),
            SeedOutcome::Skipped => debug!("Store already holds records; seeding skipped"),
        }
    }

    Ok(db)
}
