//! Shared test utilities for the records manager.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test records with sensible defaults.

use crate::{
    core::{
        agent::{self, AgentInput},
        inquiry::{self, InquiryInput},
        marketing::{self, MarketingInput},
        property::{self, PropertyInput},
    },
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Routes tracing output through the test harness so it only shows for failing tests.
/// Safe to call from every test; only the first call installs the subscriber.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all store tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test agent with sensible defaults.
///
/// # Defaults
/// * `phone`: "9876543210"
/// * `email`: None
/// * `license_number`: None
/// * `commission_rate`: 2.0
pub async fn create_test_agent(db: &DatabaseConnection, name: &str) -> Result<entities::agent::Model> {
    agent::create_agent(
        db,
        AgentInput {
            name: name.to_string(),
            phone: Some("9876543210".to_string()),
            commission_rate: Some(2.0),
            ..Default::default()
        },
    )
    .await
}

/// Creates a test property with sensible defaults.
///
/// # Defaults
/// * `property_type`: "Apartment"
/// * `bedrooms`: 2, `bathrooms`: 2.0
/// * `price`: 7 500 000
/// * `status`: "Available"
pub async fn create_test_property(
    db: &DatabaseConnection,
    address: &str,
    agent_id: Option<i64>,
) -> Result<entities::property::Model> {
    property::create_property(
        db,
        PropertyInput {
            address: address.to_string(),
            property_type: "Apartment".to_string(),
            bedrooms: Some(2),
            bathrooms: Some(2.0),
            price: Some(7_500_000.0),
            status: Some("Available".to_string()),
            agent_id,
            description: None,
        },
    )
    .await
}

/// Creates a test inquiry with status "New" and no notes.
pub async fn create_test_inquiry(
    db: &DatabaseConnection,
    client_name: &str,
    property_id: Option<i64>,
    agent_id: Option<i64>,
) -> Result<entities::inquiry::Model> {
    inquiry::create_inquiry(
        db,
        InquiryInput {
            client_name: client_name.to_string(),
            contact_info: None,
            property_id,
            status: Some("New".to_string()),
            notes: None,
            agent_id,
        },
    )
    .await
}

/// Creates a test marketing entry; same defaults as [`create_test_property`].
pub async fn create_test_marketing(
    db: &DatabaseConnection,
    address: &str,
    agent_id: Option<i64>,
) -> Result<entities::marketing::Model> {
    marketing::create_marketing(
        db,
        MarketingInput {
            address: address.to_string(),
            marketing_type: "Apartment".to_string(),
            bedrooms: Some(2),
            bathrooms: Some(2.0),
            price: Some(7_500_000.0),
            status: Some("Available".to_string()),
            agent_id,
            description: None,
        },
    )
    .await
}

/// Sets up a store holding one agent with one assigned property.
/// Returns (db, agent, property) for screen-level tests.
pub async fn setup_with_property() -> Result<(
    DatabaseConnection,
    entities::agent::Model,
    entities::property::Model,
)> {
    let db = setup_test_db().await?;
    let agent = create_test_agent(&db, "Rajesh Sharma").await?;
    let property = create_test_property(&db, "A-201, Powai, Mumbai 400076", Some(agent.id)).await?;
    Ok((db, agent, property))
}
