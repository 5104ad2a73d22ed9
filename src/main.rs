use dotenvy::dotenv;
use estate_desk::{
    config::{self, database},
    errors::Result,
    screens::{AppContext, Console},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file; DATABASE_URL may come from it
    dotenv().ok();

    // 3. Load config.toml, falling back to defaults when it is absent
    let app_config = config::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    info!("Loaded configuration: {:?}", app_config);

    // 4. Open, repair if needed, and seed the store
    let db = database::bootstrap(&app_config)
        .await
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;
    let ctx = AppContext::new(db);

    // 5. Run the console on the terminal
    let stdin = std::io::stdin();
    let mut console = Console::new(&ctx, stdin.lock(), std::io::stdout());
    let outcome = console.run(app_config.require_login).await;
    drop(console);

    // 6. Close the store on every exit path of the console
    ctx.database.close().await?;
    info!("Database closed.");
    outcome
}
