/// Database connection, schema creation and startup bootstrap
pub mod database;

/// Application settings loaded from config.toml
pub mod settings;

pub use settings::{AppConfig, load_config, load_default_config};
