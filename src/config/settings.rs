//! Application settings loading from config.toml
//!
//! Every key is optional. A missing config.toml yields the defaults, so a fresh
//! checkout starts against `real_estate.db` with sample data and the login gate on.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default location of the settings file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Default `SQLite` file used when neither config.toml nor `DATABASE_URL` name one
pub const DEFAULT_DATABASE_PATH: &str = "real_estate.db";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Path of the `SQLite` database file
    pub database_path: String,
    /// Populate an empty store with the sample dataset on startup
    pub seed_sample_data: bool,
    /// Ask for a mobile number and password before opening the screens
    pub require_login: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            seed_sample_data: true,
            require_login: true,
        }
    }
}

/// Loads application settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or a key has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads settings from the default location (./config.toml), falling back to
/// [`AppConfig::default`] when the file does not exist.
pub fn load_default_config() -> Result<AppConfig> {
    let path = Path::new(DEFAULT_CONFIG_PATH);
    if !path.exists() {
        tracing::info!("No {DEFAULT_CONFIG_PATH} found, using default settings");
        return Ok(AppConfig::default());
    }
    load_config(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            database_path = "office.db"
            seed_sample_data = false
            require_login = false
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.database_path, "office.db");
        assert!(!config.seed_sample_data);
        assert!(!config.require_login);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: AppConfig = toml::from_str("require_login = false").unwrap();
        assert_eq!(config.database_path, DEFAULT_DATABASE_PATH);
        assert!(config.seed_sample_data);
        assert!(!config.require_login);
    }

    #[test]
    fn test_wrong_type_is_config_error() {
        let path = std::env::temp_dir().join(format!("estate-desk-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "seed_sample_data = \"yes\"").unwrap();

        let result = load_config(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_unreadable_file_is_config_error() {
        let result = load_config("/definitely/not/here/config.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
