//! Unified error type for the records manager.
//!
//! Every fallible operation in the crate returns [`Result`]. Variants are split so the
//! console can tell a user mistake (validation, unknown id, taken mobile number) apart
//! from a storage fault.

use thiserror::Error;

/// All errors surfaced by the store, the authentication gate and the screens.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Form input rejected before anything was written
    #[error("Invalid {field}: {message}")]
    Validation {
        /// Name of the offending form field
        field: &'static str,
        /// Human-readable reason
        message: String,
    },

    /// Update or delete addressed a record that does not exist
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Entity kind, e.g. `"Agent"`
        entity: &'static str,
        /// The id that was looked up
        id: i64,
    },

    /// Registration attempted with a mobile number that is already taken
    #[error("Mobile number {mobile} is already registered")]
    DuplicateMobile {
        /// The rejected mobile number
        mobile: String,
    },

    /// Registration password and confirmation differ
    #[error("Password and confirmation do not match")]
    PasswordMismatch,

    /// Generic persistence failure from the storage engine
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure (console streams, database file handling)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::Validation`] value.
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
