//! Screen layer - the user-facing side of the records manager
//!
//! This module turns typed user input into core operations and core results into
//! display rows. It holds no state of its own beyond the shared [`AppContext`].

/// Line-oriented console front end
pub mod console;
/// Raw form input and its validation into core inputs
pub mod forms;
/// Display rows built from store listings
pub mod rows;
/// Typed id + label choices for agent and property pickers
pub mod selector;

use sea_orm::DatabaseConnection;

/// Shared data available to every screen.
/// This structure holds the database connection opened at startup; it is the only
/// store handle in the process.
pub struct AppContext {
    /// Database connection for all store operations
    pub database: DatabaseConnection,
}

impl AppContext {
    /// Creates a new `AppContext` around an open database connection.
    #[must_use]
    pub const fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

pub use console::Console;
pub use selector::Choice;
