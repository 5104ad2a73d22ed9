//! Typed choices for agent and property pickers.
//!
//! A [`Choice`] carries the record id as data. Its `Display` form `"id - label"` is
//! only what the console shows; [`Choice::parse_id`] reads the id back from that text.

use crate::{
    core::{agent, property},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use std::fmt;

/// One entry of an agent or property picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Record id
    pub id: i64,
    /// Human-readable label (agent name or property address)
    pub label: String,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.label)
    }
}

impl Choice {
    /// Reads the id from picker text.
    ///
    /// Accepts both the full `"id - label"` form and a bare id. Blank text means no
    /// selection and yields `Ok(None)`.
    pub fn parse_id(text: &str) -> Result<Option<i64>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let head = text.split(" - ").next().unwrap_or(text).trim();
        head.parse()
            .map(Some)
            .map_err(|_| Error::validation("selection", format!("'{text}' does not start with an id")))
    }
}

/// Every agent as a choice, ordered by name.
pub async fn agent_choices(db: &DatabaseConnection) -> Result<Vec<Choice>> {
    Ok(agent::list_agents(db)
        .await?
        .into_iter()
        .map(|a| Choice {
            id: a.id,
            label: a.name,
        })
        .collect())
}

/// Every property as a choice, ordered by address.
pub async fn property_choices(db: &DatabaseConnection) -> Result<Vec<Choice>> {
    Ok(property::list_properties_by_address(db)
        .await?
        .into_iter()
        .map(|p| Choice {
            id: p.id,
            label: p.address,
        })
        .collect())
}
