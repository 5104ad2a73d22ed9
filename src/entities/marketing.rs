//! Marketing entity - A marketing listing run by the office.
//!
//! Shaped like a property but independent of the `properties` table; the only
//! reference it holds is the (weak) agent link.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Marketing entry database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "marketing")]
pub struct Model {
    /// Unique identifier for the marketing entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Address being marketed
    pub address: String,
    /// Kind of listing being marketed
    pub marketing_type: String,
    /// Number of bedrooms
    pub bedrooms: Option<i32>,
    /// Number of bathrooms
    pub bathrooms: Option<f64>,
    /// Asking price in rupees
    pub price: Option<f64>,
    /// Date the entry was created; never changes afterwards
    pub listing_date: Date,
    /// Listing status
    pub status: Option<String>,
    /// Agent running the campaign
    pub agent_id: Option<i64>,
    /// Free-form description
    pub description: Option<String>,
}

/// Defines relationships between Marketing and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each marketing entry may belong to one agent
    #[sea_orm(
        belongs_to = "super::agent::Entity",
        from = "Column::AgentId",
        to = "super::agent::Column::Id"
    )]
    Agent,
}

impl Related<super::agent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
