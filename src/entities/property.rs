//! Property entity - A property on the office's books.
//!
//! Each property optionally references the agent handling it. Inquiries reference
//! properties and are deleted together with the property they point at.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Property database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    /// Unique identifier for the property
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Postal address
    pub address: String,
    /// Kind of property (e.g. "Apartment", "Villa", "Land")
    pub property_type: String,
    /// Number of bedrooms
    pub bedrooms: Option<i32>,
    /// Number of bathrooms; half bathrooms are allowed
    pub bathrooms: Option<f64>,
    /// Asking price in rupees
    pub price: Option<f64>,
    /// Date the property was listed; set once on creation
    pub listing_date: Date,
    /// Listing status (e.g. "Available", "Sold")
    pub status: Option<String>,
    /// Agent handling this property, if any
    pub agent_id: Option<i64>,
    /// Free-form description
    pub description: Option<String>,
}

/// Defines relationships between Property and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each property may belong to one agent
    #[sea_orm(
        belongs_to = "super::agent::Entity",
        from = "Column::AgentId",
        to = "super::agent::Column::Id"
    )]
    Agent,
    /// One property receives many inquiries
    #[sea_orm(has_many = "super::inquiry::Entity")]
    Inquiries,
}

impl Related<super::agent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agent.def()
    }
}

impl Related<super::inquiry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inquiries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
