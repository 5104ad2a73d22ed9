//! Agent entity - A licensed agent working for the office.
//!
//! Agents are referenced (weakly) by properties, inquiries and marketing entries.
//! Deleting an agent never removes those rows; it clears their `agent_id` instead.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Agent database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "agents")]
pub struct Model {
    /// Unique identifier for the agent
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Full name of the agent
    pub name: String,
    /// Contact phone number
    pub phone: Option<String>,
    /// Contact email address
    pub email: Option<String>,
    /// Real-estate regulator licence number (e.g. `RERA12345`)
    pub license_number: Option<String>,
    /// Date the agent was registered; set once on creation
    pub join_date: Date,
    /// Commission in percent, conventionally between 0 and 10
    pub commission_rate: Option<f64>,
}

/// Defines relationships between Agent and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One agent handles many properties
    #[sea_orm(has_many = "super::property::Entity")]
    Properties,
    /// One agent follows up many inquiries
    #[sea_orm(has_many = "super::inquiry::Entity")]
    Inquiries,
    /// One agent runs many marketing entries
    #[sea_orm(has_many = "super::marketing::Entity")]
    Marketing,
}

impl Related<super::property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Properties.def()
    }
}

impl Related<super::inquiry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inquiries.def()
    }
}

impl Related<super::marketing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Marketing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
