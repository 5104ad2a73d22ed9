//! Inquiry entity - A client inquiry, optionally about a property and assigned to an agent.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Inquiry database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inquiries")]
pub struct Model {
    /// Unique identifier for the inquiry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the client who made the inquiry
    pub client_name: String,
    /// Phone number or email of the client
    pub contact_info: Option<String>,
    /// Property the client asked about
    pub property_id: Option<i64>,
    /// Date the inquiry was received; set once on creation
    pub inquiry_date: Date,
    /// Follow-up status (e.g. "New", "Viewing Scheduled")
    pub status: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Agent following up the inquiry
    pub agent_id: Option<i64>,
}

/// Defines relationships between Inquiry and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each inquiry may concern one property
    #[sea_orm(
        belongs_to = "super::property::Entity",
        from = "Column::PropertyId",
        to = "super::property::Column::Id"
    )]
    Property,
    /// Each inquiry may be assigned to one agent
    #[sea_orm(
        belongs_to = "super::agent::Entity",
        from = "Column::AgentId",
        to = "super::agent::Column::Id"
    )]
    Agent,
}

impl Related<super::property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl Related<super::agent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
