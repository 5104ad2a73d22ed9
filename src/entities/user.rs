//! User entity - Accounts allowed through the login gate.
//!
//! Passwords are never stored; only a per-user salt and the salted SHA-256 digest.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name
    pub name: String,
    /// Postal address
    pub address: Option<String>,
    /// Mobile number used as the login name
    #[sea_orm(unique)]
    pub mobile: String,
    /// Hex-encoded SHA-256 of salt followed by password
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Random per-user salt
    #[serde(skip_serializing)]
    pub password_salt: String,
}

/// `User` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
