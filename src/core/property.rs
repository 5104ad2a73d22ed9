//! Property business logic - CRUD, joined listings and the property delete cascade.
//!
//! An inquiry's property reference is owning: deleting a property deletes every inquiry
//! about it, in the same transaction as the property row itself.

use crate::{
    entities::{Agent, Inquiry, Property, agent, inquiry, property},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{info, instrument};

const ENTITY: &str = "Property";

/// Mutable property fields, as supplied to [`create_property`] and [`update_property`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyInput {
    /// Postal address
    pub address: String,
    /// Kind of property
    pub property_type: String,
    /// Number of bedrooms
    pub bedrooms: Option<i32>,
    /// Number of bathrooms
    pub bathrooms: Option<f64>,
    /// Asking price in rupees
    pub price: Option<f64>,
    /// Listing status
    pub status: Option<String>,
    /// Agent handling the property
    pub agent_id: Option<i64>,
    /// Free-form description
    pub description: Option<String>,
}

/// A property together with the name of its agent (if it still has one).
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyListing {
    /// The stored property
    pub property: property::Model,
    /// Name of the linked agent; `None` when unassigned
    pub agent_name: Option<String>,
}

impl From<(property::Model, Option<agent::Model>)> for PropertyListing {
    fn from((property, agent): (property::Model, Option<agent::Model>)) -> Self {
        Self {
            property,
            agent_name: agent.map(|a| a.name),
        }
    }
}

/// Retrieves every property with its agent's name, most recently added first.
pub async fn list_properties(db: &DatabaseConnection) -> Result<Vec<PropertyListing>> {
    let rows = Property::find()
        .find_also_related(Agent)
        .order_by_desc(property::Column::Id)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(PropertyListing::from).collect())
}

/// Case-insensitive substring search over address and property type.
///
/// An empty term returns the same rows as [`list_properties`].
pub async fn search_properties(
    db: &DatabaseConnection,
    term: &str,
) -> Result<Vec<PropertyListing>> {
    if term.is_empty() {
        return list_properties(db).await;
    }

    let rows = Property::find()
        .find_also_related(Agent)
        .filter(
            Condition::any()
                .add(property::Column::Address.contains(term))
                .add(property::Column::PropertyType.contains(term)),
        )
        .order_by_desc(property::Column::Id)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(PropertyListing::from).collect())
}

/// Retrieves all properties ordered by address, for property pickers.
pub async fn list_properties_by_address(db: &DatabaseConnection) -> Result<Vec<property::Model>> {
    Property::find()
        .order_by_asc(property::Column::Address)
        .order_by_asc(property::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a property by id. A missing property is `Ok(None)`.
pub async fn get_property_by_id(
    db: &DatabaseConnection,
    property_id: i64,
) -> Result<Option<property::Model>> {
    Property::find_by_id(property_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Adds a property listed today.
///
/// # Errors
/// Returns a database error if `agent_id` names an agent that does not exist.
#[instrument(skip(db, input), fields(address = %input.address))]
pub async fn create_property(
    db: &DatabaseConnection,
    input: PropertyInput,
) -> Result<property::Model> {
    let property = property::ActiveModel {
        address: Set(input.address),
        property_type: Set(input.property_type),
        bedrooms: Set(input.bedrooms),
        bathrooms: Set(input.bathrooms),
        price: Set(input.price),
        listing_date: Set(super::today()),
        status: Set(input.status),
        agent_id: Set(input.agent_id),
        description: Set(input.description),
        ..Default::default()
    };

    let created = property.insert(db).await?;
    info!(property_id = created.id, "Property created");
    Ok(created)
}

/// Replaces every mutable field of a property. The listing date is left untouched.
///
/// # Errors
/// Returns [`Error::NotFound`] if no property has `property_id`.
#[instrument(skip(db, input))]
pub async fn update_property(
    db: &DatabaseConnection,
    property_id: i64,
    input: PropertyInput,
) -> Result<property::Model> {
    let mut property: property::ActiveModel = Property::find_by_id(property_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: ENTITY,
            id: property_id,
        })?
        .into();

    property.address = Set(input.address);
    property.property_type = Set(input.property_type);
    property.bedrooms = Set(input.bedrooms);
    property.bathrooms = Set(input.bathrooms);
    property.price = Set(input.price);
    property.status = Set(input.status);
    property.agent_id = Set(input.agent_id);
    property.description = Set(input.description);

    property.update(db).await.map_err(Into::into)
}

/// Deletes a property and every inquiry about it, atomically.
///
/// Returns the number of inquiries removed along with the property.
///
/// # Errors
/// Returns [`Error::NotFound`] if no property has `property_id`; nothing is written then.
#[instrument(skip(db))]
pub async fn delete_property(db: &DatabaseConnection, property_id: i64) -> Result<u64> {
    let txn = db.begin().await?;

    Property::find_by_id(property_id)
        .one(&txn)
        .await?
        .ok_or(Error::NotFound {
            entity: ENTITY,
            id: property_id,
        })?;

    let inquiries_deleted = Inquiry::delete_many()
        .filter(inquiry::Column::PropertyId.eq(property_id))
        .exec(&txn)
        .await?
        .rows_affected;

    Property::delete_by_id(property_id).exec(&txn).await?;
    txn.commit().await?;

    info!(inquiries_deleted, "Property deleted");
    Ok(inquiries_deleted)
}
