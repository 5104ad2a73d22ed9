//! Inquiry business logic - CRUD, search, status filter and joined listings.
//!
//! Listings left-join both the property (for its address) and the agent (for their
//! name); an inquiry whose links are missing still appears, with `None` in those columns.

use crate::{
    entities::{Inquiry, agent, inquiry, property},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{
    FromQueryResult, JoinType, QueryOrder, QuerySelect, RelationTrait, Select, Set, prelude::*,
};
use tracing::{info, instrument};

use super::STATUS_ALL;

const ENTITY: &str = "Inquiry";

/// Mutable inquiry fields, as supplied to [`create_inquiry`] and [`update_inquiry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryInput {
    /// Client name
    pub client_name: String,
    /// Phone number or email of the client
    pub contact_info: Option<String>,
    /// Property the inquiry is about
    pub property_id: Option<i64>,
    /// Follow-up status
    pub status: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Agent following up
    pub agent_id: Option<i64>,
}

/// An inquiry row with the linked property's address and agent's name.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct InquiryListing {
    /// Inquiry id
    pub id: i64,
    /// Client name
    pub client_name: String,
    /// Client contact details
    pub contact_info: Option<String>,
    /// Linked property id
    pub property_id: Option<i64>,
    /// Address of the linked property; `None` when there is none
    pub property_address: Option<String>,
    /// Date the inquiry was received
    pub inquiry_date: NaiveDate,
    /// Follow-up status
    pub status: Option<String>,
    /// Linked agent id
    pub agent_id: Option<i64>,
    /// Name of the linked agent; `None` when unassigned
    pub agent_name: Option<String>,
}

fn listing_query() -> Select<Inquiry> {
    Inquiry::find()
        .select_only()
        .column_as(inquiry::Column::Id, "id")
        .column_as(inquiry::Column::ClientName, "client_name")
        .column_as(inquiry::Column::ContactInfo, "contact_info")
        .column_as(inquiry::Column::PropertyId, "property_id")
        .column_as(property::Column::Address, "property_address")
        .column_as(inquiry::Column::InquiryDate, "inquiry_date")
        .column_as(inquiry::Column::Status, "status")
        .column_as(inquiry::Column::AgentId, "agent_id")
        .column_as(agent::Column::Name, "agent_name")
        .join(JoinType::LeftJoin, inquiry::Relation::Property.def())
        .join(JoinType::LeftJoin, inquiry::Relation::Agent.def())
        .order_by_desc(inquiry::Column::InquiryDate)
        .order_by_desc(inquiry::Column::Id)
}

/// Retrieves every inquiry, most recent inquiry date first.
pub async fn list_inquiries(db: &DatabaseConnection) -> Result<Vec<InquiryListing>> {
    listing_query()
        .into_model::<InquiryListing>()
        .all(db)
        .await
        .map_err(Into::into)
}

/// Case-insensitive substring search over the client name.
///
/// An empty term returns the same rows as [`list_inquiries`].
pub async fn search_inquiries(db: &DatabaseConnection, term: &str) -> Result<Vec<InquiryListing>> {
    if term.is_empty() {
        return list_inquiries(db).await;
    }

    listing_query()
        .filter(inquiry::Column::ClientName.contains(term))
        .into_model::<InquiryListing>()
        .all(db)
        .await
        .map_err(Into::into)
}

/// Keeps only inquiries whose status is exactly `status`.
///
/// The sentinel [`STATUS_ALL`] disables the filter.
pub async fn filter_inquiries_by_status(
    db: &DatabaseConnection,
    status: &str,
) -> Result<Vec<InquiryListing>> {
    if status == STATUS_ALL {
        return list_inquiries(db).await;
    }

    listing_query()
        .filter(inquiry::Column::Status.eq(status))
        .into_model::<InquiryListing>()
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an inquiry by id. A missing inquiry is `Ok(None)`.
pub async fn get_inquiry_by_id(
    db: &DatabaseConnection,
    inquiry_id: i64,
) -> Result<Option<inquiry::Model>> {
    Inquiry::find_by_id(inquiry_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Records a new inquiry dated today.
#[instrument(skip(db, input), fields(client = %input.client_name))]
pub async fn create_inquiry(db: &DatabaseConnection, input: InquiryInput) -> Result<inquiry::Model> {
    let inquiry = inquiry::ActiveModel {
        client_name: Set(input.client_name),
        contact_info: Set(input.contact_info),
        property_id: Set(input.property_id),
        inquiry_date: Set(super::today()),
        status: Set(input.status),
        notes: Set(input.notes),
        agent_id: Set(input.agent_id),
        ..Default::default()
    };

    let created = inquiry.insert(db).await?;
    info!(inquiry_id = created.id, "Inquiry created");
    Ok(created)
}

/// Replaces every mutable field of an inquiry. The inquiry date is left untouched.
///
/// # Errors
/// Returns [`Error::NotFound`] if no inquiry has `inquiry_id`.
#[instrument(skip(db, input))]
pub async fn update_inquiry(
    db: &DatabaseConnection,
    inquiry_id: i64,
    input: InquiryInput,
) -> Result<inquiry::Model> {
    let mut inquiry: inquiry::ActiveModel = Inquiry::find_by_id(inquiry_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: ENTITY,
            id: inquiry_id,
        })?
        .into();

    inquiry.client_name = Set(input.client_name);
    inquiry.contact_info = Set(input.contact_info);
    inquiry.property_id = Set(input.property_id);
    inquiry.status = Set(input.status);
    inquiry.notes = Set(input.notes);
    inquiry.agent_id = Set(input.agent_id);

    inquiry.update(db).await.map_err(Into::into)
}

/// Deletes a single inquiry. Nothing references inquiries, so there is no cascade.
///
/// # Errors
/// Returns [`Error::NotFound`] if no inquiry has `inquiry_id`.
#[instrument(skip(db))]
pub async fn delete_inquiry(db: &DatabaseConnection, inquiry_id: i64) -> Result<()> {
    let result = Inquiry::delete_by_id(inquiry_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: ENTITY,
            id: inquiry_id,
        });
    }
    info!("Inquiry deleted");
    Ok(())
}
