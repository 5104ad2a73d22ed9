//! Marketing business logic - CRUD, search and joined listings for marketing entries.
//!
//! Marketing entries hold only a weak agent link, so deleting one never cascades.

use crate::{
    entities::{Agent, Marketing, agent, marketing},
    errors::{Error, Result},
};
use sea_orm::{Condition, QueryOrder, Set, prelude::*};
use tracing::{info, instrument};

const ENTITY: &str = "Marketing entry";

/// Mutable marketing fields, as supplied to [`create_marketing`] and [`update_marketing`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketingInput {
    /// Address being marketed
    pub address: String,
    /// Kind of listing
    pub marketing_type: String,
    /// Number of bedrooms
    pub bedrooms: Option<i32>,
    /// Number of bathrooms
    pub bathrooms: Option<f64>,
    /// Asking price in rupees
    pub price: Option<f64>,
    /// Listing status
    pub status: Option<String>,
    /// Agent running the campaign
    pub agent_id: Option<i64>,
    /// Free-form description
    pub description: Option<String>,
}

/// A marketing entry together with its agent's name.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketingListing {
    /// The stored entry
    pub entry: marketing::Model,
    /// Name of the linked agent; `None` when unassigned
    pub agent_name: Option<String>,
}

impl From<(marketing::Model, Option<agent::Model>)> for MarketingListing {
    fn from((entry, agent): (marketing::Model, Option<agent::Model>)) -> Self {
        Self {
            entry,
            agent_name: agent.map(|a| a.name),
        }
    }
}

/// Retrieves every marketing entry, most recently added first.
pub async fn list_marketing(db: &DatabaseConnection) -> Result<Vec<MarketingListing>> {
    let rows = Marketing::find()
        .find_also_related(Agent)
        .order_by_desc(marketing::Column::Id)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(MarketingListing::from).collect())
}

/// Case-insensitive substring search over address and marketing type.
///
/// An empty term returns the same rows as [`list_marketing`].
pub async fn search_marketing(
    db: &DatabaseConnection,
    term: &str,
) -> Result<Vec<MarketingListing>> {
    if term.is_empty() {
        return list_marketing(db).await;
    }

    let rows = Marketing::find()
        .find_also_related(Agent)
        .filter(
            Condition::any()
                .add(marketing::Column::Address.contains(term))
                .add(marketing::Column::MarketingType.contains(term)),
        )
        .order_by_desc(marketing::Column::Id)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(MarketingListing::from).collect())
}

/// Finds a marketing entry by id. A missing entry is `Ok(None)`.
pub async fn get_marketing_by_id(
    db: &DatabaseConnection,
    marketing_id: i64,
) -> Result<Option<marketing::Model>> {
    Marketing::find_by_id(marketing_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Adds a marketing entry dated today.
#[instrument(skip(db, input), fields(address = %input.address))]
pub async fn create_marketing(
    db: &DatabaseConnection,
    input: MarketingInput,
) -> Result<marketing::Model> {
    let entry = marketing::ActiveModel {
        address: Set(input.address),
        marketing_type: Set(input.marketing_type),
        bedrooms: Set(input.bedrooms),
        bathrooms: Set(input.bathrooms),
        price: Set(input.price),
        listing_date: Set(super::today()),
        status: Set(input.status),
        agent_id: Set(input.agent_id),
        description: Set(input.description),
        ..Default::default()
    };

    let created = entry.insert(db).await?;
    info!(marketing_id = created.id, "Marketing entry created");
    Ok(created)
}

/// Replaces every mutable field of a marketing entry.
///
/// # Errors
/// Returns [`Error::NotFound`] if no entry has `marketing_id`.
#[instrument(skip(db, input))]
pub async fn update_marketing(
    db: &DatabaseConnection,
    marketing_id: i64,
    input: MarketingInput,
) -> Result<marketing::Model> {
    let mut entry: marketing::ActiveModel = Marketing::find_by_id(marketing_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: ENTITY,
            id: marketing_id,
        })?
        .into();

    entry.address = Set(input.address);
    entry.marketing_type = Set(input.marketing_type);
    entry.bedrooms = Set(input.bedrooms);
    entry.bathrooms = Set(input.bathrooms);
    entry.price = Set(input.price);
    entry.status = Set(input.status);
    entry.agent_id = Set(input.agent_id);
    entry.description = Set(input.description);

    entry.update(db).await.map_err(Into::into)
}

/// Deletes a marketing entry.
///
/// # Errors
/// Returns [`Error::NotFound`] if no entry has `marketing_id`.
#[instrument(skip(db))]
pub async fn delete_marketing(db: &DatabaseConnection, marketing_id: i64) -> Result<()> {
    let result = Marketing::delete_by_id(marketing_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::NotFound {
            entity: ENTITY,
            id: marketing_id,
        });
    }
    info!("Marketing entry deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_update_round_trip() -> Result<()> {
        let db = setup_test_db().await?;
        let agent = create_test_agent(&db, "Vikram Singh").await?;

        let input = MarketingInput {
            address: "C-12, DLF Phase 2, Gurugram 122002".to_string(),
            marketing_type: "House".to_string(),
            bedrooms: Some(5),
            bathrooms: Some(4.0),
            price: Some(22_500_000.0),
            status: Some("Pending".to_string()),
            agent_id: Some(agent.id),
            description: None,
        };
        let created = create_marketing(&db, input.clone()).await?;
        let found = get_marketing_by_id(&db, created.id).await?.unwrap();
        assert_eq!(found.address, input.address);
        assert_eq!(found.marketing_type, input.marketing_type);
        assert_eq!(found.bathrooms, Some(4.0));
        assert_eq!(found.agent_id, Some(agent.id));
        assert_eq!(found.listing_date, crate::core::today());

        let replacement = MarketingInput {
            status: Some("Sold".to_string()),
            agent_id: None,
            ..input
        };
        let updated = update_marketing(&db, created.id, replacement).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.listing_date, created.listing_date);
        assert_eq!(updated.status.as_deref(), Some("Sold"));
        assert_eq!(updated.agent_id, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_and_search() -> Result<()> {
        let db = setup_test_db().await?;
        let agent = create_test_agent(&db, "Priya Patel").await?;
        let first = create_test_marketing(&db, "Powai Lake View", Some(agent.id)).await?;
        let second = create_test_marketing(&db, "Marine Drive Heights", None).await?;

        let all = list_marketing(&db).await?;
        assert_eq!(all[0].entry.id, second.id);
        assert_eq!(all[0].agent_name, None);
        assert_eq!(all[1].entry.id, first.id);
        assert_eq!(all[1].agent_name.as_deref(), Some("Priya Patel"));

        let found = search_marketing(&db, "powai").await?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].entry.id, first.id);

        assert_eq!(search_marketing(&db, "apartment").await?.len(), 2);
        assert_eq!(search_marketing(&db, "").await?, all);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_marketing() -> Result<()> {
        let db = setup_test_db().await?;
        let agent = create_test_agent(&db, "Amit Kumar").await?;
        let entry = create_test_marketing(&db, "Shop 12", Some(agent.id)).await?;

        delete_marketing(&db, entry.id).await?;
        assert!(get_marketing_by_id(&db, entry.id).await?.is_none());
        assert!(crate::core::agent::get_agent_by_id(&db, agent.id).await?.is_some());

        let result = delete_marketing(&db, entry.id).await;
        assert!(matches!(result, Err(Error::NotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_entry_is_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        let result = update_marketing(&db, 3, MarketingInput::default()).await;
        assert!(matches!(
            result,
            Err(Error::NotFound {
                entity: "Marketing entry",
                id: 3
            })
        ));
        Ok(())
    }
}
