//! Agent business logic - CRUD, search and the agent delete cascade.
//!
//! Agents are weakly referenced: deleting one clears `agent_id` on every property,
//! inquiry and marketing entry that pointed at it and leaves those rows in place.
//! The null-outs and the final delete commit together in one transaction.

use crate::{
    entities::{Agent, Inquiry, Marketing, Property, agent, inquiry, marketing, property},
    errors::{Error, Result},
};
use sea_orm::{
    Condition, QueryOrder, Set, TransactionTrait, Value, prelude::*, sea_query::Expr,
};
use tracing::{info, instrument};

const ENTITY: &str = "Agent";

/// Mutable agent fields, as supplied to [`create_agent`] and [`update_agent`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentInput {
    /// Full name
    pub name: String,
    /// Contact phone number
    pub phone: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Licence number
    pub license_number: Option<String>,
    /// Commission in percent
    pub commission_rate: Option<f64>,
}

/// Number of dependent rows touched by [`delete_agent`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgentDeletion {
    /// Properties whose `agent_id` was cleared
    pub properties_unassigned: u64,
    /// Inquiries whose `agent_id` was cleared
    pub inquiries_unassigned: u64,
    /// Marketing entries whose `agent_id` was cleared
    pub marketing_unassigned: u64,
}

/// Retrieves all agents ordered alphabetically by name.
pub async fn list_agents(db: &DatabaseConnection) -> Result<Vec<agent::Model>> {
    Agent::find()
        .order_by_asc(agent::Column::Name)
        .order_by_asc(agent::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Case-insensitive substring search over name, email and licence number.
///
/// An empty term returns the same rows as [`list_agents`].
pub async fn search_agents(db: &DatabaseConnection, term: &str) -> Result<Vec<agent::Model>> {
    if term.is_empty() {
        return list_agents(db).await;
    }

    Agent::find()
        .filter(
            Condition::any()
                .add(agent::Column::Name.contains(term))
                .add(agent::Column::Email.contains(term))
                .add(agent::Column::LicenseNumber.contains(term)),
        )
        .order_by_asc(agent::Column::Name)
        .order_by_asc(agent::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an agent by id. A missing agent is `Ok(None)`.
pub async fn get_agent_by_id(
    db: &DatabaseConnection,
    agent_id: i64,
) -> Result<Option<agent::Model>> {
    Agent::find_by_id(agent_id).one(db).await.map_err(Into::into)
}

/// Registers a new agent with today's date as join date.
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_agent(db: &DatabaseConnection, input: AgentInput) -> Result<agent::Model> {
    let agent = agent::ActiveModel {
        name: Set(input.name),
        phone: Set(input.phone),
        email: Set(input.email),
        license_number: Set(input.license_number),
        join_date: Set(super::today()),
        commission_rate: Set(input.commission_rate),
        ..Default::default()
    };

    let created = agent.insert(db).await?;
    info!(agent_id = created.id, "Agent created");
    Ok(created)
}

/// Replaces every mutable field of an agent. The join date is left untouched.
///
/// # Errors
/// Returns [`Error::NotFound`] if no agent has `agent_id`; nothing is written then.
#[instrument(skip(db, input))]
pub async fn update_agent(
    db: &DatabaseConnection,
    agent_id: i64,
    input: AgentInput,
) -> Result<agent::Model> {
    let mut agent: agent::ActiveModel = Agent::find_by_id(agent_id)
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: ENTITY,
            id: agent_id,
        })?
        .into();

    agent.name = Set(input.name);
    agent.phone = Set(input.phone);
    agent.email = Set(input.email);
    agent.license_number = Set(input.license_number);
    agent.commission_rate = Set(input.commission_rate);

    agent.update(db).await.map_err(Into::into)
}

/// Deletes an agent after unassigning it everywhere it is referenced.
///
/// The three null-outs and the delete run in a single transaction, so a failure at
/// any step leaves every reference to the agent intact.
///
/// # Errors
/// Returns [`Error::NotFound`] if no agent has `agent_id`; nothing is written then.
#[instrument(skip(db))]
pub async fn delete_agent(db: &DatabaseConnection, agent_id: i64) -> Result<AgentDeletion> {
    let txn = db.begin().await?;

    Agent::find_by_id(agent_id)
        .one(&txn)
        .await?
        .ok_or(Error::NotFound {
            entity: ENTITY,
            id: agent_id,
        })?;

    let properties_unassigned = Property::update_many()
        .col_expr(property::Column::AgentId, Expr::value(Value::BigInt(None)))
        .filter(property::Column::AgentId.eq(agent_id))
        .exec(&txn)
        .await?
        .rows_affected;

    let inquiries_unassigned = Inquiry::update_many()
        .col_expr(inquiry::Column::AgentId, Expr::value(Value::BigInt(None)))
        .filter(inquiry::Column::AgentId.eq(agent_id))
        .exec(&txn)
        .await?
        .rows_affected;

    let marketing_unassigned = Marketing::update_many()
        .col_expr(marketing::Column::AgentId, Expr::value(Value::BigInt(None)))
        .filter(marketing::Column::AgentId.eq(agent_id))
        .exec(&txn)
        .await?
        .rows_affected;

    Agent::delete_by_id(agent_id).exec(&txn).await?;
    txn.commit().await?;

    info!(
        properties_unassigned,
        inquiries_unassigned, marketing_unassigned, "Agent deleted"
    );
    Ok(AgentDeletion {
        properties_unassigned,
        inquiries_unassigned,
        marketing_unassigned,
    })
}
