//! Sample dataset for a fresh store.
//!
//! Five agents, ten properties across Indian cities priced in rupees, and eight client
//! inquiries that point at those properties and agents. Assignments are fixed so that
//! every run produces the same graph; only the dates move, relative to today.
//!
//! Seeding is idempotent: it does nothing once any of the record tables holds a row.

use crate::{
    entities::{Agent, Inquiry, Marketing, Property, agent, inquiry, property},
    errors::Result,
};
use chrono::{Duration, NaiveDate};
use sea_orm::{PaginatorTrait, Set, TransactionTrait, prelude::*};
use tracing::{debug, instrument};

/// What [`seed_sample_data`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already held records; nothing was written
    Skipped,
    /// The sample dataset was inserted
    Seeded {
        /// Agents inserted
        agents: usize,
        /// Properties inserted
        properties: usize,
        /// Inquiries inserted
        inquiries: usize,
    },
}

struct SampleAgent {
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    license_number: &'static str,
    joined_days_ago: i64,
    commission_rate: f64,
}

struct SampleProperty {
    address: &'static str,
    property_type: &'static str,
    bedrooms: i32,
    bathrooms: f64,
    price: f64,
    listed_days_ago: i64,
    status: &'static str,
    agent: usize,
    description: &'static str,
}

struct SampleInquiry {
    client_name: &'static str,
    contact_info: &'static str,
    property: usize,
    received_days_ago: i64,
    status: &'static str,
    notes: &'static str,
    agent: usize,
}

const SAMPLE_AGENTS: [SampleAgent; 5] = [
    SampleAgent {
        name: "Rajesh Sharma",
        phone: "9876543210",
        email: "rajesh.sharma@realestate.co.in",
        license_number: "RERA12345",
        joined_days_ago: 365,
        commission_rate: 2.0,
    },
    SampleAgent {
        name: "Priya Patel",
        phone: "8765432109",
        email: "priya.patel@realestate.co.in",
        license_number: "RERA23456",
        joined_days_ago: 180,
        commission_rate: 1.5,
    },
    SampleAgent {
        name: "Amit Kumar",
        phone: "7654321098",
        email: "amit.kumar@realestate.co.in",
        license_number: "RERA34567",
        joined_days_ago: 90,
        commission_rate: 2.5,
    },
    SampleAgent {
        name: "Sneha Reddy",
        phone: "6543210987",
        email: "sneha.reddy@realestate.co.in",
        license_number: "RERA45678",
        joined_days_ago: 45,
        commission_rate: 1.75,
    },
    SampleAgent {
        name: "Vikram Singh",
        phone: "9876123450",
        email: "vikram.singh@realestate.co.in",
        license_number: "RERA56789",
        joined_days_ago: 20,
        commission_rate: 2.25,
    },
];

const SAMPLE_PROPERTIES: [SampleProperty; 10] = [
    SampleProperty {
        address: "A-201, Greenview Apartments, Powai, Mumbai 400076",
        property_type: "Apartment",
        bedrooms: 3,
        bathrooms: 2.0,
        price: 9_500_000.0,
        listed_days_ago: 60,
        status: "Available",
        agent: 0,
        description: "Spacious 3BHK in premium society with swimming pool, gym, and children's play area. Walking distance from Hiranandani Gardens.",
    },
    SampleProperty {
        address: "Villa 15, Palm Meadows, Whitefield, Bangalore 560066",
        property_type: "Villa",
        bedrooms: 4,
        bathrooms: 3.5,
        price: 15_000_000.0,
        listed_days_ago: 45,
        status: "Available",
        agent: 3,
        description: "Luxurious 4BHK villa with private garden in gated community. Close to ITPL and top international schools.",
    },
    SampleProperty {
        address: "C-12, DLF Phase 2, Gurugram 122002",
        property_type: "Independent House",
        bedrooms: 5,
        bathrooms: 4.0,
        price: 22_500_000.0,
        listed_days_ago: 30,
        status: "Pending",
        agent: 4,
        description: "Elegant 5BHK independent house with modern amenities. Excellent connectivity to Delhi via NH-8.",
    },
    SampleProperty {
        address: "Flat 304, Sunshine Tower, Banjara Hills, Hyderabad 500034",
        property_type: "Apartment",
        bedrooms: 2,
        bathrooms: 2.0,
        price: 6_800_000.0,
        listed_days_ago: 20,
        status: "Available",
        agent: 3,
        description: "Contemporary 2BHK apartment with city views. Well-maintained society with 24/7 security.",
    },
    SampleProperty {
        address: "42, Model Town, Ludhiana 141002",
        property_type: "Kothi",
        bedrooms: 3,
        bathrooms: 3.0,
        price: 7_500_000.0,
        listed_days_ago: 15,
        status: "Available",
        agent: 4,
        description: "Traditional Punjab-style kothi with modern interiors. Large terrace and spacious rooms.",
    },
    SampleProperty {
        address: "B-15, Aundh, Pune 411007",
        property_type: "Row House",
        bedrooms: 3,
        bathrooms: 2.5,
        price: 11_000_000.0,
        listed_days_ago: 10,
        status: "Available",
        agent: 2,
        description: "Beautifully designed row house in premium locality. Close to IT hubs and educational institutions.",
    },
    SampleProperty {
        address: "Flat 1203, Sea View Heights, Marine Drive, Mumbai 400020",
        property_type: "Apartment",
        bedrooms: 1,
        bathrooms: 1.0,
        price: 12_000_000.0,
        listed_days_ago: 5,
        status: "Available",
        agent: 0,
        description: "Premium 1BHK with breathtaking sea view. Perfect for investment with high rental potential.",
    },
    SampleProperty {
        address: "Shop 12, Connaught Place, New Delhi 110001",
        property_type: "Commercial",
        bedrooms: 0,
        bathrooms: 1.0,
        price: 35_000_000.0,
        listed_days_ago: 0,
        status: "Available",
        agent: 4,
        description: "Prime commercial space in Delhi's business hub. Excellent frontage and high footfall area.",
    },
    SampleProperty {
        address: "Plot 25, Sector 45, Noida 201301",
        property_type: "Land",
        bedrooms: 0,
        bathrooms: 0.0,
        price: 8_000_000.0,
        listed_days_ago: 75,
        status: "Sold",
        agent: 1,
        description: "250 sq. yard plot in developed sector. Rectangular shape with road on two sides.",
    },
    SampleProperty {
        address: "D-404, Prestige Shantiniketan, Whitefield, Bangalore 560048",
        property_type: "Apartment",
        bedrooms: 3,
        bathrooms: 2.0,
        price: 8_900_000.0,
        listed_days_ago: 90,
        status: "Off Market",
        agent: 2,
        description: "Spacious 3BHK in integrated township with excellent amenities. Close to metro station and shopping centers.",
    },
];

const SAMPLE_INQUIRIES: [SampleInquiry; 8] = [
    SampleInquiry {
        client_name: "Rahul Verma",
        contact_info: "rahul.verma@email.com",
        property: 6,
        received_days_ago: 15,
        status: "New",
        notes: "Looking for property close to his office in Mumbai. Budget 1-1.2 cr.",
        agent: 0,
    },
    SampleInquiry {
        client_name: "Ananya Gupta",
        contact_info: "9876543210",
        property: 3,
        received_days_ago: 12,
        status: "Contacted",
        notes: "Called client to discuss property details. Interested in east-facing apartments only.",
        agent: 3,
    },
    SampleInquiry {
        client_name: "Suresh Menon",
        contact_info: "suresh.menon@email.com",
        property: 5,
        received_days_ago: 10,
        status: "Viewing Scheduled",
        notes: "Site visit scheduled for Sunday at 11:00 AM. Client coming with family.",
        agent: 2,
    },
    SampleInquiry {
        client_name: "Pooja Iyer",
        contact_info: "9876123450",
        property: 9,
        received_days_ago: 8,
        status: "Offer Made",
        notes: "Client has submitted an offer of ₹83 lakhs. Awaiting seller response.",
        agent: 2,
    },
    SampleInquiry {
        client_name: "Karan Malhotra",
        contact_info: "karan.malhotra@email.com",
        property: 1,
        received_days_ago: 5,
        status: "New",
        notes: "NRI customer looking for investment property in Bangalore. Prefers new construction.",
        agent: 3,
    },
    SampleInquiry {
        client_name: "Neha Sharma",
        contact_info: "9871234560",
        property: 4,
        received_days_ago: 3,
        status: "Contacted",
        notes: "Left message. Client is looking for property for her parents. Needs ground floor.",
        agent: 4,
    },
    SampleInquiry {
        client_name: "Arjun Nair",
        contact_info: "arjun.nair@email.com",
        property: 1,
        received_days_ago: 2,
        status: "New",
        notes: "Interested in gated communities in Whitefield area. Budget up to ₹1.5 cr.",
        agent: 1,
    },
    SampleInquiry {
        client_name: "Meera Desai",
        contact_info: "9898765432",
        property: 5,
        received_days_ago: 0,
        status: "New",
        notes: "First-time homebuyer looking for 2BHK in Pune. Has pre-approved loan.",
        agent: 2,
    },
];

fn days_ago(today: NaiveDate, days: i64) -> NaiveDate {
    today - Duration::days(days)
}

/// Returns true when any of the record tables (agents, properties, inquiries,
/// marketing) holds at least one row.
pub async fn store_has_records(db: &DatabaseConnection) -> Result<bool> {
    Ok(Agent::find().count(db).await? > 0
        || Property::find().count(db).await? > 0
        || Inquiry::find().count(db).await? > 0
        || Marketing::find().count(db).await? > 0)
}

/// Inserts the sample dataset into an empty store, in one transaction.
///
/// Returns [`SeedOutcome::Skipped`] without writing anything if the store already
/// has records, so calling it on every startup is safe.
#[instrument(skip(db))]
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<SeedOutcome> {
    if store_has_records(db).await? {
        return Ok(SeedOutcome::Skipped);
    }

    let today = super::today();
    let txn = db.begin().await?;

    let mut agent_ids = Vec::with_capacity(SAMPLE_AGENTS.len());
    for sample in &SAMPLE_AGENTS {
        let created = agent::ActiveModel {
            name: Set(sample.name.to_string()),
            phone: Set(Some(sample.phone.to_string())),
            email: Set(Some(sample.email.to_string())),
            license_number: Set(Some(sample.license_number.to_string())),
            join_date: Set(days_ago(today, sample.joined_days_ago)),
            commission_rate: Set(Some(sample.commission_rate)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        agent_ids.push(created.id);
    }
    debug!("Inserted {} sample agents", agent_ids.len());

    let mut property_ids = Vec::with_capacity(SAMPLE_PROPERTIES.len());
    for sample in &SAMPLE_PROPERTIES {
        let created = property::ActiveModel {
            address: Set(sample.address.to_string()),
            property_type: Set(sample.property_type.to_string()),
            bedrooms: Set(Some(sample.bedrooms)),
            bathrooms: Set(Some(sample.bathrooms)),
            price: Set(Some(sample.price)),
            listing_date: Set(days_ago(today, sample.listed_days_ago)),
            status: Set(Some(sample.status.to_string())),
            agent_id: Set(agent_ids.get(sample.agent).copied()),
            description: Set(Some(sample.description.to_string())),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        property_ids.push(created.id);
    }
    debug!("Inserted {} sample properties", property_ids.len());

    for sample in &SAMPLE_INQUIRIES {
        inquiry::ActiveModel {
            client_name: Set(sample.client_name.to_string()),
            contact_info: Set(Some(sample.contact_info.to_string())),
            property_id: Set(property_ids.get(sample.property).copied()),
            inquiry_date: Set(days_ago(today, sample.received_days_ago)),
            status: Set(Some(sample.status.to_string())),
            notes: Set(Some(sample.notes.to_string())),
            agent_id: Set(agent_ids.get(sample.agent).copied()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    Ok(SeedOutcome::Seeded {
        agents: agent_ids.len(),
        properties: property_ids.len(),
        inquiries: SAMPLE_INQUIRIES.len(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::{agent as agent_core, inquiry as inquiry_core, property as property_core};
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_seed_empty_store() -> Result<()> {
        let db = setup_test_db().await?;

        let outcome = seed_sample_data(&db).await?;
        assert_eq!(
            outcome,
            SeedOutcome::Seeded {
                agents: 5,
                properties: 10,
                inquiries: 8,
            }
        );

        assert_eq!(agent_core::list_agents(&db).await?.len(), 5);
        assert_eq!(property_core::list_properties(&db).await?.len(), 10);
        assert_eq!(inquiry_core::list_inquiries(&db).await?.len(), 8);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_twice_does_not_duplicate() -> Result<()> {
        let db = setup_test_db().await?;
        seed_sample_data(&db).await?;

        assert_eq!(seed_sample_data(&db).await?, SeedOutcome::Skipped);
        assert_eq!(agent_core::list_agents(&db).await?.len(), 5);
        assert_eq!(property_core::list_properties(&db).await?.len(), 10);
        assert_eq!(inquiry_core::list_inquiries(&db).await?.len(), 8);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_skips_when_any_table_has_rows() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_marketing(&db, "Existing campaign", None).await?;

        assert!(store_has_records(&db).await?);
        assert_eq!(seed_sample_data(&db).await?, SeedOutcome::Skipped);
        assert!(agent_core::list_agents(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_seeded_inquiries_reference_seeded_rows() -> Result<()> {
        let db = setup_test_db().await?;
        seed_sample_data(&db).await?;

        for listing in inquiry_core::list_inquiries(&db).await? {
            assert!(listing.property_address.is_some());
            assert!(listing.agent_name.is_some());
        }
        for listing in property_core::list_properties(&db).await? {
            assert!(listing.agent_name.is_some());
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_seeded_dates_are_relative_to_today() -> Result<()> {
        let db = setup_test_db().await?;
        seed_sample_data(&db).await?;

        let rajesh = agent_core::search_agents(&db, "Rajesh").await?;
        assert_eq!(
            rajesh[0].join_date,
            crate::core::today() - Duration::days(365)
        );

        let newest = &inquiry_core::list_inquiries(&db).await?[0];
        assert_eq!(newest.client_name, "Meera Desai");
        assert_eq!(newest.inquiry_date, crate::core::today());
        Ok(())
    }
}
