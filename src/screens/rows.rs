//! Display rows - one all-`String` row per listed record.
//!
//! Rows are what the list tables show; every value has already been through
//! [`crate::format`], so absent fields appear as empty text or a placeholder.

use crate::{
    core::{inquiry::InquiryListing, marketing::MarketingListing, property::PropertyListing},
    entities::agent,
    format::{
        INQUIRY_AGENT_PLACEHOLDER, INQUIRY_PROPERTY_PLACEHOLDER, MARKETING_AGENT_PLACEHOLDER,
        PROPERTY_AGENT_PLACEHOLDER, display_text, format_bathrooms, format_bedrooms, format_date,
        format_percentage, format_price, or_placeholder,
    },
};

/// Status shown for an inquiry that has none recorded.
pub const INQUIRY_STATUS_PLACEHOLDER: &str = "New";

/// A row of the property table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRow {
    /// Property id
    pub id: String,
    /// Street address
    pub address: String,
    /// Property type
    pub property_type: String,
    /// Bedroom count
    pub bedrooms: String,
    /// Bathroom count
    pub bathrooms: String,
    /// Formatted price
    pub price: String,
    /// Listing status
    pub status: String,
    /// Listing date
    pub listing_date: String,
    /// Assigned agent's name or placeholder
    pub agent: String,
}

impl From<&PropertyListing> for PropertyRow {
    fn from(listing: &PropertyListing) -> Self {
        let p = &listing.property;
        Self {
            id: p.id.to_string(),
            address: p.address.clone(),
            property_type: p.property_type.clone(),
            bedrooms: format_bedrooms(p.bedrooms),
            bathrooms: format_bathrooms(p.bathrooms),
            price: format_price(p.price),
            status: display_text(p.status.as_deref()),
            listing_date: format_date(p.listing_date),
            agent: or_placeholder(listing.agent_name.as_deref(), PROPERTY_AGENT_PLACEHOLDER),
        }
    }
}

/// A row of the marketing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketingRow {
    /// Entry id
    pub id: String,
    /// Street address
    pub address: String,
    /// Marketing type
    pub marketing_type: String,
    /// Bedroom count
    pub bedrooms: String,
    /// Bathroom count
    pub bathrooms: String,
    /// Formatted price
    pub price: String,
    /// Listing status
    pub status: String,
    /// Assigned agent's name or placeholder
    pub agent: String,
}

impl From<&MarketingListing> for MarketingRow {
    fn from(listing: &MarketingListing) -> Self {
        let m = &listing.entry;
        Self {
            id: m.id.to_string(),
            address: m.address.clone(),
            marketing_type: m.marketing_type.clone(),
            bedrooms: format_bedrooms(m.bedrooms),
            bathrooms: format_bathrooms(m.bathrooms),
            price: format_price(m.price),
            status: display_text(m.status.as_deref()),
            agent: or_placeholder(listing.agent_name.as_deref(), MARKETING_AGENT_PLACEHOLDER),
        }
    }
}

/// A row of the agent table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRow {
    /// Agent id
    pub id: String,
    /// Full name
    pub name: String,
    /// Phone number
    pub phone: String,
    /// Email address
    pub email: String,
    /// Licence number
    pub license_number: String,
    /// Join date
    pub join_date: String,
    /// Commission percentage
    pub commission_rate: String,
}

impl From<&agent::Model> for AgentRow {
    fn from(a: &agent::Model) -> Self {
        Self {
            id: a.id.to_string(),
            name: a.name.clone(),
            phone: display_text(a.phone.as_deref()),
            email: display_text(a.email.as_deref()),
            license_number: display_text(a.license_number.as_deref()),
            join_date: format_date(a.join_date),
            commission_rate: format_percentage(a.commission_rate),
        }
    }
}

/// A row of the inquiry table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryRow {
    /// Inquiry id
    pub id: String,
    /// Client's name
    pub client_name: String,
    /// Address of the property asked about, or placeholder
    pub property: String,
    /// Inquiry date
    pub inquiry_date: String,
    /// Inquiry status
    pub status: String,
    /// Handling agent's name or placeholder
    pub agent: String,
}

impl From<&InquiryListing> for InquiryRow {
    fn from(listing: &InquiryListing) -> Self {
        Self {
            id: listing.id.to_string(),
            client_name: listing.client_name.clone(),
            property: or_placeholder(
                listing.property_address.as_deref(),
                INQUIRY_PROPERTY_PLACEHOLDER,
            ),
            inquiry_date: format_date(listing.inquiry_date),
            status: or_placeholder(listing.status.as_deref(), INQUIRY_STATUS_PLACEHOLDER),
            agent: or_placeholder(listing.agent_name.as_deref(), INQUIRY_AGENT_PLACEHOLDER),
        }
    }
}

/// Column headings plus a row's cells in the same order.
pub trait TableRow {
    /// Column headings
    const HEADERS: &'static [&'static str];

    /// The row's cells, one per heading.
    fn into_cells(self) -> Vec<String>;
}

impl TableRow for PropertyRow {
    const HEADERS: &'static [&'static str] = &[
        "ID", "Address", "Type", "Beds", "Baths", "Price", "Status", "Listed", "Agent",
    ];

    fn into_cells(self) -> Vec<String> {
        vec![
            self.id,
            self.address,
            self.property_type,
            self.bedrooms,
            self.bathrooms,
            self.price,
            self.status,
            self.listing_date,
            self.agent,
        ]
    }
}

impl TableRow for MarketingRow {
    const HEADERS: &'static [&'static str] =
        &["ID", "Address", "Type", "Beds", "Baths", "Price", "Status", "Agent"];

    fn into_cells(self) -> Vec<String> {
        vec![
            self.id,
            self.address,
            self.marketing_type,
            self.bedrooms,
            self.bathrooms,
            self.price,
            self.status,
            self.agent,
        ]
    }
}

impl TableRow for AgentRow {
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Name",
        "Phone",
        "Email",
        "License #",
        "Join Date",
        "Commission %",
    ];

    fn into_cells(self) -> Vec<String> {
        vec![
            self.id,
            self.name,
            self.phone,
            self.email,
            self.license_number,
            self.join_date,
            self.commission_rate,
        ]
    }
}

impl TableRow for InquiryRow {
    const HEADERS: &'static [&'static str] =
        &["ID", "Client", "Property", "Inquiry Date", "Status", "Agent"];

    fn into_cells(self) -> Vec<String> {
        vec![
            self.id,
            self.client_name,
            self.property,
            self.inquiry_date,
            self.status,
            self.agent,
        ]
    }
}

/// Builds rows for a whole listing.
pub fn rows<'a, L: 'a, R: From<&'a L>>(listings: &'a [L]) -> Vec<R> {
    listings.iter().map(R::from).collect()
}
