//! Core business logic - the record store, its integrity rules, seeding and the login gate.
//!
//! Every function takes the store handle (`&DatabaseConnection`) explicitly; nothing in
//! this module keeps a connection of its own.

/// Agent records and the agent delete cascade
pub mod agent;
/// Registration and login over the `users` table
pub mod auth;
/// Client inquiries, including the status filter
pub mod inquiry;
/// Marketing entries
pub mod marketing;
/// Property records and the property delete cascade
pub mod property;
/// Idempotent sample dataset
pub mod seed;

use chrono::NaiveDate;

/// Sentinel status that disables the inquiry status filter.
pub const STATUS_ALL: &str = "All";

/// Statuses offered for properties and marketing entries.
pub const LISTING_STATUSES: [&str; 4] = ["Available", "Pending", "Sold", "Off Market"];

/// Property and marketing types offered by the forms.
pub const PROPERTY_TYPES: [&str; 6] = [
    "Apartment",
    "House",
    "Condo",
    "Townhouse",
    "Land",
    "Commercial",
];

/// Statuses offered for inquiries.
pub const INQUIRY_STATUSES: [&str; 6] = [
    "New",
    "Contacted",
    "Viewing Scheduled",
    "Offer Made",
    "Closed",
    "Cancelled",
];

/// Creation date stamped on new records.
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
