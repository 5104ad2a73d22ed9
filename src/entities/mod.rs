//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod agent;
pub mod inquiry;
pub mod marketing;
pub mod property;
pub mod user;

// Re-export specific types to avoid conflicts
pub use agent::{Column as AgentColumn, Entity as Agent, Model as AgentModel};
pub use inquiry::{Column as InquiryColumn, Entity as Inquiry, Model as InquiryModel};
pub use marketing::{Column as MarketingColumn, Entity as Marketing, Model as MarketingModel};
pub use property::{Column as PropertyColumn, Entity as Property, Model as PropertyModel};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
