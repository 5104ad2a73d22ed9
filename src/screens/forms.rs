//! Form input as typed by the user.
//!
//! Every field is raw text. `validate` checks required fields, parses numbers and
//! maps blank optional text to `None`, producing the typed input the store expects.
//! An empty numeric field counts as zero; anything else that fails to parse is a
//! [`Error::Validation`].

use crate::{
    core::{
        agent::AgentInput, auth::Registration, inquiry::InquiryInput, marketing::MarketingInput,
        property::PropertyInput,
    },
    errors::{Error, Result},
};
use std::str::FromStr;

fn required(field: &'static str, label: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::validation(field, format!("{label} is a required field")));
    }
    Ok(value.to_string())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn number<T: FromStr + Default>(field: &'static str, value: &str) -> Result<Option<T>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(Some(T::default()));
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| Error::validation(field, format!("'{value}' is not a number")))
}

/// Property screen fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyForm {
    /// Street address
    pub address: String,
    /// Property type, e.g. "Apartment"
    pub property_type: String,
    /// Bedroom count
    pub bedrooms: String,
    /// Bathroom count, halves allowed
    pub bathrooms: String,
    /// Asking price in rupees
    pub price: String,
    /// Listing status
    pub status: String,
    /// Assigned agent, if any
    pub agent_id: Option<i64>,
    /// Free text
    pub description: String,
}

impl PropertyForm {
    /// Validates the form into a [`PropertyInput`].
    pub fn validate(&self) -> Result<PropertyInput> {
        Ok(PropertyInput {
            address: required("address", "Address", &self.address)?,
            property_type: required("property_type", "Property Type", &self.property_type)?,
            bedrooms: number("bedrooms", &self.bedrooms)?,
            bathrooms: number("bathrooms", &self.bathrooms)?,
            price: number("price", &self.price)?,
            status: optional(&self.status),
            agent_id: self.agent_id,
            description: optional(&self.description),
        })
    }
}

/// Marketing screen fields; same shape as [`PropertyForm`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketingForm {
    /// Street address
    pub address: String,
    /// Marketing type, e.g. "Villa"
    pub marketing_type: String,
    /// Bedroom count
    pub bedrooms: String,
    /// Bathroom count, halves allowed
    pub bathrooms: String,
    /// Asking price in rupees
    pub price: String,
    /// Listing status
    pub status: String,
    /// Assigned agent, if any
    pub agent_id: Option<i64>,
    /// Free text
    pub description: String,
}

impl MarketingForm {
    /// Validates the form into a [`MarketingInput`].
    pub fn validate(&self) -> Result<MarketingInput> {
        Ok(MarketingInput {
            address: required("address", "Address", &self.address)?,
            marketing_type: required("marketing_type", "Property Type", &self.marketing_type)?,
            bedrooms: number("bedrooms", &self.bedrooms)?,
            bathrooms: number("bathrooms", &self.bathrooms)?,
            price: number("price", &self.price)?,
            status: optional(&self.status),
            agent_id: self.agent_id,
            description: optional(&self.description),
        })
    }
}

/// Agent screen fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentForm {
    /// Full name
    pub name: String,
    /// Phone number
    pub phone: String,
    /// Email address
    pub email: String,
    /// Licence number
    pub license_number: String,
    /// Commission percentage
    pub commission_rate: String,
}

impl AgentForm {
    /// Validates the form into an [`AgentInput`].
    pub fn validate(&self) -> Result<AgentInput> {
        Ok(AgentInput {
            name: required("name", "Agent Name", &self.name)?,
            phone: optional(&self.phone),
            email: optional(&self.email),
            license_number: optional(&self.license_number),
            commission_rate: number("commission_rate", &self.commission_rate)?,
        })
    }
}

/// Inquiry screen fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryForm {
    /// Client's name
    pub client_name: String,
    /// Phone or email
    pub contact_info: String,
    /// Property the inquiry is about, if any
    pub property_id: Option<i64>,
    /// Inquiry status
    pub status: String,
    /// Free text
    pub notes: String,
    /// Handling agent, if any
    pub agent_id: Option<i64>,
}

impl InquiryForm {
    /// Validates the form into an [`InquiryInput`].
    pub fn validate(&self) -> Result<InquiryInput> {
        Ok(InquiryInput {
            client_name: required("client_name", "Client Name", &self.client_name)?,
            contact_info: optional(&self.contact_info),
            property_id: self.property_id,
            status: optional(&self.status),
            notes: optional(&self.notes),
            agent_id: self.agent_id,
        })
    }
}

/// Registration screen fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Display name
    pub name: String,
    /// Postal address
    pub address: String,
    /// Mobile number
    pub mobile: String,
    /// Chosen password
    pub password: String,
    /// Password typed again
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Validates the form into a [`Registration`].
    ///
    /// Passwords are taken verbatim; only the other fields are trimmed.
    pub fn validate(&self) -> Result<Registration> {
        if self.password.is_empty() {
            return Err(Error::validation("password", "Password is a required field"));
        }
        if self.password != self.confirm_password {
            return Err(Error::PasswordMismatch);
        }
        Ok(Registration {
            name: required("name", "Name", &self.name)?,
            address: optional(&self.address),
            mobile: required("mobile", "Mobile Number", &self.mobile)?,
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    fn filled_property() -> PropertyForm {
        PropertyForm {
            address: "  Flat 304, Banjara Hills, Hyderabad  ".to_string(),
            property_type: "Apartment".to_string(),
            bedrooms: "3".to_string(),
            bathrooms: "2.5".to_string(),
            price: "9500000".to_string(),
            status: "Available".to_string(),
            agent_id: Some(4),
            description: String::new(),
        }
    }

    #[test]
    fn test_property_form_parses_fields() {
        let input = filled_property().validate().unwrap();
        assert_eq!(input.address, "Flat 304, Banjara Hills, Hyderabad");
        assert_eq!(input.bedrooms, Some(3));
        assert_eq!(input.bathrooms, Some(2.5));
        assert_eq!(input.price, Some(9_500_000.0));
        assert_eq!(input.status.as_deref(), Some("Available"));
        assert_eq!(input.agent_id, Some(4));
        assert_eq!(input.description, None);
    }

    #[test]
    fn test_empty_numbers_become_zero() {
        let form = PropertyForm {
            bedrooms: String::new(),
            bathrooms: " ".to_string(),
            price: String::new(),
            ..filled_property()
        };
        let input = form.validate().unwrap();
        assert_eq!(input.bedrooms, Some(0));
        assert_eq!(input.bathrooms, Some(0.0));
        assert_eq!(input.price, Some(0.0));
    }

    #[test]
    fn test_required_fields() {
        let missing_address = PropertyForm {
            address: "   ".to_string(),
            ..filled_property()
        };
        assert!(matches!(
            missing_address.validate(),
            Err(Error::Validation {
                field: "address",
                ..
            })
        ));

        let missing_type = MarketingForm {
            address: "Villa 15".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            missing_type.validate(),
            Err(Error::Validation {
                field: "marketing_type",
                ..
            })
        ));

        assert!(matches!(
            AgentForm::default().validate(),
            Err(Error::Validation { field: "name", .. })
        ));
        assert!(matches!(
            InquiryForm::default().validate(),
            Err(Error::Validation {
                field: "client_name",
                ..
            })
        ));
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        let form = PropertyForm {
            price: "ninety lakh".to_string(),
            ..filled_property()
        };
        assert!(matches!(
            form.validate(),
            Err(Error::Validation { field: "price", .. })
        ));

        let fractional_bedrooms = PropertyForm {
            bedrooms: "2.5".to_string(),
            ..filled_property()
        };
        assert!(matches!(
            fractional_bedrooms.validate(),
            Err(Error::Validation {
                field: "bedrooms",
                ..
            })
        ));

        let agent = AgentForm {
            name: "Rajesh Sharma".to_string(),
            commission_rate: "two".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            agent.validate(),
            Err(Error::Validation {
                field: "commission_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_agent_form_blank_optionals_are_absent() {
        let input = AgentForm {
            name: "Priya Patel".to_string(),
            phone: "8765432109".to_string(),
            commission_rate: "2.5".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(input.phone.as_deref(), Some("8765432109"));
        assert_eq!(input.email, None);
        assert_eq!(input.license_number, None);
        assert_eq!(input.commission_rate, Some(2.5));
    }

    #[test]
    fn test_inquiry_form_keeps_links() {
        let input = InquiryForm {
            client_name: "Rahul Verma".to_string(),
            notes: "  Looking for 3BHK.  ".to_string(),
            property_id: Some(1),
            agent_id: None,
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(input.notes.as_deref(), Some("Looking for 3BHK."));
        assert_eq!(input.property_id, Some(1));
        assert_eq!(input.agent_id, None);
        assert_eq!(input.contact_info, None);
    }

    #[test]
    fn test_registration_form() {
        let form = RegistrationForm {
            name: "Office Admin".to_string(),
            address: String::new(),
            mobile: "9000000001".to_string(),
            password: "s3cret".to_string(),
            confirm_password: "s3cret".to_string(),
        };
        let registration = form.validate().unwrap();
        assert_eq!(registration.address, None);
        assert_eq!(registration.password, "s3cret");

        let mismatch = RegistrationForm {
            confirm_password: "secret".to_string(),
            ..form.clone()
        };
        assert!(matches!(mismatch.validate(), Err(Error::PasswordMismatch)));

        let no_mobile = RegistrationForm {
            mobile: String::new(),
            ..form
        };
        assert!(matches!(
            no_mobile.validate(),
            Err(Error::Validation { field: "mobile", .. })
        ));
    }
}
