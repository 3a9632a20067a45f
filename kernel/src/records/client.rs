// Client Records
//
// The people or organisations an event is organised for.

use serde::{Deserialize, Serialize};

use super::{decimal, Entity, EntityKind, FieldError, FieldValue};

/// Patchable client field names.
pub mod fields {
    pub const NAME: &str = "name";
    pub const ADDRESS: &str = "address";
    pub const CONTACT_DETAILS: &str = "contact_details";
    pub const BUDGET: &str = "budget";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub address: String,
    pub contact_details: String,
    pub budget: f64,
}

impl Client {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        contact_details: impl Into<String>,
        budget: f64,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            contact_details: contact_details.into(),
            budget,
        }
    }
}

impl Entity for Client {
    const KIND: EntityKind = EntityKind::Client;

    const MUTABLE_FIELDS: &'static [&'static str] = &[
        fields::NAME,
        fields::ADDRESS,
        fields::CONTACT_DETAILS,
        fields::BUDGET,
    ];

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), FieldError> {
        match field {
            fields::NAME => self.name = value.into_text()?,
            fields::ADDRESS => self.address = value.into_text()?,
            fields::CONTACT_DETAILS => self.contact_details = value.into_text()?,
            fields::BUDGET => self.budget = value.into_decimal()?,
            _ => return Err(FieldError::Unknown),
        }
        Ok(())
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Address", self.address.clone()),
            ("Contact Details", self.contact_details.clone()),
            ("Budget", decimal(self.budget)),
        ]
    }
}
