// Guest Records
//
// People invited to events. Event guest lists hold free-text names and
// are not linked to these records.

use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind, FieldError, FieldValue};

pub mod fields {
    pub const NAME: &str = "name";
    pub const ADDRESS: &str = "address";
    pub const CONTACT_DETAILS: &str = "contact_details";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub address: String,
    pub contact_details: String,
}

impl Guest {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        contact_details: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            contact_details: contact_details.into(),
        }
    }
}

impl Entity for Guest {
    const KIND: EntityKind = EntityKind::Guest;

    const MUTABLE_FIELDS: &'static [&'static str] =
        &[fields::NAME, fields::ADDRESS, fields::CONTACT_DETAILS];

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), FieldError> {
        match field {
            fields::NAME => self.name = value.into_text()?,
            fields::ADDRESS => self.address = value.into_text()?,
            fields::CONTACT_DETAILS => self.contact_details = value.into_text()?,
            _ => return Err(FieldError::Unknown),
        }
        Ok(())
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Address", self.address.clone()),
            ("Contact Details", self.contact_details.clone()),
        ]
    }
}
