// Venue Records
//
// Locations events are held at, with their guest capacity range.

use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind, FieldError, FieldValue};

pub mod fields {
    pub const NAME: &str = "name";
    pub const ADDRESS: &str = "address";
    pub const CONTACT: &str = "contact";
    pub const MIN_GUESTS: &str = "min_guests";
    pub const MAX_GUESTS: &str = "max_guests";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub address: String,
    pub contact: String,
    pub min_guests: u32,
    pub max_guests: u32,
}

impl Venue {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        contact: impl Into<String>,
        min_guests: u32,
        max_guests: u32,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            contact: contact.into(),
            min_guests,
            max_guests,
        }
    }
}

impl Entity for Venue {
    const KIND: EntityKind = EntityKind::Venue;

    const MUTABLE_FIELDS: &'static [&'static str] = &[
        fields::NAME,
        fields::ADDRESS,
        fields::CONTACT,
        fields::MIN_GUESTS,
        fields::MAX_GUESTS,
    ];

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), FieldError> {
        match field {
            fields::NAME => self.name = value.into_text()?,
            fields::ADDRESS => self.address = value.into_text()?,
            fields::CONTACT => self.contact = value.into_text()?,
            fields::MIN_GUESTS => self.min_guests = value.into_count()?,
            fields::MAX_GUESTS => self.max_guests = value.into_count()?,
            _ => return Err(FieldError::Unknown),
        }
        Ok(())
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Address", self.address.clone()),
            ("Contact", self.contact.clone()),
            ("Minimum Guests", self.min_guests.to_string()),
            ("Maximum Guests", self.max_guests.to_string()),
        ]
    }
}
