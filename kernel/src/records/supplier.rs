// Supplier Records
//
// Companies providing services (catering, cleaning, decorations, ...)
// for events. Capacity and menu are only meaningful for some suppliers
// and are therefore optional.

use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind, FieldError, FieldValue};

pub mod fields {
    pub const NAME: &str = "name";
    pub const ADDRESS: &str = "address";
    pub const CONTACT_DETAILS: &str = "contact_details";
    pub const SERVICE_PROVIDED: &str = "service_provided";
    pub const MIN_GUESTS: &str = "min_guests_supplier";
    pub const MAX_GUESTS: &str = "max_guests_supplier";
    pub const MENU: &str = "menu";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    pub address: String,
    pub contact_details: String,
    pub service_provided: String,

    #[serde(default)]
    pub min_guests_supplier: Option<u32>,

    #[serde(default)]
    pub max_guests_supplier: Option<u32>,

    #[serde(default)]
    pub menu: Option<String>,
}

impl Supplier {
    /// A supplier with no capacity range and no menu.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        contact_details: impl Into<String>,
        service_provided: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            contact_details: contact_details.into(),
            service_provided: service_provided.into(),
            min_guests_supplier: None,
            max_guests_supplier: None,
            menu: None,
        }
    }

    pub fn with_capacity(mut self, min_guests: u32, max_guests: u32) -> Self {
        self.min_guests_supplier = Some(min_guests);
        self.max_guests_supplier = Some(max_guests);
        self
    }

    pub fn with_menu(mut self, menu: impl Into<String>) -> Self {
        self.menu = Some(menu.into());
        self
    }
}

impl Entity for Supplier {
    const KIND: EntityKind = EntityKind::Supplier;

    const MUTABLE_FIELDS: &'static [&'static str] = &[
        fields::NAME,
        fields::ADDRESS,
        fields::CONTACT_DETAILS,
        fields::SERVICE_PROVIDED,
        fields::MIN_GUESTS,
        fields::MAX_GUESTS,
        fields::MENU,
    ];

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), FieldError> {
        match field {
            fields::NAME => self.name = value.into_text()?,
            fields::ADDRESS => self.address = value.into_text()?,
            fields::CONTACT_DETAILS => self.contact_details = value.into_text()?,
            fields::SERVICE_PROVIDED => self.service_provided = value.into_text()?,
            fields::MIN_GUESTS => self.min_guests_supplier = value.into_optional_count()?,
            fields::MAX_GUESTS => self.max_guests_supplier = value.into_optional_count()?,
            fields::MENU => self.menu = value.into_optional_text()?,
            _ => return Err(FieldError::Unknown),
        }
        Ok(())
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![
            ("Name", self.name.clone()),
            ("Address", self.address.clone()),
            ("Contact Details", self.contact_details.clone()),
            ("Service Provided", self.service_provided.clone()),
        ];
        if let Some(min) = self.min_guests_supplier {
            lines.push(("Minimum Guests", min.to_string()));
        }
        if let Some(max) = self.max_guests_supplier {
            lines.push(("Maximum Guests", max.to_string()));
        }
        if let Some(menu) = &self.menu {
            lines.push(("Menu", menu.clone()));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_when_missing_from_file() {
        let json = r#"{
            "name": "Feast Co",
            "address": "9 Mill Rd",
            "contact_details": "555-0142",
            "service_provided": "catering"
        }"#;

        let supplier: Supplier = serde_json::from_str(json).unwrap();

        assert_eq!(
            supplier,
            Supplier::new("Feast Co", "9 Mill Rd", "555-0142", "catering")
        );
    }

    #[test]
    fn menu_can_be_set_and_cleared() {
        let mut supplier = Supplier::new("Feast Co", "9 Mill Rd", "555-0142", "catering");

        supplier.set_field(fields::MENU, "three courses".into()).unwrap();
        assert_eq!(supplier.menu.as_deref(), Some("three courses"));

        supplier.set_field(fields::MENU, FieldValue::Null).unwrap();
        assert_eq!(supplier.menu, None);
    }

    #[test]
    fn unset_optionals_are_not_displayed() {
        let supplier = Supplier::new("Feast Co", "9 Mill Rd", "555-0142", "catering");
        let labels: Vec<_> = supplier.display_fields().into_iter().map(|(l, _)| l).collect();
        assert_eq!(
            labels,
            vec!["Name", "Address", "Contact Details", "Service Provided"]
        );

        let labels: Vec<_> = supplier
            .with_capacity(10, 80)
            .display_fields()
            .into_iter()
            .map(|(l, _)| l)
            .collect();
        assert!(labels.contains(&"Maximum Guests"));
    }

    #[test]
    fn every_patchable_field_accepts_a_value() {
        assert_eq!(
            Supplier::MUTABLE_FIELDS,
            &[
                "name",
                "address",
                "contact_details",
                "service_provided",
                "min_guests_supplier",
                "max_guests_supplier",
                "menu",
            ]
        );

        let mut supplier = Supplier::new("Feast Co", "9 Mill Rd", "555-0142", "catering");
        for field in Supplier::MUTABLE_FIELDS {
            supplier
                .set_field(field, "12".into())
                .unwrap_or_else(|err| panic!("{field}: {err}"));
        }
        assert_eq!(
            supplier,
            Supplier::new("12", "12", "12", "12")
                .with_capacity(12, 12)
                .with_menu("12")
        );
    }
}
