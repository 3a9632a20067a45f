// Record Schemas
//
// The six entity types held by the stores, and the trait the generic
// store engine uses to patch and render them.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod client;
pub mod employee;
pub mod event;
pub mod guest;
pub mod supplier;
pub mod value;
pub mod venue;

pub use client::Client;
pub use employee::{Employee, EmployeeRole};
pub use event::Event;
pub use guest::Guest;
pub use supplier::Supplier;
pub use value::{FieldValue, Patch, ValueError};
pub use venue::Venue;

/// Which store a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Client,
    Employee,
    Event,
    Guest,
    Supplier,
    Venue,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Client,
        EntityKind::Employee,
        EntityKind::Event,
        EntityKind::Guest,
        EntityKind::Supplier,
        EntityKind::Venue,
    ];

    pub fn singular(self) -> &'static str {
        match self {
            EntityKind::Client => "client",
            EntityKind::Employee => "employee",
            EntityKind::Event => "event",
            EntityKind::Guest => "guest",
            EntityKind::Supplier => "supplier",
            EntityKind::Venue => "venue",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            EntityKind::Client => "clients",
            EntityKind::Employee => "employees",
            EntityKind::Event => "events",
            EntityKind::Guest => "guests",
            EntityKind::Supplier => "suppliers",
            EntityKind::Venue => "venues",
        }
    }

    /// Label of the identifier line in rendered output.
    pub fn id_label(self) -> &'static str {
        match self {
            EntityKind::Client => "Client ID",
            EntityKind::Employee => "Employee ID",
            EntityKind::Event => "Event ID",
            EntityKind::Guest => "Guest ID",
            EntityKind::Supplier => "Supplier ID",
            EntityKind::Venue => "Venue ID",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

/// Failure to set one field on a record.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown field")]
    Unknown,

    #[error(transparent)]
    Value(#[from] ValueError),
}

/// A record type that can live in a `KeyedRecordStore`.
///
/// The identifier is the store key, not a record field, so no
/// implementation can ever patch it.
pub trait Entity: Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned {
    const KIND: EntityKind;

    /// Fields `patch` may overwrite. Checked before any mutation.
    const MUTABLE_FIELDS: &'static [&'static str];

    /// Overwrite one field.
    ///
    /// Implementations must leave `self` untouched when returning an error.
    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), FieldError>;

    /// `Label: value` pairs in display order, identifier excluded.
    fn display_fields(&self) -> Vec<(&'static str, String)>;

    fn is_mutable_field(field: &str) -> bool {
        Self::MUTABLE_FIELDS.iter().any(|allowed| *allowed == field)
    }
}

/// Formats a decimal the way the rendered views show it (`5000`, `0.05`).
pub(crate) fn decimal(value: f64) -> String {
    value.to_string()
}
