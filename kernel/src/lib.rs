// Eventdesk Kernel
//
// Keyed record stores for the events company: clients, employees,
// events, guests, suppliers and venues, each persisted to its own file.

pub mod config;
pub mod records;
pub mod registry;
pub mod render;
pub mod store;

pub use config::StoreConfig;
pub use records::{Entity, EntityKind, FieldValue, Patch};
pub use registry::Stores;
pub use store::{CorruptStore, KeyedRecordStore, StoreError};
