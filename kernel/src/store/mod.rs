// Keyed Record Store
//
// Generic write-through repository for one entity type. The whole map is
// held in memory, loaded once on open, and rewritten to the backend after
// every successful mutation.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::records::{Entity, EntityKind, FieldError, Patch, ValueError};
use crate::render;

pub mod backend;
pub mod file;

pub use backend::{BackendError, InMemoryBackend, RecordBackend};
pub use file::FileBackend;

/// Identifier → record map. Iterates in ascending identifier order.
pub type Records<T> = BTreeMap<String, T>;

/// Errors returned by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} `{id}` already exists")]
    DuplicateKey { kind: EntityKind, id: String },

    #[error("{kind} `{id}` not found")]
    NotFound { kind: EntityKind, id: String },

    #[error("`{field}` is not a patchable {kind} field")]
    InvalidField { kind: EntityKind, field: String },

    #[error("invalid value for {kind} field `{field}`: {source}")]
    InvalidValue {
        kind: EntityKind,
        field: String,
        #[source]
        source: ValueError,
    },

    #[error("failed to persist {kind} store: {source}")]
    Persist {
        kind: EntityKind,
        #[source]
        source: BackendError,
    },
}

/// Raised when an existing backing snapshot could not be read.
///
/// Non-fatal: the store opens empty and keeps this as its load warning.
/// The next successful mutation overwrites the unreadable snapshot.
#[derive(Debug, thiserror::Error)]
#[error("{kind} store at {location} is unreadable, starting empty: {source}")]
pub struct CorruptStore {
    pub kind: EntityKind,
    pub location: String,
    #[source]
    pub source: BackendError,
}

/// Persistent keyed collection for one entity type.
#[derive(Debug)]
pub struct KeyedRecordStore<T: Entity, B: RecordBackend<T> = FileBackend> {
    backend: B,
    records: Records<T>,
    load_warning: Option<CorruptStore>,
}

impl<T: Entity> KeyedRecordStore<T, FileBackend> {
    /// Open a store backed by the JSON snapshot at `path`.
    pub fn open_file<P: AsRef<std::path::Path>>(path: P) -> Self {
        Self::open(FileBackend::new(path))
    }
}

impl<T: Entity, B: RecordBackend<T>> KeyedRecordStore<T, B> {
    /// Open a store, loading whatever the backend holds.
    ///
    /// Never fails: an unreadable snapshot yields an empty store and a
    /// `load_warning`.
    pub fn open(backend: B) -> Self {
        let (records, load_warning) = match Self::load(&backend) {
            Ok(records) => (records, None),
            Err(corrupt) => (Records::new(), Some(corrupt)),
        };

        Self {
            backend,
            records,
            load_warning,
        }
    }

    /// Read the backend's full snapshot.
    ///
    /// A missing snapshot is an empty map. An unreadable one is logged and
    /// returned as `CorruptStore` so the caller can fall back to empty.
    pub fn load(backend: &B) -> Result<Records<T>, CorruptStore> {
        match backend.load() {
            Ok(Some(records)) => {
                debug!(kind = %T::KIND, records = records.len(), "store opened");
                Ok(records)
            }
            Ok(None) => {
                debug!(kind = %T::KIND, location = %backend.location(), "no snapshot, store starts empty");
                Ok(Records::new())
            }
            Err(source) => {
                let corrupt = CorruptStore {
                    kind: T::KIND,
                    location: backend.location(),
                    source,
                };
                warn!("{corrupt}");
                Err(corrupt)
            }
        }
    }

    /// Write the full map to the backend.
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.backend
            .save(&self.records)
            .map_err(|source| StoreError::Persist {
                kind: T::KIND,
                source,
            })
    }

    /// Insert a new record under `id`.
    pub fn add(&mut self, id: impl Into<String>, record: T) -> Result<(), StoreError> {
        let id = id.into();
        if self.records.contains_key(&id) {
            return Err(StoreError::DuplicateKey { kind: T::KIND, id });
        }

        self.records.insert(id.clone(), record);
        if let Err(err) = self.save() {
            self.records.remove(&id);
            return Err(err);
        }

        debug!(kind = %T::KIND, %id, "record added");
        Ok(())
    }

    /// Remove the record under `id`.
    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let removed = self
            .records
            .remove(id)
            .ok_or_else(|| self.not_found(id))?;

        if let Err(err) = self.save() {
            self.records.insert(id.to_string(), removed);
            return Err(err);
        }

        debug!(kind = %T::KIND, %id, "record deleted");
        Ok(())
    }

    /// Overwrite the listed fields of the record under `id`.
    ///
    /// All-or-nothing: every field name is checked against the entity's
    /// allow-list and every value converted before the stored record is
    /// touched. A failed save restores the previous record.
    pub fn patch(&mut self, id: &str, patch: &Patch) -> Result<(), StoreError> {
        let current = self.records.get(id).ok_or_else(|| self.not_found(id))?;

        if let Some(field) = patch.fields().find(|field| !T::is_mutable_field(field)) {
            return Err(StoreError::InvalidField {
                kind: T::KIND,
                field: field.to_string(),
            });
        }

        let mut updated = current.clone();
        for (field, value) in patch.iter() {
            updated
                .set_field(field, value.clone())
                .map_err(|err| match err {
                    FieldError::Unknown => StoreError::InvalidField {
                        kind: T::KIND,
                        field: field.to_string(),
                    },
                    FieldError::Value(source) => StoreError::InvalidValue {
                        kind: T::KIND,
                        field: field.to_string(),
                        source,
                    },
                })?;
        }

        let previous = self.records.insert(id.to_string(), updated);
        if let Err(err) = self.save() {
            if let Some(previous) = previous {
                self.records.insert(id.to_string(), previous);
            }
            return Err(err);
        }

        debug!(kind = %T::KIND, %id, fields = patch.len(), "record patched");
        Ok(())
    }

    /// Read-only view of the record under `id`.
    pub fn get(&self, id: &str) -> Result<&T, StoreError> {
        self.records.get(id).ok_or_else(|| self.not_found(id))
    }

    /// Every `(id, record)` pair in map order.
    pub fn list_all(&self) -> Vec<(&str, &T)> {
        self.records
            .iter()
            .map(|(id, record)| (id.as_str(), record))
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Warning raised while opening, if the snapshot was unreadable.
    pub fn load_warning(&self) -> Option<&CorruptStore> {
        self.load_warning.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// `Label: value` view of one record.
    pub fn render(&self, id: &str) -> Result<String, StoreError> {
        let record = self.get(id)?;
        Ok(render::render_record(id, record))
    }

    /// `Label: value` view of the whole store, or the empty-store sentinel.
    pub fn render_all(&self) -> String {
        render::render_all(self.list_all())
    }

    fn not_found(&self, id: &str) -> StoreError {
        StoreError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        }
    }
}
