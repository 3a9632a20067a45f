// Record Store Backends
//
// Defines the durability contract a keyed record store writes through to.
// Implementations may persist to a file, memory, or anything else that can
// hold one full snapshot of the map.

use crate::records::EntityKind;

use super::Records;

/// Errors raised by a backend while loading or saving a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("i/o error on {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("cannot decode snapshot: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("snapshot holds {found} records, expected {expected}")]
    WrongEntity {
        expected: EntityKind,
        found: EntityKind,
    },

    #[error("unsupported snapshot format version {0}")]
    UnsupportedVersion(u32),

    #[error("backend refused to save: {0}")]
    Rejected(String),
}

/// Storage backend for one store.
///
/// Properties required from implementations:
/// - `save` replaces the whole previous snapshot
/// - `load` returns exactly what the last successful `save` wrote
/// - `load` returns `Ok(None)` when nothing was ever saved
pub trait RecordBackend<T> {
    /// Load the full snapshot, if one exists.
    fn load(&self) -> Result<Option<Records<T>>, BackendError>;

    /// Replace the stored snapshot with `records`.
    fn save(&mut self, records: &Records<T>) -> Result<(), BackendError>;

    /// Human-readable location, used in log lines and warnings.
    fn location(&self) -> String;
}

/// Memory-only backend. Keeps the last saved snapshot.
#[derive(Debug, Clone)]
pub struct InMemoryBackend<T> {
    snapshot: Option<Records<T>>,
    fail_saves: bool,
    saves: usize,
}

impl<T> Default for InMemoryBackend<T> {
    fn default() -> Self {
        Self {
            snapshot: None,
            fail_saves: false,
            saves: 0,
        }
    }
}

impl<T: Clone> InMemoryBackend<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot, as if a previous run had saved it.
    pub fn with_snapshot(records: Records<T>) -> Self {
        Self {
            snapshot: Some(records),
            ..Self::default()
        }
    }

    /// Make every subsequent `save` fail until switched off again.
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    pub fn snapshot(&self) -> Option<&Records<T>> {
        self.snapshot.as_ref()
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl<T: Clone> RecordBackend<T> for InMemoryBackend<T> {
    fn load(&self) -> Result<Option<Records<T>>, BackendError> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, records: &Records<T>) -> Result<(), BackendError> {
        if self.fail_saves {
            return Err(BackendError::Rejected("saves disabled".into()));
        }
        self.snapshot = Some(records.clone());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
