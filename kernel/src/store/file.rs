// File Backend
//
// Persists one store as a pretty-printed JSON snapshot. Every save writes
// a temp file in the target directory, syncs it and renames it over the
// previous snapshot, so a crash mid-write never leaves a torn file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::records::{Entity, EntityKind};

use super::backend::{BackendError, RecordBackend};
use super::Records;

/// Snapshot layout version written by this build.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotOut<'a, T> {
    format_version: u32,
    entity: EntityKind,
    records: &'a Records<T>,
}

#[derive(Deserialize)]
struct SnapshotIn<T> {
    format_version: u32,
    entity: EntityKind,
    records: Records<T>,
}

/// JSON snapshot file holding every record of one entity type.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> BackendError {
        BackendError::Io {
            location: self.path.display().to_string(),
            source,
        }
    }

    fn target_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl<T: Entity> RecordBackend<T> for FileBackend {
    fn load(&self) -> Result<Option<Records<T>>, BackendError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };

        let snapshot: SnapshotIn<T> = serde_json::from_str(&data).map_err(BackendError::Decode)?;

        if snapshot.format_version != FORMAT_VERSION {
            return Err(BackendError::UnsupportedVersion(snapshot.format_version));
        }
        if snapshot.entity != T::KIND {
            return Err(BackendError::WrongEntity {
                expected: T::KIND,
                found: snapshot.entity,
            });
        }

        debug!(
            path = %self.path.display(),
            records = snapshot.records.len(),
            "loaded {} snapshot",
            T::KIND
        );
        Ok(Some(snapshot.records))
    }

    fn save(&mut self, records: &Records<T>) -> Result<(), BackendError> {
        let snapshot = SnapshotOut {
            format_version: FORMAT_VERSION,
            entity: T::KIND,
            records,
        };
        let bytes = serde_json::to_vec_pretty(&snapshot).map_err(BackendError::Encode)?;

        let dir = self.target_dir();
        fs::create_dir_all(&dir).map_err(|err| self.io_error(err))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|err| self.io_error(err))?;
        tmp.write_all(&bytes).map_err(|err| self.io_error(err))?;
        tmp.flush().map_err(|err| self.io_error(err))?;
        tmp.as_file()
            .sync_all()
            .map_err(|err| self.io_error(err))?;
        tmp.persist(&self.path)
            .map_err(|err| self.io_error(err.error))?;

        debug!(
            path = %self.path.display(),
            records = records.len(),
            bytes = bytes.len(),
            "saved {} snapshot",
            T::KIND
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
