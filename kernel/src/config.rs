// Store Configuration
//
// Where the six backing files live. Loaded from JSON; any key left out
// of the file keeps its built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::records::EntityKind;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Store configuration loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding every backing file.
    pub data_dir: PathBuf,
    pub files: StoreFiles,
}

/// Backing file name per entity, relative to `data_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreFiles {
    pub clients: String,
    pub employees: String,
    pub events: String,
    pub guests: String,
    pub suppliers: String,
    pub venues: String,
}

impl Default for StoreFiles {
    fn default() -> Self {
        Self {
            clients: "clients.json".into(),
            employees: "employees.json".into(),
            events: "events.json".into(),
            guests: "guests.json".into(),
            suppliers: "suppliers.json".into(),
            venues: "venues.json".into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl StoreConfig {
    /// Built-in configuration (used if no config file is provided).
    pub fn default_config() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            files: StoreFiles::default(),
        }
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn with_data_dir<P: Into<PathBuf>>(mut self, data_dir: P) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Full path of the backing file for `kind`.
    pub fn path_for(&self, kind: EntityKind) -> PathBuf {
        let file = match kind {
            EntityKind::Client => &self.files.clients,
            EntityKind::Employee => &self.files.employees,
            EntityKind::Event => &self.files.events,
            EntityKind::Guest => &self.files.guests,
            EntityKind::Supplier => &self.files.suppliers,
            EntityKind::Venue => &self.files.venues,
        };
        self.data_dir.join(file)
    }
}
