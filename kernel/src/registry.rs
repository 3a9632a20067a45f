// Store Registry
//
// Opens one file-backed store per entity type from a single
// configuration. The stores share nothing but the data directory.

use crate::config::StoreConfig;
use crate::records::{Client, Employee, Entity, EntityKind, Event, Guest, Supplier, Venue};
use crate::store::{CorruptStore, KeyedRecordStore};

/// All six stores of the application.
#[derive(Debug)]
pub struct Stores {
    pub clients: KeyedRecordStore<Client>,
    pub employees: KeyedRecordStore<Employee>,
    pub events: KeyedRecordStore<Event>,
    pub guests: KeyedRecordStore<Guest>,
    pub suppliers: KeyedRecordStore<Supplier>,
    pub venues: KeyedRecordStore<Venue>,
}

impl Stores {
    pub fn open(config: &StoreConfig) -> Self {
        Self {
            clients: open_store(config),
            employees: open_store(config),
            events: open_store(config),
            guests: open_store(config),
            suppliers: open_store(config),
            venues: open_store(config),
        }
    }

    /// Load warnings raised while opening, in entity order.
    pub fn warnings(&self) -> Vec<&CorruptStore> {
        [
            self.clients.load_warning(),
            self.employees.load_warning(),
            self.events.load_warning(),
            self.guests.load_warning(),
            self.suppliers.load_warning(),
            self.venues.load_warning(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Record count per entity.
    pub fn counts(&self) -> Vec<(EntityKind, usize)> {
        vec![
            (EntityKind::Client, self.clients.len()),
            (EntityKind::Employee, self.employees.len()),
            (EntityKind::Event, self.events.len()),
            (EntityKind::Guest, self.guests.len()),
            (EntityKind::Supplier, self.suppliers.len()),
            (EntityKind::Venue, self.venues.len()),
        ]
    }
}

/// Open the file-backed store for `T` at its configured path.
pub fn open_store<T: Entity>(config: &StoreConfig) -> KeyedRecordStore<T> {
    KeyedRecordStore::open_file(config.path_for(T::KIND))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn stores_use_separate_files() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::default_config().with_data_dir(dir.path());

        let mut stores = Stores::open(&config);
        stores
            .guests
            .add("G1", Guest::new("Ann", "1 Rd", "555-0100"))
            .unwrap();
        stores
            .venues
            .add("V1", Venue::new("Hall", "3 Park Ln", "555-0199", 20, 200))
            .unwrap();

        assert!(config.path_for(EntityKind::Guest).exists());
        assert!(config.path_for(EntityKind::Venue).exists());
        assert!(!config.path_for(EntityKind::Client).exists());

        let reopened = Stores::open(&config);
        assert!(reopened.warnings().is_empty());
        assert_eq!(reopened.guests.len(), 1);
        assert_eq!(reopened.venues.len(), 1);
        assert!(reopened.clients.is_empty());
    }

    #[test]
    fn counts_follow_entity_order() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::default_config().with_data_dir(dir.path());

        let mut stores = Stores::open(&config);
        stores
            .clients
            .add("C1", Client::new("Acme", "2 High St", "acme@example.com", 5000.0))
            .unwrap();

        let counts = stores.counts();
        let kinds: Vec<_> = counts.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, EntityKind::ALL);
        assert_eq!(counts[0], (EntityKind::Client, 1));
        assert!(counts[1..].iter().all(|(_, count)| *count == 0));
    }

    #[test]
    fn warnings_report_only_unreadable_stores() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::default_config().with_data_dir(dir.path());
        std::fs::write(config.path_for(EntityKind::Event), "[1, 2").unwrap();

        let stores = Stores::open(&config);

        let warnings = stores.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, EntityKind::Event);
    }
}
