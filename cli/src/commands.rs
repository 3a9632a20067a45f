// Store Commands
//
// One implementation of every CLI action, generic over the entity type.
// Each action returns the text to print on stdout.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::Serialize;
use tracing::info;

use eventdesk_kernel::store::RecordBackend;
use eventdesk_kernel::{Entity, KeyedRecordStore, Patch, Stores};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add a new record
    Add {
        /// Identifier of the new record
        #[arg(long)]
        id: String,

        /// Record fields as a JSON object
        #[arg(long, required_unless_present = "record_file", conflicts_with = "record_file")]
        record: Option<String>,

        /// Path to a JSON file holding the record fields
        #[arg(long)]
        record_file: Option<PathBuf>,
    },

    /// Delete a record
    Delete {
        #[arg(long)]
        id: String,
    },

    /// Overwrite selected fields of a record
    Patch {
        #[arg(long)]
        id: String,

        /// Field assignment, repeatable. An empty value clears optional fields.
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment, required = true)]
        set: Vec<(String, String)>,
    },

    /// Show one record
    Show {
        #[arg(long)]
        id: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show every record
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the fields `patch` accepts
    Fields,
}

/// JSON view of one stored record.
#[derive(Debug, Serialize)]
struct RecordOutput<'a, T> {
    id: &'a str,
    record: &'a T,
}

/// Parse `field=value`. Only the first `=` splits.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got `{raw}`"))?;

    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in `{raw}`"));
    }
    Ok((field.to_string(), value.to_string()))
}

/// Run `action` against `store`.
pub fn run<T, B>(store: &mut KeyedRecordStore<T, B>, action: Action) -> Result<String>
where
    T: Entity,
    B: RecordBackend<T>,
{
    let kind = T::KIND;

    match action {
        Action::Add {
            id,
            record,
            record_file,
        } => {
            let raw = match (record, record_file) {
                (Some(json), _) => json,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("reading record file {}", path.display()))?,
                (None, None) => anyhow::bail!("either --record or --record-file is required"),
            };
            let parsed: T = serde_json::from_str(&raw)
                .with_context(|| format!("parsing {kind} record"))?;

            store.add(id.as_str(), parsed)?;
            info!(%kind, %id, "added");
            Ok(format!("{kind} `{id}` added."))
        }

        Action::Delete { id } => {
            store.delete(&id)?;
            info!(%kind, %id, "deleted");
            Ok(format!("{kind} `{id}` deleted."))
        }

        Action::Patch { id, set } => {
            let patch: Patch = set.into_iter().collect();
            store.patch(&id, &patch)?;
            info!(%kind, %id, fields = patch.len(), "patched");
            Ok(format!("{kind} `{id}` modified."))
        }

        Action::Show { id, json } => {
            if json {
                let record = store.get(&id)?;
                let output = RecordOutput { id: &id, record };
                Ok(serde_json::to_string_pretty(&output)?)
            } else {
                Ok(store.render(&id)?)
            }
        }

        Action::List { json } => {
            if json {
                let output: Vec<_> = store
                    .list_all()
                    .into_iter()
                    .map(|(id, record)| RecordOutput { id, record })
                    .collect();
                Ok(serde_json::to_string_pretty(&output)?)
            } else {
                Ok(store.render_all())
            }
        }

        Action::Fields => Ok(T::MUTABLE_FIELDS.join("\n")),
    }
}

/// One `<entities>: <count>` line per store. Stores whose file could not
/// be read are flagged.
pub fn summary(stores: &Stores) -> String {
    let warnings = stores.warnings();

    stores
        .counts()
        .into_iter()
        .map(|(kind, count)| {
            if warnings.iter().any(|warning| warning.kind == kind) {
                format!("{}: {count} (unreadable file, started empty)", kind.plural())
            } else {
                format!("{}: {count}", kind.plural())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdesk_kernel::records::{Employee, EmployeeRole, Guest};
    use eventdesk_kernel::store::InMemoryBackend;
    use eventdesk_kernel::{EntityKind, StoreConfig, StoreError};
    use tempfile::TempDir;

    fn guest_store() -> KeyedRecordStore<Guest, InMemoryBackend<Guest>> {
        KeyedRecordStore::open(InMemoryBackend::new())
    }

    fn add_ann(store: &mut KeyedRecordStore<Guest, InMemoryBackend<Guest>>) {
        run(
            store,
            Action::Add {
                id: "G1".into(),
                record: Some(
                    r#"{"name": "Ann", "address": "1 Rd", "contact_details": "555-0100"}"#.into(),
                ),
                record_file: None,
            },
        )
        .unwrap();
    }

    #[test]
    fn assignment_splits_on_first_equals() {
        assert_eq!(
            parse_assignment("invoice=a=b").unwrap(),
            ("invoice".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_assignment("menu=").unwrap(),
            ("menu".to_string(), String::new())
        );
        assert!(parse_assignment("name").is_err());
        assert!(parse_assignment("=x").is_err());
    }

    #[test]
    fn add_patch_show_round() {
        let mut store = guest_store();
        add_ann(&mut store);

        let message = run(
            &mut store,
            Action::Patch {
                id: "G1".into(),
                set: vec![("name".into(), "Ann B".into())],
            },
        )
        .unwrap();
        assert_eq!(message, "guest `G1` modified.");

        let shown = run(
            &mut store,
            Action::Show {
                id: "G1".into(),
                json: false,
            },
        )
        .unwrap();
        assert!(shown.contains("Name: Ann B"));
    }

    #[test]
    fn invalid_field_surfaces_store_error() {
        let mut store = guest_store();
        add_ann(&mut store);

        let err = run(
            &mut store,
            Action::Patch {
                id: "G1".into(),
                set: vec![("budget".into(), "10".into())],
            },
        )
        .unwrap_err();

        let store_err = err.downcast_ref::<StoreError>().unwrap();
        assert!(matches!(store_err, StoreError::InvalidField { .. }));
        assert_eq!(err.to_string(), "`budget` is not a patchable guest field");
    }

    #[test]
    fn list_on_empty_store_prints_sentinel() {
        let mut store = guest_store();
        let out = run(&mut store, Action::List { json: false }).unwrap();
        assert_eq!(out, "No guests to display.");
    }

    #[test]
    fn list_json_carries_ids() {
        let mut store = guest_store();
        add_ann(&mut store);

        let out = run(&mut store, Action::List { json: true }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["id"], "G1");
        assert_eq!(value[0]["record"]["name"], "Ann");
    }

    #[test]
    fn employee_add_accepts_role_tag() {
        let mut store: KeyedRecordStore<Employee, InMemoryBackend<Employee>> =
            KeyedRecordStore::open(InMemoryBackend::new());

        run(
            &mut store,
            Action::Add {
                id: "E1".into(),
                record: Some(
                    r#"{
                        "name": "Dana", "department": "Sales", "job_title": "Head",
                        "basic_salary": 50000, "age": 40, "date_of_birth": "1986-02-02",
                        "passport_details": "P1",
                        "role": { "kind": "manager", "team_size": 5, "department_budget": 75000 }
                    }"#
                    .into(),
                ),
                record_file: None,
            },
        )
        .unwrap();

        assert_eq!(
            store.get("E1").unwrap().role,
            EmployeeRole::Manager {
                team_size: 5,
                department_budget: 75000.0
            }
        );
    }

    #[test]
    fn fields_lists_allow_list() {
        let mut store = guest_store();
        let out = run(&mut store, Action::Fields).unwrap();
        assert_eq!(out, "name\naddress\ncontact_details");
    }

    #[test]
    fn summary_counts_each_store_and_flags_unreadable_files() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::default_config().with_data_dir(dir.path());
        std::fs::write(config.path_for(EntityKind::Venue), "not json").unwrap();

        let mut stores = Stores::open(&config);
        stores
            .guests
            .add("G1", Guest::new("Ann", "1 Rd", "555-0100"))
            .unwrap();
        stores
            .guests
            .add("G2", Guest::new("Bob", "2 Rd", "555-0101"))
            .unwrap();

        assert_eq!(
            summary(&stores),
            "clients: 0\n\
             employees: 0\n\
             events: 0\n\
             guests: 2\n\
             suppliers: 0\n\
             venues: 0 (unreadable file, started empty)"
        );
    }
}
