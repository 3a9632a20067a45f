use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use eventdesk_kernel::records::{Client, Employee, Event, Guest, Supplier, Venue};
use eventdesk_kernel::registry::open_store;
use eventdesk_kernel::{Entity, StoreConfig, Stores};

mod commands;

use commands::Action;

/// Eventdesk record store CLI
#[derive(Parser, Debug)]
#[command(name = "eventdesk")]
#[command(about = "Manage the events company's record stores", long_about = None)]
struct Cli {
    /// Path to store config JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the backing files (overrides the config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    entity: EntityCommand,
}

#[derive(Subcommand, Debug)]
enum EntityCommand {
    /// Clients events are organised for
    Client {
        #[command(subcommand)]
        action: Action,
    },

    /// Staff, managers and salespeople
    Employee {
        #[command(subcommand)]
        action: Action,
    },

    /// Booked events
    Event {
        #[command(subcommand)]
        action: Action,
    },

    /// Event guests
    Guest {
        #[command(subcommand)]
        action: Action,
    },

    /// Service suppliers
    Supplier {
        #[command(subcommand)]
        action: Action,
    },

    /// Event venues
    Venue {
        #[command(subcommand)]
        action: Action,
    },

    /// Record count of every store
    Summary,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // ----------------------------
    // Load config
    // ----------------------------
    let mut config = match &cli.config {
        Some(path) => StoreConfig::from_json_file(path)?,
        None => StoreConfig::default_config(),
    };
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }

    // ----------------------------
    // Dispatch
    // ----------------------------
    let output = match cli.entity {
        EntityCommand::Client { action } => run_on::<Client>(&config, action)?,
        EntityCommand::Employee { action } => run_on::<Employee>(&config, action)?,
        EntityCommand::Event { action } => run_on::<Event>(&config, action)?,
        EntityCommand::Guest { action } => run_on::<Guest>(&config, action)?,
        EntityCommand::Supplier { action } => run_on::<Supplier>(&config, action)?,
        EntityCommand::Venue { action } => run_on::<Venue>(&config, action)?,
        EntityCommand::Summary => commands::summary(&Stores::open(&config)),
    };

    println!("{output}");

    Ok(())
}

fn run_on<T: Entity>(config: &StoreConfig, action: Action) -> Result<String> {
    let mut store = open_store::<T>(config);
    commands::run(&mut store, action)
}

/// Logs go to stderr so rendered records on stdout stay clean.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("eventdesk=info,eventdesk_kernel=warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn nested_entity_commands_parse() {
        let cli = Cli::try_parse_from([
            "eventdesk",
            "--data-dir",
            "/tmp/desk",
            "venue",
            "patch",
            "--id",
            "V1",
            "--set",
            "max_guests=250",
            "--set",
            "name=Big Hall",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/desk")));
        match cli.entity {
            EntityCommand::Venue {
                action: Action::Patch { id, set },
            } => {
                assert_eq!(id, "V1");
                assert_eq!(set.len(), 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn summary_takes_no_action() {
        let cli = Cli::try_parse_from(["eventdesk", "summary"]).unwrap();
        assert!(matches!(cli.entity, EntityCommand::Summary));
    }

    #[test]
    fn add_requires_a_record_source() {
        let err = Cli::try_parse_from(["eventdesk", "guest", "add", "--id", "G1"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
