//! SectorScope CLI - Command-line interface
//!
//! Queries the FAA reference tables and position files used by the
//! sectorscope static database.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sectorscope::config::{config_file_path, ConfigFile};
use sectorscope::logging::{default_log_file, init_logging};

use commands::config::ConfigCommands;
use error::CliError;

#[derive(Parser)]
#[command(name = "sectorscope")]
#[command(version = sectorscope::VERSION)]
#[command(about = "Query ATC reference data and position files", long_about = None)]
struct Cli {
    /// Directory holding the FAA reference tables (overrides the config file)
    #[arg(long, global = true)]
    reference_dir: Option<PathBuf>,

    /// Config file to use instead of ~/.sectorscope/config.ini
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Query(QueryCommands),

    /// View or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Commands that read reference data or position files.
#[derive(Subcommand)]
enum QueryCommands {
    /// Find a navaid, fix or airport by identifier
    Locate {
        /// Identifier, e.g. JFK or MERIT
        name: String,
    },

    /// List preferred routes between two airports
    Routes {
        /// Departure airport, e.g. JFK
        depart: String,
        /// Arrival airport, e.g. BOS
        arrive: String,
    },

    /// Look up an airline by its three-letter code
    Callsign {
        /// Three-letter code, e.g. AAL
        code: String,
    },

    /// List controller positions from a position file
    Positions {
        /// Position file
        file: PathBuf,
        /// Only show positions with this id, e.g. JFK_TWR
        id: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.clone().unwrap_or_else(config_file_path);

    let query = match cli.command {
        Commands::Config { command } => return commands::config::run(command, &config_path),
        Commands::Query(query) => query,
    };

    let config = ConfigFile::load_from(&config_path)?;
    let _logging_guard = init_logging(&config.logging.directory, default_log_file())
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;
    let reference_dir = cli.reference_dir.as_deref();

    match query {
        QueryCommands::Locate { name } => {
            let reference = commands::load_reference(reference_dir, &config)?;
            commands::lookup::run_locate(&reference, &name)
        }
        QueryCommands::Routes { depart, arrive } => {
            let reference = commands::load_reference(reference_dir, &config)?;
            commands::lookup::run_routes(&reference, &depart, &arrive)
        }
        QueryCommands::Callsign { code } => {
            let reference = commands::load_reference(reference_dir, &config)?;
            commands::lookup::run_callsign(&reference, &code)
        }
        QueryCommands::Positions { file, id } => commands::positions::run(&file, id.as_deref()),
    }
}
