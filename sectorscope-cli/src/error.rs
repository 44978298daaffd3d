//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use sectorscope::config::ConfigFileError;
use sectorscope::position::PositionFileError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file could not be read or written
    Config(ConfigFileError),
    /// No reference table directory on the command line or in the config
    NoReferenceDir,
    /// Failed to load a position file
    PositionFile(PositionFileError),
    /// The requested item does not exist
    NotFound(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::NoReferenceDir = self {
            eprintln!();
            eprintln!("Either pass --reference-dir or set it in the config file:");
            eprintln!("  [reference]");
            eprintln!("  directory = ~/nasr");
            eprintln!("Run 'sectorscope config init' to create a config file.");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::NoReferenceDir => write!(f, "No reference table directory configured"),
            CliError::PositionFile(e) => write!(f, "{}", e),
            CliError::NotFound(what) => write!(f, "{} not found", what),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::PositionFile(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<PositionFileError> for CliError {
    fn from(e: PositionFileError) -> Self {
        CliError::PositionFile(e)
    }
}
