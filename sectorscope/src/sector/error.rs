//! Document-fatal load errors.

use std::path::PathBuf;

use super::SectorParseError;
use crate::panic::PanicReport;

/// Reasons a sector file load can fail as a whole.
///
/// Every variant leaves the previously loaded scene untouched.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The parser rejected the document.
    #[error("failed to parse sector file: {0}")]
    Parse(#[from] SectorParseError),

    /// The parser panicked; the panic was contained.
    #[error("sector file parser panicked: {message}")]
    ParserPanicked {
        message: String,
        location: Option<String>,
        backtrace: Option<String>,
    },

    /// The isolated parse task could not be started or did not complete.
    #[error("sector file parse task failed: {0}")]
    Task(String),
}

impl LoadError {
    /// True when the failure came from a panic inside the parser.
    pub fn is_panic(&self) -> bool {
        matches!(self, LoadError::ParserPanicked { .. })
    }
}

impl From<PanicReport> for LoadError {
    fn from(report: PanicReport) -> Self {
        LoadError::ParserPanicked {
            message: report.message,
            location: report.location,
            backtrace: report.backtrace,
        }
    }
}

impl From<tokio::task::JoinError> for LoadError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            PanicReport::from_payload(err.into_panic().as_ref()).into()
        } else {
            LoadError::Task(err.to_string())
        }
    }
}
