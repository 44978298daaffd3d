//! Failure-contained sector file loading.
//!
//! The parser runs on its own thread (tokio's blocking pool for
//! [`SectorLoader::load`], a dedicated OS thread for
//! [`SectorLoader::load_blocking`]). The caller waits for it either way; the
//! isolation exists so that a panic inside the parser becomes a
//! [`LoadError::ParserPanicked`] instead of unwinding into the caller.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info, instrument};

use super::{LoadError, SectorFile, SectorFileParser};
use crate::notify::Notifier;
use crate::panic;

/// Loads sector files through a [`SectorFileParser`] with panic containment.
#[derive(Clone)]
pub struct SectorLoader {
    parser: Arc<dyn SectorFileParser>,
    notifier: Arc<dyn Notifier>,
}

impl SectorLoader {
    pub fn new(parser: Arc<dyn SectorFileParser>, notifier: Arc<dyn Notifier>) -> Self {
        Self { parser, notifier }
    }

    /// Read and parse `path` on tokio's blocking pool.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn load(&self, path: &Path) -> Result<SectorFile, LoadError> {
        let contents = tokio::fs::read(path).await.map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let parser = Arc::clone(&self.parser);
        let filename = path.display().to_string();
        let result = tokio::task::spawn_blocking(move || parse_contained(parser.as_ref(), &contents, &filename))
            .await
            .unwrap_or_else(|e| Err(LoadError::from(e)));

        self.finish(path, result)
    }

    /// Read and parse `path` on a dedicated thread, blocking until it ends.
    pub fn load_blocking(&self, path: &Path) -> Result<SectorFile, LoadError> {
        let contents = std::fs::read(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let parser = Arc::clone(&self.parser);
        let filename = path.display().to_string();
        let handle = std::thread::Builder::new()
            .name("sector-parse".to_string())
            .spawn(move || parse_contained(parser.as_ref(), &contents, &filename))
            .map_err(|e| LoadError::Task(e.to_string()))?;

        let result = handle
            .join()
            .unwrap_or_else(|payload| Err(panic::PanicReport::from_payload(payload.as_ref()).into()));

        self.finish(path, result)
    }

    fn finish(&self, path: &Path, result: Result<SectorFile, LoadError>) -> Result<SectorFile, LoadError> {
        match &result {
            Ok(_) => info!(path = %path.display(), "Parsed sector file"),
            Err(LoadError::ParserPanicked {
                message,
                location,
                backtrace,
            }) => {
                error!(
                    path = %path.display(),
                    location = location.as_deref().unwrap_or("unknown"),
                    backtrace = backtrace.as_deref().unwrap_or("unavailable"),
                    "Sector file parser panicked: {}",
                    message
                );
                self.notifier.fatal_error(&format!(
                    "Unfortunately an unexpected error occurred while parsing the sector file:\n{}\n\
                     The previously loaded sector file is still in use. Please file a bug and \
                     include the log file for this session.",
                    path.display()
                ));
            }
            Err(e) => error!(path = %path.display(), error = %e, "Failed to load sector file"),
        }
        result
    }
}

/// Run the parser, turning a panic into a [`LoadError`].
fn parse_contained(
    parser: &dyn SectorFileParser,
    contents: &[u8],
    filename: &str,
) -> Result<SectorFile, LoadError> {
    let mut on_error = |message: &str| {
        error!(file = filename, "Error parsing sector file: {}", message);
    };

    match panic::catch(|| parser.parse(contents, filename, &mut on_error)) {
        Ok(Ok(sector_file)) => Ok(sector_file),
        Ok(Err(e)) => Err(LoadError::Parse(e)),
        Err(report) => Err(report.into()),
    }
}
