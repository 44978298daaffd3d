//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (show, init, path)
//! - [`lookup`] - Reference table queries (locate, routes, callsign)
//! - [`positions`] - Position file listing

pub mod config;
pub mod lookup;
pub mod positions;

use std::path::Path;

use sectorscope::config::ConfigFile;
use sectorscope::reference::ReferenceTables;

use crate::error::CliError;

/// Load the reference tables from `override_dir`, or the configured
/// directory when none is given.
pub fn load_reference(
    override_dir: Option<&Path>,
    config: &ConfigFile,
) -> Result<ReferenceTables, CliError> {
    let dir = override_dir
        .or(config.reference.directory.as_deref())
        .ok_or(CliError::NoReferenceDir)?;
    Ok(ReferenceTables::load_from_dir(dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_reference_requires_directory() {
        let result = load_reference(None, &ConfigFile::default());
        assert!(matches!(result, Err(CliError::NoReferenceDir)));
    }

    #[test]
    fn test_load_reference_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ConfigFile::default();
        config.reference.directory = Some(dir.path().join("missing"));

        let tables = load_reference(Some(dir.path()), &config).unwrap();
        assert!(tables.is_empty());
    }
}
