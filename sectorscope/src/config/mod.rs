//! User configuration.
//!
//! Settings are read from an INI file (by default
//! `~/.sectorscope/config.ini`). Every key is optional; missing keys keep
//! their defaults.
//!
//! # Example
//!
//! ```
//! use sectorscope::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! let scheme = config.color_scheme();
//! assert!(scheme.defined_colors.is_empty());
//! ```

mod color_scheme;
mod file;
mod parser;
mod settings;
mod writer;

pub use color_scheme::ColorScheme;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{
    ColorSettings, ConfigFile, LoggingSettings, PositionSettings, ReferenceSettings,
    SectorSettings, DEFAULT_GEO_COLOR, DEFAULT_SID_COLOR, DEFAULT_STAR_COLOR,
};
