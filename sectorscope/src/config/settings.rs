//! Settings structs for each configuration section.
//!
//! Each struct represents one `[section]` of the INI config file.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::geo::Rgb;

/// Default color of Geo segments without a color of their own.
pub const DEFAULT_GEO_COLOR: Rgb = Rgb::new(0.5, 0.5, 0.5);
/// Default color of SID segments without a color of their own.
pub const DEFAULT_SID_COLOR: Rgb = Rgb::new(0.4, 0.4, 0.8);
/// Default color of STAR segments without a color of their own.
pub const DEFAULT_STAR_COLOR: Rgb = Rgb::new(0.4, 0.8, 0.4);

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub reference: ReferenceSettings,
    pub sector: SectorSettings,
    pub positions: PositionSettings,
    pub colors: ColorSettings,
    pub logging: LoggingSettings,
}

/// `[reference]`: where the FAA reference tables live.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceSettings {
    pub directory: Option<PathBuf>,
}

/// `[sector]`: sector file loaded at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectorSettings {
    pub file: Option<PathBuf>,
}

/// `[positions]`: position file loaded at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionSettings {
    pub file: Option<PathBuf>,
}

/// `[colors]` and `[defined_colors]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSettings {
    pub geo: Rgb,
    pub sid: Rgb,
    pub star: Rgb,
    /// User colors keyed by sector-file color name.
    pub defined: BTreeMap<String, Rgb>,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            geo: DEFAULT_GEO_COLOR,
            sid: DEFAULT_SID_COLOR,
            star: DEFAULT_STAR_COLOR,
            defined: BTreeMap::new(),
        }
    }
}

/// `[logging]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Directory the log file is written to.
    pub directory: PathBuf,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: super::file::config_directory().join("logs"),
        }
    }
}
