//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use std::path::PathBuf;

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::geo::Rgb;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [reference] section
    if let Some(section) = ini.section(Some("reference")) {
        if let Some(v) = section.get("directory") {
            config.reference.directory = optional_path(v);
        }
    }

    // [sector] section
    if let Some(section) = ini.section(Some("sector")) {
        if let Some(v) = section.get("file") {
            config.sector.file = optional_path(v);
        }
    }

    // [positions] section
    if let Some(section) = ini.section(Some("positions")) {
        if let Some(v) = section.get("file") {
            config.positions.file = optional_path(v);
        }
    }

    // [colors] section
    if let Some(section) = ini.section(Some("colors")) {
        if let Some(v) = section.get("geo") {
            config.colors.geo = parse_color("colors", "geo", v)?;
        }
        if let Some(v) = section.get("sid") {
            config.colors.sid = parse_color("colors", "sid", v)?;
        }
        if let Some(v) = section.get("star") {
            config.colors.star = parse_color("colors", "star", v)?;
        }
    }

    // [defined_colors] section: one key per sector-file color name
    if let Some(section) = ini.section(Some("defined_colors")) {
        for (name, v) in section.iter() {
            let rgb = parse_color("defined_colors", name, v)?;
            config.colors.defined.insert(name.to_string(), rgb);
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            if let Some(dir) = optional_path(v) {
                config.logging.directory = dir;
            }
        }
    }

    Ok(config)
}

/// Parse an `r,g,b` triple with each channel in `0.0..=1.0`.
pub(super) fn parse_rgb(value: &str) -> Option<Rgb> {
    let channels: Vec<f32> = value
        .split(',')
        .map(|c| c.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .ok()?;
    match channels.as_slice() {
        &[r, g, b] if [r, g, b].iter().all(|c| (0.0..=1.0).contains(c)) => {
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

fn parse_color(section: &str, key: &str, value: &str) -> Result<Rgb, ConfigFileError> {
    parse_rgb(value).ok_or_else(|| ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: "expected 'r,g,b' with each channel between 0 and 1".to_string(),
    })
}

fn optional_path(value: &str) -> Option<PathBuf> {
    let v = value.trim();
    if v.is_empty() {
        None
    } else {
        Some(expand_tilde(v))
    }
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
