//! The colors applied to a compiled scene.

use std::collections::BTreeMap;

use super::settings::{ColorSettings, ConfigFile};
use crate::geo::Rgb;

/// Colors for the three built-in categories plus any sector-file colors the
/// user has overridden.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub geo: Rgb,
    pub sid: Rgb,
    pub star: Rgb,
    pub defined_colors: BTreeMap<String, Rgb>,
}

impl ColorScheme {
    pub fn is_defined(&self, name: &str) -> bool {
        self.defined_colors.contains_key(name)
    }

    /// Set `name` to `rgb`, replacing any existing definition.
    pub fn define(&mut self, name: &str, rgb: Rgb) {
        self.defined_colors.insert(name.to_string(), rgb);
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::from(&ColorSettings::default())
    }
}

impl From<&ColorSettings> for ColorScheme {
    fn from(colors: &ColorSettings) -> Self {
        Self {
            geo: colors.geo,
            sid: colors.sid,
            star: colors.star,
            defined_colors: colors.defined.clone(),
        }
    }
}

impl ConfigFile {
    /// The color scheme described by `[colors]` and `[defined_colors]`.
    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme::from(&self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let mut config = ConfigFile::default();
        config
            .colors
            .defined
            .insert("TAXI".to_string(), Rgb::new(1.0, 1.0, 0.0));

        let scheme = config.color_scheme();
        assert_eq!(scheme.geo, config.colors.geo);
        assert!(scheme.is_defined("TAXI"));
        assert!(!scheme.is_defined("RWY"));
    }

    #[test]
    fn test_define_replaces() {
        let mut scheme = ColorScheme::default();
        scheme.define("RWY", Rgb::BLACK);
        scheme.define("RWY", Rgb::WHITE);
        assert_eq!(scheme.defined_colors.len(), 1);
        assert_eq!(scheme.defined_colors["RWY"], Rgb::WHITE);
    }
}
