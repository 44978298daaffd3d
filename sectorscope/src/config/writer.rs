//! INI serialization logic for converting `ConfigFile` → INI string.

use std::fmt::Write;
use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let opt_path = |p: &Option<std::path::PathBuf>| {
        p.as_deref().map(path_to_string).unwrap_or_default()
    };

    let mut out = format!(
        r#"[reference]
; Directory holding the FAA NASR tables (NAV_BASE.csv, APT_BASE.csv,
; FIX_BASE.csv, ...). Each table may also be .zst or .gz compressed.
directory = {}

[sector]
; Sector file loaded at startup
file = {}

[positions]
; Position file loaded at startup
file = {}

[colors]
; Colors as r,g,b with each channel between 0 and 1
; Geo, SID and STAR segments that have no color of their own
geo = {}
sid = {}
star = {}

[logging]
; Directory for sectorscope.log
directory = {}

[defined_colors]
; Overrides for colors named in the sector file, e.g.
; TAXI = 1,1,0
"#,
        opt_path(&config.reference.directory),
        opt_path(&config.sector.file),
        opt_path(&config.positions.file),
        config.colors.geo,
        config.colors.sid,
        config.colors.star,
        path_to_string(&config.logging.directory),
    );

    for (name, rgb) in &config.colors.defined {
        let _ = writeln!(out, "{} = {}", name, rgb);
    }
    out
}

fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
