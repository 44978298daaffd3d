//! Controller position files.
//!
//! A position file lists the controller positions of a facility, one per
//! line, as 11 colon-separated fields:
//!
//! ```text
//! name:callsign:frequency:sector:scope:prefix:suffix:-:-:low squawk:high squawk
//! ```
//!
//! Positions are keyed by `prefix_suffix` (e.g. `JFK_TWR`); several
//! positions may share a key.

mod parser;

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub use parser::{parse_position_file, parse_positions, PositionMap};

/// Radio frequency in kHz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Frequency(pub u32);

impl Frequency {
    /// Convert a frequency in MHz (`"119.100"`) to kHz.
    pub fn from_mhz(mhz: f64) -> Self {
        Self((mhz * 1000.0).round() as u32)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}", self.0 / 1000, self.0 % 1000)
    }
}

/// A transponder code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Squawk(pub u16);

impl Squawk {
    /// Parse a four digit octal code.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() || s.len() > 4 {
            return None;
        }
        u16::from_str_radix(s, 8).ok().map(Squawk)
    }
}

impl fmt::Display for Squawk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

/// One controller position.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub name: String,
    pub callsign: String,
    pub frequency: Frequency,
    pub sector_id: String,
    pub scope: String,
    pub id: String,
    /// Squawk range; absent for e.g. neighboring facilities.
    pub low_squawk: Option<Squawk>,
    pub high_squawk: Option<Squawk>,
}

/// Failure to read a position file.
#[derive(Debug, Error)]
pub enum PositionFileError {
    #[error("Failed to read position file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_from_mhz() {
        assert_eq!(Frequency::from_mhz(119.1), Frequency(119_100));
        assert_eq!(Frequency::from_mhz(134.725).to_string(), "134.725");
    }

    #[test]
    fn test_squawk_is_octal() {
        assert_eq!(Squawk::parse("1200"), Some(Squawk(0o1200)));
        assert_eq!(Squawk::parse("0377").unwrap().to_string(), "0377");
        assert_eq!(Squawk::parse("1280"), None);
        assert_eq!(Squawk::parse(""), None);
        assert_eq!(Squawk::parse("12000"), None);
    }
}
