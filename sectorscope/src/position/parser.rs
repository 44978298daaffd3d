//! Line parser for position files.

use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};

use super::{Frequency, Position, PositionFileError, Squawk};

/// Positions keyed by `prefix_suffix`.
pub type PositionMap = HashMap<String, Vec<Position>>;

const FIELD_COUNT: usize = 11;

/// Read and parse the position file at `path`.
pub fn parse_position_file(path: &Path) -> Result<PositionMap, PositionFileError> {
    let contents = std::fs::read_to_string(path).map_err(|source| PositionFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let positions = parse_positions(&path.display().to_string(), &contents);
    info!(
        path = %path.display(),
        positions = positions.values().map(Vec::len).sum::<usize>(),
        "Loaded position file"
    );
    Ok(positions)
}

/// Parse position file text. Malformed lines are logged and skipped.
pub fn parse_positions(filename: &str, contents: &str) -> PositionMap {
    let mut positions = PositionMap::new();

    for (n, line) in contents.lines().enumerate() {
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        let fields: Vec<&str> = line.split(':').collect();
        if fields.len() != FIELD_COUNT {
            warn!(
                file = filename,
                line = n + 1,
                fields = fields.len(),
                "Expected {FIELD_COUNT} fields"
            );
            continue;
        }

        let frequency = match fields[2].trim().parse::<f64>() {
            Ok(mhz) => Frequency::from_mhz(mhz),
            Err(e) => {
                warn!(file = filename, line = n + 1, error = %e, "Error parsing frequency");
                continue;
            }
        };

        let id = format!("{}_{}", fields[5], fields[6]);
        let position = Position {
            name: fields[0].to_string(),
            callsign: fields[1].to_string(),
            frequency,
            sector_id: fields[3].to_string(),
            scope: fields[4].to_string(),
            id: id.clone(),
            low_squawk: Squawk::parse(fields[9]),
            high_squawk: Squawk::parse(fields[10]),
        };
        positions.entry(id).or_default().push(position);
    }

    positions
}
