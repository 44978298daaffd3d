//! `positions` command: list controller positions.

use std::path::Path;

use sectorscope::position::{parse_position_file, Position, PositionMap};

use crate::error::CliError;

/// Print the positions in `file`, optionally only those under `id`.
pub fn run(file: &Path, id: Option<&str>) -> Result<(), CliError> {
    let positions = parse_position_file(file)?;
    let selected = select(&positions, id);
    if selected.is_empty() {
        return Err(CliError::NotFound(match id {
            Some(id) => format!("Position {}", id),
            None => format!("Positions in {}", file.display()),
        }));
    }

    for position in selected {
        println!("{}", format_position(position));
    }
    Ok(())
}

/// Positions under `id`, or all of them ordered by id.
fn select<'a>(positions: &'a PositionMap, id: Option<&str>) -> Vec<&'a Position> {
    match id {
        Some(id) => positions
            .get(&id.to_uppercase())
            .map(|v| v.iter().collect())
            .unwrap_or_default(),
        None => {
            let mut ids: Vec<&String> = positions.keys().collect();
            ids.sort();
            ids.into_iter().flat_map(move |id| &positions[id]).collect()
        }
    }
}

fn format_position(p: &Position) -> String {
    let squawks = match (p.low_squawk, p.high_squawk) {
        (Some(low), Some(high)) => format!("  squawk {}-{}", low, high),
        _ => String::new(),
    };
    format!(
        "{:<10} {:<12} {} {}{}",
        p.id, p.callsign, p.frequency, p.name, squawks
    )
}
