//! Geographic primitives shared by every compiled layer.
//!
//! All geometry in the static scene is expressed as single-precision
//! longitude/latitude pairs ([`Point2LL`]). Bounding boxes ([`Extent2D`])
//! are kept in the same space so a renderer can cull drawables without
//! projecting them first.

mod extent;
mod types;

pub use extent::Extent2D;
pub use types::{Point2LL, Rgb};

/// Parses a degrees/minutes/seconds/hemisphere quadruple into decimal degrees.
///
/// This is the layout used by the FAA NASR CSV tables, where each coordinate
/// is spread across four columns (e.g. `40`, `38`, `23.0000`, `N`).
/// Southern and western hemispheres yield negative values.
pub fn parse_dms(components: [&str; 4]) -> Option<f64> {
    let [deg, min, sec, hemisphere] = components;

    let deg: f64 = deg.trim().parse().ok()?;
    let min: f64 = min.trim().parse().ok()?;
    let sec: f64 = sec.trim().parse().ok()?;

    let value = deg + min / 60.0 + sec / 3600.0;
    match hemisphere.trim().to_ascii_uppercase().as_str() {
        "N" | "E" => Some(value),
        "S" | "W" => Some(-value),
        _ => None,
    }
}
