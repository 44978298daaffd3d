//! Compilation of a parsed sector file into render-ready drawables.
//!
//! The scene owns every derived collection: named points, runways, line and
//! region drawables, airway layers, labels and the color indices that let a
//! named color be rewritten in place.

mod airway;
mod assembler;
mod color_index;
mod colored;
mod drawable;
mod lines;
mod recolor;
mod region;
mod runway;

pub use airway::{compile_airways, AIRWAY_LABEL_SEPARATOR};
pub use assembler::SectorScene;
pub use color_index::ColorBufferIndex;
pub use colored::compile_colored_lines;
pub use drawable::{AirwayLayer, Label, StaticDrawable};
pub use lines::{compile_artcc, compile_runway_lines};
pub use recolor::{ColorTarget, GEO_COLOR_NAME, SID_COLOR_NAME, STAR_COLOR_NAME};
pub use region::{compile_regions, triangulate, TriangulateError};
pub use runway::{compile_runways, Runway};
