//! Geometry builders and the compiled command buffer.
//!
//! Builders accumulate lines or triangles in geographic coordinates and
//! compile them into a [`CommandBuffer`]: a flat, renderer-agnostic list of
//! draw commands plus the float/index storage they reference. A compiled
//! buffer is immutable apart from its color blocks, which the recolor path
//! rewrites in place.

mod builders;
mod command_buffer;

pub use builders::{ColoredLinesDrawBuilder, LinesDrawBuilder, TrianglesDrawBuilder};
pub use command_buffer::{CommandBuffer, DrawCommand};

/// Floats per line segment in a color block (two endpoints, three channels).
pub const COLOR_FLOATS_PER_LINE: usize = 6;
