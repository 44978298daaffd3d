//! Recolorable line drawables (SIDs, STARs, Geo map art).

use super::{ColorBufferIndex, StaticDrawable};
use crate::draw::{ColoredLinesDrawBuilder, CommandBuffer};
use crate::geo::Rgb;
use crate::sector::ColoredSegment;

/// Compile one named group of colored segments.
///
/// Each real segment is registered under its own color name, or under
/// `default_color` when the sector file gave it none. Colors start out
/// black; the first recolor fills them in.
pub fn compile_colored_lines(
    name: &str,
    segments: &[ColoredSegment],
    default_color: &str,
) -> StaticDrawable {
    let mut ld = ColoredLinesDrawBuilder::new();
    let mut color_index = ColorBufferIndex::new();

    for seg in segments {
        // (0,0) endpoints separate sections in sector files; drawing them
        // would also wreck the bounds used for culling.
        if seg.is_unset() {
            continue;
        }
        if seg.color.is_empty() {
            color_index.add(default_color);
        } else {
            color_index.add(&seg.color);
        }
        ld.add_line(seg.p[0].to_point(), seg.p[1].to_point(), Rgb::default());
    }

    let mut cb = CommandBuffer::new();
    let colors = ld.generate_commands(&mut cb);
    StaticDrawable::with_colors(name, cb, colors, ld.bounds(), color_index)
}
