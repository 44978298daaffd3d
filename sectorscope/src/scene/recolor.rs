//! In-place recoloring of compiled drawables and labels.

use tracing::debug;

use super::{SectorScene, StaticDrawable};
use crate::draw::COLOR_FLOATS_PER_LINE;
use crate::geo::Rgb;

/// Color name of Geo segments that carry no color of their own.
pub const GEO_COLOR_NAME: &str = "Geo";
/// Color name of SID segments that carry no color of their own.
pub const SID_COLOR_NAME: &str = "SID";
/// Color name of STAR segments that carry no color of their own.
pub const STAR_COLOR_NAME: &str = "STAR";

/// What a color name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget<'a> {
    /// Uncolored Geo segments.
    Geo,
    /// Uncolored SID segments.
    Sid,
    /// Uncolored STAR segments.
    Star,
    /// A color defined in the sector file; may be used by labels and by any
    /// Geo, SID or STAR segment.
    Other(&'a str),
}

impl<'a> ColorTarget<'a> {
    pub fn from_name(name: &'a str) -> Self {
        match name {
            GEO_COLOR_NAME => ColorTarget::Geo,
            SID_COLOR_NAME => ColorTarget::Sid,
            STAR_COLOR_NAME => ColorTarget::Star,
            other => ColorTarget::Other(other),
        }
    }
}

/// Write `rgb` to both endpoints of line `i` in a 6-float-per-line color
/// block. Returns false if `i` is out of range.
pub(crate) fn write_line_color(colors: &mut [f32], i: usize, rgb: Rgb) -> bool {
    let start = i * COLOR_FLOATS_PER_LINE;
    let Some(block) = colors.get_mut(start..start + COLOR_FLOATS_PER_LINE) else {
        return false;
    };
    let [r, g, b] = rgb.channels();
    block.copy_from_slice(&[r, g, b, r, g, b]);
    true
}

fn recolor_all(drawables: &mut [StaticDrawable], name: &str, rgb: Rgb) -> usize {
    drawables
        .iter_mut()
        .map(|d| d.apply_named_color(name, rgb))
        .sum()
}

impl SectorScene {
    /// Recolor everything registered under `name`.
    ///
    /// `"Geo"`, `"SID"` and `"STAR"` only touch their own collection.
    /// Any other name is treated as a sector-file color and applied to
    /// labels, Geo, SIDs and STARs alike.
    pub fn named_color_changed(&mut self, name: &str, rgb: Rgb) {
        let updated = match ColorTarget::from_name(name) {
            ColorTarget::Geo => recolor_all(&mut self.geos, GEO_COLOR_NAME, rgb),
            ColorTarget::Sid => recolor_all(&mut self.sids, SID_COLOR_NAME, rgb),
            ColorTarget::Star => recolor_all(&mut self.stars, STAR_COLOR_NAME, rgb),
            ColorTarget::Other(name) => {
                let labels = &mut self.labels;
                let mut updated = 0;
                self.label_color_index.visit(name, |i| {
                    if let Some(label) = labels.get_mut(i) {
                        label.color = rgb;
                        updated += 1;
                    }
                });
                updated
                    + recolor_all(&mut self.geos, name, rgb)
                    + recolor_all(&mut self.sids, name, rgb)
                    + recolor_all(&mut self.stars, name, rgb)
            }
        };
        debug!(name, color = %rgb, updated, "Applied named color");
    }
}
