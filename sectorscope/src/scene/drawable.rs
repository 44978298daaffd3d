//! Compiled drawables and labels.

use std::ops::Range;

use super::recolor::write_line_color;
use super::ColorBufferIndex;
use crate::draw::CommandBuffer;
use crate::geo::{Extent2D, Point2LL, Rgb};

/// A fixed piece of map geometry ready for rendering.
///
/// Geometry is frozen at construction. Colored line drawables additionally
/// own a color block inside their command buffer, addressable by color name
/// through the drawable's [`ColorBufferIndex`]; only the recolor path writes
/// to it.
#[derive(Debug, Clone, Default)]
pub struct StaticDrawable {
    name: String,
    commands: CommandBuffer,
    colors: Option<Range<usize>>,
    bounds: Extent2D,
    color_index: ColorBufferIndex,
}

impl StaticDrawable {
    /// An uncolored drawable; the renderer supplies the color.
    pub fn new(name: &str, commands: CommandBuffer, bounds: Extent2D) -> Self {
        Self {
            name: name.to_string(),
            commands,
            colors: None,
            bounds,
            color_index: ColorBufferIndex::new(),
        }
    }

    /// A drawable whose lines carry per-segment colors.
    ///
    /// `colors` is the color block inside `commands`; `color_index` must have
    /// one entry per line in that block.
    pub fn with_colors(
        name: &str,
        commands: CommandBuffer,
        colors: Range<usize>,
        bounds: Extent2D,
        color_index: ColorBufferIndex,
    ) -> Self {
        Self {
            name: name.to_string(),
            commands,
            colors: Some(colors),
            bounds,
            color_index,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn commands(&self) -> &CommandBuffer {
        &self.commands
    }

    pub fn bounds(&self) -> Extent2D {
        self.bounds
    }

    pub fn color_index(&self) -> &ColorBufferIndex {
        &self.color_index
    }

    /// The per-vertex color block, for colored drawables.
    pub fn rgb(&self) -> Option<&[f32]> {
        let range = self.colors.clone()?;
        self.commands.float_slice(range)
    }

    /// Rewrite every segment registered under `name` to `rgb`.
    ///
    /// Returns the number of segments updated.
    pub(crate) fn apply_named_color(&mut self, name: &str, rgb: Rgb) -> usize {
        let Some(range) = self.colors.clone() else {
            return 0;
        };
        let Some(slice) = self.commands.float_slice_mut(range) else {
            return 0;
        };

        let mut updated = 0;
        self.color_index.visit(name, |i| {
            if write_line_color(slice, i, rgb) {
                updated += 1;
            }
        });
        updated
    }
}

/// A text label anchored at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub name: String,
    pub position: Point2LL,
    pub color: Rgb,
}

impl Label {
    pub fn new(name: &str, position: Point2LL) -> Self {
        Self {
            name: name.to_string(),
            position,
            color: Rgb::default(),
        }
    }
}

/// Deduplicated airway lines plus one label per distinct segment.
#[derive(Debug, Clone, Default)]
pub struct AirwayLayer {
    pub lines: StaticDrawable,
    pub labels: Vec<Label>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::ColoredLinesDrawBuilder;

    fn colored_drawable(names: &[&str]) -> StaticDrawable {
        let mut ld = ColoredLinesDrawBuilder::new();
        let mut index = ColorBufferIndex::new();
        for (i, name) in names.iter().enumerate() {
            let x = i as f32;
            ld.add_line(Point2LL::new(x, 0.0), Point2LL::new(x, 1.0), Rgb::default());
            index.add(name);
        }
        let mut cb = CommandBuffer::new();
        let colors = ld.generate_commands(&mut cb);
        StaticDrawable::with_colors("test", cb, colors, ld.bounds(), index)
    }

    #[test]
    fn test_uncolored_drawable_has_no_rgb() {
        let mut d = StaticDrawable::new("ZNY", CommandBuffer::new(), Extent2D::empty());
        assert!(d.rgb().is_none());
        assert_eq!(d.apply_named_color("ZNY", Rgb::WHITE), 0);
    }

    #[test]
    fn test_apply_named_color_only_touches_matching_segments() {
        let mut d = colored_drawable(&["RED", "BLUE", "RED"]);
        let updated = d.apply_named_color("RED", Rgb::new(1.0, 0.0, 0.0));

        assert_eq!(updated, 2);
        let rgb = d.rgb().unwrap();
        assert_eq!(&rgb[0..6], &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(&rgb[6..12], &[0.0; 6]);
        assert_eq!(&rgb[12..18], &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_apply_unknown_name() {
        let mut d = colored_drawable(&["RED"]);
        assert_eq!(d.apply_named_color("GREEN", Rgb::WHITE), 0);
        assert_eq!(d.rgb().unwrap(), &[0.0; 6]);
    }

    #[test]
    fn test_label_default_color() {
        let l = Label::new("KJFK", Point2LL::new(-73.8, 40.6));
        assert_eq!(l.color, Rgb::BLACK);
    }
}
