//! Line and triangle builders.

use std::ops::Range;

use super::{CommandBuffer, DrawCommand, COLOR_FLOATS_PER_LINE};
use crate::geo::{Extent2D, Point2LL, Rgb};

/// Accumulates uncolored line segments.
#[derive(Debug, Clone, Default)]
pub struct LinesDrawBuilder {
    vertices: Vec<Point2LL>,
}

impl LinesDrawBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, p0: Point2LL, p1: Point2LL) {
        self.vertices.push(p0);
        self.vertices.push(p1);
    }

    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn bounds(&self) -> Extent2D {
        Extent2D::from_points(&self.vertices)
    }

    /// Record the accumulated lines into `cb`. Does nothing when empty.
    pub fn generate_commands(&self, cb: &mut CommandBuffer) {
        if self.vertices.is_empty() {
            return;
        }
        emit_vertices(cb, &self.vertices);
        let indices: Vec<u32> = (0..self.vertices.len() as u32).collect();
        let indices = cb.push_indices(&indices);
        cb.push_command(DrawCommand::DrawLines { indices });
    }
}

/// Accumulates line segments that each carry their own color.
///
/// The compiled color block holds [`COLOR_FLOATS_PER_LINE`] floats per line
/// in insertion order, so line `i` owns floats `6*i .. 6*i+6`.
#[derive(Debug, Clone, Default)]
pub struct ColoredLinesDrawBuilder {
    vertices: Vec<Point2LL>,
    colors: Vec<f32>,
}

impl ColoredLinesDrawBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, p0: Point2LL, p1: Point2LL, color: Rgb) {
        self.vertices.push(p0);
        self.vertices.push(p1);
        self.colors.extend_from_slice(&color.channels());
        self.colors.extend_from_slice(&color.channels());
    }

    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn bounds(&self) -> Extent2D {
        Extent2D::from_points(&self.vertices)
    }

    /// Record the accumulated lines into `cb`.
    ///
    /// Returns the range of the color block within `cb`'s float storage.
    /// The range is empty when there were no lines.
    pub fn generate_commands(&self, cb: &mut CommandBuffer) -> Range<usize> {
        if self.vertices.is_empty() {
            let end = cb.floats().len();
            return end..end;
        }
        debug_assert_eq!(self.colors.len(), self.line_count() * COLOR_FLOATS_PER_LINE);

        emit_vertices(cb, &self.vertices);
        let colors = cb.push_floats(&self.colors);
        cb.push_command(DrawCommand::LoadColors {
            floats: colors.clone(),
        });
        let indices: Vec<u32> = (0..self.vertices.len() as u32).collect();
        let indices = cb.push_indices(&indices);
        cb.push_command(DrawCommand::DrawLines { indices });
        colors
    }
}

/// Accumulates triangles for a filled region.
#[derive(Debug, Clone, Default)]
pub struct TrianglesDrawBuilder {
    vertices: Vec<Point2LL>,
    indices: Vec<u32>,
}

impl TrianglesDrawBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_triangle(&mut self, p0: Point2LL, p1: Point2LL, p2: Point2LL) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&[p0, p1, p2]);
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn bounds(&self) -> Extent2D {
        Extent2D::from_points(&self.vertices)
    }

    /// Clear accumulated triangles so the builder can be reused.
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn generate_commands(&self, cb: &mut CommandBuffer) {
        if self.indices.is_empty() {
            return;
        }
        emit_vertices(cb, &self.vertices);
        let indices = cb.push_indices(&self.indices);
        cb.push_command(DrawCommand::DrawTriangles { indices });
    }
}

fn emit_vertices(cb: &mut CommandBuffer, vertices: &[Point2LL]) {
    let flat: Vec<f32> = vertices.iter().flat_map(|p| [p.lon, p.lat]).collect();
    let floats = cb.push_floats(&flat);
    cb.push_command(DrawCommand::LoadVertices { floats });
}
