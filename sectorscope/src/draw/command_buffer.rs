//! Compiled draw-command storage.

use std::ops::Range;

/// A single recorded draw command.
///
/// Ranges index into the owning [`CommandBuffer`]'s float and index storage.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Bind 2-component vertex positions.
    LoadVertices { floats: Range<usize> },
    /// Bind 3-component per-vertex colors.
    LoadColors { floats: Range<usize> },
    /// Draw line segments, two indices per segment.
    DrawLines { indices: Range<usize> },
    /// Draw triangles, three indices per triangle.
    DrawTriangles { indices: Range<usize> },
}

/// An opaque, compiled sequence of draw commands.
///
/// The buffer owns all vertex, color and index data referenced by its
/// commands, so it can be handed to a renderer as a single unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandBuffer {
    floats: Vec<f32>,
    indices: Vec<u32>,
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append floats and return the range they occupy.
    pub(crate) fn push_floats(&mut self, data: &[f32]) -> Range<usize> {
        let start = self.floats.len();
        self.floats.extend_from_slice(data);
        start..self.floats.len()
    }

    /// Append indices and return the range they occupy.
    pub(crate) fn push_indices(&mut self, data: &[u32]) -> Range<usize> {
        let start = self.indices.len();
        self.indices.extend_from_slice(data);
        start..self.indices.len()
    }

    pub(crate) fn push_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Recorded commands, in execution order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All float storage (vertices and colors).
    pub fn floats(&self) -> &[f32] {
        &self.floats
    }

    /// All index storage.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// A view of a float block previously returned by a builder.
    ///
    /// Returns `None` if the range is out of bounds.
    pub fn float_slice(&self, range: Range<usize>) -> Option<&[f32]> {
        self.floats.get(range)
    }

    /// Mutable view of a float block; used to rewrite colors in place.
    pub fn float_slice_mut(&mut self, range: Range<usize>) -> Option<&mut [f32]> {
        self.floats.get_mut(range)
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of line segments drawn by this buffer.
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .map(|c| match c {
                DrawCommand::DrawLines { indices } => indices.len() / 2,
                _ => 0,
            })
            .sum()
    }

    /// Number of triangles drawn by this buffer.
    pub fn triangle_count(&self) -> usize {
        self.commands
            .iter()
            .map(|c| match c {
                DrawCommand::DrawTriangles { indices } => indices.len() / 3,
                _ => 0,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer() {
        let cb = CommandBuffer::new();
        assert!(cb.is_empty());
        assert_eq!(cb.line_count(), 0);
        assert_eq!(cb.triangle_count(), 0);
    }

    #[test]
    fn test_push_ranges_are_contiguous() {
        let mut cb = CommandBuffer::new();
        let a = cb.push_floats(&[1.0, 2.0]);
        let b = cb.push_floats(&[3.0]);
        assert_eq!(a, 0..2);
        assert_eq!(b, 2..3);
        assert_eq!(cb.float_slice(b), Some(&[3.0][..]));
    }

    #[test]
    fn test_float_slice_out_of_bounds() {
        let mut cb = CommandBuffer::new();
        cb.push_floats(&[1.0]);
        assert!(cb.float_slice(0..4).is_none());
        assert!(cb.float_slice_mut(2..3).is_none());
    }

    #[test]
    fn test_float_slice_mut_writes_through() {
        let mut cb = CommandBuffer::new();
        let r = cb.push_floats(&[0.0; 3]);
        cb.float_slice_mut(r.clone()).unwrap()[1] = 0.5;
        assert_eq!(cb.float_slice(r).unwrap(), &[0.0, 0.5, 0.0]);
    }
}
