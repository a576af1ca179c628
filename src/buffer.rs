// src/buffer.rs

use crate::palette::Color;

/// Append-only positions with optional per-vertex colors.
///
/// A buffer is either uncolored (every push is `push`) or colored (every
/// push is `push_colored`); mixing the two is a logic error and panics in
/// debug builds. A buffer becomes colored when created with
/// [`with_colored_capacity`](Self::with_colored_capacity) or on its first
/// `push_colored`, so an empty colored buffer still reports colors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryBuffer<P> {
    positions: Vec<P>,
    colors: Vec<Color>,
    colored: bool,
}

impl<P: Copy> GeometryBuffer<P> {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            colors: Vec::new(),
            colored: false,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            colors: Vec::new(),
            colored: false,
        }
    }

    pub fn with_colored_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
            colored: true,
        }
    }

    pub fn push(&mut self, position: P) {
        debug_assert!(!self.colored, "uncolored push into a colored buffer");
        self.positions.push(position);
    }

    pub fn push_colored(&mut self, position: P, color: Color) {
        debug_assert_eq!(self.positions.len(), self.colors.len());
        self.colored = true;
        self.positions.push(position);
        self.colors.push(color);
    }

    pub fn positions(&self) -> &[P] {
        &self.positions
    }

    /// `None` for an uncolored buffer, even an empty one.
    pub fn colors(&self) -> Option<&[Color]> {
        self.colored.then_some(self.colors.as_slice())
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    pub fn get(&self, index: usize) -> Option<(P, Option<Color>)> {
        let position = *self.positions.get(index)?;
        Some((position, self.colors.get(index).copied()))
    }

    pub fn last(&self) -> Option<P> {
        self.positions.last().copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (P, Option<Color>)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .map(move |(i, p)| (*p, self.colors.get(i).copied()))
    }

    pub fn into_positions(self) -> Vec<P> {
        self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{RED, BLUE};

    #[test]
    fn uncolored_buffer_reports_no_colors() {
        let mut buffer = GeometryBuffer::with_capacity(2);
        buffer.push(1.0f32);
        buffer.push(2.0f32);
        assert_eq!(buffer.positions(), &[1.0, 2.0]);
        assert_eq!(buffer.colors(), None);
        assert_eq!(buffer.get(1), Some((2.0, None)));
    }

    #[test]
    fn colored_buffer_keeps_pairs_aligned() {
        let mut buffer = GeometryBuffer::with_colored_capacity(2);
        buffer.push_colored(1u32, RED);
        buffer.push_colored(2u32, BLUE);
        assert_eq!(buffer.colors(), Some(&[RED, BLUE][..]));
        let pairs: Vec<_> = buffer.iter().collect();
        assert_eq!(pairs, vec![(1, Some(RED)), (2, Some(BLUE))]);
    }

    #[test]
    fn empty_buffers_keep_their_kind() {
        let plain: GeometryBuffer<f32> = GeometryBuffer::with_capacity(4);
        assert!(!plain.is_colored());
        assert_eq!(plain.colors(), None);

        let colored: GeometryBuffer<f32> = GeometryBuffer::with_colored_capacity(4);
        assert!(colored.is_colored());
        assert_eq!(colored.colors(), Some(&[][..]));

        let defaulted: GeometryBuffer<f32> = GeometryBuffer::default();
        assert_eq!(defaulted.colors(), None);
    }

    #[test]
    fn first_colored_push_marks_buffer_colored() {
        let mut buffer = GeometryBuffer::new();
        assert_eq!(buffer.colors(), None);
        buffer.push_colored(3u8, RED);
        assert_eq!(buffer.colors(), Some(&[RED][..]));
    }
}
