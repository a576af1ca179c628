// src/palette.rs

use crate::error::{GeometryError, GeometryResult};

/// Linear RGBA, the layout the vertex buffers expect.
pub type Color = [f32; 4];

pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];
pub const GREEN: Color = [0.0, 1.0, 0.0, 1.0];
pub const BLUE: Color = [0.0, 0.0, 1.0, 1.0];
pub const MAGENTA: Color = [1.0, 0.0, 1.0, 1.0];
pub const CYAN: Color = [0.0, 1.0, 1.0, 1.0];
pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const GREY: Color = [0.5, 0.5, 0.5, 1.0];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: Color,
}

/// An immutable, ordered list of colors addressed by index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    entries: &'static [NamedColor],
}

impl Palette {
    /// One color per tetrahedron face.
    pub const TETRA_FACES: Palette = Palette::new(&[
        NamedColor { name: "red", color: RED },
        NamedColor { name: "green", color: GREEN },
        NamedColor { name: "blue", color: BLUE },
        NamedColor { name: "black", color: BLACK },
    ]);

    /// The list offered by the drawing programs' color picker.
    pub const CAD: Palette = Palette::new(&[
        NamedColor { name: "black", color: BLACK },
        NamedColor { name: "red", color: RED },
        NamedColor { name: "yellow", color: YELLOW },
        NamedColor { name: "green", color: GREEN },
        NamedColor { name: "blue", color: BLUE },
        NamedColor { name: "magenta", color: MAGENTA },
        NamedColor { name: "cyan", color: CYAN },
    ]);

    /// One color per cube corner.
    pub const CUBE: Palette = Palette::new(&[
        NamedColor { name: "black", color: BLACK },
        NamedColor { name: "red", color: RED },
        NamedColor { name: "yellow", color: YELLOW },
        NamedColor { name: "green", color: GREEN },
        NamedColor { name: "blue", color: BLUE },
        NamedColor { name: "magenta", color: MAGENTA },
        NamedColor { name: "cyan", color: CYAN },
        NamedColor { name: "white", color: WHITE },
    ]);

    pub const fn new(entries: &'static [NamedColor]) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> GeometryResult<Color> {
        self.entries
            .get(index)
            .map(|entry| entry.color)
            .ok_or(GeometryError::ColorIndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    pub fn name(&self, index: usize) -> GeometryResult<&'static str> {
        self.entries
            .get(index)
            .map(|entry| entry.name)
            .ok_or(GeometryError::ColorIndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    /// Wrapping lookup for callers that deliberately cycle through the
    /// palette, e.g. coloring successive clicks.
    pub fn cycled(&self, index: usize) -> GeometryResult<Color> {
        if self.entries.is_empty() {
            return Err(GeometryError::ColorIndexOutOfRange { index, len: 0 });
        }
        Ok(self.entries[index % self.entries.len()].color)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedColor> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cad_palette_order() {
        let names: Vec<_> = Palette::CAD.names().collect();
        assert_eq!(names, ["black", "red", "yellow", "green", "blue", "magenta", "cyan"]);
    }

    #[test]
    fn out_of_range_lookup_fails() {
        assert_eq!(
            Palette::TETRA_FACES.get(4),
            Err(GeometryError::ColorIndexOutOfRange { index: 4, len: 4 })
        );
        assert!(Palette::CAD.name(7).is_err());
    }

    #[test]
    fn cycled_wraps_explicitly() {
        assert_eq!(Palette::CAD.cycled(7).unwrap(), BLACK);
        assert_eq!(Palette::CAD.cycled(9).unwrap(), YELLOW);
        assert!(Palette::new(&[]).cycled(0).is_err());
    }
}
