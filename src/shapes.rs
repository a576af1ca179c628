// src/shapes.rs
//
// Fixed geometry for the spinning demos.

use crate::buffer::GeometryBuffer;
use crate::error::GeometryResult;
use crate::geometry::{Point2, Point3};
use crate::palette::Palette;

/// A diamond drawn as a triangle strip.
pub const SQUARE_STRIP: [Point2; 4] = [
    Point2::new(0.0, 1.0),
    Point2::new(-1.0, 0.0),
    Point2::new(1.0, 0.0),
    Point2::new(0.0, -1.0),
];

pub const CUBE_CORNERS: [Point3; 8] = [
    Point3::new(-0.5, -0.5, 0.5),
    Point3::new(-0.5, 0.5, 0.5),
    Point3::new(0.5, 0.5, 0.5),
    Point3::new(0.5, -0.5, 0.5),
    Point3::new(-0.5, -0.5, -0.5),
    Point3::new(-0.5, 0.5, -0.5),
    Point3::new(0.5, 0.5, -0.5),
    Point3::new(0.5, -0.5, -0.5),
];

/// Corner indices of each face, counter-clockwise seen from outside.
pub const CUBE_FACES: [[usize; 4]; 6] = [
    [1, 0, 3, 2],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
    [6, 5, 1, 2],
    [4, 5, 6, 7],
    [5, 4, 0, 1],
];

/// The twelve cube triangles as indices into `CUBE_CORNERS`.
pub const CUBE_INDICES: [u32; 36] = [
    1, 0, 3, 3, 2, 1, //
    2, 3, 7, 7, 6, 2, //
    3, 0, 4, 4, 7, 3, //
    6, 5, 1, 1, 2, 6, //
    4, 5, 6, 6, 7, 4, //
    5, 4, 0, 0, 1, 5,
];

pub fn square_strip() -> GeometryBuffer<Point2> {
    let mut buffer = GeometryBuffer::with_capacity(SQUARE_STRIP.len());
    for corner in SQUARE_STRIP {
        buffer.push(corner);
    }
    buffer
}

/// 36 vertices, each face split into two triangles and painted with the
/// palette color of its first corner.
pub fn color_cube(palette: &Palette) -> GeometryResult<GeometryBuffer<Point3>> {
    let mut buffer = GeometryBuffer::with_colored_capacity(CUBE_FACES.len() * 6);
    for [a, b, c, d] in CUBE_FACES {
        let color = palette.get(a)?;
        for corner in [a, b, c, a, c, d] {
            buffer.push_colored(CUBE_CORNERS[corner], color);
        }
    }
    Ok(buffer)
}

/// The eight corners, corner `i` painted with palette color `i`, plus the
/// triangle indices over them.
pub fn indexed_cube(palette: &Palette) -> GeometryResult<(GeometryBuffer<Point3>, Vec<u32>)> {
    let mut buffer = GeometryBuffer::with_colored_capacity(CUBE_CORNERS.len());
    for (i, corner) in CUBE_CORNERS.iter().enumerate() {
        buffer.push_colored(*corner, palette.get(i)?);
    }
    Ok((buffer, CUBE_INDICES.to_vec()))
}
