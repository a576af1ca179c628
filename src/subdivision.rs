// src/subdivision.rs

use log::debug;

use crate::buffer::GeometryBuffer;
use crate::error::GeometryResult;
use crate::geometry::{check_depth, Point2, Point3, Tetrahedron, Triangle};
use crate::palette::{Color, Palette};

/// Recursive Sierpinski subdivision of triangles and tetrahedra.
pub struct FractalSubdivider;

impl FractalSubdivider {
    pub fn triangle_vertex_count(depth: u32) -> usize {
        3 * 4usize.pow(depth)
    }

    pub fn tetrahedron_vertex_count(depth: u32) -> usize {
        Tetrahedron::FACE_COUNT * 3 * 4usize.pow(depth)
    }

    /// Emits the leaf triangles of a gasket of the given depth, three points
    /// per triangle, depth first. Depth 0 yields exactly `(a, b, c)`.
    pub fn subdivide_triangle(triangle: Triangle, depth: u32) -> GeometryResult<GeometryBuffer<Point2>> {
        check_depth(depth)?;

        let mut buffer = GeometryBuffer::with_capacity(Self::triangle_vertex_count(depth));
        Self::divide_triangle(&triangle, depth, &mut buffer);

        debug!("triangle gasket: depth {} -> {} vertices", depth, buffer.len());
        Ok(buffer)
    }

    fn divide_triangle(triangle: &Triangle, depth: u32, out: &mut GeometryBuffer<Point2>) {
        if depth == 0 {
            for corner in triangle.corners() {
                out.push(corner);
            }
            return;
        }
        for child in triangle.corner_children() {
            Self::divide_triangle(&child, depth - 1, out);
        }
    }

    /// Emits four flat-colored faces for every leaf tetrahedron.
    ///
    /// `color_of` is asked once per face index (0..4) before anything is
    /// generated, so a failing lookup never leaves partial output.
    pub fn subdivide_tetrahedron<F>(
        tetrahedron: Tetrahedron,
        depth: u32,
        mut color_of: F,
    ) -> GeometryResult<GeometryBuffer<Point3>>
    where
        F: FnMut(usize) -> GeometryResult<Color>,
    {
        check_depth(depth)?;
        let face_colors = [color_of(0)?, color_of(1)?, color_of(2)?, color_of(3)?];

        let mut buffer = GeometryBuffer::with_colored_capacity(Self::tetrahedron_vertex_count(depth));
        Self::divide_tetrahedron(&tetrahedron, depth, &face_colors, &mut buffer);

        debug!("tetrahedron gasket: depth {} -> {} vertices", depth, buffer.len());
        Ok(buffer)
    }

    pub fn subdivide_tetrahedron_with_palette(
        tetrahedron: Tetrahedron,
        depth: u32,
        palette: &Palette,
    ) -> GeometryResult<GeometryBuffer<Point3>> {
        Self::subdivide_tetrahedron(tetrahedron, depth, |face| palette.get(face))
    }

    fn divide_tetrahedron(
        tetrahedron: &Tetrahedron,
        depth: u32,
        face_colors: &[Color; Tetrahedron::FACE_COUNT],
        out: &mut GeometryBuffer<Point3>,
    ) {
        if depth == 0 {
            for (face, color) in tetrahedron.faces().iter().zip(face_colors) {
                for &vertex in face {
                    out.push_colored(vertex, *color);
                }
            }
            return;
        }
        for child in tetrahedron.corner_children() {
            Self::divide_tetrahedron(&child, depth - 1, face_colors, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;
    use crate::geometry::MAX_SUBDIVISION_DEPTH;

    fn base_triangle() -> Triangle {
        Triangle::new(Point2::new(-1.0, -1.0), Point2::new(0.0, 1.0), Point2::new(1.0, -1.0))
    }

    fn base_tetrahedron() -> Tetrahedron {
        Tetrahedron::new(
            Point3::new(0.0, 0.0, -1.0),
            Point3::new(0.0, 0.9428, 0.3333),
            Point3::new(-0.8165, -0.4714, 0.3333),
            Point3::new(0.8165, -0.4714, 0.3333),
        )
    }

    #[test]
    fn depth_zero_is_the_input_triangle() {
        let t = base_triangle();
        let buffer = FractalSubdivider::subdivide_triangle(t, 0).unwrap();
        assert_eq!(buffer.positions(), &[t.a, t.b, t.c]);
    }

    #[test]
    fn triangle_counts_grow_by_four() {
        for depth in 0..=5 {
            let buffer = FractalSubdivider::subdivide_triangle(base_triangle(), depth).unwrap();
            assert_eq!(buffer.len(), 3 * 4usize.pow(depth));
        }
    }

    #[test]
    fn depth_one_order_is_depth_first_corner_order() {
        let buffer = FractalSubdivider::subdivide_triangle(base_triangle(), 1).unwrap();
        let expected = [
            // (a, ab, ac)
            Point2::new(-1.0, -1.0), Point2::new(-0.5, 0.0), Point2::new(0.0, -1.0),
            // (c, ac, bc)
            Point2::new(1.0, -1.0), Point2::new(0.0, -1.0), Point2::new(0.5, 0.0),
            // (b, bc, ab)
            Point2::new(0.0, 1.0), Point2::new(0.5, 0.0), Point2::new(-0.5, 0.0),
        ];
        assert_eq!(buffer.positions(), &expected);
    }

    #[test]
    fn excessive_depth_is_rejected() {
        let result = FractalSubdivider::subdivide_triangle(base_triangle(), MAX_SUBDIVISION_DEPTH + 1);
        assert!(matches!(result, Err(GeometryError::InvalidInput(_))));
    }

    #[test]
    fn tetrahedron_faces_are_flat_colored() {
        for depth in 0..=3 {
            let buffer = FractalSubdivider::subdivide_tetrahedron_with_palette(
                base_tetrahedron(),
                depth,
                &Palette::TETRA_FACES,
            )
            .unwrap();
            assert_eq!(buffer.len(), 12 * 4usize.pow(depth));

            let colors = buffer.colors().unwrap();
            for triangle in colors.chunks(3) {
                assert_eq!(triangle[0], triangle[1]);
                assert_eq!(triangle[1], triangle[2]);
            }
        }
    }

    #[test]
    fn tetrahedron_depth_zero_face_layout() {
        let t = base_tetrahedron();
        let buffer = FractalSubdivider::subdivide_tetrahedron_with_palette(t, 0, &Palette::TETRA_FACES).unwrap();
        let positions = buffer.positions();
        assert_eq!(&positions[0..3], &[t.a, t.c, t.b]);
        assert_eq!(&positions[3..6], &[t.a, t.c, t.d]);
        assert_eq!(&positions[6..9], &[t.a, t.b, t.d]);
        assert_eq!(&positions[9..12], &[t.b, t.c, t.d]);

        let colors = buffer.colors().unwrap();
        for face in 0..4 {
            assert_eq!(colors[face * 3], Palette::TETRA_FACES.get(face).unwrap());
        }
    }

    #[test]
    fn short_palette_fails_before_output() {
        let result = FractalSubdivider::subdivide_tetrahedron(base_tetrahedron(), 2, |face| {
            Palette::TETRA_FACES.get(face + 1)
        });
        assert_eq!(result, Err(GeometryError::ColorIndexOutOfRange { index: 4, len: 4 }));
    }
}
