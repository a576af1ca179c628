// src/geometry.rs

use std::ops::{Add, Mul};

use glam::{Vec2, Vec3};

use crate::error::{GeometryError, GeometryResult};

pub type Point2 = Vec2;
pub type Point3 = Vec3;

/// Deepest subdivision the generators accept. Output grows as 4^depth, so
/// anything past this is a configuration mistake rather than a request.
pub const MAX_SUBDIVISION_DEPTH: u32 = 10;

pub fn check_depth(depth: u32) -> GeometryResult<()> {
    if depth > MAX_SUBDIVISION_DEPTH {
        return Err(GeometryError::invalid(format!(
            "subdivision depth {} exceeds the maximum of {}",
            depth, MAX_SUBDIVISION_DEPTH
        )));
    }
    Ok(())
}

/// Longest chaos-game walk the generators accept.
pub const MAX_POINT_COUNT: usize = 1 << 24;

/// Largest interactive vertex buffer. Every slot stays addressable by a
/// `u32` index.
pub const MAX_BUFFER_CAPACITY: usize = 1 << 20;

const _: () = assert!(MAX_BUFFER_CAPACITY <= u32::MAX as usize);

pub fn check_point_count(count: usize) -> GeometryResult<()> {
    if count > MAX_POINT_COUNT {
        return Err(GeometryError::invalid(format!(
            "point count {} exceeds the maximum of {}",
            count, MAX_POINT_COUNT
        )));
    }
    Ok(())
}

pub fn check_capacity(capacity: usize) -> GeometryResult<()> {
    if capacity > MAX_BUFFER_CAPACITY {
        return Err(GeometryError::invalid(format!(
            "buffer capacity {} exceeds the maximum of {}",
            capacity, MAX_BUFFER_CAPACITY
        )));
    }
    Ok(())
}

#[inline(always)]
pub fn midpoint<P>(a: P, b: P) -> P
where
    P: Add<Output = P> + Mul<f32, Output = P>,
{
    (a + b) * 0.5
}

/// Corners of the axis-aligned rectangle spanned by two diagonal corners,
/// wound so they can be drawn directly as a triangle fan.
pub fn rectangle_fan(p1: Point2, p2: Point2) -> [Point2; 4] {
    [p1, Point2::new(p1.x, p2.y), p2, Point2::new(p2.x, p1.y)]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl Triangle {
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }

    pub fn corners(&self) -> [Point2; 3] {
        [self.a, self.b, self.c]
    }

    /// The three corner sub-triangles, in emission order. The middle
    /// triangle is left out; that is the hole of the gasket.
    pub fn corner_children(&self) -> [Triangle; 3] {
        let ab = midpoint(self.a, self.b);
        let ac = midpoint(self.a, self.c);
        let bc = midpoint(self.b, self.c);
        [
            Triangle::new(self.a, ab, ac),
            Triangle::new(self.c, ac, bc),
            Triangle::new(self.b, bc, ab),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tetrahedron {
    pub a: Point3,
    pub b: Point3,
    pub c: Point3,
    pub d: Point3,
}

impl Tetrahedron {
    pub const FACE_COUNT: usize = 4;

    pub fn new(a: Point3, b: Point3, c: Point3, d: Point3) -> Self {
        Self { a, b, c, d }
    }

    /// Faces indexed 0..4; the index doubles as the face's palette slot.
    pub fn faces(&self) -> [[Point3; 3]; Self::FACE_COUNT] {
        let Tetrahedron { a, b, c, d } = *self;
        [[a, c, b], [a, c, d], [a, b, d], [b, c, d]]
    }

    /// One child per original vertex, built from that vertex and its three
    /// nearest edge midpoints. The central octahedron is not returned.
    pub fn corner_children(&self) -> [Tetrahedron; 4] {
        let Tetrahedron { a, b, c, d } = *self;
        let ab = midpoint(a, b);
        let ac = midpoint(a, c);
        let ad = midpoint(a, d);
        let bc = midpoint(b, c);
        let bd = midpoint(b, d);
        let cd = midpoint(c, d);
        [
            Tetrahedron::new(a, ab, ac, ad),
            Tetrahedron::new(ab, b, bc, bd),
            Tetrahedron::new(ac, bc, c, cd),
            Tetrahedron::new(ad, bd, cd, d),
        ]
    }
}
