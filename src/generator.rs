// src/generator.rs

use std::ops::{Add, Mul};

use log::debug;
use rand::Rng;

use crate::buffer::GeometryBuffer;
use crate::error::{GeometryError, GeometryResult};
use crate::geometry::{check_point_count, midpoint, Point3};
use crate::palette::{Color, GREY};

/// Where the walk starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SeedPolicy<P> {
    /// `0.25 * ((v0 + v1) + (v0 + v2))`, a point inside the triangle formed
    /// by the first three vertices. Needs at least three vertices.
    TriangleInterior,
    /// The zero point.
    Origin,
    Fixed(P),
}

/// The chaos game: every new point lies halfway between the previous point
/// and a vertex picked uniformly at random.
#[derive(Clone, Debug)]
pub struct RandomWalkSampler<'a, P> {
    vertices: &'a [P],
    seed: SeedPolicy<P>,
}

impl<'a, P> RandomWalkSampler<'a, P>
where
    P: Copy + Default + Add<Output = P> + Mul<f32, Output = P>,
{
    pub fn new(vertices: &'a [P], seed: SeedPolicy<P>) -> Self {
        Self { vertices, seed }
    }

    pub fn vertices(&self) -> &[P] {
        self.vertices
    }

    pub fn seed_point(&self) -> GeometryResult<P> {
        if self.vertices.is_empty() {
            return Err(GeometryError::invalid("random walk needs at least one vertex"));
        }
        match self.seed {
            SeedPolicy::TriangleInterior => match self.vertices {
                [v0, v1, v2, ..] => {
                    let u = *v0 + *v1;
                    let v = *v0 + *v2;
                    Ok((u + v) * 0.25)
                }
                _ => Err(GeometryError::invalid(format!(
                    "triangle-interior seed needs 3 vertices, got {}",
                    self.vertices.len()
                ))),
            },
            SeedPolicy::Origin => Ok(P::default()),
            SeedPolicy::Fixed(point) => Ok(point),
        }
    }

    /// Returns `count + 1` points: the seed followed by `count` steps.
    pub fn generate<R>(&self, count: usize, rng: &mut R) -> GeometryResult<GeometryBuffer<P>>
    where
        R: Rng + ?Sized,
    {
        let total = walk_len(count)?;
        let seed = self.seed_point()?;

        let mut buffer = GeometryBuffer::with_capacity(total);
        buffer.push(seed);

        let mut previous = seed;
        for _ in 0..count {
            previous = self.step(previous, rng);
            buffer.push(previous);
        }

        debug!("random walk: {} vertices, {} points", self.vertices.len(), buffer.len());
        Ok(buffer)
    }

    /// Same walk as [`generate`](Self::generate), with the seed painted
    /// `seed_color` and every later point painted by `color_of`.
    pub fn generate_colored<R, C>(
        &self,
        count: usize,
        rng: &mut R,
        seed_color: Color,
        mut color_of: C,
    ) -> GeometryResult<GeometryBuffer<P>>
    where
        R: Rng + ?Sized,
        C: FnMut(P) -> Color,
    {
        let total = walk_len(count)?;
        let seed = self.seed_point()?;

        let mut buffer = GeometryBuffer::with_colored_capacity(total);
        buffer.push_colored(seed, seed_color);

        let mut previous = seed;
        for _ in 0..count {
            previous = self.step(previous, rng);
            buffer.push_colored(previous, color_of(previous));
        }

        debug!("colored random walk: {} points", buffer.len());
        Ok(buffer)
    }

    #[inline(always)]
    fn step<R: Rng + ?Sized>(&self, previous: P, rng: &mut R) -> P {
        let j = rng.gen_range(0..self.vertices.len());
        midpoint(previous, self.vertices[j])
    }
}

/// Number of points a walk of `count` steps emits, seed included.
fn walk_len(count: usize) -> GeometryResult<usize> {
    check_point_count(count)?;
    count
        .checked_add(1)
        .ok_or_else(|| GeometryError::invalid(format!("walk of {} steps overflows", count)))
}

/// Maps a point of the unit cube `[-1, 1]^3` onto RGB.
pub fn position_color(p: Point3) -> Color {
    [(1.0 + p.x) / 2.0, (1.0 + p.y) / 2.0, (1.0 + p.z) / 2.0, 1.0]
}

/// Mid-grey, used for the seed of a position-colored walk.
pub const SEED_COLOR: Color = GREY;
