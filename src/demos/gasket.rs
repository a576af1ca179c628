// src/demos/gasket.rs
//
// The fractal programs: geometry is generated once and never changes.

use log::info;
use rand::Rng;

use fractal_demos::generator::{position_color, SEED_COLOR};
use fractal_demos::palette::{Color, BLACK};
use fractal_demos::vertex::{BufferUsage, Mesh, MeshSink, Topology};
use fractal_demos::{
    FractalSubdivider, GeometryResult, Palette, Point2, Point3, RandomWalkSampler, SeedPolicy, Tetrahedron,
    Triangle,
};

use super::Demo;

pub const TRIANGLE_CORNERS: [Point2; 3] = [
    Point2::new(-1.0, -1.0),
    Point2::new(0.0, 1.0),
    Point2::new(1.0, -1.0),
];

pub const CHAOS_TETRAHEDRON_CORNERS: [Point3; 4] = [
    Point3::new(-0.5, -0.5, -0.5),
    Point3::new(0.5, -0.5, -0.5),
    Point3::new(0.0, 0.5, 0.0),
    Point3::new(0.0, -0.5, 0.5),
];

/// A regular tetrahedron inscribed in the unit sphere.
pub const GASKET_TETRAHEDRON_CORNERS: [Point3; 4] = [
    Point3::new(0.0, 0.0, -1.0),
    Point3::new(0.0, 0.9428, 0.3333),
    Point3::new(-0.8165, -0.4714, 0.3333),
    Point3::new(0.8165, -0.4714, 0.3333),
];

const INK: Color = BLACK;

/// A mesh built at startup and uploaded exactly once.
pub struct StaticDemo {
    mesh: Mesh,
    uploaded: bool,
}

impl StaticDemo {
    pub fn new(mesh: Mesh) -> Self {
        Self { mesh, uploaded: false }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}

impl Demo for StaticDemo {
    fn upload(&mut self, sink: &mut dyn MeshSink) {
        if !self.uploaded {
            sink.upload(&self.mesh, BufferUsage::StaticDraw);
            self.uploaded = true;
        }
    }
}

pub fn chaos_triangle<R: Rng + ?Sized>(count: usize, rng: &mut R) -> GeometryResult<StaticDemo> {
    let sampler = RandomWalkSampler::new(&TRIANGLE_CORNERS, SeedPolicy::TriangleInterior);
    let points = sampler.generate(count, rng)?;
    info!("chaos game: {} points", points.len());
    Ok(StaticDemo::new(Mesh::from_buffer(&points, Topology::Points, INK)))
}

pub fn triangle_gasket(depth: u32) -> GeometryResult<StaticDemo> {
    let [a, b, c] = TRIANGLE_CORNERS;
    let points = FractalSubdivider::subdivide_triangle(Triangle::new(a, b, c), depth)?;
    info!("triangle gasket: depth {}, {} triangles", depth, points.len() / 3);
    Ok(StaticDemo::new(Mesh::from_buffer(&points, Topology::Triangles, INK)))
}

pub fn chaos_tetrahedron<R: Rng + ?Sized>(count: usize, rng: &mut R) -> GeometryResult<StaticDemo> {
    let sampler = RandomWalkSampler::new(&CHAOS_TETRAHEDRON_CORNERS, SeedPolicy::Origin);
    let points = sampler.generate(count, rng)?;
    info!("3D chaos game: {} points", points.len());
    Ok(StaticDemo::new(Mesh::from_buffer(&points, Topology::Points, INK)))
}

pub fn chaos_tetrahedron_colored<R: Rng + ?Sized>(count: usize, rng: &mut R) -> GeometryResult<StaticDemo> {
    let sampler = RandomWalkSampler::new(&CHAOS_TETRAHEDRON_CORNERS, SeedPolicy::Origin);
    let points = sampler.generate_colored(count, rng, SEED_COLOR, position_color)?;
    info!("colored 3D chaos game: {} points", points.len());
    Ok(StaticDemo::new(Mesh::from_buffer(&points, Topology::Points, INK)))
}

pub fn tetrahedron_gasket(depth: u32) -> GeometryResult<StaticDemo> {
    let [a, b, c, d] = GASKET_TETRAHEDRON_CORNERS;
    let tetra = Tetrahedron::new(a, b, c, d);
    let faces = FractalSubdivider::subdivide_tetrahedron_with_palette(tetra, depth, &Palette::TETRA_FACES)?;
    info!("tetrahedron gasket: depth {}, {} triangles", depth, faces.len() / 3);
    Ok(StaticDemo::new(Mesh::from_buffer(&faces, Topology::Triangles, INK)))
}
