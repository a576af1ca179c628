// src/lib.rs

pub mod buffer;
pub mod config;
pub mod coords;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod input;
pub mod palette;
pub mod polygon_builder;
pub mod shapes;
pub mod subdivision;
pub mod vertex;

pub use buffer::GeometryBuffer;
pub use error::{GeometryError, GeometryResult};
pub use generator::{RandomWalkSampler, SeedPolicy};
pub use geometry::{Point2, Point3, Tetrahedron, Triangle};
pub use palette::{Color, Palette};
pub use polygon_builder::{PolygonBuilder, PolygonRecord};
pub use subdivision::FractalSubdivider;
pub use vertex::{Mesh, MeshSink, Vertex};
