// src/vertex.rs

use bytemuck::{Pod, Zeroable};

use crate::buffer::GeometryBuffer;
use crate::geometry::{Point2, Point3};
use crate::palette::Color;

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(position: [f32; 3], color: Color) -> Self {
        Self { position, color }
    }

    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Anything that can sit in the position slot of a [`Vertex`].
pub trait VertexPosition: Copy {
    fn xyz(self) -> [f32; 3];
}

impl VertexPosition for Point2 {
    fn xyz(self) -> [f32; 3] {
        [self.x, self.y, 0.0]
    }
}

impl VertexPosition for Point3 {
    fn xyz(self) -> [f32; 3] {
        self.to_array()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    Points,
    Triangles,
    TriangleStrip,
}

impl Topology {
    pub const ALL: [Topology; 3] = [Topology::Points, Topology::Triangles, Topology::TriangleStrip];

    pub fn to_wgpu(self) -> wgpu::PrimitiveTopology {
        match self {
            Topology::Points => wgpu::PrimitiveTopology::PointList,
            Topology::Triangles => wgpu::PrimitiveTopology::TriangleList,
            Topology::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
        }
    }
}

/// How often a mesh is expected to change once uploaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferUsage {
    StaticDraw,
    DynamicDraw,
}

/// Vertices ready for upload, optionally indexed. An indexed mesh with an
/// empty index list draws nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Option<Vec<u32>>,
    pub topology: Topology,
}

impl Mesh {
    pub fn new(topology: Topology) -> Self {
        Self {
            vertices: Vec::new(),
            indices: None,
            topology,
        }
    }

    /// Uses the buffer's own colors, or `fallback` for every vertex of an
    /// uncolored buffer.
    pub fn from_buffer<P: VertexPosition>(buffer: &GeometryBuffer<P>, topology: Topology, fallback: Color) -> Self {
        let vertices = buffer
            .iter()
            .map(|(position, color)| Vertex::new(position.xyz(), color.unwrap_or(fallback)))
            .collect();
        Self {
            vertices,
            indices: None,
            topology,
        }
    }

    pub fn with_indices(mut self, indices: Vec<u32>) -> Self {
        self.indices = Some(indices);
        self
    }

    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    /// Number of vertices (or indices) a draw call over the whole mesh uses.
    pub fn draw_count(&self) -> u32 {
        match &self.indices {
            Some(indices) => indices.len() as u32,
            None => self.vertices.len() as u32,
        }
    }
}

/// Receives geometry destined for the GPU.
pub trait MeshSink {
    fn upload(&mut self, mesh: &Mesh, usage: BufferUsage);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLACK, RED};

    #[test]
    fn vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 28);
        assert_eq!(Vertex::desc().array_stride, 28);
    }

    #[test]
    fn uncolored_points_take_the_fallback() {
        let mut buffer = GeometryBuffer::new();
        buffer.push(Point2::new(0.5, -0.5));
        let mesh = Mesh::from_buffer(&buffer, Topology::Points, BLACK);
        assert_eq!(mesh.vertices, vec![Vertex::new([0.5, -0.5, 0.0], BLACK)]);
        assert_eq!(mesh.draw_count(), 1);
    }

    #[test]
    fn colored_points_keep_their_color() {
        let mut buffer = GeometryBuffer::new();
        buffer.push_colored(Point3::new(1.0, 2.0, 3.0), RED);
        let mesh = Mesh::from_buffer(&buffer, Topology::Triangles, BLACK).with_indices(vec![0, 0, 0]);
        assert_eq!(mesh.vertices[0].color, RED);
        assert!(mesh.is_indexed());
        assert_eq!(mesh.draw_count(), 3);
    }

    #[test]
    fn indexed_mesh_without_indices_draws_nothing() {
        let mut buffer = GeometryBuffer::new();
        buffer.push(Point2::ZERO);
        let mesh = Mesh::from_buffer(&buffer, Topology::Triangles, BLACK).with_indices(Vec::new());
        assert_eq!(mesh.draw_count(), 0);
    }
}
