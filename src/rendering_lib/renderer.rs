// src/rendering_lib/renderer.rs

use glam::Mat4;
use log::debug;
use wgpu::util::DeviceExt;

use fractal_demos::vertex::{BufferUsage, Mesh, MeshSink, Topology, Vertex};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
const INITIAL_VERTEX_CAPACITY: usize = 1024;
const INITIAL_INDEX_CAPACITY: usize = 1024;

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Mesh Vertex Buffer"),
        size: (capacity * std::mem::size_of::<Vertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_index_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Mesh Index Buffer"),
        size: (capacity * std::mem::size_of::<u32>()) as u64,
        usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Draws a single uploaded mesh with a model transform. One pipeline per
/// primitive topology; the mesh picks which one is used.
pub struct Renderer {
    pipelines: Vec<(Topology, wgpu::RenderPipeline)>,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    index_buffer: wgpu::Buffer,
    index_capacity: usize,

    topology: Topology,
    vertex_count: u32,
    index_count: Option<u32>,

    transform_buffer: wgpu::Buffer,
    transform_bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,
}

impl Renderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        shader_source: &str,
        width: u32,
        height: u32,
    ) -> Self {
        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Renderer Shader Module"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let transform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Model Transform Uniform Buffer"),
            contents: bytemuck::cast_slice(&Mat4::IDENTITY.to_cols_array()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let transform_bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("transform_bind_group_layout"),
        });

        let transform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &transform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform_buffer.as_entire_binding(),
            }],
            label: Some("transform_bind_group"),
        });

        let render_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Renderer Pipeline Layout"),
            bind_group_layouts: &[&transform_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipelines = Topology::ALL
            .iter()
            .map(|&topology| {
                let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                    label: Some("Renderer Pipeline"),
                    layout: Some(&render_pipeline_layout),
                    vertex: wgpu::VertexState {
                        module: &shader_module,
                        entry_point: "vs_main",
                        buffers: &[Vertex::desc()],
                    },
                    fragment: Some(wgpu::FragmentState {
                        module: &shader_module,
                        entry_point: "fs_main",
                        targets: &[Some(wgpu::ColorTargetState {
                            format: surface_format,
                            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                            write_mask: wgpu::ColorWrites::ALL,
                        })],
                    }),
                    primitive: wgpu::PrimitiveState {
                        topology: topology.to_wgpu(),
                        strip_index_format: None,
                        front_face: wgpu::FrontFace::Ccw,
                        cull_mode: None,
                        polygon_mode: wgpu::PolygonMode::Fill,
                        unclipped_depth: false,
                        conservative: false,
                    },
                    // Later draws win ties so flat 2D scenes keep painter's order.
                    depth_stencil: Some(wgpu::DepthStencilState {
                        format: DEPTH_FORMAT,
                        depth_write_enabled: true,
                        depth_compare: wgpu::CompareFunction::LessEqual,
                        stencil: wgpu::StencilState::default(),
                        bias: wgpu::DepthBiasState::default(),
                    }),
                    multisample: wgpu::MultisampleState {
                        count: 1,
                        mask: !0,
                        alpha_to_coverage_enabled: false,
                    },
                    multiview: None,
                });
                (topology, pipeline)
            })
            .collect();

        Self {
            pipelines,
            vertex_buffer: create_vertex_buffer(device, INITIAL_VERTEX_CAPACITY),
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            index_buffer: create_index_buffer(device, INITIAL_INDEX_CAPACITY),
            index_capacity: INITIAL_INDEX_CAPACITY,
            topology: Topology::Points,
            vertex_count: 0,
            index_count: None,
            transform_buffer,
            transform_bind_group,
            depth_view: create_depth_view(device, width, height),
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_view = create_depth_view(device, width, height);
    }

    /// Replaces the current mesh, growing the GPU buffers when needed.
    pub fn upload_mesh(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, mesh: &Mesh) {
        let vertex_count = mesh.vertices.len();
        if vertex_count > self.vertex_capacity {
            self.vertex_capacity = vertex_count.next_power_of_two();
            self.vertex_buffer = create_vertex_buffer(device, self.vertex_capacity);
            debug!("vertex buffer grown to {} vertices", self.vertex_capacity);
        }
        if vertex_count > 0 {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&mesh.vertices));
        }

        if let Some(indices) = &mesh.indices {
            if indices.len() > self.index_capacity {
                self.index_capacity = indices.len().next_power_of_two();
                self.index_buffer = create_index_buffer(device, self.index_capacity);
                debug!("index buffer grown to {} indices", self.index_capacity);
            }
            if !indices.is_empty() {
                queue.write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(indices));
            }
        }

        self.topology = mesh.topology;
        self.vertex_count = vertex_count as u32;
        self.index_count = mesh.indices.as_ref().map(|indices| indices.len() as u32);
    }

    fn pipeline(&self, topology: Topology) -> Option<&wgpu::RenderPipeline> {
        self.pipelines
            .iter()
            .find(|(t, _)| *t == topology)
            .map(|(_, pipeline)| pipeline)
    }

    pub fn render(
        &self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
        transform: Mat4,
        clear_color: wgpu::Color,
    ) {
        queue.write_buffer(&self.transform_buffer, 0, bytemuck::cast_slice(&transform.to_cols_array()));

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Render Pass (Renderer)"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output_view,
                resolve_target: None,
                ops: wgpu::Operations { load: wgpu::LoadOp::Clear(clear_color), store: wgpu::StoreOp::Store },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations { load: wgpu::LoadOp::Clear(1.0), store: wgpu::StoreOp::Store }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        if self.vertex_count == 0 {
            return;
        }
        let Some(pipeline) = self.pipeline(self.topology) else {
            return;
        };

        render_pass.set_pipeline(pipeline);
        render_pass.set_bind_group(0, &self.transform_bind_group, &[]);

        let vertex_slice_size = (self.vertex_count as usize * std::mem::size_of::<Vertex>()) as u64;
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..vertex_slice_size));

        match self.index_count {
            Some(0) => {}
            Some(index_count) => {
                let index_slice_size = (index_count as usize * std::mem::size_of::<u32>()) as u64;
                render_pass.set_index_buffer(self.index_buffer.slice(..index_slice_size), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..index_count, 0, 0..1);
            }
            None => render_pass.draw(0..self.vertex_count, 0..1),
        }
    }
}

/// [`MeshSink`] that writes straight into the renderer's GPU buffers.
pub struct GpuUpload<'a> {
    pub renderer: &'a mut Renderer,
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
}

impl MeshSink for GpuUpload<'_> {
    fn upload(&mut self, mesh: &Mesh, usage: BufferUsage) {
        debug!(
            "uploading {} vertices ({:?}, {:?})",
            mesh.vertices.len(),
            mesh.topology,
            usage
        );
        self.renderer.upload_mesh(self.device, self.queue, mesh);
    }
}
