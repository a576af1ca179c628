// src/rendering_lib/shader.rs

pub const WGSL_SHADER_SOURCE: &str = r#"
struct Transform {
    model: mat4x4<f32>,
}

@group(0) @binding(0)
var<uniform> transform: Transform;

struct VertexInput {
    @location(0) position: vec3<f32>, // Normalized device coordinates, GL convention
    @location(1) color: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
}

@vertex
fn vs_main(model: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.color = model.color;

    let p = transform.model * vec4<f32>(model.position, 1.0);

    // Geometry is authored with depth in [-1, 1], nearer is smaller.
    // The depth buffer wants [0, 1] with the same ordering.
    out.clip_position = vec4<f32>(p.x, p.y, 0.5 * (p.z + p.w), p.w);

    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;
