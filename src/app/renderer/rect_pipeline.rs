//! Pipeline for solid-colour rectangles
//!
//! Each rectangle becomes a quad (two triangles) in arena pixel coordinates;
//! the vertex shader maps arena pixels to clip space.

use wgpu::{BindGroup, Buffer, Device, Queue, RenderPass, RenderPipeline, util::DeviceExt};

use crate::app::scene::FilledRect;

/// WGSL shader code for rectangle rendering
const RECT_SHADER: &str = r#"
struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) color: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
}

struct Uniforms {
    arena_size: vec2<f32>,
}

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;

    // (0, 0) is the arena's top-left corner
    let clip_x = (in.position.x / uniforms.arena_size.x) * 2.0 - 1.0;
    let clip_y = 1.0 - (in.position.y / uniforms.arena_size.y) * 2.0;

    out.clip_position = vec4<f32>(clip_x, clip_y, 0.0, 1.0);
    out.color = in.color;

    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    arena_size: [f32; 2],
}

/// Six vertices per rectangle: (tl, tr, br) and (tl, br, bl)
pub fn rect_vertices(rects: &[FilledRect]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(rects.len() * 6);
    for rect in rects {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            continue;
        }
        let color = rect.color_f32();
        let [tl, tr, br, bl] = rect.corners();
        for position in [tl, tr, br, tl, br, bl] {
            vertices.push(Vertex { position, color });
        }
    }
    vertices
}

/// GPU state for drawing rectangles
pub struct RectPipeline {
    pipeline: RenderPipeline,
    bind_group: BindGroup,
    uniform_buffer: Buffer,
    vertex_buffer: Option<Buffer>,
    vertex_count: u32,
}

impl RectPipeline {
    /// Builds the pipeline for a surface of the given format
    pub fn new(device: &Device, format: wgpu::TextureFormat, arena_size: [f32; 2]) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Rect Uniform Buffer"),
            contents: bytemuck::cast_slice(&[Uniforms { arena_size }]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Rect Bind Group Layout"),
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
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Rect Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Rect Shader"),
            source: wgpu::ShaderSource::Wgsl(RECT_SHADER.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Rect Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Rect Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            bind_group,
            uniform_buffer,
            vertex_buffer: None,
            vertex_count: 0,
        }
    }

    /// Uploads this frame's rectangles
    pub fn prepare(
        &mut self,
        device: &Device,
        queue: &Queue,
        arena_size: [f32; 2],
        rects: &[FilledRect],
    ) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[Uniforms { arena_size }]),
        );

        let vertices = rect_vertices(rects);
        self.vertex_count = vertices.len() as u32;
        if vertices.is_empty() {
            self.vertex_buffer = None;
            return;
        }

        self.vertex_buffer = Some(
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Rect Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            }),
        );
    }

    /// Records the draw into `rpass`
    pub fn render(&self, rpass: &mut RenderPass<'_>) {
        if let Some(vertex_buffer) = &self.vertex_buffer {
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
            rpass.draw(0..self.vertex_count, 0..1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::scene::ENTITY_COLOR;

    #[test]
    fn test_quad_per_rect() {
        let rects = [
            FilledRect::pixel_aligned(0.0, 0.0, 10.0, 5.0, ENTITY_COLOR),
            FilledRect::pixel_aligned(20.0, 20.0, 1.0, 1.0, ENTITY_COLOR),
        ];
        let vertices = rect_vertices(&rects);
        assert_eq!(vertices.len(), 12);
        assert_eq!(vertices[0].position, [0.0, 0.0]);
        assert_eq!(vertices[2].position, [10.0, 5.0]);
        assert_eq!(vertices[5].position, [0.0, 5.0]);
        assert!(vertices.iter().all(|v| v.color == [1.0; 4]));
    }

    #[test]
    fn test_empty_rect_is_skipped() {
        let rects = [FilledRect::pixel_aligned(0.0, 0.0, 0.0, 5.0, ENTITY_COLOR)];
        assert!(rect_vertices(&rects).is_empty());
    }
}
