use sokol::gfx as sg;
use glam::{Vec2, Vec4};
use std::mem;

use crate::debug_print;
use crate::engine::Camera2D;

const MAX_VERTICES: usize = 16384;
const MAX_INDICES: usize = MAX_VERTICES * 3;

#[repr(C)]
struct Vertex {
    pos: [f32; 2],
    color: [f32; 4],
}

#[repr(C)]
struct Uniforms {
    mvp: [[f32; 4]; 4],
}

#[derive(Copy, Clone, Debug)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Vec4,
    pub segments: u32, // Number of triangles to approximate the circle
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32, color: Vec4) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius,
            color,
            segments: 32,
        }
    }

    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments.max(3); // Minimum 3 segments for a triangle
        self
    }
}

/// Batches alpha-blended triangle fans and submits them in one draw call per frame.
pub struct Renderer {
    pipeline: sg::Pipeline,
    bind: sg::Bindings,
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
    dropped: usize,
}

/// Implementation for new, init, flush.
/// Handles the pipeline, shaders and buffers
impl Renderer {
    pub fn new() -> Self {
        Self {
            pipeline: sg::Pipeline::default(),
            bind: sg::Bindings::default(),
            vertices: Vec::with_capacity(MAX_VERTICES),
            indices: Vec::with_capacity(MAX_INDICES),
            dropped: 0,
        }
    }

    pub fn init(&mut self) {
        let vs_source = "
cbuffer uniforms : register(b0) {
    float4x4 mvp;
};

struct vs_in {
    float2 position : POSITION;
    float4 color    : COLOR;
};

struct vs_out {
    float4 position : SV_Position;
    float4 color    : COLOR;
};
vs_out main(vs_in inp) {
    vs_out outp;
    outp.position = mul(mvp, float4(inp.position, 0.0, 1.0));
    outp.color = inp.color;
    return outp;
}
\0";

        let fs_source = "
struct ps_in {
    float4 position : SV_Position;
    float4 color : COLOR;
};

float4 main(ps_in inp) : SV_Target0 {
    return inp.color;
}
\0";

        let mut shader_desc = sg::ShaderDesc {
            vertex_func: sg::ShaderFunction {
                source: vs_source.as_ptr() as *const i8,
                ..Default::default()
            },
            fragment_func: sg::ShaderFunction {
                source: fs_source.as_ptr() as *const i8,
                ..Default::default()
            },
            ..Default::default()
        };
        shader_desc.attrs[0] = sg::ShaderVertexAttr {
            hlsl_sem_name: "POSITION\0".as_ptr() as *const i8,
            hlsl_sem_index: 0,
            ..Default::default()
        };
        shader_desc.attrs[1] = sg::ShaderVertexAttr {
            hlsl_sem_name: "COLOR\0".as_ptr() as *const i8,
            hlsl_sem_index: 0,
            ..Default::default()
        };
        shader_desc.uniform_blocks[0] = sg::ShaderUniformBlock {
            stage: sg::ShaderStage::Vertex,
            size: mem::size_of::<Uniforms>() as u32,
            hlsl_register_b_n: 0, // matches "register(b0)" in shader
            ..Default::default()
        };
        let shader = sg::make_shader(&shader_desc);

        let mut pipeline_desc = sg::PipelineDesc {
            shader,
            index_type: sg::IndexType::Uint16,
            ..Default::default()
        };
        pipeline_desc.layout.attrs[0] = sg::VertexAttrState {
            buffer_index: 0,
            offset: 0,
            format: sg::VertexFormat::Float2,
        }; // position
        pipeline_desc.layout.attrs[1] = sg::VertexAttrState {
            buffer_index: 0,
            offset: 8, // 2 floats * 4 bytes = 8 bytes offset
            format: sg::VertexFormat::Float4,
        }; // color
        pipeline_desc.layout.buffers[0] = sg::VertexBufferLayoutState {
            stride: mem::size_of::<Vertex>() as i32,
            step_func: sg::VertexStep::PerVertex,
            step_rate: 1,
        };
        // fading particles and the glow disks need straight alpha blending
        pipeline_desc.colors[0].blend = sg::BlendState {
            enabled: true,
            src_factor_rgb: sg::BlendFactor::SrcAlpha,
            dst_factor_rgb: sg::BlendFactor::OneMinusSrcAlpha,
            src_factor_alpha: sg::BlendFactor::One,
            dst_factor_alpha: sg::BlendFactor::OneMinusSrcAlpha,
            ..Default::default()
        };
        self.pipeline = sg::make_pipeline(&pipeline_desc);

        let vbuf = sg::make_buffer(&sg::BufferDesc {
            size: MAX_VERTICES * mem::size_of::<Vertex>(),
            usage: sg::BufferUsage {
                vertex_buffer: true,
                stream_update: true,
                ..Default::default()
            },
            ..Default::default()
        });

        let ibuf = sg::make_buffer(&sg::BufferDesc {
            size: MAX_INDICES * mem::size_of::<u16>(),
            usage: sg::BufferUsage {
                index_buffer: true,
                stream_update: true,
                ..Default::default()
            },
            ..Default::default()
        });

        self.bind.vertex_buffers[0] = vbuf;
        self.bind.index_buffer = ibuf;

        tracing::info!(
            "Renderer initialized ({} vertices, {} indices per frame)",
            MAX_VERTICES,
            MAX_INDICES
        );
    }

    pub fn flush(&mut self, camera: &mut Camera2D) {
        if self.dropped > 0 {
            debug_print!("renderer dropped {} shapes over capacity", self.dropped);
            self.dropped = 0;
        }
        if self.vertices.is_empty() {
            return;
        }

        sg::update_buffer(
            self.bind.vertex_buffers[0],
            &sg::Range {
                ptr: self.vertices.as_ptr() as *const _,
                size: self.vertices.len() * mem::size_of::<Vertex>(),
            },
        );

        sg::update_buffer(
            self.bind.index_buffer,
            &sg::Range {
                ptr: self.indices.as_ptr() as *const _,
                size: self.indices.len() * mem::size_of::<u16>(),
            },
        );

        let uniforms = Uniforms {
            mvp: camera.get_view_projection_matrix().to_cols_array_2d(),
        };

        sg::apply_pipeline(self.pipeline);
        sg::apply_bindings(&self.bind);
        sg::apply_uniforms(0, &sg::Range {
            ptr: &uniforms as *const _ as *const _,
            size: mem::size_of::<Uniforms>(),
        });

        sg::draw(0, self.indices.len(), 1);

        // Clear for next frame
        self.vertices.clear();
        self.indices.clear();
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Implementation for drawing to the screen used by the game
impl Renderer {
    pub fn draw_circle(&mut self, circle: &Circle) {
        let segments = circle.segments.max(3) as usize;
        if self.vertices.len() + segments + 1 > MAX_VERTICES
            || self.indices.len() + segments * 3 > MAX_INDICES
        {
            self.dropped += 1;
            return;
        }

        let center_vertex = self.vertices.len() as u16;
        let color = circle.color.to_array();

        self.vertices.push(Vertex {
            pos: circle.center.to_array(),
            color,
        });

        // Add vertices around the circumference
        for i in 0..segments {
            let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
            let pos = circle.center + Vec2::new(angle.cos(), angle.sin()) * circle.radius;
            self.vertices.push(Vertex { pos: pos.to_array(), color });
        }

        // Add triangles from center to each edge
        for i in 0..segments {
            let next = (i + 1) % segments;
            self.indices.extend_from_slice(&[
                center_vertex,
                center_vertex + 1 + i as u16,
                center_vertex + 1 + next as u16,
            ]);
        }
    }

    pub fn queued_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn queued_indices(&self) -> usize {
        self.indices.len()
    }
}
