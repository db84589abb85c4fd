//! Gemeinsame Pipeline für farbige Vertices (Dreiecke oder Linien).

use super::types::{ColorVertex, RenderContext, Uniforms};
use bytemuck::Zeroable;
use wgpu::util::DeviceExt;

/// Pipeline inkl. Uniform-Buffer und wiederverwendetem Vertex-Buffer.
pub(crate) struct ColorPipeline {
    label: &'static str,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: usize,
}

impl ColorPipeline {
    /// Erstellt die Pipeline für die gegebene Topologie.
    pub fn new(
        render_state: &egui_wgpu::RenderState,
        shader: &wgpu::ShaderModule,
        label: &'static str,
        topology: wgpu::PrimitiveTopology,
    ) -> Self {
        let device = &render_state.device;

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&[Uniforms::zeroed()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(label),
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
            label: Some(label),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[ColorVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: render_state.target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            // Kein Depth-Buffer: Reihenfolge der Draw-Calls + Sortierung bestimmen die Sichtbarkeit
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 4,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            label,
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer: None,
            vertex_capacity: 0,
        }
    }

    /// Lädt Uniforms und Vertices hoch und zeichnet sie.
    pub fn draw(
        &mut self,
        ctx: &RenderContext,
        render_pass: &mut wgpu::RenderPass<'static>,
        vertices: &[ColorVertex],
    ) {
        if vertices.is_empty() {
            return;
        }

        let uniforms = ctx.uniforms();
        ctx.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        // Vertex-Buffer nur bei Bedarf vergrößern
        if self.vertex_buffer.is_none() || vertices.len() > self.vertex_capacity {
            let vertex_size = std::mem::size_of::<ColorVertex>() as u64;
            self.vertex_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size: vertices.len() as u64 * vertex_size,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vertex_capacity = vertices.len();
        }

        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else {
            log::error!("{}: missing vertex buffer before draw call", self.label);
            return;
        };
        ctx.queue
            .write_buffer(vertex_buffer, 0, bytemuck::cast_slice(vertices));

        log::debug!("{}: {} vertices", self.label, vertices.len());

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.draw(0..vertices.len() as u32, 0..1);
    }
}
