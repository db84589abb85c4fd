//! Renderer für States als Kugeln.

use super::mesh::{push_sphere, unit_sphere};
use super::pipeline::ColorPipeline;
use super::types::{ColorVertex, RenderContext};
use crate::core::IndoorGmlModel;
use glam::Vec3;

/// Zeichnet jeden State als UV-Kugel.
pub struct StateRenderer {
    pipeline: ColorPipeline,
    /// Einheitskugel, neu erzeugt wenn sich die Auflösung ändert
    unit_sphere: Vec<Vec3>,
    unit_segments: u32,
    vertex_scratch: Vec<ColorVertex>,
}

impl StateRenderer {
    /// Erstellt einen neuen State-Renderer.
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        Self {
            pipeline: ColorPipeline::new(
                render_state,
                shader,
                "State Pipeline",
                wgpu::PrimitiveTopology::TriangleList,
            ),
            unit_sphere: Vec::new(),
            unit_segments: 0,
            vertex_scratch: Vec::new(),
        }
    }

    pub fn render(
        &mut self,
        ctx: &RenderContext,
        render_pass: &mut wgpu::RenderPass<'static>,
        model: &IndoorGmlModel,
        selected_state: Option<&str>,
    ) {
        if model.state_count() == 0 {
            return;
        }

        let segments = ctx.options.state_sphere_segments;
        if self.unit_segments != segments || self.unit_sphere.is_empty() {
            self.unit_sphere = unit_sphere(segments);
            self.unit_segments = segments;
        }

        let mut vertices = std::mem::take(&mut self.vertex_scratch);
        vertices.clear();
        for state in model.states() {
            let color = if selected_state == Some(state.id.as_str()) {
                ctx.options.highlighted(ctx.options.state_color)
            } else {
                ctx.options.state_color
            };
            push_sphere(
                &mut vertices,
                &self.unit_sphere,
                state.position,
                ctx.options.state_radius,
                color,
            );
        }

        self.pipeline.draw(ctx, render_pass, &vertices);
        self.vertex_scratch = vertices;
    }
}
