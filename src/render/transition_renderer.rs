//! Renderer für Transitions als Linien.

use super::mesh::push_line_string;
use super::pipeline::ColorPipeline;
use super::types::{ColorVertex, RenderContext};
use crate::core::IndoorGmlModel;

/// Zeichnet die Geometrie jeder Transition als Line-List.
pub struct TransitionRenderer {
    pipeline: ColorPipeline,
    vertex_scratch: Vec<ColorVertex>,
}

impl TransitionRenderer {
    /// Erstellt einen neuen Transition-Renderer.
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        Self {
            pipeline: ColorPipeline::new(
                render_state,
                shader,
                "Transition Pipeline",
                wgpu::PrimitiveTopology::LineList,
            ),
            vertex_scratch: Vec::new(),
        }
    }

    pub fn render(
        &mut self,
        ctx: &RenderContext,
        render_pass: &mut wgpu::RenderPass<'static>,
        model: &IndoorGmlModel,
        selected_transition: Option<&str>,
    ) {
        if model.transition_count() == 0 {
            return;
        }

        let mut vertices = std::mem::take(&mut self.vertex_scratch);
        vertices.clear();
        for transition in model.transitions() {
            let color = if selected_transition == Some(transition.id.as_str()) {
                ctx.options.highlighted(ctx.options.transition_color)
            } else {
                ctx.options.transition_color
            };
            push_line_string(&mut vertices, &transition.geometry, color);
        }

        self.pipeline.draw(ctx, render_pass, &vertices);
        self.vertex_scratch = vertices;
    }
}
