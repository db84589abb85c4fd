//! Renderer für halbtransparente CellSpace-Flächen.

use super::mesh::{build_cell_triangles, push_triangles, sort_back_to_front, CellTriangle};
use super::pipeline::ColorPipeline;
use super::types::{ColorVertex, RenderContext};
use crate::core::IndoorGmlModel;

/// Zeichnet alle Polygone aller CellSpaces, pro Frame von hinten nach vorne sortiert.
pub struct CellSpaceRenderer {
    pipeline: ColorPipeline,
    /// Wiederverwendbare Scratch-Buffer (vermeidet per-Frame-Allokation)
    triangle_scratch: Vec<CellTriangle>,
    vertex_scratch: Vec<ColorVertex>,
}

impl CellSpaceRenderer {
    /// Erstellt einen neuen CellSpace-Renderer.
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        Self {
            pipeline: ColorPipeline::new(
                render_state,
                shader,
                "CellSpace Pipeline",
                wgpu::PrimitiveTopology::TriangleList,
            ),
            triangle_scratch: Vec::new(),
            vertex_scratch: Vec::new(),
        }
    }

    pub fn render(
        &mut self,
        ctx: &RenderContext,
        render_pass: &mut wgpu::RenderPass<'static>,
        model: &IndoorGmlModel,
        selected_cell: Option<&str>,
    ) {
        let mut triangles = std::mem::take(&mut self.triangle_scratch);
        build_cell_triangles(model, ctx.options, selected_cell, &mut triangles);
        sort_back_to_front(&mut triangles, ctx.camera.eye());

        let mut vertices = std::mem::take(&mut self.vertex_scratch);
        vertices.clear();
        push_triangles(&mut vertices, &triangles);

        self.pipeline.draw(ctx, render_pass, &vertices);

        self.triangle_scratch = triangles;
        self.vertex_scratch = vertices;
    }
}
