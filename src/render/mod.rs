//! GPU-Rendering mit wgpu.

mod callback;
mod cell_space_renderer;
mod mesh;
mod pipeline;
mod state_renderer;
mod transition_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use callback::ScenePaintCallback;
pub(crate) use cell_space_renderer::CellSpaceRenderer;
pub(crate) use state_renderer::StateRenderer;
pub(crate) use transition_renderer::TransitionRenderer;
use types::RenderContext;

use crate::core::PickTarget;

/// Haupt-Renderer für IndoorGML-Modelle.
///
/// Verwaltet die GPU-Ressourcen der drei Sub-Renderer.
/// Zeichenreihenfolge ohne Depth-Buffer: Flächen, Transitions, States.
pub struct Renderer {
    cell_space_renderer: CellSpaceRenderer,
    transition_renderer: TransitionRenderer,
    state_renderer: StateRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        // Shader einmalig laden, alle Sub-Renderer teilen dasselbe ShaderModule
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("IndoorGML Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });

        Self {
            cell_space_renderer: CellSpaceRenderer::new(render_state, &shader),
            transition_renderer: TransitionRenderer::new(render_state, &shader),
            state_renderer: StateRenderer::new(render_state, &shader),
        }
    }

    /// Rendert die komplette Szene
    pub fn render_scene(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        render_pass: &mut wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        let Some(model) = scene.model.as_deref() else {
            log::debug!("Kein Modell zu rendern");
            return;
        };

        let ctx = RenderContext {
            device,
            queue,
            camera: &scene.camera,
            viewport_size: scene.viewport_size,
            options: &scene.options,
        };
        if !ctx.has_valid_viewport() {
            return;
        }

        let (selected_cell, selected_state, selected_transition) = match &scene.selected {
            Some(PickTarget::CellSpace { cell_id, .. }) => (Some(cell_id.as_str()), None, None),
            Some(PickTarget::State { state_id }) => (None, Some(state_id.as_str()), None),
            Some(PickTarget::Transition { transition_id }) => {
                (None, None, Some(transition_id.as_str()))
            }
            None => (None, None, None),
        };

        self.cell_space_renderer
            .render(&ctx, render_pass, model, selected_cell);
        self.transition_renderer
            .render(&ctx, render_pass, model, selected_transition);
        self.state_renderer
            .render(&ctx, render_pass, model, selected_state);
    }
}
