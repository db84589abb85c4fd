//! egui-Paint-Callback, der eine `RenderScene` in den egui-Renderpass zeichnet.

use super::Renderer;
use crate::shared::RenderScene;
use std::sync::{Arc, Mutex};

/// Zeichnet eine Szene innerhalb eines egui-Rechtecks.
///
/// Alle Daten werden pro Frame eingesammelt. GPU-Ressourcen lädt der
/// Renderer erst in `paint` hoch, `prepare` bleibt leer.
pub struct ScenePaintCallback {
    pub renderer: Arc<Mutex<Renderer>>,
    pub scene: RenderScene,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl ScenePaintCallback {
    fn log_frame(&self) {
        match self.scene.model.as_deref() {
            Some(model) => log::debug!(
                "Frame: {} CellSpaces, {} States, {} Transitions, Auswahl {:?}",
                model.cell_space_count(),
                model.state_count(),
                model.transition_count(),
                self.scene.selected.as_ref().map(|t| t.id())
            ),
            None => log::debug!("Frame ohne Modell"),
        }
    }
}

impl egui_wgpu::CallbackTrait for ScenePaintCallback {
    fn prepare(
        &self,
        _device: &wgpu::Device,
        _queue: &wgpu::Queue,
        _screen_descriptor: &egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut wgpu::CommandEncoder,
        _callback_resources: &mut egui_wgpu::CallbackResources,
    ) -> Vec<wgpu::CommandBuffer> {
        Vec::new()
    }

    fn paint(
        &self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'static>,
        _callback_resources: &egui_wgpu::CallbackResources,
    ) {
        self.log_frame();

        let Ok(mut renderer) = self.renderer.lock() else {
            log::error!("Renderer gesperrt (poisoned), Frame übersprungen");
            return;
        };
        renderer.render_scene(&self.device, &self.queue, render_pass, &self.scene);
    }
}
