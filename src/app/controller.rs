//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Szene ===
            AppCommand::LoadSample { scene } => handlers::scene::load_sample(state, scene)?,

            // === Selektion ===
            AppCommand::SelectByRay { ray } => handlers::selection::select_by_ray(state, &ray),
            AppCommand::SelectTarget { target } => {
                handlers::selection::select_target(state, target)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Editing ===
            AppCommand::DeleteSelected => handlers::editing::delete_selected(state),

            // === Kamera & Viewport ===
            AppCommand::RotateCamera {
                delta_yaw,
                delta_pitch,
            } => handlers::view::rotate_camera(state, delta_yaw, delta_pitch),
            AppCommand::ZoomCamera { factor } => handlers::view::zoom_camera(state, factor),
            AppCommand::FlyCamera { input, dt } => handlers::view::fly_camera(state, input, dt),
            AppCommand::ToggleCameraMode => handlers::view::toggle_camera_mode(state),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Optionen & Anwendungssteuerung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
