//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::CameraMode;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::LoadSampleRequested { scene } => vec![AppCommand::LoadSample { scene }],

        AppIntent::SelectAtScreenRequested { screen_pos } => {
            if state.model.is_none() {
                return Vec::new();
            }
            let viewport = glam::Vec2::from(state.view.viewport_size);
            let ray = state.view.camera.screen_ray(screen_pos, viewport);
            vec![AppCommand::SelectByRay { ray }]
        }
        AppIntent::SelectTargetRequested { target } => vec![AppCommand::SelectTarget { target }],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],

        AppIntent::CameraOrbit { delta } => rotate_in_mode(state, CameraMode::Chase, delta),
        AppIntent::CameraLook { delta } => rotate_in_mode(state, CameraMode::Fly, delta),
        AppIntent::CameraZoom { steps } => {
            let factor = state.options.camera_scroll_zoom_step.powf(-steps);
            vec![AppCommand::ZoomCamera { factor }]
        }
        AppIntent::CameraFly { input, dt } => {
            if state.view.camera.mode != CameraMode::Fly || input == glam::Vec3::ZERO {
                return Vec::new();
            }
            vec![AppCommand::FlyCamera { input, dt }]
        }
        AppIntent::ToggleCameraModeRequested => vec![AppCommand::ToggleCameraMode],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

/// Drag-Drehung nur im passenden Kamera-Modus, Pixel → Radiant.
fn rotate_in_mode(state: &AppState, mode: CameraMode, delta: glam::Vec2) -> Vec<AppCommand> {
    if state.view.camera.mode != mode {
        return Vec::new();
    }
    let sensitivity = state.options.camera_rotate_sensitivity;
    vec![AppCommand::RotateCamera {
        delta_yaw: delta.x * sensitivity,
        delta_pitch: delta.y * sensitivity,
    }]
}

#[cfg(test)]
mod tests;
