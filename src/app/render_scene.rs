//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Das Modell wird per Arc geteilt, nicht kopiert.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        model: state.model.clone(),
        camera: state.view.camera.clone(),
        viewport_size,
        selected: state.selection.selected().cloned(),
        options: state.options.clone(),
    }
}
