//! Use-Case: Beispielszene laden.

use crate::app::use_cases::camera;
use crate::app::AppState;
use crate::samples::SampleScene;
use anyhow::Context;
use std::sync::Arc;

/// Baut die Szene, ersetzt das aktuelle Modell und richtet die Kamera aus.
///
/// Selektion und Undo-History werden verworfen. Schlägt der Aufbau fehl,
/// bleibt der bisherige Zustand unverändert.
pub fn load_sample(state: &mut AppState, scene: SampleScene) -> anyhow::Result<()> {
    let model = scene
        .build(state.options.normalize_extent)
        .with_context(|| format!("Szene '{}' konnte nicht gebaut werden", scene.key()))?;

    state.model = Some(Arc::new(model));
    state.current_scene = Some(scene);
    state.selection.clear();
    state.history.clear();

    camera::apply_camera_options(state);
    camera::frame_model(state);
    Ok(())
}
