//! Handler für das Laden von Beispielszenen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::samples::SampleScene;

/// Lädt eine Beispielszene und propagiert Fehler an den Aufrufer.
pub fn load_sample(state: &mut AppState, scene: SampleScene) -> anyhow::Result<()> {
    use_cases::scene::load_sample(state, scene)
}
