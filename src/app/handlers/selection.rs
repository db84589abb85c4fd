//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{PickTarget, Ray};

/// Selektiert den nächsten Treffer entlang eines Bildschirmstrahls.
pub fn select_by_ray(state: &mut AppState, ray: &Ray) {
    use_cases::selection::select_by_ray(state, ray);
}

/// Selektiert ein Objekt aus der Objektliste.
pub fn select_target(state: &mut AppState, target: PickTarget) {
    use_cases::selection::select_target(state, target);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
