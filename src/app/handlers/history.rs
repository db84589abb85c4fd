//! Handler für Undo/Redo von Löschungen.

use crate::app::history::Snapshot;
use crate::app::AppState;

/// Stellt den Zustand vor der letzten Löschung wieder her.
pub fn undo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    match state.history.pop_undo_with_current(current) {
        Some(prev) => {
            prev.apply_to(state);
            log_restored("Undo", state);
        }
        None => log::debug!("Undo: nichts zu tun"),
    }
}

/// Wiederholt eine rückgängig gemachte Löschung.
pub fn redo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    match state.history.pop_redo_with_current(current) {
        Some(next) => {
            next.apply_to(state);
            log_restored("Redo", state);
        }
        None => log::debug!("Redo: nichts zu tun"),
    }
}

fn log_restored(action: &str, state: &AppState) {
    log::info!(
        "{} ausgeführt: {} CellSpaces, {} States, {} Transitions",
        action,
        state.cell_space_count(),
        state.state_count(),
        state.transition_count()
    );
}
