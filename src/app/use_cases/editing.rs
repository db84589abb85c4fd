//! Use-Case: Selektiertes Objekt löschen (inkl. Kaskade im Modell).

use crate::app::AppState;
use crate::core::PickTarget;
use std::sync::Arc;

/// Löscht das selektierte Objekt und hebt die Selektion auf.
///
/// - CellSpace: Raum, State und alle berührenden Transitions
/// - State: State und berührende Transitions, der Raum bleibt
/// - Transition: nur die Transition
///
/// Vor der Mutation wird ein Undo-Snapshot aufgenommen. Ohne Selektion
/// oder Modell passiert nichts. Gibt `true` zurück wenn gelöscht wurde.
pub fn delete_selected(state: &mut AppState) -> bool {
    let Some(target) = state.selection.selected().cloned() else {
        log::debug!("Nichts zum Löschen selektiert");
        return false;
    };

    let exists = state
        .model
        .as_deref()
        .is_some_and(|model| target.exists_in(model));
    if !exists {
        log::warn!("Löschen abgebrochen: {} existiert nicht mehr", target);
        state.selection.clear();
        return false;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let Some(model_arc) = state.model.as_mut() else {
        return false;
    };
    let model = Arc::make_mut(model_arc);

    let removed = match &target {
        PickTarget::CellSpace { cell_id, .. } => model.remove_cell_space(cell_id),
        PickTarget::State { state_id } => model.remove_state(state_id),
        PickTarget::Transition { transition_id } => model.remove_transition(transition_id),
    };

    state.selection.clear();
    if removed {
        log::info!(
            "{} {} gelöscht ({} CellSpaces, {} States, {} Transitions verbleiben)",
            target.kind(),
            target.id(),
            model.cell_space_count(),
            model.state_count(),
            model.transition_count()
        );
    }
    removed
}
