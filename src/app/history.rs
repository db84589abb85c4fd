//! Snapshot-basierte Undo/Redo-History für Modell und Selektion.

use super::SelectionState;
use crate::core::IndoorGmlModel;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der eigentliche Modell-Klon passiert erst beim nächsten `Arc::make_mut()`.
#[derive(Clone)]
pub struct Snapshot {
    /// Optionales Modell (Arc-Klon für O(1)-Snapshot)
    pub model: Option<Arc<IndoorGmlModel>>,
    /// Selektionszustand zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            model: state.model.clone(),
            selection: state.selection.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.model = self.model;
        state.selection = self.selection;
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen fertigen Snapshot auf und verwirft den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Verwirft alle Einträge (z.B. nach dem Laden einer neuen Szene).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Holt den letzten Undo-Eintrag und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Holt den letzten Redo-Eintrag und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::core::{PickTarget, Polygon};
    use glam::DVec3;

    fn make_snapshot_with_cell_count(count: usize) -> Snapshot {
        let mut model = IndoorGmlModel::new();
        for i in 0..count {
            let x = i as f64 * 3.0;
            model
                .add_cell_space(vec![Polygon::quad(
                    DVec3::new(x, 0.0, 0.0),
                    DVec3::new(x + 2.0, 0.0, 0.0),
                    DVec3::new(x + 2.0, 2.0, 0.0),
                    DVec3::new(x, 2.0, 0.0),
                )])
                .expect("CellSpace erwartet");
        }
        let mut state = AppState::new();
        state.model = Some(Arc::new(model));
        Snapshot::from_state(&state)
    }

    fn cell_count(snap: &Snapshot) -> usize {
        snap.model.as_deref().map_or(0, |m| m.cell_space_count())
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_cell_count(2));

        let restored = history
            .pop_undo_with_current(make_snapshot_with_cell_count(1))
            .expect("undo vorhanden");

        assert_eq!(cell_count(&restored), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_cell_count(2));
        let _restored = history.pop_undo_with_current(make_snapshot_with_cell_count(1));

        let redone = history
            .pop_redo_with_current(make_snapshot_with_cell_count(2))
            .expect("redo vorhanden");

        assert_eq!(cell_count(&redone), 1);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_cell_count(1));
        let _restored = history.pop_undo_with_current(make_snapshot_with_cell_count(0));
        assert!(history.can_redo());

        history.record_snapshot(make_snapshot_with_cell_count(3));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(make_snapshot_with_cell_count(i));
        }

        let mut undo_count = 0;
        while history.can_undo() {
            history.pop_undo_with_current(make_snapshot_with_cell_count(0));
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut history = EditHistory::new_with_capacity(10);
        assert!(history
            .pop_undo_with_current(make_snapshot_with_cell_count(1))
            .is_none());
        assert!(history
            .pop_redo_with_current(make_snapshot_with_cell_count(1))
            .is_none());
    }

    #[test]
    fn snapshot_apply_to_restores_model_and_selection() {
        let mut original = AppState::new();
        original.model = make_snapshot_with_cell_count(1).model;
        original.selection.select(PickTarget::State {
            state_id: "S1".to_string(),
        });

        let snap = Snapshot::from_state(&original);
        let mut target = AppState::new();
        snap.apply_to(&mut target);

        assert_eq!(target.cell_space_count(), 1);
        assert_eq!(target.selection.selected(), original.selection.selected());
    }
}
