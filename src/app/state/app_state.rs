use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{IndoorGmlModel, PickTarget};
use crate::samples::SampleScene;
use crate::shared::ViewerOptions;
use std::sync::Arc;

use super::{SelectionState, ViewState};

/// Maximale Anzahl Undo-Schritte.
const HISTORY_DEPTH: usize = 200;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelles Modell (None = keine Szene geladen)
    pub model: Option<Arc<IndoorGmlModel>>,
    /// Zuletzt geladene Beispielszene
    pub current_scene: Option<SampleScene>,
    /// View-State
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Farben, Größen, Kamera)
    pub options: ViewerOptions,
    /// Ob der Optionen-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            model: None,
            current_scene: None,
            view: ViewState::new(),
            selection: SelectionState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(HISTORY_DEPTH),
            options: ViewerOptions::default(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der CellSpaces zurück (für UI-Anzeige)
    pub fn cell_space_count(&self) -> usize {
        self.model.as_ref().map_or(0, |m| m.cell_space_count())
    }

    /// Gibt die Anzahl der States zurück (für UI-Anzeige)
    pub fn state_count(&self) -> usize {
        self.model.as_ref().map_or(0, |m| m.state_count())
    }

    /// Gibt die Anzahl der Transitions zurück (für UI-Anzeige)
    pub fn transition_count(&self) -> usize {
        self.model.as_ref().map_or(0, |m| m.transition_count())
    }

    /// Aktuell selektiertes Objekt.
    pub fn selected(&self) -> Option<&PickTarget> {
        self.selection.selected()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
