//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::ViewerOptions;
use crate::core::{Camera3D, IndoorGmlModel, PickTarget};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Das aktuelle Modell (CellSpaces, States, Transitions)
    pub model: Option<Arc<IndoorGmlModel>>,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera3D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Aktuell selektiertes Objekt
    pub selected: Option<PickTarget>,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: ViewerOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein Modell für Rendering vorhanden ist.
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Prüft ob der CellSpace selektiert ist (betrifft alle seine Polygone).
    pub fn is_cell_selected(&self, cell_id: &str) -> bool {
        matches!(
            &self.selected,
            Some(PickTarget::CellSpace { cell_id: id, .. }) if id == cell_id
        )
    }

    pub fn is_state_selected(&self, state_id: &str) -> bool {
        matches!(
            &self.selected,
            Some(PickTarget::State { state_id: id }) if id == state_id
        )
    }

    pub fn is_transition_selected(&self, transition_id: &str) -> bool {
        matches!(
            &self.selected,
            Some(PickTarget::Transition { transition_id: id }) if id == transition_id
        )
    }
}
