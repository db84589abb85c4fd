use crate::core::PickTarget;

/// Auswahlbezogener Anwendungszustand (höchstens ein Objekt).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    selected: Option<PickTarget>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn selected(&self) -> Option<&PickTarget> {
        self.selected.as_ref()
    }

    /// Ersetzt die Selektion.
    pub fn select(&mut self, target: PickTarget) {
        self.selected = Some(target);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}
