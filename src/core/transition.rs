//! Repräsentiert eine Transition (Kante) zwischen genau zwei States.

use super::LineString;

/// Transition zwischen zwei States inklusive Linien-Geometrie.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Eindeutige ID (z.B. "T1")
    pub id: String,
    /// ID des Start-States
    pub state_a: String,
    /// ID des End-States
    pub state_b: String,
    /// Linienzug von State A nach State B (Kopie der Positionen beim Erstellen)
    pub geometry: LineString,
}

impl Transition {
    /// Prüft ob die Transition den angegebenen State berührt.
    pub fn touches(&self, state_id: &str) -> bool {
        self.state_a == state_id || self.state_b == state_id
    }
}
