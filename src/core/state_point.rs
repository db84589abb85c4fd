//! Repräsentiert einen navigierbaren Zustand (State) als einzelnen 3D-Punkt.

use glam::DVec3;

/// State eines CellSpace, positioniert im Schwerpunkt seiner Vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct StatePoint {
    /// Eindeutige ID (z.B. "S1")
    pub id: String,
    /// Position in Weltkoordinaten
    pub position: DVec3,
}

impl StatePoint {
    /// Erstellt einen neuen State.
    pub fn new(id: impl Into<String>, position: DVec3) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}
