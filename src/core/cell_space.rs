//! Repräsentiert einen begehbaren Innenraum (CellSpace) aus mehreren Polygonen.

use super::{BoundingBox, Polygon};

/// Ein CellSpace: Raumbegrenzung aus Polygonen plus zugehöriger State.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSpace {
    /// Eindeutige ID (z.B. "Room1")
    pub id: String,
    /// Begrenzungsflächen des Raums
    pub polygons: Vec<Polygon>,
    /// ID des zugehörigen States (None nachdem der State entfernt wurde)
    pub state_id: Option<String>,
}

impl CellSpace {
    /// Gibt die Anzahl der Begrenzungsflächen zurück.
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Findet ein Polygon anhand seiner ID.
    pub fn polygon(&self, polygon_id: &str) -> Option<&Polygon> {
        self.polygons
            .iter()
            .find(|p| p.id.as_deref() == Some(polygon_id))
    }

    /// Bounding-Box aller Polygone des Raums.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_polygons(&self.polygons)
    }
}
