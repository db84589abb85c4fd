//! Das zentrale IndoorGML-Modell: CellSpaces, States und Transitions mit eindeutigen IDs.

use super::geometry_utils::compute_centroid;
use super::{BoundingBox, CellSpace, LineString, Polygon, StatePoint, Transition};
use indexmap::IndexMap;

/// Fehler bei Mutationen des IndoorGML-Modells.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Der CellSpace enthält keinen einzigen Vertex (kein Schwerpunkt berechenbar)
    #[error("CellSpace ohne Vertices: State-Position nicht berechenbar")]
    EmptyGeometry,
    /// Ein Polygon hat eine ungültige Index-Liste
    #[error("Polygon {index} ist ungültig: {reason}")]
    InvalidPolygon { index: usize, reason: String },
    /// Der referenzierte State existiert nicht
    #[error("State '{0}' existiert nicht")]
    UnknownState(String),
    /// Start- und End-State einer Transition sind identisch
    #[error("Transition von State '{0}' auf sich selbst ist nicht erlaubt")]
    SelfTransition(String),
}

/// Verwaltet CellSpaces, States und Transitions mit eindeutigen IDs.
///
/// Alle drei Sammlungen behalten die Einfügereihenfolge. IDs werden über
/// monoton steigende Zähler vergeben und nach dem Löschen nie wiederverwendet.
#[derive(Debug, Clone)]
pub struct IndoorGmlModel {
    cell_spaces: IndexMap<String, CellSpace>,
    states: IndexMap<String, StatePoint>,
    transitions: IndexMap<String, Transition>,
    cell_counter: u64,
    state_counter: u64,
    transition_counter: u64,
    polygon_counter: u64,
}

impl Default for IndoorGmlModel {
    fn default() -> Self {
        Self::new()
    }
}

impl IndoorGmlModel {
    /// Erstellt ein leeres Modell.
    pub fn new() -> Self {
        Self {
            cell_spaces: IndexMap::new(),
            states: IndexMap::new(),
            transitions: IndexMap::new(),
            cell_counter: 1,
            state_counter: 1,
            transition_counter: 1,
            polygon_counter: 1,
        }
    }

    /// Fügt einen neuen CellSpace hinzu und erzeugt automatisch seinen State.
    ///
    /// Vergibt `RoomN` an den Raum, `PN` an jedes Polygon und `SN` an den State,
    /// der im Schwerpunkt aller Vertices liegt. Bei Fehlern bleibt das Modell
    /// unverändert (auch die Zähler).
    pub fn add_cell_space(&mut self, mut polygons: Vec<Polygon>) -> Result<&CellSpace, ModelError> {
        for (index, polygon) in polygons.iter().enumerate() {
            polygon
                .validate()
                .map_err(|reason| ModelError::InvalidPolygon { index, reason })?;
        }
        let position = compute_centroid(&polygons).ok_or(ModelError::EmptyGeometry)?;

        let cell_id = format!("Room{}", self.cell_counter);
        self.cell_counter += 1;

        for polygon in &mut polygons {
            polygon.id = Some(format!("P{}", self.polygon_counter));
            self.polygon_counter += 1;
        }

        let state_id = format!("S{}", self.state_counter);
        self.state_counter += 1;
        let state = StatePoint::new(state_id.clone(), position);
        self.states.insert(state_id.clone(), state);

        log::debug!(
            "CellSpace {} mit {} Polygon(en) angelegt, State {}",
            cell_id,
            polygons.len(),
            state_id
        );

        let cell = CellSpace {
            id: cell_id.clone(),
            polygons,
            state_id: Some(state_id),
        };
        let (index, _) = self.cell_spaces.insert_full(cell_id, cell);
        Ok(&self.cell_spaces[index])
    }

    /// Entfernt einen CellSpace inklusive State und aller berührenden Transitions.
    ///
    /// Gibt `false` zurück wenn die ID unbekannt ist.
    pub fn remove_cell_space(&mut self, cell_space_id: &str) -> bool {
        let Some(cell) = self.cell_spaces.shift_remove(cell_space_id) else {
            return false;
        };

        if let Some(state_id) = cell.state_id {
            self.states.shift_remove(&state_id);
            self.remove_transitions_touching(&state_id);
        }
        true
    }

    /// Erstellt eine Transition zwischen zwei existierenden States.
    ///
    /// Die Linien-Geometrie wird aus den aktuellen State-Positionen kopiert.
    pub fn add_transition(
        &mut self,
        state_a: &str,
        state_b: &str,
    ) -> Result<&Transition, ModelError> {
        if state_a == state_b {
            return Err(ModelError::SelfTransition(state_a.to_string()));
        }
        let a = self
            .states
            .get(state_a)
            .ok_or_else(|| ModelError::UnknownState(state_a.to_string()))?;
        let b = self
            .states
            .get(state_b)
            .ok_or_else(|| ModelError::UnknownState(state_b.to_string()))?;

        let id = format!("T{}", self.transition_counter);
        self.transition_counter += 1;

        let transition = Transition {
            id: id.clone(),
            state_a: a.id.clone(),
            state_b: b.id.clone(),
            geometry: LineString::new(vec![a.position, b.position]),
        };
        let (index, _) = self.transitions.insert_full(id, transition);
        Ok(&self.transitions[index])
    }

    /// Entfernt einen State, löst ihn vom CellSpace und entfernt berührende Transitions.
    ///
    /// Der CellSpace selbst bleibt erhalten.
    pub fn remove_state(&mut self, state_id: &str) -> bool {
        if self.states.shift_remove(state_id).is_none() {
            return false;
        }

        for cell in self.cell_spaces.values_mut() {
            if cell.state_id.as_deref() == Some(state_id) {
                cell.state_id = None;
            }
        }
        self.remove_transitions_touching(state_id);
        true
    }

    /// Entfernt eine einzelne Transition.
    pub fn remove_transition(&mut self, transition_id: &str) -> bool {
        self.transitions.shift_remove(transition_id).is_some()
    }

    /// Verbindet alle States in Einfügereihenfolge zu einem Ring (`s[i] → s[i+1 mod n]`).
    ///
    /// Gibt die Anzahl erzeugter Transitions zurück.
    pub fn connect_states_in_ring(&mut self) -> usize {
        let ids: Vec<String> = self.states.keys().cloned().collect();
        if ids.len() < 2 {
            return 0;
        }

        let mut created = 0;
        for (i, a) in ids.iter().enumerate() {
            let b = &ids[(i + 1) % ids.len()];
            if self.add_transition(a, b).is_ok() {
                created += 1;
            }
        }
        created
    }

    fn remove_transitions_touching(&mut self, state_id: &str) {
        let before = self.transitions.len();
        self.transitions.retain(|_, t| !t.touches(state_id));
        let removed = before - self.transitions.len();
        if removed > 0 {
            log::debug!("{} Transition(s) an State {} entfernt", removed, state_id);
        }
    }

    // ── Abfragen ────────────────────────────────────────────────

    /// Alle CellSpaces in Einfügereihenfolge.
    pub fn cell_spaces(&self) -> impl Iterator<Item = &CellSpace> {
        self.cell_spaces.values()
    }

    /// Alle States in Einfügereihenfolge.
    pub fn states(&self) -> impl Iterator<Item = &StatePoint> {
        self.states.values()
    }

    /// Alle Transitions in Einfügereihenfolge.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.values()
    }

    pub fn cell_space(&self, id: &str) -> Option<&CellSpace> {
        self.cell_spaces.get(id)
    }

    pub fn state(&self, id: &str) -> Option<&StatePoint> {
        self.states.get(id)
    }

    pub fn transition(&self, id: &str) -> Option<&Transition> {
        self.transitions.get(id)
    }

    /// Findet den CellSpace, dem ein State gehört.
    pub fn cell_for_state(&self, state_id: &str) -> Option<&CellSpace> {
        self.cell_spaces
            .values()
            .find(|c| c.state_id.as_deref() == Some(state_id))
    }

    /// Alle Transitions, die einen State berühren.
    pub fn transitions_touching<'a>(
        &'a self,
        state_id: &'a str,
    ) -> impl Iterator<Item = &'a Transition> + 'a {
        self.transitions
            .values()
            .filter(move |t| t.touches(state_id))
    }

    /// Gibt die Anzahl der CellSpaces zurück.
    pub fn cell_space_count(&self) -> usize {
        self.cell_spaces.len()
    }

    /// Gibt die Anzahl der States zurück.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Gibt die Anzahl der Transitions zurück.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Prüft ob das Modell leer ist.
    pub fn is_empty(&self) -> bool {
        self.cell_spaces.is_empty() && self.states.is_empty() && self.transitions.is_empty()
    }

    /// Bounding-Box über alle Polygone und State-Positionen.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let polygon_points = self
            .cell_spaces
            .values()
            .flat_map(|c| c.polygons.iter())
            .flat_map(|p| p.vertices.iter().copied());
        let state_points = self.states.values().map(|s| s.position);
        BoundingBox::from_points(polygon_points.chain(state_points))
    }
}
