//! Eingebaute Beispielszenen.
//!
//! Die Szenen ersetzen einen Datei-Import: sie erzeugen fertige
//! [`IndoorGmlModel`]-Instanzen inklusive States und Transitions.

mod elevated;
mod rooms;

use crate::core::{geometry_utils, IndoorGmlModel, ModelError, Polygon};
use std::fmt;
use std::str::FromStr;

/// Auswahl der eingebauten Beispielszenen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum SampleScene {
    /// Drei Räume aus Vermessungskoordinaten, als Ring verbunden
    #[default]
    #[serde(rename = "rooms")]
    Rooms,
    /// Die ersten beiden Räume mit einer Transition
    #[serde(rename = "two-cells")]
    TwoCellSpaces,
    /// Drei Quadrate auf unterschiedlichen Höhen
    #[serde(rename = "elevated")]
    ElevatedCellSpaces,
}

/// Unbekannter Szenenname (CLI oder Config).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unbekannte Szene '{0}' (erlaubt: rooms, two-cells, elevated)")]
pub struct UnknownSceneError(pub String);

impl SampleScene {
    /// Alle Szenen in Menü-Reihenfolge.
    pub const ALL: [SampleScene; 3] = [
        SampleScene::Rooms,
        SampleScene::TwoCellSpaces,
        SampleScene::ElevatedCellSpaces,
    ];

    /// Kurzname für CLI und Config.
    pub fn key(self) -> &'static str {
        match self {
            Self::Rooms => "rooms",
            Self::TwoCellSpaces => "two-cells",
            Self::ElevatedCellSpaces => "elevated",
        }
    }

    /// Anzeigename im Menü.
    pub fn label(self) -> &'static str {
        match self {
            Self::Rooms => "Drei Räume",
            Self::TwoCellSpaces => "Zwei Räume",
            Self::ElevatedCellSpaces => "Höhenversetzte Räume",
        }
    }

    /// Baut das Modell der Szene.
    ///
    /// `extent` ist die Zielausdehnung für Szenen mit Vermessungskoordinaten;
    /// die höhenversetzte Szene liegt bereits im Ursprung und wird nicht normalisiert.
    pub fn build(self, extent: f64) -> Result<IndoorGmlModel, ModelError> {
        let mut model = IndoorGmlModel::new();

        match self {
            Self::Rooms => {
                let cells = vec![rooms::room_1(), rooms::room_2(), rooms::wall_strip()];
                add_normalized(&mut model, cells, extent)?;
                model.connect_states_in_ring();
            }
            Self::TwoCellSpaces => {
                let cells = vec![rooms::room_1(), rooms::room_2()];
                add_normalized(&mut model, cells, extent)?;
                model.add_transition("S1", "S2")?;
            }
            Self::ElevatedCellSpaces => {
                for polygon in elevated::squares() {
                    model.add_cell_space(vec![polygon])?;
                }
                model.connect_states_in_ring();
            }
        }

        log::info!(
            "Szene '{}' geladen: {} CellSpaces, {} States, {} Transitions",
            self.key(),
            model.cell_space_count(),
            model.state_count(),
            model.transition_count()
        );
        Ok(model)
    }
}

impl fmt::Display for SampleScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SampleScene {
    type Err = UnknownSceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|scene| scene.key() == key)
            .ok_or_else(|| UnknownSceneError(s.to_string()))
    }
}

/// Normalisiert alle Polygone gemeinsam und fügt sie raumweise ins Modell ein.
fn add_normalized(
    model: &mut IndoorGmlModel,
    cells: Vec<Vec<Polygon>>,
    extent: f64,
) -> Result<(), ModelError> {
    let sizes: Vec<usize> = cells.iter().map(Vec::len).collect();
    let mut all: Vec<Polygon> = cells.into_iter().flatten().collect();
    if geometry_utils::normalize_to_extent(&mut all, extent).is_none() {
        log::warn!("Szene ohne Vertices, Normalisierung übersprungen");
    }

    let mut rest = all.into_iter();
    for size in sizes {
        let polygons: Vec<Polygon> = rest.by_ref().take(size).collect();
        model.add_cell_space(polygons)?;
    }
    Ok(())
}
