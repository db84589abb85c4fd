//! Core-Domänentypen: Geometrie, IndoorGML-Modell, Kamera, Picking.

pub mod camera;
pub mod cell_space;
pub mod geometry;
pub mod geometry_utils;
/// Core-Datenmodell für IndoorGML-Szenen
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - IndoorGmlModel: Container für CellSpaces, States und Transitions
/// - CellSpace: Raum aus begrenzenden Polygonen
/// - StatePoint: Navigationsknoten im Schwerpunkt eines Raums
/// - Transition: Verbindung zwischen zwei States
pub mod indoor_model;
pub mod picking;
pub mod state_point;
pub mod transition;

pub use camera::{Camera3D, CameraMode};
pub use cell_space::CellSpace;
pub use geometry::{BoundingBox, LineString, Polygon};
pub use indoor_model::{IndoorGmlModel, ModelError};
pub use picking::{pick, PickHit, PickOptions, PickTarget, Ray};
pub use state_point::StatePoint;
pub use transition::Transition;
