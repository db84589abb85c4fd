//! IndoorGML Viewer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod samples;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, SelectionState, ViewState};
pub use core::{
    BoundingBox, Camera3D, CameraMode, CellSpace, IndoorGmlModel, LineString, ModelError,
    PickTarget, Polygon, Ray, StatePoint, Transition,
};
pub use samples::SampleScene;
pub use shared::{RenderScene, ViewerOptions};
