use glam::DVec3;
use indoorgml_viewer::app::use_cases;
use indoorgml_viewer::{AppController, AppIntent, AppState, IndoorGmlModel, Polygon};
use std::sync::Arc;

pub const VIEWPORT: [f32; 2] = [800.0, 600.0];

/// Ein 2×2-Boden um den Ursprung, Kamera darauf ausgerichtet.
pub fn state_with_single_floor(controller: &mut AppController) -> AppState {
    let mut model = IndoorGmlModel::new();
    model
        .add_cell_space(vec![Polygon::quad(
            DVec3::new(-1.0, -1.0, 0.0),
            DVec3::new(1.0, -1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(-1.0, 1.0, 0.0),
        )])
        .expect("Room1");

    let mut state = AppState::new();
    state.model = Some(Arc::new(model));
    use_cases::camera::frame_model(&mut state);
    controller
        .handle_intent(&mut state, AppIntent::ViewportResized { size: VIEWPORT })
        .expect("ViewportResized sollte funktionieren");
    state
}

pub fn viewport_center() -> glam::Vec2 {
    glam::Vec2::new(VIEWPORT[0] * 0.5, VIEWPORT[1] * 0.5)
}
