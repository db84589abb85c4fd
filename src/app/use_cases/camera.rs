//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;

/// Setzt die Kamera auf die Ausgangsansicht zurück (Modus bleibt erhalten).
pub fn reset_camera(state: &mut AppState) {
    state.view.camera.reset();
}

/// Dreht die Kamera um Yaw/Pitch (Radiant).
pub fn rotate(state: &mut AppState, delta_yaw: f32, delta_pitch: f32) {
    state.view.camera.rotate(delta_yaw, delta_pitch);
}

/// Zoomt die Kamera (Chase: Abstand, Fly: entlang der Blickrichtung).
pub fn zoom(state: &mut AppState, factor: f32) {
    state.view.camera.zoom_by(factor);
}

/// Bewegt die Fly-Kamera.
pub fn fly(state: &mut AppState, input: glam::Vec3, dt: f32) {
    if !state.view.camera.fly(input, dt) {
        log::debug!("Fly-Bewegung ignoriert: Kamera im Chase-Modus");
    }
}

/// Wechselt zwischen Chase- und Fly-Kamera.
pub fn toggle_mode(state: &mut AppState) {
    state.view.camera.toggle_mode();
    log::info!("Kamera-Modus: {}", state.view.camera.mode.label());
}

/// Überträgt Abstands- und Geschwindigkeitsoptionen auf die Kamera.
pub fn apply_camera_options(state: &mut AppState) {
    let options = &state.options;
    let camera = &mut state.view.camera;
    camera.default_distance = options.camera_default_distance;
    camera.set_distance_limits(options.camera_min_distance, options.camera_max_distance);
    camera.move_speed = options.camera_fly_speed;
}

/// Richtet die Kamera auf die Bounding-Box des aktuellen Modells aus.
pub fn frame_model(state: &mut AppState) {
    let Some(bbox) = state.model.as_ref().and_then(|m| m.bounding_box()) else {
        state.view.camera.reset();
        return;
    };
    state.view.camera.frame(&bbox);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::SampleScene;
    use approx::assert_relative_eq;
    use std::sync::Arc;

    #[test]
    fn apply_camera_options_sets_limits_and_speed() {
        let mut state = AppState::new();
        state.options.camera_min_distance = 3.0;
        state.options.camera_max_distance = 8.0;
        state.options.camera_fly_speed = 2.0;
        state.view.camera.distance = 10.0;

        apply_camera_options(&mut state);

        assert_relative_eq!(state.view.camera.distance, 8.0);
        assert_relative_eq!(state.view.camera.move_speed, 2.0);
        zoom(&mut state, 0.01);
        assert_relative_eq!(state.view.camera.distance, 3.0);
    }

    #[test]
    fn frame_model_targets_model_center() {
        let mut state = AppState::new();
        let model = SampleScene::ElevatedCellSpaces
            .build(10.0)
            .expect("Szene erwartet");
        state.model = Some(Arc::new(model));

        frame_model(&mut state);

        // Quadrate decken x 0..5, y 0..5, z 0..2 ab
        let target = state.view.camera.target;
        assert_relative_eq!(target.x, 2.5);
        assert_relative_eq!(target.y, 2.5);
        assert_relative_eq!(target.z, 1.0);
        assert_relative_eq!(state.view.camera.distance, 6.0);
    }
}
