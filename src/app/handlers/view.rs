//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Kamera auf die Ausgangsansicht zurück.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Dreht die Kamera.
pub fn rotate_camera(state: &mut AppState, delta_yaw: f32, delta_pitch: f32) {
    use_cases::camera::rotate(state, delta_yaw, delta_pitch);
}

/// Zoomt die Kamera um einen Faktor.
pub fn zoom_camera(state: &mut AppState, factor: f32) {
    use_cases::camera::zoom(state, factor);
}

/// Bewegt die Fly-Kamera.
pub fn fly_camera(state: &mut AppState, input: glam::Vec3, dt: f32) {
    use_cases::camera::fly(state, input, dt);
}

/// Wechselt zwischen Chase- und Fly-Modus.
pub fn toggle_camera_mode(state: &mut AppState) {
    use_cases::camera::toggle_mode(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}
