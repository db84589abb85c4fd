use super::support::state_with_single_floor;
use approx::assert_relative_eq;
use indoorgml_viewer::{AppController, AppIntent, CameraMode};

#[test]
fn test_toggle_mode_keeps_eye_position() {
    let mut controller = AppController::new();
    let mut state = state_with_single_floor(&mut controller);
    let eye_before = state.view.camera.eye();

    controller
        .handle_intent(&mut state, AppIntent::ToggleCameraModeRequested)
        .expect("Toggle sollte funktionieren");

    assert_eq!(state.view.camera.mode, CameraMode::Fly);
    let eye_after = state.view.camera.eye();
    assert_relative_eq!(eye_before.x, eye_after.x, epsilon = 1e-4);
    assert_relative_eq!(eye_before.y, eye_after.y, epsilon = 1e-4);
    assert_relative_eq!(eye_before.z, eye_after.z, epsilon = 1e-4);
}

#[test]
fn test_fly_only_moves_in_fly_mode() {
    let mut controller = AppController::new();
    let mut state = state_with_single_floor(&mut controller);
    let fly = AppIntent::CameraFly {
        input: glam::Vec3::X,
        dt: 0.5,
    };

    let eye = state.view.camera.eye();
    controller
        .handle_intent(&mut state, fly.clone())
        .expect("Fly im Chase-Modus sollte ignoriert werden");
    assert_eq!(state.view.camera.eye(), eye);

    controller
        .handle_intent(&mut state, AppIntent::ToggleCameraModeRequested)
        .expect("Toggle sollte funktionieren");
    let start = state.view.camera.position;
    controller
        .handle_intent(&mut state, fly)
        .expect("Fly sollte funktionieren");

    // 5 Einheiten/s × 0.5 s entlang der Blickrichtung
    let moved = state.view.camera.position.distance(start);
    assert_relative_eq!(moved, 2.5, epsilon = 1e-4);
}

#[test]
fn test_zoom_is_clamped_to_distance_limits() {
    let mut controller = AppController::new();
    let mut state = state_with_single_floor(&mut controller);

    for _ in 0..100 {
        controller
            .handle_intent(&mut state, AppIntent::CameraZoom { steps: 1.0 })
            .expect("Zoom sollte funktionieren");
    }
    assert_relative_eq!(state.view.camera.distance, 2.0);

    for _ in 0..100 {
        controller
            .handle_intent(&mut state, AppIntent::CameraZoom { steps: -1.0 })
            .expect("Zoom sollte funktionieren");
    }
    assert_relative_eq!(state.view.camera.distance, 20.0);
}

#[test]
fn test_orbit_and_reset_restore_home_view() {
    let mut controller = AppController::new();
    let mut state = state_with_single_floor(&mut controller);
    let home = state.view.camera.eye();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraOrbit {
                delta: glam::Vec2::new(120.0, -40.0),
            },
        )
        .expect("Orbit sollte funktionieren");
    assert!(state.view.camera.eye().distance(home) > 0.1);

    controller
        .handle_intent(&mut state, AppIntent::ResetCameraRequested)
        .expect("Reset sollte funktionieren");
    assert!(state.view.camera.eye().distance(home) < 1e-4);
}
