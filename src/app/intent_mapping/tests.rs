use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{CameraMode, PickTarget};
use crate::samples::SampleScene;
use approx::assert_relative_eq;

use super::map_intent_to_commands;

#[test]
fn delete_selected_requested_maps_to_delete_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::DeleteSelectedRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::DeleteSelected));
}

#[test]
fn load_sample_requested_keeps_scene() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::LoadSampleRequested {
            scene: SampleScene::ElevatedCellSpaces,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::LoadSample {
            scene: SampleScene::ElevatedCellSpaces
        }
    ));
}

#[test]
fn select_at_screen_without_model_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SelectAtScreenRequested {
            screen_pos: glam::Vec2::new(10.0, 10.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn select_at_screen_builds_ray_from_camera() {
    let mut state = AppState::new();
    state.model = Some(std::sync::Arc::new(crate::core::IndoorGmlModel::new()));
    state.view.viewport_size = [800.0, 600.0];

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SelectAtScreenRequested {
            screen_pos: glam::Vec2::new(400.0, 300.0),
        },
    );

    assert_eq!(commands.len(), 1);
    let AppCommand::SelectByRay { ray } = &commands[0] else {
        panic!("SelectByRay erwartet");
    };
    let forward = state.view.camera.forward().as_dvec3();
    assert_relative_eq!(ray.direction.dot(forward), 1.0, epsilon = 1e-4);
}

#[test]
fn select_target_requested_maps_to_select_target() {
    let state = AppState::new();
    let target = PickTarget::State {
        state_id: "S1".to_string(),
    };

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SelectTargetRequested {
            target: target.clone(),
        },
    );

    assert_eq!(commands.len(), 1);
    let AppCommand::SelectTarget { target: selected } = &commands[0] else {
        panic!("SelectTarget erwartet");
    };
    assert_eq!(*selected, target);
}

#[test]
fn camera_orbit_only_in_chase_mode() {
    let mut state = AppState::new();
    let delta = glam::Vec2::new(10.0, -5.0);

    let commands = map_intent_to_commands(&state, AppIntent::CameraOrbit { delta });
    assert_eq!(commands.len(), 1);
    let AppCommand::RotateCamera {
        delta_yaw,
        delta_pitch,
    } = commands[0]
    else {
        panic!("RotateCamera erwartet");
    };
    assert_relative_eq!(delta_yaw, 10.0 * state.options.camera_rotate_sensitivity);
    assert_relative_eq!(delta_pitch, -5.0 * state.options.camera_rotate_sensitivity);

    let look = map_intent_to_commands(&state, AppIntent::CameraLook { delta });
    assert!(look.is_empty());

    state.view.camera.mode = CameraMode::Fly;
    let orbit = map_intent_to_commands(&state, AppIntent::CameraOrbit { delta });
    assert!(orbit.is_empty());
    let look = map_intent_to_commands(&state, AppIntent::CameraLook { delta });
    assert_eq!(look.len(), 1);
}

#[test]
fn camera_zoom_steps_map_to_inverse_factor() {
    let state = AppState::new();
    let step = state.options.camera_scroll_zoom_step;

    let commands = map_intent_to_commands(&state, AppIntent::CameraZoom { steps: 1.0 });

    let AppCommand::ZoomCamera { factor } = commands[0] else {
        panic!("ZoomCamera erwartet");
    };
    assert_relative_eq!(factor, 1.0 / step);
}

#[test]
fn camera_fly_ignored_in_chase_mode_or_without_input() {
    let mut state = AppState::new();
    let intent = AppIntent::CameraFly {
        input: glam::Vec3::X,
        dt: 0.016,
    };
    assert!(map_intent_to_commands(&state, intent.clone()).is_empty());

    state.view.camera.mode = CameraMode::Fly;
    assert_eq!(map_intent_to_commands(&state, intent).len(), 1);
    let idle = AppIntent::CameraFly {
        input: glam::Vec3::ZERO,
        dt: 0.016,
    };
    assert!(map_intent_to_commands(&state, idle).is_empty());
}

#[test]
fn options_dialog_intents_map_to_dialog_commands() {
    let state = AppState::new();

    let open = map_intent_to_commands(&state, AppIntent::OpenOptionsDialogRequested);
    assert!(matches!(open.as_slice(), [AppCommand::OpenOptionsDialog]));

    let close = map_intent_to_commands(&state, AppIntent::CloseOptionsDialogRequested);
    assert!(matches!(close.as_slice(), [AppCommand::CloseOptionsDialog]));

    let reset = map_intent_to_commands(&state, AppIntent::ResetOptionsRequested);
    assert!(matches!(reset.as_slice(), [AppCommand::ResetOptions]));
}
