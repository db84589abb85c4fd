//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, CameraMode};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    has_selection: bool,
    camera_mode: CameraMode,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Buchstaben-Shortcuts nur ohne Cmd/Ctrl
    if modifiers.command {
        return events;
    }

    let (key_del_pressed, key_escape_pressed, key_c_pressed, key_r_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::C),
            i.key_pressed(egui::Key::R),
        )
    });

    if key_del_pressed && has_selection {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    if key_escape_pressed && has_selection {
        events.push(AppIntent::ClearSelectionRequested);
    }

    if key_c_pressed {
        events.push(AppIntent::ToggleCameraModeRequested);
    }

    if key_r_pressed {
        events.push(AppIntent::ResetCameraRequested);
    }

    if camera_mode == CameraMode::Fly {
        let (input, dt) = ui.input(|i| (fly_input(i), i.stable_dt));
        if input != glam::Vec3::ZERO {
            events.push(AppIntent::CameraFly { input, dt });
        }
    }

    events
}

/// WASD bewegt horizontal, E/Q hoch/runter: (vorwärts, rechts, hoch).
fn fly_input(input: &egui::InputState) -> glam::Vec3 {
    let axis = |positive: egui::Key, negative: egui::Key| {
        let mut value = 0.0;
        if input.key_down(positive) {
            value += 1.0;
        }
        if input.key_down(negative) {
            value -= 1.0;
        }
        value
    };

    glam::Vec3::new(
        axis(egui::Key::W, egui::Key::S),
        axis(egui::Key::D, egui::Key::A),
        axis(egui::Key::E, egui::Key::Q),
    )
}
