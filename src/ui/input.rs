//! Viewport-Input-Handling: Klick, Drag, Scroll und Tastatur → AppIntent.

use super::keyboard;
use crate::app::{AppIntent, CameraMode};

/// Scroll-Distanz (Punkte), die einem Zoom-Schritt entspricht.
const SCROLL_POINTS_PER_STEP: f32 = 50.0;

/// Verwaltet den Input-Zustand für das Viewport
#[derive(Default)]
pub struct InputState {
    /// Letzte gemeldete Viewport-Größe (Resize nur bei Änderung melden)
    last_viewport_size: Option<[f32; 2]>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Maus-, Scroll- und Tastatur-Interaktionen.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera_mode: CameraMode,
        has_selection: bool,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if self.last_viewport_size != Some(viewport_size) {
            self.last_viewport_size = Some(viewport_size);
            events.push(AppIntent::ViewportResized {
                size: viewport_size,
            });
        }

        // Keine Shortcuts während Texteingabe (z.B. im Optionen-Dialog)
        if !ui.ctx().wants_keyboard_input() {
            events.extend(keyboard::collect_keyboard_intents(
                ui,
                has_selection,
                camera_mode,
            ));
        }

        handle_click(response, &mut events);
        handle_drag(response, camera_mode, &mut events);
        handle_scroll(ui, response, &mut events);

        events
    }
}

/// Linksklick ohne Drag → Picking an der Klickposition.
fn handle_click(response: &egui::Response, events: &mut Vec<AppIntent>) {
    if !response.clicked_by(egui::PointerButton::Primary) {
        return;
    }
    if let Some(pos) = response.interact_pointer_pos() {
        let local = pos - response.rect.min;
        events.push(AppIntent::SelectAtScreenRequested {
            screen_pos: glam::Vec2::new(local.x, local.y),
        });
    }
}

/// Primär-Drag dreht die Kamera (Chase: Orbit, Fly: Umsehen).
fn handle_drag(response: &egui::Response, camera_mode: CameraMode, events: &mut Vec<AppIntent>) {
    if !response.dragged_by(egui::PointerButton::Primary) {
        return;
    }
    let delta = response.drag_delta();
    if delta == egui::Vec2::ZERO {
        return;
    }
    let delta = glam::Vec2::new(delta.x, delta.y);
    events.push(match camera_mode {
        CameraMode::Chase => AppIntent::CameraOrbit { delta },
        CameraMode::Fly => AppIntent::CameraLook { delta },
    });
}

/// Mausrad über dem Viewport zoomt.
fn handle_scroll(ui: &egui::Ui, response: &egui::Response, events: &mut Vec<AppIntent>) {
    if !response.hovered() {
        return;
    }
    let scroll = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll == 0.0 {
        return;
    }
    events.push(AppIntent::CameraZoom {
        steps: scroll / SCROLL_POINTS_PER_STEP,
    });
}
