//! Optionen-Dialog für Farben, Größen und Kamera.

use crate::app::{AppIntent, AppState};
use crate::samples::SampleScene;
use crate::shared::ViewerOptions;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    changed |= cell_space_section(ui, &mut opts);
                    changed |= state_section(ui, &mut opts);
                    changed |= transition_section(ui, &mut opts);
                    changed |= camera_section(ui, &mut opts);
                    changed |= scene_section(ui, &mut opts);
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        // Min/Max konsistent halten
        if opts.camera_max_distance < opts.camera_min_distance {
            opts.camera_max_distance = opts.camera_min_distance;
        }
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

fn cell_space_section(ui: &mut egui::Ui, opts: &mut ViewerOptions) -> bool {
    let mut changed = false;
    ui.collapsing("CellSpaces", |ui| {
        changed |= drag_value(ui, "Deckkraft:", &mut opts.cell_alpha, 0.05..=1.0, 0.01);
        for (index, color) in opts.cell_palette.iter_mut().enumerate() {
            changed |= color_edit_rgb(ui, &format!("Farbe {}:", index + 1), color);
        }
        changed |= color_edit_rgb(ui, "Hervorhebung:", &mut opts.highlight_color);
    });
    changed
}

fn state_section(ui: &mut egui::Ui, opts: &mut ViewerOptions) -> bool {
    let mut changed = false;
    ui.collapsing("States", |ui| {
        changed |= drag_value(ui, "Radius:", &mut opts.state_radius, 0.01..=2.0, 0.01);
        ui.horizontal(|ui| {
            ui.label("Kugel-Segmente:");
            let segments = egui::DragValue::new(&mut opts.state_sphere_segments)
                .range(3..=64)
                .speed(0.2);
            changed |= ui.add(segments).changed();
        });
        changed |= color_edit(ui, "Farbe:", &mut opts.state_color);
    });
    changed
}

fn transition_section(ui: &mut egui::Ui, opts: &mut ViewerOptions) -> bool {
    let mut changed = false;
    ui.collapsing("Transitions", |ui| {
        changed |= drag_value(
            ui,
            "Pick-Toleranz:",
            &mut opts.transition_pick_tolerance,
            0.01..=1.0,
            0.01,
        );
        changed |= color_edit(ui, "Farbe:", &mut opts.transition_color);
    });
    changed
}

fn camera_section(ui: &mut egui::Ui, opts: &mut ViewerOptions) -> bool {
    let mut changed = false;
    ui.collapsing("Kamera", |ui| {
        changed |= drag_value(
            ui,
            "Standard-Abstand:",
            &mut opts.camera_default_distance,
            0.5..=100.0,
            0.1,
        );
        changed |= drag_value(
            ui,
            "Min. Abstand:",
            &mut opts.camera_min_distance,
            0.1..=50.0,
            0.1,
        );
        changed |= drag_value(
            ui,
            "Max. Abstand:",
            &mut opts.camera_max_distance,
            1.0..=200.0,
            0.5,
        );
        changed |= drag_value(
            ui,
            "Fluggeschwindigkeit:",
            &mut opts.camera_fly_speed,
            0.1..=50.0,
            0.1,
        );
        changed |= drag_value(
            ui,
            "Dreh-Empfindlichkeit:",
            &mut opts.camera_rotate_sensitivity,
            0.001..=0.1,
            0.001,
        );
        changed |= drag_value(
            ui,
            "Zoom-Schritt (Scroll):",
            &mut opts.camera_scroll_zoom_step,
            1.01..=2.0,
            0.01,
        );
    });
    changed
}

fn scene_section(ui: &mut egui::Ui, opts: &mut ViewerOptions) -> bool {
    let mut changed = false;
    ui.collapsing("Szene", |ui| {
        egui::ComboBox::from_label("Startszene")
            .selected_text(opts.default_scene.label())
            .show_ui(ui, |ui| {
                for scene in SampleScene::ALL {
                    let label = scene.label();
                    changed |= ui
                        .selectable_value(&mut opts.default_scene, scene, label)
                        .changed();
                }
            });
        changed |= color_edit(ui, "Hintergrund:", &mut opts.background_color);
    });
    changed
}

/// Hilfsfunktion: beschrifteter DragValue mit Bereich.
fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.color_edit_button_rgba_unmultiplied(color).changed()
    })
    .inner
}

/// Hilfsfunktion: Farb-Editor für [f32; 3] ohne Alpha.
fn color_edit_rgb(ui: &mut egui::Ui, label: &str, color: &mut [f32; 3]) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.color_edit_button_rgb(color).changed()
    })
    .inner
}
