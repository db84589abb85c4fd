//! Top-Menü (Szene, Bearbeiten, Ansicht, Hilfe).

use crate::app::{AppIntent, AppState, CameraMode};
use crate::samples::SampleScene;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Szene", |ui| {
                for scene in SampleScene::ALL {
                    let is_current = state.current_scene == Some(scene);
                    if ui.selectable_label(is_current, scene.label()).clicked() {
                        events.push(AppIntent::LoadSampleRequested { scene });
                        ui.close();
                    }
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Bearbeiten", |ui| {
                if ui
                    .add_enabled(state.can_undo(), egui::Button::new("Undo (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(state.can_redo(), egui::Button::new("Redo (Ctrl+Y)"))
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }

                ui.separator();

                let has_selection = state.selected().is_some();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Löschen (Entf)"))
                    .clicked()
                {
                    events.push(AppIntent::DeleteSelectedRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(has_selection, egui::Button::new("Selektion aufheben (Esc)"))
                    .clicked()
                {
                    events.push(AppIntent::ClearSelectionRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                let mode = state.view.camera.mode;
                let modes = [
                    ("Chase-Kamera (C)", CameraMode::Chase),
                    ("Fly-Kamera (C)", CameraMode::Fly),
                ];
                for (label, target_mode) in modes {
                    if ui.selectable_label(mode == target_mode, label).clicked() {
                        if mode != target_mode {
                            events.push(AppIntent::ToggleCameraModeRequested);
                        }
                        ui.close();
                    }
                }

                ui.separator();

                if ui.button("Kamera zurücksetzen (R)").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("Hilfe", |ui| {
                if ui.button("Über").clicked() {
                    log::info!("IndoorGML Viewer v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
