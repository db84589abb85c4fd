//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if state.model.is_some() {
                ui.label(format!(
                    "CellSpaces: {} | States: {} | Transitions: {}",
                    state.cell_space_count(),
                    state.state_count(),
                    state.transition_count()
                ));

                if let Some(scene) = state.current_scene {
                    ui.separator();
                    ui.label(format!("Szene: {}", scene.label()));
                }
            } else {
                ui.label("Keine Szene geladen");
            }

            ui.separator();

            match state.selected() {
                Some(target) => ui.label(format!("Selektiert: {}", target)),
                None => ui.label("Selektiert: -"),
            };

            ui.separator();

            ui.label(format!("Kamera: {}", state.view.camera.mode.label()));

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
