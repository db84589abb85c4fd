//! Objekt-Panel (linke Seitenleiste): Objektliste und Details der Selektion.

use crate::app::{AppIntent, AppState};
use crate::core::{IndoorGmlModel, PickTarget};

/// Rendert das Objekt-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("properties_panel")
        .default_width(220.0)
        .min_width(160.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Objekte");
            ui.separator();

            let Some(model) = state.model.as_deref() else {
                ui.label("Keine Szene geladen");
                return;
            };

            egui::ScrollArea::vertical()
                .max_height(ui.available_height() * 0.6)
                .show(ui, |ui| {
                    render_object_list(ui, model, state.selected(), &mut events);
                });

            ui.separator();
            ui.heading("Eigenschaften");

            match state.selected() {
                Some(target) => render_details(ui, model, target, &mut events),
                None => {
                    ui.label("Keine Selektion");
                }
            }
        });

    events
}

fn render_object_list(
    ui: &mut egui::Ui,
    model: &IndoorGmlModel,
    selected: Option<&PickTarget>,
    events: &mut Vec<AppIntent>,
) {
    // Polygon-ID spielt für die Listen-Markierung keine Rolle
    let is_selected = |target: &PickTarget| {
        selected.is_some_and(|s| s.kind() == target.kind() && s.id() == target.id())
    };

    egui::CollapsingHeader::new(format!("CellSpaces ({})", model.cell_space_count()))
        .default_open(true)
        .show(ui, |ui| {
            for cell in model.cell_spaces() {
                let target = PickTarget::CellSpace {
                    cell_id: cell.id.clone(),
                    polygon_id: None,
                };
                let label = format!("{} ({} Polygone)", cell.id, cell.polygon_count());
                if ui.selectable_label(is_selected(&target), label).clicked() {
                    events.push(AppIntent::SelectTargetRequested { target });
                }
            }
        });

    egui::CollapsingHeader::new(format!("States ({})", model.state_count()))
        .default_open(true)
        .show(ui, |ui| {
            for state in model.states() {
                let target = PickTarget::State {
                    state_id: state.id.clone(),
                };
                let label = state.id.as_str();
                if ui.selectable_label(is_selected(&target), label).clicked() {
                    events.push(AppIntent::SelectTargetRequested { target });
                }
            }
        });

    egui::CollapsingHeader::new(format!("Transitions ({})", model.transition_count()))
        .default_open(true)
        .show(ui, |ui| {
            for transition in model.transitions() {
                let target = PickTarget::Transition {
                    transition_id: transition.id.clone(),
                };
                let label = format!(
                    "{}: {} → {}",
                    transition.id, transition.state_a, transition.state_b
                );
                if ui.selectable_label(is_selected(&target), label).clicked() {
                    events.push(AppIntent::SelectTargetRequested { target });
                }
            }
        });
}

fn render_details(
    ui: &mut egui::Ui,
    model: &IndoorGmlModel,
    target: &PickTarget,
    events: &mut Vec<AppIntent>,
) {
    match target {
        PickTarget::CellSpace {
            cell_id,
            polygon_id,
        } => {
            let Some(cell) = model.cell_space(cell_id) else {
                ui.label(format!("{} existiert nicht mehr", cell_id));
                return;
            };
            ui.label(format!("CellSpace: {}", cell.id));
            ui.label(format!("Polygone: {}", cell.polygon_count()));
            if let Some(polygon_id) = polygon_id {
                ui.label(format!("Getroffenes Polygon: {}", polygon_id));
            }
            ui.label(format!(
                "State: {}",
                cell.state_id.as_deref().unwrap_or("-")
            ));
            if let Some(bbox) = cell.bounding_box() {
                let size = bbox.size();
                ui.label(format!(
                    "Ausdehnung: {:.2} × {:.2} × {:.2}",
                    size.x, size.y, size.z
                ));
            }
        }
        PickTarget::State { state_id } => {
            let Some(state) = model.state(state_id) else {
                ui.label(format!("{} existiert nicht mehr", state_id));
                return;
            };
            ui.label(format!("State: {}", state.id));
            ui.label(format!(
                "Position: ({:.2}, {:.2}, {:.2})",
                state.position.x, state.position.y, state.position.z
            ));
            if let Some(cell) = model.cell_for_state(state_id) {
                ui.label(format!("CellSpace: {}", cell.id));
            }
            let touching: Vec<&str> = model
                .transitions_touching(state_id)
                .map(|t| t.id.as_str())
                .collect();
            ui.label(format!("Transitions: {}", touching.len()));
            for id in touching {
                ui.label(format!("  {}", id));
            }
        }
        PickTarget::Transition { transition_id } => {
            let Some(transition) = model.transition(transition_id) else {
                ui.label(format!("{} existiert nicht mehr", transition_id));
                return;
            };
            ui.label(format!("Transition: {}", transition.id));
            ui.label(format!("Von: {}", transition.state_a));
            ui.label(format!("Nach: {}", transition.state_b));
            let length: f64 = transition
                .geometry
                .segments()
                .map(|(a, b)| a.distance(b))
                .sum();
            ui.label(format!("Länge: {:.2}", length));
        }
    }

    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("✕ Löschen").clicked() {
            events.push(AppIntent::DeleteSelectedRequested);
        }
        if ui.button("Selektion aufheben").clicked() {
            events.push(AppIntent::ClearSelectionRequested);
        }
    });
}
