//! Use-Case-Funktionen für die Objekt-Selektion (Klick-Picking und direkte Auswahl).

use crate::app::AppState;
use crate::core::{pick, PickTarget, Ray};

/// Selektiert den nächsten Treffer entlang des Strahls.
///
/// Ohne Treffer wird die Selektion aufgehoben. Gibt das neue Ziel zurück.
pub fn select_by_ray(state: &mut AppState, ray: &Ray) -> Option<PickTarget> {
    let Some(model) = state.model.as_deref() else {
        return None;
    };

    match pick(model, ray, &state.options.pick_options()) {
        Some(hit) => {
            log::info!("Clicked {}", hit.target);
            state.selection.select(hit.target.clone());
            Some(hit.target)
        }
        None => {
            log::debug!("Kein Treffer, Selektion aufgehoben");
            state.selection.clear();
            None
        }
    }
}

/// Selektiert ein Objekt direkt; unbekannte Ziele werden ignoriert.
pub fn select_target(state: &mut AppState, target: PickTarget) -> bool {
    let exists = state
        .model
        .as_deref()
        .is_some_and(|model| target.exists_in(model));
    if !exists {
        log::warn!("{} existiert nicht, Selektion unverändert", target);
        return false;
    }

    log::info!("Selected {}", target);
    state.selection.select(target);
    true
}

/// Hebt die aktuelle Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IndoorGmlModel, Polygon};
    use glam::DVec3;
    use std::sync::Arc;

    fn state_with_floor() -> AppState {
        let mut model = IndoorGmlModel::new();
        model
            .add_cell_space(vec![Polygon::quad(
                DVec3::new(-1.0, -1.0, 0.0),
                DVec3::new(1.0, -1.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0),
                DVec3::new(-1.0, 1.0, 0.0),
            )])
            .expect("Room1");
        let mut state = AppState::new();
        state.model = Some(Arc::new(model));
        state
    }

    fn down_ray(x: f64, y: f64) -> Ray {
        Ray::new(DVec3::new(x, y, 5.0), DVec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn select_by_ray_hits_polygon_then_clears_on_miss() {
        let mut state = state_with_floor();

        let target = select_by_ray(&mut state, &down_ray(0.5, 0.5)).expect("Treffer erwartet");
        assert_eq!(
            target,
            PickTarget::CellSpace {
                cell_id: "Room1".to_string(),
                polygon_id: Some("P1".to_string()),
            }
        );
        assert_eq!(state.selected(), Some(&target));

        assert!(select_by_ray(&mut state, &down_ray(5.0, 5.0)).is_none());
        assert!(state.selection.is_empty());
    }

    #[test]
    fn select_by_ray_prefers_state_sphere_over_polygon() {
        let mut state = state_with_floor();
        let target = select_by_ray(&mut state, &down_ray(0.0, 0.0)).expect("Treffer erwartet");
        assert_eq!(
            target,
            PickTarget::State {
                state_id: "S1".to_string()
            }
        );
    }

    #[test]
    fn select_target_ignores_unknown_ids() {
        let mut state = state_with_floor();

        assert!(!select_target(
            &mut state,
            PickTarget::Transition {
                transition_id: "T9".to_string()
            }
        ));
        assert!(state.selection.is_empty());

        assert!(select_target(
            &mut state,
            PickTarget::State {
                state_id: "S1".to_string()
            }
        ));
        assert!(!state.selection.is_empty());
    }
}
