//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_viewport_size() {
        let mut state = AppState::new();

        resize(&mut state, [1920.0, 1080.0]);

        assert_eq!(state.view.viewport_size, [1920.0, 1080.0]);
    }
}
