//! Handler für Optionen und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::ViewerOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: ViewerOptions) -> anyhow::Result<()> {
    state.options = options;
    use_cases::camera::apply_camera_options(state);
    let path = ViewerOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = ViewerOptions::default();
    use_cases::camera::apply_camera_options(state);
    let path = ViewerOptions::config_path();
    state.options.save_to_file(&path)
}
