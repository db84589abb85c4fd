//! UI-Komponenten: Menü, Objektliste, Status-Bar, Optionen, Input-Handling.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Menüs, Panels, Dialoge).
/// Keyboard-Shortcuts sind in eine eigene Datei extrahiert.
pub mod menu;
pub mod options_dialog;
pub mod properties;
pub mod status;

pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
