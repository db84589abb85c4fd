//! Handler für Modell-Änderungen.

use crate::app::use_cases;
use crate::app::AppState;

/// Löscht das selektierte Objekt samt abhängiger Elemente.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected(state);
}
