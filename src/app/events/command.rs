use crate::core::{PickTarget, Ray};
use crate::samples::SampleScene;
use crate::shared::ViewerOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,
    /// Beispielszene bauen und als aktuelles Modell setzen
    LoadSample { scene: SampleScene },

    /// Nächsten Treffer entlang des Strahls selektieren (kein Treffer → Selektion leeren)
    SelectByRay { ray: Ray },
    /// Objekt direkt selektieren
    SelectTarget { target: PickTarget },
    /// Selektion aufheben
    ClearSelection,
    /// Selektiertes Objekt löschen
    DeleteSelected,

    /// Kamera drehen (Radiant)
    RotateCamera { delta_yaw: f32, delta_pitch: f32 },
    /// Kamera zoomen (Faktor < 1 nähert an)
    ZoomCamera { factor: f32 },
    /// Fly-Kamera bewegen
    FlyCamera { input: glam::Vec3, dt: f32 },
    /// Kamera-Modus wechseln
    ToggleCameraMode,
    /// Kamera auf Ausgangsansicht zurücksetzen
    ResetCamera,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },

    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    Redo,

    /// Optionen-Dialog öffnen
    OpenOptionsDialog,
    /// Optionen-Dialog schließen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: ViewerOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
