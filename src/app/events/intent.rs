use crate::core::PickTarget;
use crate::samples::SampleScene;
use crate::shared::ViewerOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Beispielszene laden (ersetzt das aktuelle Modell)
    LoadSampleRequested { scene: SampleScene },

    /// Objekt unter dem Mauszeiger selektieren (Viewport-Pixel relativ zur linken oberen Ecke)
    SelectAtScreenRequested { screen_pos: glam::Vec2 },
    /// Objekt direkt selektieren (z.B. aus der Seitenleiste)
    SelectTargetRequested { target: PickTarget },
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Selektiertes Objekt löschen (inkl. Kaskade)
    DeleteSelectedRequested,

    /// Chase-Kamera per Drag drehen (Pixel-Delta)
    CameraOrbit { delta: glam::Vec2 },
    /// Fly-Kamera per Drag umsehen (Pixel-Delta)
    CameraLook { delta: glam::Vec2 },
    /// Mausrad-Zoom (positive Schritte = näher heran)
    CameraZoom { steps: f32 },
    /// Fly-Bewegung: (vorwärts, rechts, hoch) im Bereich -1..1 über `dt` Sekunden
    CameraFly { input: glam::Vec3, dt: f32 },
    /// Zwischen Chase- und Fly-Kamera wechseln
    ToggleCameraModeRequested,
    /// Kamera auf Ausgangsansicht zurücksetzen
    ResetCameraRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },

    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,

    /// Optionen-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Optionen-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: ViewerOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
