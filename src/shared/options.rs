//! Zentrale Konfiguration für den IndoorGML-Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::PickOptions;
use crate::samples::SampleScene;
use serde::{Deserialize, Serialize};

// ── CellSpaces ──────────────────────────────────────────────────────

/// Farbpalette der CellSpaces (RGB: Blau, Orange, Cyan, Magenta, Braun).
pub const CELL_PALETTE: [[f32; 3]; 5] = [
    [0.0, 0.0, 1.0],
    [0.984, 0.510, 0.0],
    [0.0, 1.0, 1.0],
    [1.0, 0.0, 1.0],
    [0.255, 0.157, 0.098],
];
/// Farbe wenn die Palette leer ist (RGB: Hellgrau).
pub const CELL_COLOR_FALLBACK: [f32; 3] = [0.9, 0.9, 0.9];
/// Deckkraft der CellSpace-Flächen.
pub const CELL_ALPHA: f32 = 0.5;

// ── States ──────────────────────────────────────────────────────────

/// Radius der State-Kugeln in Welteinheiten.
pub const STATE_RADIUS: f32 = 0.2;
/// Ringe und Segmente der State-Kugel.
pub const STATE_SPHERE_SEGMENTS: u32 = 10;
/// Farbe der States (RGBA: Rot).
pub const STATE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

// ── Transitions ─────────────────────────────────────────────────────

/// Farbe der Transitions (RGBA: Grün).
pub const TRANSITION_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Maximaler Abstand Strahl ↔ Linie für Transition-Picking (Welteinheiten).
pub const TRANSITION_PICK_TOLERANCE: f32 = 0.1;

// ── Selektion ───────────────────────────────────────────────────────

/// Hervorhebungsfarbe selektierter Objekte (RGB: Gelb, Alpha bleibt erhalten).
pub const HIGHLIGHT_COLOR: [f32; 3] = [1.0, 1.0, 0.0];

// ── Kamera ──────────────────────────────────────────────────────────

/// Standard-Abstand der Chase-Kamera.
pub const CAMERA_DEFAULT_DISTANCE: f32 = 6.0;
/// Minimaler Abstand der Chase-Kamera.
pub const CAMERA_MIN_DISTANCE: f32 = 2.0;
/// Maximaler Abstand der Chase-Kamera.
pub const CAMERA_MAX_DISTANCE: f32 = 20.0;
/// Fluggeschwindigkeit der Fly-Kamera (Einheiten pro Sekunde).
pub const CAMERA_FLY_SPEED: f32 = 5.0;
/// Drehung pro Pixel Mausbewegung (Radiant).
pub const CAMERA_ROTATE_SENSITIVITY: f32 = 0.01;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Szene ───────────────────────────────────────────────────────────

/// Zielausdehnung beim Normalisieren von Vermessungskoordinaten.
pub const NORMALIZE_EXTENT: f64 = 10.0;
/// Hintergrundfarbe des Viewports (RGBA).
pub const BACKGROUND_COLOR: [f32; 4] = [0.12, 0.12, 0.14, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `indoorgml_viewer.toml` neben der Binary gespeichert.
/// Fehlende Felder werden mit den Standardwerten aufgefüllt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerOptions {
    // ── CellSpaces ──────────────────────────────────────────────
    /// Farben der CellSpaces, zyklisch nach Einfügereihenfolge
    pub cell_palette: Vec<[f32; 3]>,
    /// Deckkraft der CellSpace-Flächen
    pub cell_alpha: f32,

    // ── States ──────────────────────────────────────────────────
    /// Radius der State-Kugeln (auch Pick-Radius)
    pub state_radius: f32,
    /// Farbe der States
    pub state_color: [f32; 4],
    /// Auflösung der State-Kugel (Ringe = Segmente)
    pub state_sphere_segments: u32,

    // ── Transitions ─────────────────────────────────────────────
    /// Farbe der Transitions
    pub transition_color: [f32; 4],
    /// Pick-Toleranz für Transitions in Welteinheiten
    pub transition_pick_tolerance: f32,

    // ── Selektion ───────────────────────────────────────────────
    /// Hervorhebungsfarbe (RGB)
    pub highlight_color: [f32; 3],

    // ── Kamera ──────────────────────────────────────────────────
    /// Standard-Abstand der Chase-Kamera
    pub camera_default_distance: f32,
    /// Minimaler Abstand der Chase-Kamera
    pub camera_min_distance: f32,
    /// Maximaler Abstand der Chase-Kamera
    pub camera_max_distance: f32,
    /// Fluggeschwindigkeit der Fly-Kamera
    pub camera_fly_speed: f32,
    /// Drehung pro Pixel (Radiant)
    pub camera_rotate_sensitivity: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,

    // ── Szene ───────────────────────────────────────────────────
    /// Beim Start geladene Beispielszene
    pub default_scene: SampleScene,
    /// Zielausdehnung beim Normalisieren
    pub normalize_extent: f64,
    /// Hintergrundfarbe des Viewports
    pub background_color: [f32; 4],
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            cell_palette: CELL_PALETTE.to_vec(),
            cell_alpha: CELL_ALPHA,

            state_radius: STATE_RADIUS,
            state_color: STATE_COLOR,
            state_sphere_segments: STATE_SPHERE_SEGMENTS,

            transition_color: TRANSITION_COLOR,
            transition_pick_tolerance: TRANSITION_PICK_TOLERANCE,

            highlight_color: HIGHLIGHT_COLOR,

            camera_default_distance: CAMERA_DEFAULT_DISTANCE,
            camera_min_distance: CAMERA_MIN_DISTANCE,
            camera_max_distance: CAMERA_MAX_DISTANCE,
            camera_fly_speed: CAMERA_FLY_SPEED,
            camera_rotate_sensitivity: CAMERA_ROTATE_SENSITIVITY,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            default_scene: SampleScene::default(),
            normalize_extent: NORMALIZE_EXTENT,
            background_color: BACKGROUND_COLOR,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("indoorgml_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("indoorgml_viewer.toml")
    }

    /// Füllfarbe (RGBA) des CellSpace an Position `index` der Einfügereihenfolge.
    pub fn cell_color(&self, index: usize) -> [f32; 4] {
        let [r, g, b] = if self.cell_palette.is_empty() {
            CELL_COLOR_FALLBACK
        } else {
            self.cell_palette[index % self.cell_palette.len()]
        };
        [r, g, b, self.cell_alpha]
    }

    /// Ersetzt RGB durch die Hervorhebungsfarbe, Alpha bleibt.
    pub fn highlighted(&self, color: [f32; 4]) -> [f32; 4] {
        let [r, g, b] = self.highlight_color;
        [r, g, b, color[3]]
    }

    /// Trefferradien für das Picking.
    pub fn pick_options(&self) -> PickOptions {
        PickOptions {
            state_radius: self.state_radius as f64,
            transition_tolerance: self.transition_pick_tolerance as f64,
        }
    }
}
