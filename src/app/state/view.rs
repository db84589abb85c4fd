use crate::core::Camera3D;

/// View-bezogener Anwendungszustand
#[derive(Default)]
pub struct ViewState {
    /// 3D-Kamera für die Ansicht
    pub camera: Camera3D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera3D::new(),
            viewport_size: [0.0, 0.0],
        }
    }
}
