//! 3D-Kamera mit Chase-Modus (Orbit um ein Ziel) und Fly-Modus (freie Bewegung).
//!
//! Z zeigt nach oben, passend zu den Quelldaten (Grundriss in X/Y, Höhe in Z).

use super::{BoundingBox, Ray};
use glam::{Mat4, Vec2, Vec3};

/// Steuerungsart der Kamera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Umkreist `target` im Abstand `distance`
    #[default]
    Chase,
    /// Freie Position mit Blickrichtung aus Yaw/Pitch
    Fly,
}

impl CameraMode {
    /// Anzeigename für Statusleiste und Menü.
    pub fn label(self) -> &'static str {
        match self {
            Self::Chase => "Chase",
            Self::Fly => "Fly",
        }
    }
}

/// Perspektivische 3D-Kamera.
#[derive(Debug, Clone)]
pub struct Camera3D {
    pub mode: CameraMode,

    // ── Chase ───────────────────────────────────────────────
    /// Orbit-Zentrum in Welt-Koordinaten
    pub target: Vec3,
    /// Abstand zum Ziel (geklemmt auf `[min_distance, max_distance]`)
    pub distance: f32,
    /// Horizontaler Winkel um die Z-Achse (Radiant)
    pub azimuth: f32,
    /// Höhenwinkel über der X/Y-Ebene (Radiant, ±89°)
    pub elevation: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Abstand der Ausgangsansicht nach `frame`/`reset`
    pub default_distance: f32,

    // ── Fly ─────────────────────────────────────────────────
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Fluggeschwindigkeit in Welt-Einheiten pro Sekunde
    pub move_speed: f32,

    // ── Projektion ──────────────────────────────────────────
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,

    home_target: Vec3,
    home_distance: f32,
}

impl Camera3D {
    /// Standard-Abstand im Chase-Modus.
    pub const DEFAULT_DISTANCE: f32 = 6.0;
    pub const DEFAULT_MIN_DISTANCE: f32 = 2.0;
    pub const DEFAULT_MAX_DISTANCE: f32 = 20.0;
    pub const DEFAULT_MOVE_SPEED: f32 = 5.0;
    pub const DEFAULT_AZIMUTH: f32 = -std::f32::consts::FRAC_PI_3;
    pub const DEFAULT_ELEVATION: f32 = 0.5;
    /// Maximaler Betrag von Elevation/Pitch (89°).
    pub const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;

    /// Erstellt eine Chase-Kamera mit Blick auf den Ursprung.
    pub fn new() -> Self {
        let mut camera = Self {
            mode: CameraMode::Chase,
            target: Vec3::ZERO,
            distance: Self::DEFAULT_DISTANCE,
            azimuth: Self::DEFAULT_AZIMUTH,
            elevation: Self::DEFAULT_ELEVATION,
            min_distance: Self::DEFAULT_MIN_DISTANCE,
            max_distance: Self::DEFAULT_MAX_DISTANCE,
            default_distance: Self::DEFAULT_DISTANCE,
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            move_speed: Self::DEFAULT_MOVE_SPEED,
            fov_y: 45f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            home_target: Vec3::ZERO,
            home_distance: Self::DEFAULT_DISTANCE,
        };
        camera.sync_fly_to_chase();
        camera
    }

    /// Setzt die Abstandsgrenzen und klemmt den aktuellen Abstand nach.
    pub fn set_distance_limits(&mut self, min: f32, max: f32) {
        self.min_distance = min.max(0.01);
        self.max_distance = max.max(self.min_distance);
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
        self.home_distance = self
            .home_distance
            .clamp(self.min_distance, self.max_distance);
    }

    /// Augenposition im aktuellen Modus.
    pub fn eye(&self) -> Vec3 {
        match self.mode {
            CameraMode::Chase => {
                self.target + orbit_offset(self.azimuth, self.elevation) * self.distance
            }
            CameraMode::Fly => self.position,
        }
    }

    /// Normierte Blickrichtung im aktuellen Modus.
    pub fn forward(&self) -> Vec3 {
        match self.mode {
            CameraMode::Chase => -orbit_offset(self.azimuth, self.elevation),
            CameraMode::Fly => orbit_offset(self.yaw, self.pitch),
        }
    }

    /// Rechts-Vektor (senkrecht zu Blickrichtung und Z).
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Z).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye();
        Mat4::look_at_rh(eye, eye + self.forward(), Vec3::Z)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect.max(1e-3), self.near, self.far)
    }

    /// Kombinierte View-Projection-Matrix für einen Viewport in Pixeln.
    pub fn view_projection(&self, viewport: Vec2) -> Mat4 {
        let aspect = viewport.x / viewport.y.max(1.0);
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Erzeugt einen Picking-Strahl durch einen Bildschirmpunkt.
    ///
    /// `screen_pos` ist relativ zur linken oberen Viewport-Ecke.
    pub fn screen_ray(&self, screen_pos: Vec2, viewport: Vec2) -> Ray {
        let size = viewport.max(Vec2::ONE);
        let ndc = Vec2::new(
            2.0 * screen_pos.x / size.x - 1.0,
            1.0 - 2.0 * screen_pos.y / size.y,
        );
        let inv = self.view_projection(size).inverse();
        let near = inv.project_point3(ndc.extend(0.0));
        let far = inv.project_point3(ndc.extend(1.0));
        Ray::new(near.as_dvec3(), (far - near).as_dvec3())
    }

    /// Dreht die Kamera: im Chase-Modus um das Ziel, im Fly-Modus die Blickrichtung.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        match self.mode {
            CameraMode::Chase => {
                self.azimuth = wrap_angle(self.azimuth - delta_yaw);
                self.elevation =
                    (self.elevation + delta_pitch).clamp(-Self::MAX_PITCH, Self::MAX_PITCH);
            }
            CameraMode::Fly => {
                self.yaw = wrap_angle(self.yaw - delta_yaw);
                self.pitch = (self.pitch - delta_pitch).clamp(-Self::MAX_PITCH, Self::MAX_PITCH);
            }
        }
    }

    /// Zoomt: im Chase-Modus über den Abstand, im Fly-Modus entlang der Blickrichtung.
    ///
    /// `factor < 1.0` nähert an, `factor > 1.0` entfernt.
    pub fn zoom_by(&mut self, factor: f32) {
        match self.mode {
            CameraMode::Chase => {
                self.distance =
                    (self.distance * factor).clamp(self.min_distance, self.max_distance);
            }
            CameraMode::Fly => {
                self.position += self.forward() * (1.0 - factor) * self.distance;
            }
        }
    }

    /// Bewegt die Fly-Kamera. `input` ist (vorwärts, rechts, hoch) im Bereich -1..1.
    ///
    /// Gibt `false` zurück wenn die Kamera nicht im Fly-Modus ist.
    pub fn fly(&mut self, input: Vec3, dt: f32) -> bool {
        if self.mode != CameraMode::Fly {
            return false;
        }
        let step = self.forward() * input.x + self.right() * input.y + Vec3::Z * input.z;
        self.position += step * self.move_speed * dt;
        true
    }

    /// Wechselt den Modus und behält die aktuelle Augenposition bei.
    pub fn toggle_mode(&mut self) {
        match self.mode {
            CameraMode::Chase => {
                self.sync_fly_to_chase();
                self.mode = CameraMode::Fly;
            }
            CameraMode::Fly => {
                // Ziel liegt im aktuellen Abstand vor der Kamera
                self.target = self.position + self.forward() * self.distance;
                self.azimuth = wrap_angle(self.yaw + std::f32::consts::PI);
                self.elevation = (-self.pitch).clamp(-Self::MAX_PITCH, Self::MAX_PITCH);
                self.mode = CameraMode::Chase;
            }
        }
    }

    /// Richtet die Kamera auf die Mitte einer Bounding-Box aus und merkt sie als Ausgangsansicht.
    ///
    /// Der Abstand ist `default_distance`, unabhängig von der Box-Größe.
    pub fn frame(&mut self, bbox: &BoundingBox) {
        self.home_target = bbox.center().as_vec3();
        self.home_distance = self
            .default_distance
            .clamp(self.min_distance, self.max_distance);
        self.reset();
    }

    /// Setzt Ziel, Abstand und Winkel auf die Ausgangsansicht zurück (Modus bleibt).
    pub fn reset(&mut self) {
        self.target = self.home_target;
        self.distance = self.home_distance;
        self.azimuth = Self::DEFAULT_AZIMUTH;
        self.elevation = Self::DEFAULT_ELEVATION;
        self.sync_fly_to_chase();
    }

    /// Übernimmt die Chase-Augenposition als Fly-Position mit Blick aufs Ziel.
    fn sync_fly_to_chase(&mut self) {
        self.position = self.target + orbit_offset(self.azimuth, self.elevation) * self.distance;
        self.yaw = wrap_angle(self.azimuth + std::f32::consts::PI);
        self.pitch = -self.elevation;
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new()
    }
}

/// Einheitsvektor für Azimut/Elevation (Z oben).
fn orbit_offset(azimuth: f32, elevation: f32) -> Vec3 {
    Vec3::new(
        elevation.cos() * azimuth.cos(),
        elevation.cos() * azimuth.sin(),
        elevation.sin(),
    )
}

fn wrap_angle(angle: f32) -> f32 {
    let tau = std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(tau);
    if wrapped > std::f32::consts::PI {
        wrapped - tau
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec3;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-4);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-4);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-4);
    }

    #[test]
    fn test_default_chase_distance() {
        let camera = Camera3D::new();
        assert_eq!(camera.mode, CameraMode::Chase);
        assert_relative_eq!(camera.distance, 6.0);
        assert_relative_eq!(camera.eye().distance(camera.target), 6.0, epsilon = 1e-5);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera3D::new();
        camera.zoom_by(0.01);
        assert_relative_eq!(camera.distance, 2.0);
        camera.zoom_by(1000.0);
        assert_relative_eq!(camera.distance, 20.0);
    }

    #[test]
    fn test_elevation_is_clamped() {
        let mut camera = Camera3D::new();
        camera.rotate(0.0, 10.0);
        assert_relative_eq!(camera.elevation, Camera3D::MAX_PITCH);
        camera.rotate(0.0, -20.0);
        assert_relative_eq!(camera.elevation, -Camera3D::MAX_PITCH);
    }

    #[test]
    fn test_toggle_mode_keeps_eye_position() {
        let mut camera = Camera3D::new();
        camera.target = Vec3::new(1.0, 2.0, 3.0);
        camera.rotate(0.7, 0.2);
        let eye = camera.eye();
        let forward = camera.forward();

        camera.toggle_mode();
        assert_eq!(camera.mode, CameraMode::Fly);
        assert_vec3_eq(camera.eye(), eye);
        assert_vec3_eq(camera.forward(), forward);

        camera.toggle_mode();
        assert_eq!(camera.mode, CameraMode::Chase);
        assert_vec3_eq(camera.eye(), eye);
        assert_vec3_eq(camera.target, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_fly_moves_only_in_fly_mode() {
        let mut camera = Camera3D::new();
        assert!(!camera.fly(Vec3::X, 1.0));

        camera.toggle_mode();
        let start = camera.position;
        let forward = camera.forward();
        assert!(camera.fly(Vec3::X, 0.5));
        // 5 Einheiten/s * 0.5 s
        assert_vec3_eq(camera.position, start + forward * 2.5);

        camera.fly(Vec3::Z, 1.0);
        assert_relative_eq!(
            camera.position.z,
            start.z + forward.z * 2.5 + 5.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_screen_ray_through_center_hits_target() {
        let camera = Camera3D::new();
        let viewport = Vec2::new(800.0, 600.0);
        let ray = camera.screen_ray(viewport * 0.5, viewport);

        let to_target = DVec3::ZERO - ray.origin;
        let along = to_target.dot(ray.direction);
        let closest = ray.at(along);
        assert_relative_eq!(closest.length(), 0.0, epsilon = 1e-2);
        assert_relative_eq!(ray.direction.length(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_frame_centers_on_bounding_box() {
        let mut camera = Camera3D::new();
        camera.rotate(1.0, 0.3);
        let bbox = BoundingBox {
            min: DVec3::new(-5.0, -2.0, 0.0),
            max: DVec3::new(5.0, 2.0, 4.0),
        };
        camera.default_distance = 12.0;
        camera.frame(&bbox);
        assert_vec3_eq(camera.target, Vec3::new(0.0, 0.0, 2.0));
        assert_relative_eq!(camera.distance, 12.0);
        assert_relative_eq!(camera.azimuth, Camera3D::DEFAULT_AZIMUTH);

        camera.zoom_by(0.5);
        camera.reset();
        assert_relative_eq!(camera.distance, 12.0);

        // Abstand wird auf die Grenzen geklemmt
        camera.default_distance = 50.0;
        camera.frame(&bbox);
        assert_relative_eq!(camera.distance, 20.0);
    }

    #[test]
    fn test_view_projection_maps_target_to_ndc_center() {
        let camera = Camera3D::new();
        let vp = camera.view_projection(Vec2::new(1024.0, 768.0));
        let ndc = vp.project_point3(camera.target);
        assert_relative_eq!(ndc.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ndc.y, 0.0, epsilon = 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
