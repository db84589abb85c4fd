//! Strahl-basiertes Picking gegen CellSpace-Dreiecke, State-Kugeln und Transition-Linien.

use super::IndoorGmlModel;
use glam::DVec3;
use std::fmt;

/// Unterhalb dieses Betrags gelten Determinanten als 0 (Strahl parallel).
const EPSILON: f64 = 1e-12;

/// Strahl mit normierter Richtung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Erstellt einen Strahl; die Richtung wird normiert.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Punkt auf dem Strahl beim Parameter `t`.
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Möller–Trumbore-Schnitt mit einem Dreieck.
    ///
    /// Gibt den Strahl-Parameter `t` des Treffers zurück (nur vor dem Ursprung).
    pub fn intersect_triangle(&self, v0: DVec3, v1: DVec3, v2: DVec3) -> Option<f64> {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        let h = self.direction.cross(edge2);
        let a = edge1.dot(h);
        if a.abs() < EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = self.origin - v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * self.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        (t > EPSILON).then_some(t)
    }

    /// Erster Schnittpunkt mit einer Kugel (liegt der Ursprung innerhalb, der Austrittspunkt).
    pub fn intersect_sphere(&self, center: DVec3, radius: f64) -> Option<f64> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        [-b - root, -b + root].into_iter().find(|&t| t > EPSILON)
    }

    /// Kleinster Abstand zwischen Strahl und Segment `a-b`.
    ///
    /// Gibt `(abstand, t)` zurück, wobei `t` der Strahl-Parameter des nächsten Punkts ist.
    pub fn closest_to_segment(&self, a: DVec3, b: DVec3) -> (f64, f64) {
        let seg = b - a;
        let w = self.origin - a;
        let seg_len_sq = seg.length_squared();

        if seg_len_sq < EPSILON {
            let t = (-w.dot(self.direction)).max(0.0);
            return (self.at(t).distance(a), t);
        }

        // Richtung ist normiert → Koeffizient vor t² ist 1
        let b_coef = self.direction.dot(seg);
        let d = self.direction.dot(w);
        let e = seg.dot(w);
        let denom = seg_len_sq - b_coef * b_coef;

        let mut s = if denom.abs() > EPSILON {
            ((e - b_coef * d) / denom).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let mut t = b_coef * s - d;
        if t < 0.0 {
            t = 0.0;
            s = (e / seg_len_sq).clamp(0.0, 1.0);
        }

        let closest_on_seg = a + seg * s;
        (self.at(t).distance(closest_on_seg), t)
    }
}

/// Was beim Picking getroffen wurde.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PickTarget {
    CellSpace {
        cell_id: String,
        polygon_id: Option<String>,
    },
    State {
        state_id: String,
    },
    Transition {
        transition_id: String,
    },
}

impl PickTarget {
    /// Modell-ID des getroffenen Objekts (bei CellSpaces die Raum-ID).
    pub fn id(&self) -> &str {
        match self {
            Self::CellSpace { cell_id, .. } => cell_id,
            Self::State { state_id } => state_id,
            Self::Transition { transition_id } => transition_id,
        }
    }

    /// Art des Objekts für Anzeige und Logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CellSpace { .. } => "CellSpace",
            Self::State { .. } => "State",
            Self::Transition { .. } => "Transition",
        }
    }

    /// Prüft ob das Ziel im Modell noch existiert.
    pub fn exists_in(&self, model: &IndoorGmlModel) -> bool {
        match self {
            Self::CellSpace { cell_id, .. } => model.cell_space(cell_id).is_some(),
            Self::State { state_id } => model.state(state_id).is_some(),
            Self::Transition { transition_id } => model.transition(transition_id).is_some(),
        }
    }
}

impl fmt::Display for PickTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellSpace {
                cell_id,
                polygon_id: Some(polygon_id),
            } => write!(f, "CellSpace {} ({})", cell_id, polygon_id),
            _ => write!(f, "{} {}", self.kind(), self.id()),
        }
    }
}

/// Treffer mit Strahl-Parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct PickHit {
    pub target: PickTarget,
    /// Abstand entlang des Strahls
    pub distance: f64,
}

/// Trefferradien für Picking in Welt-Einheiten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickOptions {
    /// Radius der State-Kugeln
    pub state_radius: f64,
    /// Maximaler Abstand zwischen Strahl und Transition-Linie
    pub transition_tolerance: f64,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            state_radius: 0.2,
            transition_tolerance: 0.1,
        }
    }
}

/// Sucht den nächsten Treffer des Strahls im Modell.
///
/// Getestet werden alle Dreiecke aller CellSpace-Polygone, alle State-Kugeln
/// und alle Transition-Segmente. Der Treffer mit kleinstem Strahl-Parameter gewinnt.
pub fn pick(model: &IndoorGmlModel, ray: &Ray, options: &PickOptions) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    let mut consider = |target: PickTarget, distance: f64| {
        if best.as_ref().map_or(true, |b| distance < b.distance) {
            best = Some(PickHit { target, distance });
        }
    };

    for cell in model.cell_spaces() {
        for polygon in &cell.polygons {
            let nearest = polygon
                .triangles()
                .filter_map(|[a, b, c]| ray.intersect_triangle(a, b, c))
                .min_by(f64::total_cmp);
            if let Some(t) = nearest {
                consider(
                    PickTarget::CellSpace {
                        cell_id: cell.id.clone(),
                        polygon_id: polygon.id.clone(),
                    },
                    t,
                );
            }
        }
    }

    for state in model.states() {
        if let Some(t) = ray.intersect_sphere(state.position, options.state_radius) {
            consider(
                PickTarget::State {
                    state_id: state.id.clone(),
                },
                t,
            );
        }
    }

    for transition in model.transitions() {
        let nearest = transition
            .geometry
            .segments()
            .map(|(a, b)| ray.closest_to_segment(a, b))
            .filter(|(dist, _)| *dist <= options.transition_tolerance)
            .map(|(_, t)| t)
            .min_by(f64::total_cmp);
        if let Some(t) = nearest {
            consider(
                PickTarget::Transition {
                    transition_id: transition.id.clone(),
                },
                t,
            );
        }
    }

    best
}
