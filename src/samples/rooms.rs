//! Vermessungskoordinaten der Beispielräume (Grundriss in X/Y, Höhe in Z).

use crate::core::Polygon;
use glam::DVec3;

const HEIGHT: f64 = 2500.0;
const STRIP_HEIGHT: f64 = 15.0;

/// Boden, Decke und vier Wände zwischen zwei Ringen gleicher Grundfläche.
///
/// Reihenfolge: Decke, Wände entlang des Rings, Boden.
fn box_room(ceiling: [DVec3; 4], floor: [DVec3; 4]) -> Vec<Polygon> {
    let [a, b, c, d] = ceiling;
    let lift = |p: DVec3| DVec3::new(p.x, p.y, HEIGHT);
    let low = |p: DVec3| DVec3::new(p.x, p.y, 0.0);

    vec![
        Polygon::quad(a, b, c, d),
        Polygon::quad(low(a), low(b), lift(b), lift(a)),
        Polygon::quad(low(b), low(c), lift(c), lift(b)),
        Polygon::quad(low(c), low(d), lift(d), lift(c)),
        Polygon::quad(low(d), low(a), lift(a), lift(d)),
        Polygon::quad(floor[0], floor[1], floor[2], floor[3]),
    ]
}

/// Großer Raum (ca. 750 × 690 Einheiten Grundfläche).
pub(super) fn room_1() -> Vec<Polygon> {
    let a = DVec3::new(62762.3590635083, 49638.2654653775, HEIGHT);
    let b = DVec3::new(62775.3752335849, 48947.8075238529, HEIGHT);
    let c = DVec3::new(63522.3102633086, 48948.4819317082, HEIGHT);
    let d = DVec3::new(63515.4374949107, 49639.4237948367, HEIGHT);
    let floor = [a, d, c, b].map(|p| DVec3::new(p.x, p.y, 0.0));
    box_room([a, b, c, d], floor)
}

/// Schmaler Flur südlich von Raum 1.
pub(super) fn room_2() -> Vec<Polygon> {
    let a = DVec3::new(63459.7496755729, 48913.971239468, HEIGHT);
    let b = DVec3::new(63458.4604999209, 48948.4242817383, HEIGHT);
    let c = DVec3::new(62813.8517414851, 48947.842264303, HEIGHT);
    let d = DVec3::new(62815.1711547398, 48914.513130238, HEIGHT);
    let floor = [a, d, c, b].map(|p| DVec3::new(p.x, p.y, 0.0));
    box_room([a, b, c, d], floor)
}

/// Niedriger Wandstreifen entlang der Südkante des Flurs.
pub(super) fn wall_strip() -> Vec<Polygon> {
    let p0 = DVec3::new(62815.1711547398, 48914.513130238, 0.0);
    let p1 = DVec3::new(63065.2696380588, 48914.3028749233, 0.0);
    let p2 = DVec3::new(63459.7496755729, 48913.971239468, 0.0);
    let up = |p: DVec3| DVec3::new(p.x, p.y, STRIP_HEIGHT);

    vec![Polygon::strip6([p0, p1, p2, up(p2), up(p1), up(p0)])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_polygons_are_valid_quads() {
        for polygons in [room_1(), room_2()] {
            assert_eq!(polygons.len(), 6);
            for p in &polygons {
                assert_eq!(p.vertices.len(), 4);
                assert!(p.validate().is_ok());
            }
            // Decke oben, Boden unten
            assert!(polygons[0].vertices.iter().all(|v| v.z == HEIGHT));
            assert!(polygons[5].vertices.iter().all(|v| v.z == 0.0));
        }
    }

    #[test]
    fn test_wall_strip_shape() {
        let strip = wall_strip();
        assert_eq!(strip.len(), 1);
        assert_eq!(strip[0].vertices.len(), 6);
        assert_eq!(strip[0].triangles().count(), 4);
        assert_eq!(strip[0].vertices[3].z, STRIP_HEIGHT);
    }
}
