//! Hilfsfunktionen für einfache Polygon-Transformationen (Skalieren, Verschieben, Zentrieren).

use super::{BoundingBox, Polygon};
use glam::DVec3;

/// Unterhalb dieser Ausdehnung gilt eine Geometrie als entartet (keine Skalierung).
const MIN_EXTENT: f64 = 1e-9;

/// Mittelpunkt der Bounding-Box aller Polygone.
pub fn compute_bounding_center(polygons: &[Polygon]) -> Option<DVec3> {
    BoundingBox::from_polygons(polygons).map(|b| b.center())
}

/// Größte Ausdehnung der Bounding-Box aller Polygone (0.0 bei leerer Eingabe).
pub fn compute_max_dimension(polygons: &[Polygon]) -> f64 {
    BoundingBox::from_polygons(polygons)
        .map(|b| b.max_dimension())
        .unwrap_or(0.0)
}

/// Arithmetisches Mittel aller Vertices (mehrfach vorkommende Punkte zählen mehrfach).
pub fn compute_centroid(polygons: &[Polygon]) -> Option<DVec3> {
    let (sum, count) = polygons
        .iter()
        .flat_map(|p| p.vertices.iter())
        .fold((DVec3::ZERO, 0usize), |(sum, n), v| (sum + *v, n + 1));

    if count == 0 {
        return None;
    }
    Some(sum / count as f64)
}

/// Skaliert alle Vertices um den Faktor `s` (bezogen auf den Ursprung).
pub fn apply_scale(polygons: &mut [Polygon], s: f64) {
    for v in polygons.iter_mut().flat_map(|p| p.vertices.iter_mut()) {
        *v *= s;
    }
}

/// Verschiebt alle Vertices um `offset`.
pub fn apply_translation(polygons: &mut [Polygon], offset: DVec3) {
    for v in polygons.iter_mut().flat_map(|p| p.vertices.iter_mut()) {
        *v += offset;
    }
}

/// Skaliert die Polygone auf die Zielausdehnung `extent` und zentriert sie um den Ursprung.
///
/// Gibt den angewendeten Skalierungsfaktor und die Verschiebung zurück,
/// `None` wenn keine Vertices vorhanden sind. Entartete Geometrie
/// (Ausdehnung ~0) wird nur verschoben.
pub fn normalize_to_extent(polygons: &mut [Polygon], extent: f64) -> Option<(f64, DVec3)> {
    let max_dim = BoundingBox::from_polygons(polygons)?.max_dimension();

    let scale = if max_dim > MIN_EXTENT {
        extent / max_dim
    } else {
        1.0
    };
    apply_scale(polygons, scale);

    let center = compute_bounding_center(polygons)?;
    let offset = -center;
    apply_translation(polygons, offset);

    log::debug!(
        "Geometrie normalisiert: Skalierung {:.6}, Verschiebung ({:.3}, {:.3}, {:.3})",
        scale,
        offset.x,
        offset.y,
        offset.z
    );
    Some((scale, offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(x: f64, y: f64, z: f64, size: f64) -> Polygon {
        Polygon::quad(
            DVec3::new(x, y, z),
            DVec3::new(x + size, y, z),
            DVec3::new(x + size, y + size, z),
            DVec3::new(x, y + size, z),
        )
    }

    #[test]
    fn test_centroid_counts_every_vertex() {
        // Zwei Quadrate; Mittel über alle 8 Vertices
        let polys = vec![square(0.0, 0.0, 0.0, 2.0), square(0.0, 0.0, 4.0, 2.0)];
        let c = compute_centroid(&polys).expect("Centroid erwartet");
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 1.0);
        assert_relative_eq!(c.z, 2.0);

        assert!(compute_centroid(&[]).is_none());
        let without_vertices = [Polygon::new(Vec::new(), Vec::new())];
        assert!(compute_centroid(&without_vertices).is_none());
    }

    #[test]
    fn test_bounding_center_and_max_dimension() {
        let polys = vec![square(10.0, 20.0, 0.0, 4.0), square(10.0, 20.0, 1.0, 4.0)];
        let center = compute_bounding_center(&polys).expect("Center erwartet");
        assert_eq!(center, DVec3::new(12.0, 22.0, 0.5));
        assert_relative_eq!(compute_max_dimension(&polys), 4.0);
        assert_relative_eq!(compute_max_dimension(&[]), 0.0);
    }

    #[test]
    fn test_scale_and_translation() {
        let mut polys = vec![square(1.0, 1.0, 1.0, 1.0)];
        apply_scale(&mut polys, 2.0);
        assert_eq!(polys[0].vertices[0], DVec3::new(2.0, 2.0, 2.0));
        assert_eq!(polys[0].vertices[2], DVec3::new(4.0, 4.0, 2.0));

        apply_translation(&mut polys, DVec3::new(-2.0, 0.0, 1.0));
        assert_eq!(polys[0].vertices[0], DVec3::new(0.0, 2.0, 3.0));
    }

    #[test]
    fn test_normalize_to_extent_centers_large_coordinates() {
        let mut polys = vec![
            square(62762.0, 48947.0, 0.0, 750.0),
            square(62762.0, 48947.0, 2500.0, 750.0),
        ];

        let (scale, _offset) = normalize_to_extent(&mut polys, 10.0).expect("Normalisierung");
        assert_relative_eq!(scale, 10.0 / 2500.0);
        assert_relative_eq!(compute_max_dimension(&polys), 10.0, epsilon = 1e-9);

        let center = compute_bounding_center(&polys).expect("Center erwartet");
        assert_relative_eq!(center.length(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_normalize_degenerate_geometry_only_translates() {
        let point = DVec3::new(5.0, 5.0, 5.0);
        let mut polys = vec![Polygon::new(vec![point, point, point], vec![0, 1, 2])];

        let (scale, offset) = normalize_to_extent(&mut polys, 10.0).expect("Normalisierung");
        assert_relative_eq!(scale, 1.0);
        assert_eq!(offset, -point);
        assert_eq!(polys[0].vertices[0], DVec3::ZERO);

        assert!(normalize_to_extent(&mut [], 10.0).is_none());
    }
}
