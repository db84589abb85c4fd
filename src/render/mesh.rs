//! CPU-Geometrie für die Sub-Renderer (ohne GPU-Abhängigkeit).

use super::types::ColorVertex;
use crate::core::{IndoorGmlModel, LineString};
use crate::shared::ViewerOptions;
use glam::{DVec3, Vec3};
use std::f32::consts::{PI, TAU};

/// Dreieck einer CellSpace-Fläche mit Füllfarbe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CellTriangle {
    pub positions: [Vec3; 3],
    pub color: [f32; 4],
}

impl CellTriangle {
    /// Schwerpunkt des Dreiecks.
    pub fn centroid(&self) -> Vec3 {
        (self.positions[0] + self.positions[1] + self.positions[2]) / 3.0
    }
}

/// Sammelt alle Flächen-Dreiecke des Modells.
///
/// Farbe nach Einfügereihenfolge aus der Palette; der selektierte
/// CellSpace bekommt die Hervorhebungsfarbe bei gleichem Alpha.
pub(crate) fn build_cell_triangles(
    model: &IndoorGmlModel,
    options: &ViewerOptions,
    selected_cell: Option<&str>,
    out: &mut Vec<CellTriangle>,
) {
    out.clear();
    for (index, cell) in model.cell_spaces().enumerate() {
        let base = options.cell_color(index);
        let color = if selected_cell == Some(cell.id.as_str()) {
            options.highlighted(base)
        } else {
            base
        };

        for polygon in &cell.polygons {
            for [a, b, c] in polygon.triangles() {
                out.push(CellTriangle {
                    positions: [a.as_vec3(), b.as_vec3(), c.as_vec3()],
                    color,
                });
            }
        }
    }
}

/// Sortiert transparente Dreiecke von hinten nach vorne (entferntestes zuerst).
pub(crate) fn sort_back_to_front(triangles: &mut [CellTriangle], eye: Vec3) {
    triangles.sort_by(|a, b| {
        let da = a.centroid().distance_squared(eye);
        let db = b.centroid().distance_squared(eye);
        db.total_cmp(&da)
    });
}

/// Schreibt die Dreiecke als Triangle-List in den Vertex-Buffer.
pub(crate) fn push_triangles(vertices: &mut Vec<ColorVertex>, triangles: &[CellTriangle]) {
    vertices.reserve(triangles.len() * 3);
    for triangle in triangles {
        for position in triangle.positions {
            vertices.push(ColorVertex::new(position, triangle.color));
        }
    }
}

/// Einheitskugel als Triangle-List (`segments` Ringe × `segments` Segmente).
pub(crate) fn unit_sphere(segments: u32) -> Vec<Vec3> {
    let rings = segments.max(3);
    let sectors = segments.max(3);

    let point = |ring: u32, sector: u32| {
        let theta = PI * ring as f32 / rings as f32;
        let phi = TAU * sector as f32 / sectors as f32;
        Vec3::new(
            theta.sin() * phi.cos(),
            theta.sin() * phi.sin(),
            theta.cos(),
        )
    };

    let mut triangles = Vec::with_capacity((rings * sectors * 6) as usize);
    for ring in 0..rings {
        for sector in 0..sectors {
            let p00 = point(ring, sector);
            let p01 = point(ring, sector + 1);
            let p10 = point(ring + 1, sector);
            let p11 = point(ring + 1, sector + 1);

            // Pole erzeugen nur ein Dreieck pro Segment
            if ring != 0 {
                triangles.extend_from_slice(&[p00, p10, p01]);
            }
            if ring + 1 != rings {
                triangles.extend_from_slice(&[p01, p10, p11]);
            }
        }
    }
    triangles
}

/// Platziert die Einheitskugel an `center` mit Radius `radius`.
pub(crate) fn push_sphere(
    vertices: &mut Vec<ColorVertex>,
    unit: &[Vec3],
    center: DVec3,
    radius: f32,
    color: [f32; 4],
) {
    let center = center.as_vec3();
    let sphere = unit.iter().map(|p| center + *p * radius);
    vertices.extend(sphere.map(|p| ColorVertex::new(p, color)));
}

/// Schreibt die Segmente einer LineString als Line-List.
pub(crate) fn push_line_string(
    vertices: &mut Vec<ColorVertex>,
    line: &LineString,
    color: [f32; 4],
) {
    for (a, b) in line.segments() {
        vertices.push(ColorVertex::new(a.as_vec3(), color));
        vertices.push(ColorVertex::new(b.as_vec3(), color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::SampleScene;
    use approx::assert_relative_eq;

    #[test]
    fn cell_triangles_use_palette_and_highlight() {
        let model = SampleScene::ElevatedCellSpaces
            .build(10.0)
            .expect("Szene erwartet");
        let options = ViewerOptions::default();
        let mut triangles = Vec::new();

        build_cell_triangles(&model, &options, Some("Room2"), &mut triangles);

        // Drei Quadrate à zwei Dreiecke
        assert_eq!(triangles.len(), 6);
        assert_eq!(triangles[0].color, [0.0, 0.0, 1.0, 0.5]);
        assert_eq!(triangles[2].color, [1.0, 1.0, 0.0, 0.5]);
        assert_eq!(triangles[4].color, [0.0, 1.0, 1.0, 0.5]);
    }

    #[test]
    fn sort_puts_farthest_triangle_first() {
        let near = CellTriangle {
            positions: [Vec3::ZERO, Vec3::X, Vec3::Y],
            color: [1.0; 4],
        };
        let far = CellTriangle {
            positions: [
                Vec3::new(0.0, 0.0, -10.0),
                Vec3::new(1.0, 0.0, -10.0),
                Vec3::new(0.0, 1.0, -10.0),
            ],
            color: [0.0; 4],
        };
        let mut triangles = vec![near, far];

        sort_back_to_front(&mut triangles, Vec3::new(0.0, 0.0, 5.0));

        assert_eq!(triangles[0], far);
        assert_eq!(triangles[1], near);
    }

    #[test]
    fn unit_sphere_points_lie_on_sphere() {
        let sphere = unit_sphere(10);

        // Pol-Ringe: je 10 Dreiecke, Innenringe: je 20
        assert_eq!(sphere.len(), (2 * 10 + 8 * 20) * 3);
        for p in &sphere {
            assert_relative_eq!(p.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn sphere_and_lines_are_placed_in_world() {
        let unit = unit_sphere(4);
        let mut vertices = Vec::new();
        push_sphere(
            &mut vertices,
            &unit,
            DVec3::new(1.0, 2.0, 3.0),
            0.2,
            [1.0, 0.0, 0.0, 1.0],
        );
        for v in &vertices {
            let p = Vec3::from(v.position);
            assert_relative_eq!(p.distance(Vec3::new(1.0, 2.0, 3.0)), 0.2, epsilon = 1e-5);
        }

        vertices.clear();
        let line = LineString::new(vec![DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0)]);
        push_line_string(&mut vertices, &line, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(vertices[2].position, [1.0, 0.0, 0.0]);
    }
}
