//! Drei 2×2-Quadrate auf unterschiedlichen Höhen.

use crate::core::Polygon;
use glam::DVec3;

const SIZE: f64 = 2.0;

fn square(x: f64, y: f64, z: f64) -> Polygon {
    Polygon::quad(
        DVec3::new(x, y, z),
        DVec3::new(x + SIZE, y, z),
        DVec3::new(x + SIZE, y + SIZE, z),
        DVec3::new(x, y + SIZE, z),
    )
}

/// Je ein Quadrat pro CellSpace.
pub(super) fn squares() -> [Polygon; 3] {
    [
        square(0.0, 0.0, 0.0),
        square(3.0, 0.0, 1.0),
        square(0.0, 3.0, 2.0),
    ]
}
