mod orientation;

pub use orientation::Orientation;

use crate::lattice::Ring;

/// Vertices of the canonical hat tile in lattice coordinates.
pub const HAT_VERTICES: [(i64, i64); 14] = [
    (0, 0),
    (0, 3),
    (2, 2),
    (3, 3),
    (6, 0),
    (6, -3),
    (8, -4),
    (9, -6),
    (6, -6),
    (3, -3),
    (2, -4),
    (0, -3),
    (-2, -2),
    (-3, 0),
];

/// Returns the canonical hat placement every other placement derives from.
#[must_use]
pub fn hat() -> Ring {
    Ring::from_coords(&HAT_VERTICES)
}
