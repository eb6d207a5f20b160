mod general;
mod mirror;
mod rotate;
mod translate;

pub use general::{GeneralTransform, TransformStep};
pub use mirror::Reflect;
pub use rotate::Rotate;
pub use translate::Translate;

use crate::lattice::{LatticePoint, Ring};
use crate::patch::Patch;

/// An exact integer transform of lattice rings.
///
/// Implementors map single points; transforms whose point map flips
/// orientation also report it so that [`GridTransform::apply`] can
/// reverse the vertex order and keep the ring's winding direction.
pub trait GridTransform {
    /// Maps a single lattice point.
    fn apply_point(&self, point: LatticePoint) -> LatticePoint;

    /// Whether the point map reverses orientation.
    fn reverses_winding(&self) -> bool {
        false
    }

    /// Maps every vertex of `ring`, preserving its winding direction.
    fn apply(&self, ring: &Ring) -> Ring {
        let mut points: Vec<LatticePoint> =
            ring.points().iter().map(|&p| self.apply_point(p)).collect();
        if self.reverses_winding() {
            points.reverse();
        }
        Ring::new(points)
    }

    /// Maps every placement of `patch`.
    fn apply_patch(&self, patch: &Patch) -> Patch {
        patch.iter().map(|ring| self.apply(ring)).collect()
    }
}
