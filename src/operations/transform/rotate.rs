use crate::lattice::LatticePoint;

use super::GridTransform;

/// Order of the lattice rotation: six single steps are the identity.
const ROTATION_ORDER: u32 = 6;

/// Rotates rings by whole 60-degree steps about the lattice origin.
///
/// One step maps `(x, y)` to `(-y, x + y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotate {
    steps: u32,
}

impl Rotate {
    /// Creates a rotation by `steps` single steps.
    #[must_use]
    pub fn new(steps: u32) -> Self {
        Self { steps }
    }
}

impl GridTransform for Rotate {
    fn apply_point(&self, point: LatticePoint) -> LatticePoint {
        let mut p = point;
        for _ in 0..self.steps % ROTATION_ORDER {
            p = LatticePoint::new(-p.y, p.x + p.y);
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::Ring;
    use crate::tile::hat;

    fn step_by_step(ring: &Ring, count: u32) -> Ring {
        let mut r = ring.clone();
        for _ in 0..count {
            r = Rotate::new(1).apply(&r);
        }
        r
    }

    #[test]
    fn single_step() {
        let p = Rotate::new(1).apply_point(LatticePoint::new(2, 3));
        assert_eq!(p, LatticePoint::new(-3, 5));
    }

    #[test]
    fn twelve_single_steps_are_identity() {
        let r = hat();
        assert_eq!(step_by_step(&r, 12), r);
        assert_eq!(step_by_step(&r, 6), r);
    }

    #[test]
    fn k_single_steps_equal_one_k_step_rotation() {
        let r = hat();
        for k in 0..14 {
            assert_eq!(step_by_step(&r, k), Rotate::new(k).apply(&r), "k = {k}");
        }
    }

    #[test]
    fn three_steps_is_point_reflection() {
        let r = hat();
        let half_turn = Rotate::new(3).apply(&r);
        for (a, b) in r.points().iter().zip(half_turn.points()) {
            assert_eq!(*b, LatticePoint::new(-a.x, -a.y));
        }
    }

    #[test]
    fn rotation_preserves_area() {
        let r = hat();
        for k in 0..6 {
            assert_eq!(Rotate::new(k).apply(&r).signed_area2(), r.signed_area2());
        }
    }
}
