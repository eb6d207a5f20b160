use crate::lattice::LatticePoint;

use super::GridTransform;

/// Mirrors rings across the lattice axis fixed by `(x, y) -> (x + y, -y)`.
///
/// The point map flips orientation, so the vertex order is reversed to
/// keep the winding convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reflect;

impl GridTransform for Reflect {
    fn apply_point(&self, point: LatticePoint) -> LatticePoint {
        LatticePoint::new(point.x + point.y, -point.y)
    }

    fn reverses_winding(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::Ring;
    use crate::tile::hat;

    #[test]
    fn reflect_is_an_involution() {
        let r = hat();
        assert_eq!(Reflect.apply(&Reflect.apply(&r)), r);
    }

    #[test]
    fn reflect_reverses_point_order() {
        let r = Ring::from_coords(&[(0, 0), (2, 0), (0, 1)]);
        let mirrored = Reflect.apply(&r);
        assert_eq!(mirrored, Ring::from_coords(&[(1, -1), (2, 0), (0, 0)]));
    }

    #[test]
    fn reflect_keeps_winding() {
        let r = hat();
        let mirrored = Reflect.apply(&r);
        assert_eq!(mirrored.signed_area2(), r.signed_area2());
    }

    #[test]
    fn canonical_hat_reflection() {
        let expected = Ring::from_coords(&[
            (-3, 0),
            (-4, 2),
            (-3, 3),
            (-2, 4),
            (0, 3),
            (0, 6),
            (3, 6),
            (4, 4),
            (3, 3),
            (6, 0),
            (6, -3),
            (4, -2),
            (3, -3),
            (0, 0),
        ]);
        assert_eq!(Reflect.apply(&hat()), expected);
    }
}
