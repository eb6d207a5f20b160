use std::ops::{Add, Neg, Sub};

/// A point on the tiling's skew integer lattice.
///
/// Equality is exact; points are used directly as hash keys during
/// boundary tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LatticePoint {
    pub x: i64,
    pub y: i64,
}

impl LatticePoint {
    /// Creates a new lattice point.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for LatticePoint {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// An integer displacement on the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LatticeVector {
    pub dx: i64,
    pub dy: i64,
}

impl LatticeVector {
    /// The zero displacement.
    pub const ZERO: Self = Self { dx: 0, dy: 0 };

    /// Creates a new lattice vector.
    #[must_use]
    pub const fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }

    /// Distance under the lattice's hexagonal metric:
    /// `max(|dx|, |dy|, |dx + dy|)`.
    #[must_use]
    pub fn ring_distance(self) -> u64 {
        self.dx
            .unsigned_abs()
            .max(self.dy.unsigned_abs())
            .max((self.dx + self.dy).unsigned_abs())
    }
}

impl From<(i64, i64)> for LatticeVector {
    fn from((dx, dy): (i64, i64)) -> Self {
        Self { dx, dy }
    }
}

impl Add<LatticeVector> for LatticePoint {
    type Output = LatticePoint;

    fn add(self, v: LatticeVector) -> LatticePoint {
        LatticePoint::new(self.x + v.dx, self.y + v.dy)
    }
}

impl Sub for LatticePoint {
    type Output = LatticeVector;

    fn sub(self, other: LatticePoint) -> LatticeVector {
        LatticeVector::new(self.x - other.x, self.y - other.y)
    }
}

impl Add for LatticeVector {
    type Output = LatticeVector;

    fn add(self, other: LatticeVector) -> LatticeVector {
        LatticeVector::new(self.dx + other.dx, self.dy + other.dy)
    }
}

impl Neg for LatticeVector {
    type Output = LatticeVector;

    fn neg(self) -> LatticeVector {
        LatticeVector::new(-self.dx, -self.dy)
    }
}
