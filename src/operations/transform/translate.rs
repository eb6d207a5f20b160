use crate::lattice::{LatticePoint, LatticeVector};

use super::GridTransform;

/// Shifts rings by an integer displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translate {
    displacement: LatticeVector,
}

impl Translate {
    /// Creates a new `Translate` transform.
    #[must_use]
    pub fn new(displacement: LatticeVector) -> Self {
        Self { displacement }
    }
}

impl GridTransform for Translate {
    fn apply_point(&self, point: LatticePoint) -> LatticePoint {
        point + self.displacement
    }
}
