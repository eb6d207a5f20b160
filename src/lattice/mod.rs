mod point;
mod ring;

pub use point::{LatticePoint, LatticeVector};
pub use ring::Ring;
pub(crate) use ring::signed_area2;

/// A directed boundary edge of one placement, in winding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub start: LatticePoint,
    pub end: LatticePoint,
}

impl Edge {
    /// Creates a new directed edge.
    #[must_use]
    pub const fn new(start: LatticePoint, end: LatticePoint) -> Self {
        Self { start, end }
    }

    /// The same edge traversed in the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}
