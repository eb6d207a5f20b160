use crate::lattice::{signed_area2, Edge, LatticePoint};

/// The single directed outer boundary of a patch.
///
/// Traced from surviving boundary edges, starting at the least lattice
/// point so that equal patches yield equal contours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    points: Vec<LatticePoint>,
}

impl Contour {
    pub(crate) fn new(points: Vec<LatticePoint>) -> Self {
        Self { points }
    }

    /// The boundary vertices in traversal order.
    #[must_use]
    pub fn points(&self) -> &[LatticePoint] {
        &self.points
    }

    /// Number of boundary edges (equal to the number of vertices).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Directed boundary edges, closing back to the first point.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Edge::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Twice the signed enclosed area, in lattice units.
    #[must_use]
    pub fn signed_area2(&self) -> i64 {
        signed_area2(&self.points)
    }
}
