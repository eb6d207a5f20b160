use super::{Edge, LatticePoint};

/// A single tile placement: a closed cyclic sequence of lattice points.
///
/// The last point connects back to the first. Rings are never mutated
/// once built; transforms produce new rings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ring {
    points: Vec<LatticePoint>,
}

impl Ring {
    /// Creates a ring from its vertices in winding order.
    #[must_use]
    pub fn new(points: Vec<LatticePoint>) -> Self {
        Self { points }
    }

    /// Creates a ring from `(x, y)` pairs.
    #[must_use]
    pub fn from_coords(coords: &[(i64, i64)]) -> Self {
        Self {
            points: coords.iter().copied().map(LatticePoint::from).collect(),
        }
    }

    /// The vertices in winding order.
    #[must_use]
    pub fn points(&self) -> &[LatticePoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates the directed boundary edges, closing back to the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Edge::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Twice the signed area in lattice coordinates (shoelace formula).
    ///
    /// The sign gives the winding direction.
    #[must_use]
    pub fn signed_area2(&self) -> i64 {
        signed_area2(&self.points)
    }

    /// Returns the vertices rotated cyclically to start at the least point.
    ///
    /// Two rings covering the same placement with different start vertices
    /// share the same canonical sequence.
    #[must_use]
    pub fn canonical(&self) -> Vec<LatticePoint> {
        let Some(start) = self
            .points
            .iter()
            .enumerate()
            .min_by_key(|&(_, p)| *p)
            .map(|(i, _)| i)
        else {
            return Vec::new();
        };
        let mut rotated = Vec::with_capacity(self.points.len());
        rotated.extend_from_slice(&self.points[start..]);
        rotated.extend_from_slice(&self.points[..start]);
        rotated
    }
}

impl From<Vec<LatticePoint>> for Ring {
    fn from(points: Vec<LatticePoint>) -> Self {
        Self::new(points)
    }
}

/// Twice the signed area of a closed point sequence.
pub(crate) fn signed_area2(points: &[LatticePoint]) -> i64 {
    let n = points.len();
    if n < 3 {
        return 0;
    }
    let mut sum = 0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum
}
