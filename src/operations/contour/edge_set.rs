use std::collections::{HashMap, HashSet};

use crate::error::ContourError;
use crate::lattice::{Edge, LatticePoint, Ring};
use crate::patch::{Contour, Patch};

/// Directed boundary edges surviving cancellation.
///
/// Every placement edge either cancels its reverse (an interior edge shared
/// by two placements) or is inserted. Once all placements are absorbed,
/// the surviving edges are exactly the directed boundary of their union.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    edges: HashSet<Edge>,
}

impl EdgeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorbs the boundary edges of one placement.
    pub fn absorb_ring(&mut self, ring: &Ring) {
        for edge in ring.edges() {
            if !self.edges.remove(&edge.reversed()) {
                self.edges.insert(edge);
            }
        }
    }

    /// Absorbs every placement of `patch`, in order.
    pub fn absorb_patch(&mut self, patch: &Patch) {
        for ring in patch {
            self.absorb_ring(ring);
        }
    }

    /// Number of surviving edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[must_use]
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Walks the surviving edges as one closed loop.
    ///
    /// The walk starts at the least surviving start point and follows the
    /// unique edge leaving each reached point until it returns.
    ///
    /// # Errors
    ///
    /// - [`ContourError::Empty`] when no edges survive.
    /// - [`ContourError::Branching`] when two edges leave the same point
    ///   (placements touching at a single point).
    /// - [`ContourError::Open`] when no edge continues the walk.
    /// - [`ContourError::Disconnected`] when edges remain after the loop
    ///   closes (a second component or an enclosed hole).
    pub fn trace(&self) -> Result<Contour, ContourError> {
        let mut successors: HashMap<LatticePoint, LatticePoint> =
            HashMap::with_capacity(self.edges.len());
        for edge in &self.edges {
            if successors.insert(edge.start, edge.end).is_some() {
                return Err(ContourError::Branching { at: edge.start });
            }
        }

        let Some(&start) = successors.keys().min() else {
            return Err(ContourError::Empty);
        };

        let mut points = Vec::with_capacity(successors.len());
        let mut current = start;
        loop {
            let Some(next) = successors.remove(&current) else {
                return Err(ContourError::Open { at: current });
            };
            points.push(current);
            if next == start {
                break;
            }
            current = next;
        }

        if !successors.is_empty() {
            return Err(ContourError::Disconnected {
                remaining: successors.len(),
            });
        }

        Ok(Contour::new(points))
    }
}
