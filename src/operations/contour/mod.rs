mod edge_set;

pub use edge_set::EdgeSet;

use crate::error::ContourError;
use crate::patch::{Contour, Patch};

/// Computes the single outer boundary of a patch by edge cancellation.
///
/// Interior edges appear once in each direction across neighbouring
/// placements and cancel; the survivors are walked into a [`Contour`].
#[derive(Debug)]
pub struct ContourTracer<'a> {
    patch: &'a Patch,
}

impl<'a> ContourTracer<'a> {
    /// Creates a new `ContourTracer` for `patch`.
    #[must_use]
    pub fn new(patch: &'a Patch) -> Self {
        Self { patch }
    }

    /// Returns the surviving boundary edges without tracing them.
    #[must_use]
    pub fn edge_set(&self) -> EdgeSet {
        let mut edges = EdgeSet::new();
        edges.absorb_patch(self.patch);
        edges
    }

    /// Executes the trace.
    ///
    /// # Errors
    ///
    /// Returns a [`ContourError`] if the union of placements is not one
    /// simply-connected region.
    pub fn execute(&self) -> Result<Contour, ContourError> {
        self.edge_set().trace()
    }
}
