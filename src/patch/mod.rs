mod contour;

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::ContourError;
use crate::lattice::{LatticePoint, Ring};
use crate::operations::contour::ContourTracer;
use crate::operations::transform::GridTransform;

pub use contour::Contour;

/// An ordered collection of tile placements on the lattice.
///
/// A well-formed patch is simply connected: it traces to exactly one
/// outer boundary with no gaps. Patches are values; combining two
/// patches always yields a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Patch {
    placements: Vec<Ring>,
}

impl Patch {
    /// Creates a patch from placements in order.
    #[must_use]
    pub fn new(placements: Vec<Ring>) -> Self {
        Self { placements }
    }

    /// Creates a patch holding a single placement.
    #[must_use]
    pub fn single(ring: Ring) -> Self {
        Self {
            placements: vec![ring],
        }
    }

    #[must_use]
    pub fn placements(&self) -> &[Ring] {
        &self.placements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ring> {
        self.placements.iter()
    }

    /// Returns a new patch with `other`'s placements after this patch's.
    #[must_use]
    pub fn union(&self, other: &Patch) -> Patch {
        let mut placements = Vec::with_capacity(self.len() + other.len());
        placements.extend_from_slice(&self.placements);
        placements.extend_from_slice(&other.placements);
        Patch { placements }
    }

    /// Applies a grid transform to every placement.
    #[must_use]
    pub fn transformed<T: GridTransform + ?Sized>(&self, transform: &T) -> Patch {
        Patch {
            placements: self.placements.iter().map(|r| transform.apply(r)).collect(),
        }
    }

    /// Traces the patch's single outer boundary.
    ///
    /// # Errors
    ///
    /// Returns a [`ContourError`] if the placements are disconnected,
    /// touch only at a point, or enclose a hole.
    pub fn contour(&self) -> std::result::Result<Contour, ContourError> {
        ContourTracer::new(self).execute()
    }

    /// Finds pairs of placements covering exactly the same vertices.
    ///
    /// Rings are compared after cyclic rotation to their least point, so a
    /// repeated placement with a different start vertex is still reported.
    /// Each pair is `(first_index, later_index)`.
    #[must_use]
    pub fn duplicate_placements(&self) -> Vec<(usize, usize)> {
        let mut seen: HashMap<Vec<LatticePoint>, usize> = HashMap::new();
        let mut duplicates = Vec::new();
        for (i, ring) in self.placements.iter().enumerate() {
            match seen.entry(ring.canonical()) {
                Entry::Occupied(first) => {
                    duplicates.push((*first.get(), i));
                }
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
            }
        }
        duplicates
    }
}

impl<'a> IntoIterator for &'a Patch {
    type Item = &'a Ring;
    type IntoIter = std::slice::Iter<'a, Ring>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

impl FromIterator<Ring> for Patch {
    fn from_iter<I: IntoIterator<Item = Ring>>(iter: I) -> Self {
        Self {
            placements: iter.into_iter().collect(),
        }
    }
}
