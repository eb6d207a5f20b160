mod search;

pub use search::ring_offsets;

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::error::{AttachError, Result};
use crate::lattice::{LatticePoint, LatticeVector};
use crate::operations::contour::{ContourTracer, EdgeSet};
use crate::operations::transform::{GridTransform, Translate};
use crate::patch::{Contour, Patch};

/// Ring distances searched by default: `0..DEFAULT_SEARCH_RADIUS`.
pub const DEFAULT_SEARCH_RADIUS: u32 = 1000;

/// The addition must share at least `1 / MIN_SHARE_DIVISOR` of its contour
/// with the main patch.
pub const MIN_SHARE_DIVISOR: usize = 5;

/// Extra shared contour points demanded by the quick filter on top of the
/// acceptance threshold.
pub const QUICK_FILTER_EXTRA_POINTS: usize = 1;

/// Search settings for [`PatchAttacher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachConfig {
    /// Ring distances `0..search_radius` are tried.
    pub search_radius: u32,
}

impl Default for AttachConfig {
    fn default() -> Self {
        Self {
            search_radius: DEFAULT_SEARCH_RADIUS,
        }
    }
}

impl AttachConfig {
    #[must_use]
    pub fn with_search_radius(mut self, search_radius: u32) -> Self {
        self.search_radius = search_radius;
        self
    }
}

/// An accepted placement of the addition against the main patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// The main patch followed by the translated addition.
    pub patch: Patch,
    /// Translation applied to the addition.
    pub translation: LatticeVector,
    /// Ring distance of `translation`.
    pub distance: u32,
    /// Boundary edges shared by main and the translated addition.
    pub shared_length: usize,
    /// Contour of the combined patch.
    pub contour: Contour,
}

/// Joins two patches by searching integer translations of one against
/// the other.
///
/// Translations are tried ring by ring, nearest first, so the first
/// accepted candidate has minimal ring distance. A candidate is accepted
/// when the combined placements trace to one contour and enough boundary
/// is shared to rule out corner or point contact.
#[derive(Debug)]
pub struct PatchAttacher<'a> {
    main: &'a Patch,
    addition: &'a Patch,
    config: AttachConfig,
}

impl<'a> PatchAttacher<'a> {
    /// Creates a new `PatchAttacher` with the default search radius.
    #[must_use]
    pub fn new(main: &'a Patch, addition: &'a Patch) -> Self {
        Self {
            main,
            addition,
            config: AttachConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: AttachConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the search.
    ///
    /// # Errors
    ///
    /// Returns a [`ContourError`](crate::error::ContourError) if either
    /// input does not trace to a valid contour, or
    /// [`AttachError::NoValidAttachment`] if no candidate within the search
    /// radius is accepted.
    pub fn execute(&self) -> Result<Attachment> {
        let search = Search::prepare(self.main, self.addition)?;

        for distance in 0..self.config.search_radius {
            trace!(distance, "searching ring");
            for translation in ring_offsets(distance) {
                if let Some(attachment) = search.evaluate(translation, distance) {
                    debug!(
                        dx = translation.dx,
                        dy = translation.dy,
                        distance,
                        shared_length = attachment.shared_length,
                        contour_len = attachment.contour.len(),
                        "attached patch"
                    );
                    return Ok(attachment);
                }
            }
        }

        warn!(
            search_radius = self.config.search_radius,
            main_tiles = self.main.len(),
            addition_tiles = self.addition.len(),
            "no valid attachment"
        );
        Err(AttachError::NoValidAttachment {
            search_radius: self.config.search_radius,
        }
        .into())
    }

    /// Checks a single translation with the full acceptance test.
    ///
    /// # Errors
    ///
    /// Returns a [`ContourError`](crate::error::ContourError) if either
    /// input does not trace to a valid contour.
    pub fn evaluate(&self, translation: LatticeVector) -> Result<Option<Attachment>> {
        let search = Search::prepare(self.main, self.addition)?;
        let distance = u32::try_from(translation.ring_distance()).unwrap_or(u32::MAX);
        Ok(search.evaluate(translation, distance))
    }
}

/// Joins `addition` onto `main` with the default search radius.
///
/// # Errors
///
/// See [`PatchAttacher::execute`].
pub fn attach(main: &Patch, addition: &Patch) -> Result<Patch> {
    Ok(PatchAttacher::new(main, addition).execute()?.patch)
}

/// Per-search state computed once from the untranslated inputs.
struct Search<'a> {
    main: &'a Patch,
    addition: &'a Patch,
    main_contour: Contour,
    main_points: HashSet<LatticePoint>,
    main_edges: EdgeSet,
    addition_contour: Contour,
}

impl<'a> Search<'a> {
    fn prepare(main: &'a Patch, addition: &'a Patch) -> Result<Self> {
        let main_edges = ContourTracer::new(main).edge_set();
        let main_contour = main_edges.trace()?;
        let addition_contour = ContourTracer::new(addition).execute()?;
        let main_points = main_contour.points().iter().copied().collect();
        Ok(Self {
            main,
            addition,
            main_contour,
            main_points,
            main_edges,
            addition_contour,
        })
    }

    fn evaluate(&self, translation: LatticeVector, distance: u32) -> Option<Attachment> {
        let addition_len = self.addition_contour.len();

        let shared_points = self
            .addition_contour
            .points()
            .iter()
            .filter(|&&p| self.main_points.contains(&(p + translation)))
            .count();
        if shared_points * MIN_SHARE_DIVISOR
            < addition_len + QUICK_FILTER_EXTRA_POINTS * MIN_SHARE_DIVISOR
        {
            return None;
        }

        // Main's surviving edges are exactly its contour edges, so only the
        // addition's placements need absorbing.
        let shifted = Translate::new(translation).apply_patch(self.addition);
        let mut edges = self.main_edges.clone();
        edges.absorb_patch(&shifted);
        let contour = edges.trace().ok()?;

        let twice_shared = (self.main_contour.len() + addition_len).checked_sub(contour.len())?;
        if twice_shared * MIN_SHARE_DIVISOR < 2 * addition_len {
            return None;
        }

        Some(Attachment {
            patch: self.main.union(&shifted),
            translation,
            distance,
            shared_length: twice_shared / 2,
            contour,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ContourError, MonotileError};
    use crate::operations::transform::GeneralTransform;
    use crate::tile::hat;

    fn mirrored_hat(offset: LatticeVector) -> Patch {
        let t = GeneralTransform::new().reflect().rotate(3).translate(offset);
        Patch::single(t.apply(&hat()))
    }

    #[test]
    fn joins_mirrored_neighbour_in_place() {
        let main = Patch::single(hat());
        let addition = mirrored_hat(LatticeVector::new(6, -6));
        let attachment = PatchAttacher::new(&main, &addition).execute().unwrap();
        assert_eq!(attachment.translation, LatticeVector::ZERO);
        assert_eq!(attachment.distance, 0);
        assert_eq!(attachment.shared_length, 4);
        assert_eq!(attachment.contour.len(), 2 * 14 - 2 * 4);
        assert_eq!(attachment.patch, main.union(&addition));
    }

    #[test]
    fn shared_edge_lies_on_both_tiles() {
        let main = Patch::single(hat());
        let addition = mirrored_hat(LatticeVector::new(6, -6));
        let placed = &addition.placements()[0];
        for (x, y) in [(9, -6), (6, -6), (3, -3), (2, -4), (0, -3)] {
            let p = LatticePoint::new(x, y);
            assert!(placed.points().contains(&p));
            assert!(main.placements()[0].points().contains(&p));
        }
    }

    #[test]
    fn finds_nearest_translation() {
        let main = Patch::single(hat());
        let addition = mirrored_hat(LatticeVector::ZERO);
        let attachment = PatchAttacher::new(&main, &addition).execute().unwrap();
        assert_eq!(attachment.translation, LatticeVector::new(0, 6));
        assert_eq!(attachment.distance, 6);
        assert_eq!(attachment.contour.len(), 20);
    }

    #[test]
    fn no_nearer_candidate_is_accepted() {
        let main = Patch::single(hat());
        let addition = mirrored_hat(LatticeVector::ZERO);
        let attacher = PatchAttacher::new(&main, &addition);
        let found = attacher.execute().unwrap();
        for d in 0..found.distance {
            for t in ring_offsets(d) {
                assert!(attacher.evaluate(t).unwrap().is_none(), "{t:?} accepted");
            }
        }
        for t in ring_offsets(found.distance).take_while(|&t| t != found.translation) {
            assert!(attacher.evaluate(t).unwrap().is_none(), "{t:?} accepted");
        }
        assert_eq!(attacher.evaluate(found.translation).unwrap(), Some(found));
    }

    #[test]
    fn search_is_deterministic() {
        let main = Patch::single(hat());
        let addition = mirrored_hat(LatticeVector::ZERO);
        let first = PatchAttacher::new(&main, &addition).execute().unwrap();
        let second = PatchAttacher::new(&main, &addition).execute().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn corner_contact_is_not_an_attachment() {
        let main = Patch::single(hat());
        let corner = Patch::single(Translate::new(LatticeVector::new(12, -6)).apply(&hat()));
        let config = AttachConfig::default().with_search_radius(1);
        let err = PatchAttacher::new(&main, &corner)
            .with_config(config)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            MonotileError::Attach(AttachError::NoValidAttachment { search_radius: 1 })
        ));
        assert!(PatchAttacher::new(&main, &corner)
            .evaluate(LatticeVector::ZERO)
            .unwrap()
            .is_none());
    }

    #[test]
    fn corner_contact_slides_into_place() {
        let main = Patch::single(hat());
        let corner = Patch::single(Translate::new(LatticeVector::new(12, -6)).apply(&hat()));
        let attachment = PatchAttacher::new(&main, &corner).execute().unwrap();
        assert_eq!(attachment.translation, LatticeVector::new(-12, 0));
        assert_eq!(attachment.contour.len(), 22);
    }

    #[test]
    fn invalid_main_is_reported() {
        let far = Translate::new(LatticeVector::new(100, 0)).apply(&hat());
        let main = Patch::new(vec![hat(), far]);
        let addition = Patch::single(hat());
        let err = attach(&main, &addition).unwrap_err();
        assert!(matches!(
            err,
            MonotileError::Contour(ContourError::Disconnected { .. })
        ));
    }

    #[test]
    fn attach_returns_combined_patch() {
        let main = Patch::single(hat());
        let addition = mirrored_hat(LatticeVector::new(6, -6));
        let combined = attach(&main, &addition).unwrap();
        assert_eq!(combined.len(), 2);
        assert_eq!(combined.contour().unwrap().len(), 20);
    }
}
