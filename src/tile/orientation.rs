use crate::lattice::Ring;
use crate::operations::transform::{GeneralTransform, GridTransform};

use super::hat;

/// How a placement is turned relative to the canonical tile.
///
/// Every placement equals `translate(rotate(reflect?(hat), rotation))` for
/// exactly one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Rotation in 60-degree lattice steps, `0..6`.
    pub rotation: u32,
    /// Whether the canonical tile was reflected before rotating.
    pub mirrored: bool,
}

impl Orientation {
    /// All twelve orientations, unmirrored first.
    #[must_use]
    pub fn all() -> impl Iterator<Item = Orientation> {
        [false, true].into_iter().flat_map(|mirrored| {
            (0..6).map(move |rotation| Orientation { rotation, mirrored })
        })
    }

    /// The transform taking the canonical tile to this orientation.
    #[must_use]
    pub fn transform(self) -> GeneralTransform {
        let t = GeneralTransform::new();
        let t = if self.mirrored { t.reflect() } else { t };
        t.rotate(self.rotation)
    }

    /// Angle in degrees at which per-tile artwork is turned for this
    /// placement, in the fabrication frame.
    ///
    /// The canonical tile sits at 60. Unmirrored placements advance by 60
    /// per rotation step; mirrored ones, whose artwork is flipped first,
    /// count the other way.
    #[must_use]
    pub fn angle_degrees(self) -> f64 {
        let step = self.rotation % 6;
        let sector = if self.mirrored { (7 - step) % 6 } else { (step + 1) % 6 };
        f64::from(sector) * 60.0
    }

    /// Classifies `ring` as a rotated, possibly mirrored, translated copy
    /// of the canonical tile. The start vertex may differ.
    ///
    /// Returns `None` for rings that are not a copy of the canonical tile.
    #[must_use]
    pub fn classify(ring: &Ring) -> Option<Orientation> {
        let canonical = hat();
        Orientation::all()
            .find(|o| same_up_to_translation(ring, &o.transform().apply(&canonical)))
    }
}

/// Whether `a` is `b` translated, allowing a cyclic shift of the start vertex.
fn same_up_to_translation(a: &Ring, b: &Ring) -> bool {
    let (a, b) = (a.points(), b.points());
    if a.len() != b.len() || a.is_empty() {
        return false;
    }
    let n = a.len();
    (0..n).any(|shift| {
        let offset = a[0] - b[shift];
        a.iter()
            .enumerate()
            .all(|(i, &p)| p == b[(shift + i) % n] + offset)
    })
}
