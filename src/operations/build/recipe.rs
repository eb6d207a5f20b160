use crate::lattice::LatticeVector;
use crate::operations::transform::{GeneralTransform, GridTransform};
use crate::patch::Patch;
use crate::tile::hat;

/// Highest generation with a recipe.
pub const MAX_GENERATION: u32 = 6;

/// Which previous-generation patch a recipe step attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSource {
    /// The previous generation built without its ear.
    Bare,
    /// The previous generation built with its ear.
    Full,
}

/// One neighbour attachment of a generation recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeStep {
    pub source: StepSource,
    /// Rotation of the source patch in 60-degree steps.
    pub rotation: u32,
    /// Nominal translation. The attacher searches outward from here.
    pub hint: LatticeVector,
    /// Only attached when the ear is requested.
    pub ear_only: bool,
}

impl RecipeStep {
    /// The transform placing the source patch at its nominal position.
    #[must_use]
    pub fn transform(&self) -> GeneralTransform {
        GeneralTransform::new()
            .rotate(self.rotation)
            .translate(self.hint)
    }
}

/// `(source, rotation, ear_only)` shared by every generation.
const STEP_LAYOUT: [(StepSource, u32, bool); 6] = [
    (StepSource::Bare, 0, false),
    (StepSource::Full, 4, false),
    (StepSource::Full, 5, false),
    (StepSource::Full, 6, true),
    (StepSource::Full, 7, false),
    (StepSource::Full, 8, false),
];

/// Translation hints for generations 2 through 6, in `STEP_LAYOUT` order.
const HINTS: [[(i64, i64); 6]; 5] = [
    [(-6, 18), (-6, 0), (-6, -12), (6, -24), (12, 0), (12, 12)],
    [(-12, 42), (-48, 30), (-36, -24), (18, -66), (42, 12), (30, 66)],
    [(-30, 108), (-156, 108), (-114, -54), (48, -174), (120, 42), (78, 204)],
    [(-78, 282), (-438, 312), (-318, -132), (126, -456), (324, 120), (204, 564)],
    [(-204, 738), (-1176, 846), (-852, -336), (330, -1194), (858, 324), (534, 1506)],
];

/// The attachment steps building `generation` from `generation - 1`.
///
/// Returns `None` outside `2..=MAX_GENERATION`.
#[must_use]
pub fn recipe(generation: u32) -> Option<Vec<RecipeStep>> {
    if !(2..=MAX_GENERATION).contains(&generation) {
        return None;
    }
    let hints = HINTS[(generation - 2) as usize];
    Some(
        STEP_LAYOUT
            .iter()
            .zip(hints)
            .map(|(&(source, rotation, ear_only), hint)| RecipeStep {
                source,
                rotation,
                hint: hint.into(),
                ear_only,
            })
            .collect(),
    )
}

/// `(reflect, rotation, offset, ear_only)` of each generation-1 placement.
const SEED_LAYOUT: [(bool, u32, (i64, i64), bool); 8] = [
    (false, 0, (0, 0), false),
    (true, 3, (6, -6), false),
    (false, 4, (0, -6), false),
    (false, 5, (0, -12), false),
    (false, 6, (6, -12), false),
    (false, 7, (12, -12), false),
    (false, 8, (12, -6), false),
    (false, 6, (6, -18), true),
];

/// The fixed generation-1 block of hats, optionally with its ear.
///
/// Placements are fixed, not searched.
#[must_use]
pub fn seed_block(add_ear: bool) -> Patch {
    let tile = hat();
    SEED_LAYOUT
        .iter()
        .filter(|&&(_, _, _, ear_only)| add_ear || !ear_only)
        .map(|&(reflect, rotation, offset, _)| {
            let t = GeneralTransform::new();
            let t = if reflect { t.reflect() } else { t };
            t.rotate(rotation).translate(offset.into()).apply(&tile)
        })
        .collect()
}
