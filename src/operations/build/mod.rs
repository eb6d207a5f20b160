mod recipe;

pub use recipe::{recipe, seed_block, RecipeStep, StepSource, MAX_GENERATION};

use tracing::{info, warn};

use crate::error::{BuildError, Result};
use crate::operations::attach::{AttachConfig, PatchAttacher};
use crate::operations::transform::GridTransform;
use crate::patch::Patch;

/// Both variants of one generation.
#[derive(Debug, Clone)]
struct Generation {
    bare: Patch,
    full: Patch,
}

/// Grows self-similar hat patches generation by generation.
///
/// Generation 1 is the fixed seed block. Each later generation starts from
/// the previous full patch and attaches rotated copies of the previous
/// generation at the recipe's neighbour positions, in recipe order.
#[derive(Debug, Default)]
pub struct PatchBuilder {
    attach: AttachConfig,
}

impl PatchBuilder {
    /// Creates a new `PatchBuilder` with the default attachment search.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_attach_config(mut self, attach: AttachConfig) -> Self {
        self.attach = attach;
        self
    }

    /// Builds the patch of `generation`, with or without its ear.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::GenerationOutOfRange`] outside
    /// `1..=MAX_GENERATION`, or the attachment error of the first recipe
    /// step that fails.
    pub fn build(&self, generation: u32, add_ear: bool) -> Result<Patch> {
        check_generation(generation)?;
        if generation == 1 {
            return Ok(seed_block(add_ear));
        }
        let previous = self.generation(generation - 1)?;
        self.grow(generation, &previous, add_ear, usize::MAX)
    }

    /// Builds the previous full generation plus only the lead attachment.
    ///
    /// # Errors
    ///
    /// Same as [`PatchBuilder::build`]; generation 1 has no lead step and
    /// is rejected as out of range.
    pub fn build_partial(&self, generation: u32) -> Result<Patch> {
        check_generation(generation)?;
        if generation == 1 {
            return Err(BuildError::GenerationOutOfRange {
                requested: generation,
                max: MAX_GENERATION,
            }
            .into());
        }
        let previous = self.generation(generation - 1)?;
        self.grow(generation, &previous, true, 1)
    }

    /// Builds bare and full patches of every level up to `generation`.
    fn generation(&self, generation: u32) -> Result<Generation> {
        let mut current = Generation {
            bare: seed_block(false),
            full: seed_block(true),
        };
        for g in 2..=generation {
            current = Generation {
                bare: self.grow(g, &current, false, usize::MAX)?,
                full: self.grow(g, &current, true, usize::MAX)?,
            };
        }
        Ok(current)
    }

    /// Applies at most `max_steps` steps of the recipe for `generation`.
    fn grow(
        &self,
        generation: u32,
        previous: &Generation,
        add_ear: bool,
        max_steps: usize,
    ) -> Result<Patch> {
        let steps = recipe(generation).ok_or(BuildError::GenerationOutOfRange {
            requested: generation,
            max: MAX_GENERATION,
        })?;

        let mut result = previous.full.clone();
        for (index, step) in steps
            .iter()
            .enumerate()
            .filter(|(_, s)| add_ear || !s.ear_only)
            .take(max_steps)
        {
            let source = match step.source {
                StepSource::Bare => &previous.bare,
                StepSource::Full => &previous.full,
            };
            let addition = step.transform().apply_patch(source);
            let attachment = PatchAttacher::new(&result, &addition)
                .with_config(self.attach)
                .execute()
                .inspect_err(|e| {
                    warn!(generation, step = index, error = %e, "recipe step failed");
                })?;
            result = attachment.patch;
        }

        info!(generation, add_ear, tiles = result.len(), "built generation");
        Ok(result)
    }
}

fn check_generation(generation: u32) -> Result<()> {
    if (1..=MAX_GENERATION).contains(&generation) {
        Ok(())
    } else {
        Err(BuildError::GenerationOutOfRange {
            requested: generation,
            max: MAX_GENERATION,
        }
        .into())
    }
}
