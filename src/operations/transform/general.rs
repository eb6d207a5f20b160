use crate::lattice::{LatticePoint, LatticeVector};

use super::{GridTransform, Reflect, Rotate, Translate};

/// One step of a composed grid transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformStep {
    Rotate(u32),
    Reflect,
    Translate(LatticeVector),
}

impl TransformStep {
    fn apply_point(self, point: LatticePoint) -> LatticePoint {
        match self {
            Self::Rotate(steps) => Rotate::new(steps).apply_point(point),
            Self::Reflect => Reflect.apply_point(point),
            Self::Translate(v) => Translate::new(v).apply_point(point),
        }
    }
}

/// A sequence of grid transforms applied left to right.
///
/// `GeneralTransform::new().reflect().rotate(3).translate(v)` maps a ring
/// the same way as applying [`Reflect`], then [`Rotate`], then
/// [`Translate`] one after another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralTransform {
    steps: Vec<TransformStep>,
}

impl GeneralTransform {
    /// Creates the identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rotate(mut self, steps: u32) -> Self {
        self.steps.push(TransformStep::Rotate(steps));
        self
    }

    #[must_use]
    pub fn reflect(mut self) -> Self {
        self.steps.push(TransformStep::Reflect);
        self
    }

    #[must_use]
    pub fn translate(mut self, displacement: LatticeVector) -> Self {
        self.steps.push(TransformStep::Translate(displacement));
        self
    }

    /// Appends every step of `other` after this transform's steps.
    #[must_use]
    pub fn then(mut self, other: &GeneralTransform) -> Self {
        self.steps.extend_from_slice(&other.steps);
        self
    }

    /// The steps in application order.
    #[must_use]
    pub fn steps(&self) -> &[TransformStep] {
        &self.steps
    }
}

impl GridTransform for GeneralTransform {
    fn apply_point(&self, point: LatticePoint) -> LatticePoint {
        self.steps
            .iter()
            .fold(point, |p, step| step.apply_point(p))
    }

    fn reverses_winding(&self) -> bool {
        self.steps
            .iter()
            .filter(|s| matches!(s, TransformStep::Reflect))
            .count()
            % 2
            == 1
    }
}
