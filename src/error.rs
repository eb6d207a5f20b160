use thiserror::Error;

use crate::lattice::LatticePoint;

/// Top-level error type for patch assembly.
#[derive(Debug, Error)]
pub enum MonotileError {
    #[error(transparent)]
    Contour(#[from] ContourError),

    #[error(transparent)]
    Attach(#[from] AttachError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// A set of placements does not trace to one simple closed boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContourError {
    #[error("invalid contour: no boundary edges survive")]
    Empty,

    #[error("invalid contour: boundary branches at ({}, {})", .at.x, .at.y)]
    Branching { at: LatticePoint },

    #[error("invalid contour: boundary is open at ({}, {})", .at.x, .at.y)]
    Open { at: LatticePoint },

    #[error("invalid contour: {remaining} boundary edges left after closing the loop")]
    Disconnected { remaining: usize },
}

/// Errors raised while searching for an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachError {
    #[error("no valid attachment within ring distance {search_radius}")]
    NoValidAttachment { search_radius: u32 },
}

/// Errors raised by the recursive patch builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("generation {requested} is out of range [1, {max}]")]
    GenerationOutOfRange { requested: u32, max: u32 },
}

/// Convenience type alias for results using [`MonotileError`].
pub type Result<T> = std::result::Result<T, MonotileError>;
