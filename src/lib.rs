pub mod error;
pub mod lattice;
pub mod math;
pub mod operations;
pub mod patch;
pub mod tile;
pub mod world;

pub use error::{MonotileError, Result};
