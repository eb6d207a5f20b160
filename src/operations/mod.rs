pub mod attach;
pub mod build;
pub mod contour;
pub mod transform;
