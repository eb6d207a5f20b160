/// 2D point type for continuous (world) coordinates.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type for continuous (world) coordinates.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rotation type for continuous (world) coordinates.
pub type Rotation2 = nalgebra::Rotation2<f64>;
