use std::f64::consts::FRAC_PI_3;

use crate::lattice::{LatticePoint, Ring};
use crate::math::{Point2, Rotation2, Vector2};
use crate::patch::Patch;
use crate::tile::Orientation;

/// A placement in continuous coordinates, ready for the geometry engine.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldTile {
    pub outline: Vec<Point2>,
    /// Orientation of the placement, if it is a copy of the canonical tile.
    pub orientation: Option<Orientation>,
}

/// Affine map from lattice to continuous coordinates:
/// `world(p) = origin + p.x * basis_x + p.y * basis_y`.
///
/// `basis_y` is `basis_x` turned 60 degrees clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldMapper {
    origin: Point2,
    basis_x: Vector2,
    basis_y: Vector2,
}

impl WorldMapper {
    /// Creates a mapper from an origin and the image of the lattice x axis.
    #[must_use]
    pub fn new(origin: Point2, basis_x: Vector2) -> Self {
        let basis_y = Rotation2::new(-FRAC_PI_3) * basis_x;
        Self {
            origin,
            basis_x,
            basis_y,
        }
    }

    /// The frame used for the fabricated panels: 7.1 units per lattice step.
    #[must_use]
    pub fn fabrication() -> Self {
        Self::new(Point2::new(-100.0, -1400.0), Vector2::new(0.0, 7.1))
    }

    /// World position of the lattice origin.
    #[must_use]
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// World image of the lattice vector `(1, 0)`.
    #[must_use]
    pub fn basis_x(&self) -> Vector2 {
        self.basis_x
    }

    /// World image of the lattice vector `(0, 1)`.
    #[must_use]
    pub fn basis_y(&self) -> Vector2 {
        self.basis_y
    }

    /// Maps one lattice point.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn to_world_point(&self, p: LatticePoint) -> Point2 {
        self.origin + self.basis_x * p.x as f64 + self.basis_y * p.y as f64
    }

    /// Maps one placement, keeping its vertex order.
    #[must_use]
    pub fn to_world_ring(&self, ring: &Ring) -> Vec<Point2> {
        ring.points()
            .iter()
            .map(|&p| self.to_world_point(p))
            .collect()
    }

    /// Maps every placement of `patch`, in order.
    #[must_use]
    pub fn to_world(&self, patch: &Patch) -> Vec<Vec<Point2>> {
        patch.iter().map(|ring| self.to_world_ring(ring)).collect()
    }

    /// Maps every placement together with its exact orientation.
    #[must_use]
    pub fn to_world_tiles(&self, patch: &Patch) -> Vec<WorldTile> {
        patch
            .iter()
            .map(|ring| WorldTile {
                outline: self.to_world_ring(ring),
                orientation: Orientation::classify(ring),
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::operations::build::seed_block;
    use crate::tile::hat;

    #[test]
    fn basis_y_is_clockwise_sixty_degrees() {
        let mapper = WorldMapper::new(Point2::origin(), Vector2::new(1.0, 0.0));
        assert_relative_eq!(mapper.basis_y().x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(mapper.basis_y().y, -(3.0_f64.sqrt()) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn maps_points_affinely() {
        let mapper = WorldMapper::new(Point2::new(1.0, 2.0), Vector2::new(1.0, 0.0));
        let p = mapper.to_world_point(LatticePoint::new(2, 2));
        assert_relative_eq!(p.x, 4.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.0 - 3.0_f64.sqrt(), epsilon = 1e-12);
        let o = mapper.to_world_point(LatticePoint::new(0, 0));
        assert_relative_eq!(o.x, 1.0);
        assert_relative_eq!(o.y, 2.0);
    }

    #[test]
    fn fabrication_frame() {
        let mapper = WorldMapper::fabrication();
        assert_relative_eq!(mapper.basis_y().x, 7.1 * 3.0_f64.sqrt() / 2.0, epsilon = 1e-12);
        assert_relative_eq!(mapper.basis_y().y, 3.55, epsilon = 1e-12);
        let p = mapper.to_world_point(LatticePoint::new(1, 0));
        assert_relative_eq!(p.x, -100.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, -1392.9, epsilon = 1e-9);
    }

    #[test]
    fn lattice_rotation_is_sixty_degrees_in_world() {
        // Rotating (1, 0) one lattice step gives (0, 1): basis_x maps to basis_y.
        let mapper = WorldMapper::new(Point2::origin(), Vector2::new(2.0, 1.0));
        let a = mapper.to_world_point(LatticePoint::new(1, 0)) - Point2::origin();
        let b = mapper.to_world_point(LatticePoint::new(0, 1)) - Point2::origin();
        assert_relative_eq!(a.norm(), b.norm(), epsilon = 1e-12);
        assert_relative_eq!(a.angle(&b), FRAC_PI_3, epsilon = 1e-12);
    }

    #[test]
    fn patch_maps_ring_by_ring() {
        let mapper = WorldMapper::fabrication();
        let block = seed_block(true);
        let rings = mapper.to_world(&block);
        assert_eq!(rings.len(), 8);
        assert!(rings.iter().all(|r| r.len() == 14));
        assert_eq!(rings[0], mapper.to_world_ring(&hat()));
    }

    #[test]
    fn tiles_carry_orientation() {
        let tiles = WorldMapper::fabrication().to_world_tiles(&seed_block(false));
        assert_eq!(tiles.len(), 7);
        assert!(tiles.iter().all(|t| t.orientation.is_some()));
        assert!(tiles[1].orientation.unwrap().mirrored);
        assert!(!tiles[0].orientation.unwrap().mirrored);
    }
}
