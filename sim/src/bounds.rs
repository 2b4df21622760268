//! The square world boundary on the horizontal plane.

use bevy::prelude::*;

/// A scalar half-extent defining the walkable region `[-limit, +limit]` on
/// both X and Z. Fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub half_extent: f32,
}

impl WorldBounds {
    pub fn new(half_extent: f32) -> Self {
        Self { half_extent }
    }

    /// Clamp the horizontal coordinates of `point` into the bounds.
    ///
    /// Y passes through untouched: the walk step never alters the walker's
    /// height.
    pub fn clamp_horizontal(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(-self.half_extent, self.half_extent),
            point.y,
            point.z.clamp(-self.half_extent, self.half_extent),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_both_axes_and_both_signs() {
        let bounds = WorldBounds::new(100.0);
        let clamped = bounds.clamp_horizontal(Vec3::new(150.0, 2.0, -220.5));
        assert_eq!(clamped, Vec3::new(100.0, 2.0, -100.0));
    }

    #[test]
    fn interior_points_pass_through_unchanged() {
        let bounds = WorldBounds::new(100.0);
        let point = Vec3::new(-42.5, 0.5, 99.999);
        assert_eq!(bounds.clamp_horizontal(point), point);
    }

    #[test]
    fn height_is_never_clamped() {
        let bounds = WorldBounds::new(10.0);
        let clamped = bounds.clamp_horizontal(Vec3::new(0.0, 5000.0, 0.0));
        assert_eq!(clamped.y, 5000.0);
    }
}
