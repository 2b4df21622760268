//! Axis-aligned bounding boxes for the walker and scene obstacles.
//!
//! Obstacle boxes are recomputed from the owning entity's *current* world
//! transform every tick, so an obstacle that moves or spawns late is picked
//! up on the next step without any registration protocol beyond carrying the
//! [`Obstacle`] component.

use bevy::prelude::*;

/// A world-space axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        Self::from_center_half_extents(center, size * 0.5)
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// World-space AABB of a yaw-rotated box.
    ///
    /// X/Z extents expand by |cos|/|sin| of the yaw so the axis-aligned box
    /// still contains the rotated footprint; the Y extent is unaffected
    /// (scene obstacles only ever yaw).
    pub fn from_rotated_half_extents(center: Vec3, half_extents: Vec3, yaw: f32) -> Self {
        let cos_y = yaw.cos().abs();
        let sin_y = yaw.sin().abs();
        let expanded = Vec3::new(
            half_extents.x * cos_y + half_extents.z * sin_y,
            half_extents.y,
            half_extents.x * sin_y + half_extents.z * cos_y,
        );
        Self::from_center_half_extents(center, expanded)
    }

    /// Inclusive intersection test: boxes that merely touch on a face count
    /// as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Marks an entity as blocking the walker, with the half-extents of its
/// collision box in local space.
///
/// The set of `Obstacle` entities is the scene's collidable registry:
/// append-only (entities are spawned, never retagged) and read fresh from
/// the ECS on every walk step.
#[derive(Component, Debug, Clone, Copy)]
pub struct Obstacle {
    pub half_extents: Vec3,
}

impl Obstacle {
    pub fn new(half_extents: Vec3) -> Self {
        Self { half_extents }
    }

    /// This obstacle's world-space AABB under its current transform.
    pub fn world_aabb(&self, transform: &GlobalTransform) -> Aabb {
        let (scale, rotation, translation) = transform.to_scale_rotation_translation();
        let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
        Aabb::from_rotated_half_extents(translation, self.half_extents * scale.abs(), yaw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0));
        let b = Aabb::from_center_size(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(2.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_faces_count_as_intersecting() {
        let a = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_center_size(Vec3::new(1.0, 0.0, 0.0), Vec3::ONE);
        assert!(a.intersects(&b));
    }

    #[test]
    fn separated_boxes_do_not_intersect() {
        let a = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_center_size(Vec3::new(1.001, 0.0, 0.0), Vec3::ONE);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn separation_on_the_vertical_axis_is_respected() {
        let a = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_center_size(Vec3::new(0.0, 3.0, 0.0), Vec3::ONE);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn quarter_turn_swaps_horizontal_extents() {
        let aabb =
            Aabb::from_rotated_half_extents(Vec3::ZERO, Vec3::new(2.0, 1.0, 0.5), FRAC_PI_2);
        assert!((aabb.max.x - 0.5).abs() < 1e-5);
        assert!((aabb.max.z - 2.0).abs() < 1e-5);
        assert!((aabb.max.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn diagonal_yaw_widens_the_footprint() {
        let aabb = Aabb::from_rotated_half_extents(Vec3::ZERO, Vec3::ONE, FRAC_PI_4);
        let expected = 2.0_f32.sqrt();
        assert!((aabb.max.x - expected).abs() < 1e-5);
        assert!((aabb.max.z - expected).abs() < 1e-5);
    }

    #[test]
    fn world_aabb_applies_translation_rotation_and_scale() {
        let transform = GlobalTransform::from(
            Transform::from_xyz(3.0, 1.0, 2.0)
                .with_rotation(Quat::from_rotation_y(FRAC_PI_2))
                .with_scale(Vec3::splat(2.0)),
        );
        let obstacle = Obstacle::new(Vec3::new(1.0, 0.5, 0.25));
        let aabb = obstacle.world_aabb(&transform);

        // Scaled half-extents (2.0, 1.0, 0.5), then X/Z swapped by the
        // quarter turn: world half-extents (0.5, 1.0, 2.0) around (3, 1, 2).
        assert!((aabb.min.x - 2.5).abs() < 1e-4);
        assert!((aabb.max.x - 3.5).abs() < 1e-4);
        assert!((aabb.min.y - 0.0).abs() < 1e-4);
        assert!((aabb.max.y - 2.0).abs() < 1e-4);
        assert!((aabb.min.z - 0.0).abs() < 1e-4);
        assert!((aabb.max.z - 4.0).abs() < 1e-4);
    }
}
