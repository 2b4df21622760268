//! The per-tick walk step: intent -> velocity -> candidate -> clamp ->
//! collision test -> commit or reject.
//!
//! This is the single authoritative mover for the scene. The `game` crate
//! calls [`step_walker`] exactly once per frame and must not integrate
//! movement anywhere else.

use bevy::prelude::*;

use crate::{Aabb, WalkIntent, WorldBounds, MAX_TICK_SECONDS, TURN_STEP, WALKER_SIZE, WALK_SPEED};

/// Accumulated yaw of the walker, in radians.
///
/// A pure additive accumulator: each rotate press adds [`TURN_STEP`] and
/// nothing ever wraps or clamps it.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Heading(pub f32);

/// What a walk step decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// The clamped candidate position that was tested against obstacles.
    pub candidate: Vec3,
    /// Whether the candidate was committed into the walker's position.
    pub committed: bool,
}

/// Advance the walker by one tick.
///
/// - `dt` is clamped to [`MAX_TICK_SECONDS`] before integrating, so a long
///   frame cannot produce a velocity spike.
/// - Intent flags contribute independently: forward subtracts `speed*dt`
///   on Z, backward adds it; left subtracts on X, right adds. Opposing
///   flags held together net to zero on that axis.
/// - The candidate is clamped into `bounds` on X and Z (Y untouched), then
///   a unit-size box around it is tested against every obstacle in order,
///   short-circuiting on the first hit.
/// - No hit commits the candidate into `position`; any hit discards the
///   whole move: the walker stays exactly where it was, with no
///   axis-separated sliding.
///
/// An empty obstacle slice always commits. A zero `dt` commits the
/// unchanged position. There is no failure path.
pub fn step_walker(
    intent: &WalkIntent,
    bounds: WorldBounds,
    obstacles: &[Aabb],
    position: &mut Vec3,
    dt: f32,
) -> StepOutcome {
    let dt = dt.min(MAX_TICK_SECONDS);

    let mut velocity = Vec3::ZERO;
    if intent.forward {
        velocity.z -= WALK_SPEED * dt;
    }
    if intent.backward {
        velocity.z += WALK_SPEED * dt;
    }
    if intent.left {
        velocity.x -= WALK_SPEED * dt;
    }
    if intent.right {
        velocity.x += WALK_SPEED * dt;
    }

    let candidate = bounds.clamp_horizontal(*position + velocity);
    let walker_box = Aabb::from_center_size(candidate, WALKER_SIZE);

    let blocked = obstacles.iter().any(|obstacle| obstacle.intersects(&walker_box));
    if !blocked {
        *position = candidate;
    }

    StepOutcome {
        candidate,
        committed: !blocked,
    }
}

/// Apply one discrete rotate action: +45 degrees of yaw.
pub fn turn_walker(yaw: &mut f32) {
    *yaw += TURN_STEP;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{WALKER_SPAWN, WORLD_HALF_EXTENT};
    use std::f32::consts::FRAC_PI_4;

    fn bounds() -> WorldBounds {
        WorldBounds::new(WORLD_HALF_EXTENT)
    }

    fn intent(forward: bool, backward: bool, left: bool, right: bool) -> WalkIntent {
        WalkIntent {
            forward,
            backward,
            left,
            right,
        }
    }

    #[test]
    fn idle_tick_is_a_no_op() {
        let mut position = Vec3::new(3.0, 0.5, -7.0);
        let outcome = step_walker(&WalkIntent::default(), bounds(), &[], &mut position, 0.1);
        assert_eq!(position, Vec3::new(3.0, 0.5, -7.0));
        assert!(outcome.committed);
    }

    #[test]
    fn cancelling_pairs_net_to_zero_velocity() {
        let mut position = WALKER_SPAWN;
        step_walker(&intent(true, true, true, true), bounds(), &[], &mut position, 0.1);
        assert_eq!(position, WALKER_SPAWN);
    }

    #[test]
    fn forward_tick_matches_reference_scenario() {
        // Walker at (0, 0.5, 0), forward only, dt=0.1, speed=10:
        // velocity (0, 0, -1), candidate (0, 0.5, -1), committed.
        let mut position = WALKER_SPAWN;
        let outcome = step_walker(&intent(true, false, false, false), bounds(), &[], &mut position, 0.1);
        assert_eq!(outcome.candidate, Vec3::new(0.0, 0.5, -1.0));
        assert!(outcome.committed);
        assert_eq!(position, Vec3::new(0.0, 0.5, -1.0));
    }

    #[test]
    fn unobstructed_in_bounds_move_commits_the_unclamped_candidate() {
        let mut position = Vec3::new(10.0, 0.5, 10.0);
        step_walker(&intent(false, false, false, true), bounds(), &[], &mut position, 0.1);
        assert_eq!(position, Vec3::new(11.0, 0.5, 10.0));
    }

    #[test]
    fn clamping_at_the_boundary_is_exact() {
        let mut position = Vec3::new(99.95, 0.5, -99.95);
        step_walker(&intent(true, false, false, true), bounds(), &[], &mut position, 0.1);
        assert_eq!(position.x, WORLD_HALF_EXTENT);
        assert_eq!(position.z, -WORLD_HALF_EXTENT);
        assert_eq!(position.y, 0.5);
    }

    #[test]
    fn obstacle_covering_the_candidate_blocks_the_reference_scenario() {
        let obstacle = Aabb::from_center_size(Vec3::new(0.0, 0.5, -1.0), Vec3::ONE);
        let mut position = WALKER_SPAWN;
        let outcome = step_walker(
            &intent(true, false, false, false),
            bounds(),
            &[obstacle],
            &mut position,
            0.1,
        );
        assert!(!outcome.committed);
        assert_eq!(position, WALKER_SPAWN);
    }

    #[test]
    fn rejection_discards_the_entire_move_with_no_sliding() {
        // Diagonal move; the obstacle would only block the Z component, but
        // the whole move is discarded: X does not advance either.
        let obstacle = Aabb::from_center_size(Vec3::new(1.0, 0.5, -1.0), Vec3::ONE);
        let mut position = WALKER_SPAWN;
        let outcome = step_walker(
            &intent(true, false, false, true),
            bounds(),
            &[obstacle],
            &mut position,
            0.1,
        );
        assert!(!outcome.committed);
        assert_eq!(position, WALKER_SPAWN);
    }

    #[test]
    fn first_intersecting_obstacle_decides_regardless_of_order() {
        let hit = Aabb::from_center_size(Vec3::new(0.0, 0.5, -1.0), Vec3::ONE);
        let miss = Aabb::from_center_size(Vec3::new(50.0, 0.5, 50.0), Vec3::ONE);

        let mut a = WALKER_SPAWN;
        let mut b = WALKER_SPAWN;
        let forward = intent(true, false, false, false);
        let first = step_walker(&forward, bounds(), &[hit, miss], &mut a, 0.1);
        let second = step_walker(&forward, bounds(), &[miss, hit], &mut b, 0.1);

        assert!(!first.committed);
        assert!(!second.committed);
        assert_eq!(a, b);
    }

    #[test]
    fn long_frame_delta_is_clamped() {
        let forward = intent(true, false, false, false);

        let mut clamped = WALKER_SPAWN;
        step_walker(&forward, bounds(), &[], &mut clamped, 5.0);

        let mut reference = WALKER_SPAWN;
        step_walker(&forward, bounds(), &[], &mut reference, 0.1);

        assert_eq!(clamped, reference);
        assert_eq!(clamped, Vec3::new(0.0, 0.5, -1.0));
    }

    #[test]
    fn zero_dt_commits_the_unchanged_position() {
        let mut position = WALKER_SPAWN;
        let outcome = step_walker(&intent(true, false, false, false), bounds(), &[], &mut position, 0.0);
        assert!(outcome.committed);
        assert_eq!(position, WALKER_SPAWN);
    }

    #[test]
    fn empty_obstacle_set_always_commits() {
        let mut position = Vec3::new(-5.0, 0.5, 8.0);
        for _ in 0..60 {
            let outcome = step_walker(&intent(false, true, true, false), bounds(), &[], &mut position, 1.0 / 60.0);
            assert!(outcome.committed);
        }
    }

    #[test]
    fn turn_adds_exactly_a_quarter_pi() {
        let mut yaw = 0.3;
        turn_walker(&mut yaw);
        assert_eq!(yaw, 0.3 + FRAC_PI_4);

        turn_walker(&mut yaw);
        turn_walker(&mut yaw);
        assert_eq!(yaw, 0.3 + 3.0 * FRAC_PI_4);
    }
}
