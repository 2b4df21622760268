//! Kinematic core for the beach scene.
//!
//! Everything that decides *where the walker ends up* lives here: directional
//! intent, world bounds, axis-aligned bounding boxes, and the per-tick walk
//! step. No rendering, no asset I/O: the `game` crate owns all of that and
//! calls into this crate exactly once per frame.

use bevy::prelude::*;

pub mod aabb;
pub mod bounds;
pub mod intent;
pub mod walker;

pub use aabb::{Aabb, Obstacle};
pub use bounds::WorldBounds;
pub use intent::WalkIntent;
pub use walker::{step_walker, turn_walker, Heading, StepOutcome};

/// Walk speed in world units per second.
pub const WALK_SPEED: f32 = 10.0;

/// Upper bound on a single tick's elapsed time, in seconds.
///
/// Long frames (window dragged, app backgrounded) would otherwise integrate
/// into a single huge displacement that teleports the walker through
/// obstacles.
pub const MAX_TICK_SECONDS: f32 = 0.1;

/// Yaw applied per rotate-key press: 45 degrees.
pub const TURN_STEP: f32 = std::f32::consts::FRAC_PI_4;

/// Half-extent of the walkable square on the XZ plane.
pub const WORLD_HALF_EXTENT: f32 = 100.0;

/// Size of the walker's collision volume (a unit cube around its center).
pub const WALKER_SIZE: Vec3 = Vec3::ONE;

/// Where the walker stands when the scene opens.
pub const WALKER_SPAWN: Vec3 = Vec3::new(0.0, 0.5, 0.0);
