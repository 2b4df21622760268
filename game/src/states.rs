//! Game state machine

use bevy::prelude::*;

/// Main game states
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Waiting for the character model (and friends) to finish loading.
    #[default]
    Loading,
    /// The scene is live: movement, camera, lighting, and HUD all run.
    Playing,
}
