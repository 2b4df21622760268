//! Directional intent: which way the player is currently asking to walk.

use bevy::prelude::*;

/// Four independent movement flags, one per bound key.
///
/// Key-down sets a flag, key-up clears it. The flags are deliberately *not*
/// exclusive: forward and backward may both be true at once, in which case
/// their contributions cancel additively in the walk step.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl WalkIntent {
    /// True when no movement key is held at all.
    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.left || self.right)
    }

    /// True when at least one movement key is held (even if the held keys
    /// cancel out: the character still plays its walk animation, matching
    /// how a player perceives "I am pressing keys").
    pub fn is_walking(&self) -> bool {
        !self.is_idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_intent_is_idle() {
        let intent = WalkIntent::default();
        assert!(intent.is_idle());
        assert!(!intent.is_walking());
    }

    #[test]
    fn cancelling_pairs_still_count_as_walking() {
        let intent = WalkIntent {
            forward: true,
            backward: true,
            ..Default::default()
        };
        assert!(intent.is_walking());
    }
}
