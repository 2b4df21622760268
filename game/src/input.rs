//! Player input handling.
//!
//! This module is the only keyboard reader in the repository: the movement
//! flags, the discrete rotate action, and the day/night toggle all flow
//! through here, so no two systems can ever fight over the same key.

use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use sim::{turn_walker, Heading};

use crate::player::Player;
use crate::settings::GameSettings;

/// The owned input-state object: the four directional flags, mirrored from
/// the keyboard once per frame.
///
/// Press sets a flag, release clears it; holding a key produces no repeated
/// transitions. Opposing flags may be true simultaneously.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Mirror the movement keys into [`InputState`].
pub fn handle_keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<GameSettings>,
    mut input_state: ResMut<InputState>,
) {
    input_state.forward = keyboard.pressed(settings.bindings.forward);
    input_state.backward = keyboard.pressed(settings.bindings.backward);
    input_state.left = keyboard.pressed(settings.bindings.left);
    input_state.right = keyboard.pressed(settings.bindings.right);
}

/// Apply the discrete rotate action: +45 degrees of yaw per rotate-key down
/// event.
///
/// With `rotate_on_key_repeat` enabled (the default), platform key-repeat
/// events fire the turn again while the key is held: a held key spins the
/// character in 45-degree snaps. Disabled, only the initial press turns.
pub fn turn_player(
    settings: Res<GameSettings>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut key_events: MessageReader<KeyboardInput>,
    mut players: Query<(&mut Heading, &mut Transform), With<Player>>,
) {
    let presses = if settings.rotate_on_key_repeat {
        key_events
            .read()
            .filter(|event| event.key_code == settings.bindings.rotate && event.state.is_pressed())
            .count()
    } else {
        usize::from(keyboard.just_pressed(settings.bindings.rotate))
    };

    if presses == 0 {
        return;
    }

    let Ok((mut heading, mut transform)) = players.single_mut() else {
        return;
    };

    for _ in 0..presses {
        turn_walker(&mut heading.0);
    }
    transform.rotation = Quat::from_rotation_y(heading.0);
}
