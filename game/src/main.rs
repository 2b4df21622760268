//! Playa: an interactive beach scene.
//!
//! A player-controlled character walks a bounded stretch of sand, bumping
//! into props, under a day/night toggle, an orbiting camera, looping beach
//! ambience, and a controls overlay. All kinematics live in the `sim` crate;
//! this binary is scene wiring.

mod audio;
mod camera;
mod hud;
mod input;
mod lighting;
mod player;
mod settings;
mod states;
mod world;

use bevy::prelude::*;
use bevy::window::WindowResolution;
use states::GameState;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Playa".to_string(),
            resolution: WindowResolution::new(1280, 720),
            ..default()
        }),
        ..default()
    }));

    // Settings are read after DefaultPlugins so the log output is visible.
    let game_settings = settings::load_settings();
    app.insert_resource(game_settings);

    // Game state machine
    app.init_state::<GameState>();
    app.init_resource::<input::InputState>();
    app.init_resource::<lighting::Daylight>();

    // Scene visuals, audio, and HUD
    app.add_plugins(world::WorldPlugin);
    app.add_plugins(audio::BeachAudioPlugin);
    app.add_plugins(hud::HudPlugin);

    // Setup systems (run once at startup)
    app.add_systems(
        Startup,
        (
            player::setup_character_assets,
            player::spawn_player,
            camera::setup_camera,
            lighting::setup_lights,
        ),
    );

    // Loading gate: wait for the character model before the scene goes live.
    app.add_systems(
        Update,
        player::advance_when_loaded.run_if(in_state(GameState::Loading)),
    );
    app.add_systems(OnEnter(GameState::Playing), player::attach_character_model);

    // Gameplay systems. ORDER MATTERS for the movement pipeline: keyboard
    // state must be mirrored before the walk step, and the camera must read
    // the committed pose, so that chain is hard-ordered.
    app.add_systems(
        Update,
        (
            (
                input::handle_keyboard_input,
                player::move_player,
                camera::update_camera,
            )
                .chain(),
            input::turn_player,
            camera::orbit_camera_input,
            lighting::toggle_daylight,
            lighting::apply_daylight,
        )
            .run_if(in_state(GameState::Playing)),
    );

    // Character rig wiring and idle/walk switching
    app.add_systems(
        Update,
        (player::setup_character_rig, player::update_walk_animation)
            .run_if(in_state(GameState::Playing)),
    );

    app.run();
}
