//! Background audio: looping beach ambience (waves and gulls).
//!
//! The ambience entity spawns paused and starts on the first click, the way
//! the scene has always behaved.

use bevy::audio::{AudioSink, Volume};
use bevy::prelude::*;

use crate::settings::GameSettings;
use crate::states::GameState;

/// Resource holding the loaded ambience asset
#[derive(Resource)]
pub struct BeachAudio {
    pub ambience: Handle<AudioSource>,
}

/// Marker for the looping ambience entity
#[derive(Component)]
pub struct AmbienceSound;

pub struct BeachAudioPlugin;

impl Plugin for BeachAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_audio);
        app.add_systems(OnEnter(GameState::Playing), spawn_ambience);
        app.add_systems(
            Update,
            start_ambience_on_click.run_if(in_state(GameState::Playing)),
        );
    }
}

fn setup_audio(mut commands: Commands, asset_server: Res<AssetServer>) {
    let ambience = asset_server.load("audio/ambient/beach_waves.ogg");
    commands.insert_resource(BeachAudio { ambience });
    info!("Audio system: loading beach ambience");
}

fn spawn_ambience(
    mut commands: Commands,
    audio: Option<Res<BeachAudio>>,
    settings: Res<GameSettings>,
    existing: Query<(), With<AmbienceSound>>,
) {
    if !existing.is_empty() {
        return;
    }
    let Some(audio) = audio else { return };

    commands.spawn((
        AmbienceSound,
        AudioPlayer::new(audio.ambience.clone()),
        PlaybackSettings::LOOP
            .paused()
            .with_volume(Volume::Linear(settings.music_volume)),
    ));
}

fn start_ambience_on_click(
    mouse_button: Res<ButtonInput<MouseButton>>,
    sinks: Query<&AudioSink, With<AmbienceSound>>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(sink) = sinks.single() else { return };
    if sink.is_paused() {
        sink.play();
        info!("Beach ambience started");
    }
}
