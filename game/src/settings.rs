//! Game settings loaded from `settings.ron`.
//!
//! The key bindings and the rotate-on-key-repeat toggle are the only
//! externally observable configuration of the scene. A missing or malformed
//! settings file falls back to defaults: the scene always starts.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

pub const SETTINGS_PATH: &str = "settings.ron";

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub bindings: KeyBindings,
    /// When true, holding the rotate key fires a 45-degree turn on every
    /// platform key-repeat event, not just on the initial press.
    pub rotate_on_key_repeat: bool,
    /// Linear volume of the looping beach ambience.
    pub music_volume: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            bindings: KeyBindings::default(),
            rotate_on_key_repeat: true,
            music_volume: 0.4,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub rotate: KeyCode,
    pub day_night: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::ArrowUp,
            backward: KeyCode::ArrowDown,
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            rotate: KeyCode::KeyG,
            day_night: KeyCode::KeyL,
        }
    }
}

/// Read `settings.ron` from the working directory, falling back to defaults.
pub fn load_settings() -> GameSettings {
    match fs::read_to_string(SETTINGS_PATH) {
        Ok(raw) => match ron::from_str::<GameSettings>(&raw) {
            Ok(settings) => {
                info!("Loaded settings from {SETTINGS_PATH}");
                settings
            }
            Err(e) => {
                warn!("Failed to parse {SETTINGS_PATH} ({e}); using default settings");
                GameSettings::default()
            }
        },
        Err(_) => {
            info!("No {SETTINGS_PATH} found; using default settings");
            GameSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_match_the_documented_set() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.forward, KeyCode::ArrowUp);
        assert_eq!(bindings.backward, KeyCode::ArrowDown);
        assert_eq!(bindings.left, KeyCode::ArrowLeft);
        assert_eq!(bindings.right, KeyCode::ArrowRight);
        assert_eq!(bindings.rotate, KeyCode::KeyG);
        assert_eq!(bindings.day_night, KeyCode::KeyL);
    }

    #[test]
    fn full_settings_file_parses() {
        let raw = r#"
            (
                bindings: (
                    forward: KeyW,
                    backward: KeyS,
                    left: KeyA,
                    right: KeyD,
                    rotate: KeyR,
                    day_night: KeyN,
                ),
                rotate_on_key_repeat: false,
                music_volume: 0.75,
            )
        "#;
        let settings: GameSettings = ron::from_str(raw).expect("valid settings should parse");
        assert_eq!(settings.bindings.forward, KeyCode::KeyW);
        assert_eq!(settings.bindings.rotate, KeyCode::KeyR);
        assert!(!settings.rotate_on_key_repeat);
        assert_eq!(settings.music_volume, 0.75);
    }

    #[test]
    fn partial_settings_fall_back_to_defaults_per_field() {
        let settings: GameSettings =
            ron::from_str("(music_volume: 0.2)").expect("partial settings should parse");
        assert_eq!(settings.music_volume, 0.2);
        assert!(settings.rotate_on_key_repeat);
        assert_eq!(settings.bindings.forward, KeyCode::ArrowUp);
    }
}
