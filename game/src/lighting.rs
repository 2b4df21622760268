//! Lighting: ambient light plus a directional sun, with a day/night toggle.

use bevy::light::light_consts::lux;
use bevy::prelude::*;

use crate::settings::GameSettings;

// =============================================================================
// COMPONENTS & RESOURCES
// =============================================================================

/// Marker for the sun directional light (driven by the day/night toggle)
#[derive(Component)]
pub struct SunLight;

/// Whether the scene is currently lit as day or night.
#[derive(Resource, Debug)]
pub struct Daylight {
    pub is_day: bool,
}

impl Default for Daylight {
    fn default() -> Self {
        Self { is_day: true }
    }
}

// =============================================================================
// LIGHT LEVELS
// =============================================================================

const DAY_SUN_ILLUMINANCE: f32 = lux::FULL_DAYLIGHT;
const DAY_SUN_COLOR: Color = Color::WHITE;
const DAY_AMBIENT_COLOR: Color = Color::WHITE;
const DAY_AMBIENT_BRIGHTNESS: f32 = 300.0;
const DAY_SKY: Color = Color::srgb(0.48, 0.71, 0.89);

// Night is boosted well above physical moonlight so the scene stays readable.
const NIGHT_SUN_ILLUMINANCE: f32 = 400.0;
const NIGHT_SUN_COLOR: Color = Color::srgb(0.6, 0.8, 1.0);
const NIGHT_AMBIENT_COLOR: Color = Color::srgb(0.13, 0.13, 0.27);
const NIGHT_AMBIENT_BRIGHTNESS: f32 = 60.0;
const NIGHT_SKY: Color = Color::srgb(0.02, 0.03, 0.08);

/// Damping rate for the day/night transition (higher settles faster).
const TOGGLE_SMOOTH_RATE: f32 = 6.0;

// =============================================================================
// SYSTEMS
// =============================================================================

pub fn setup_lights(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: DAY_AMBIENT_COLOR,
        brightness: DAY_AMBIENT_BRIGHTNESS,
        affects_lightmapped_meshes: true,
    });
    commands.insert_resource(ClearColor(DAY_SKY));

    commands.spawn((
        SunLight,
        DirectionalLight {
            illuminance: DAY_SUN_ILLUMINANCE,
            shadows_enabled: true,
            color: DAY_SUN_COLOR,
            ..default()
        },
        Transform::from_xyz(20.0, 40.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Lighting initialized (day)");
}

/// Flip day/night on the toggle key (edge-triggered).
pub fn toggle_daylight(
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<GameSettings>,
    mut daylight: ResMut<Daylight>,
) {
    if keyboard.just_pressed(settings.bindings.day_night) {
        daylight.is_day = !daylight.is_day;
        info!("Switched to {}", if daylight.is_day { "day" } else { "night" });
    }
}

/// Ease the sun, ambient light, and sky toward the current daylight target.
pub fn apply_daylight(
    daylight: Res<Daylight>,
    time: Res<Time>,
    mut ambient: ResMut<AmbientLight>,
    mut clear_color: ResMut<ClearColor>,
    mut suns: Query<&mut DirectionalLight, With<SunLight>>,
) {
    let (sun_illuminance, sun_color, ambient_brightness, ambient_color, sky) = if daylight.is_day {
        (
            DAY_SUN_ILLUMINANCE,
            DAY_SUN_COLOR,
            DAY_AMBIENT_BRIGHTNESS,
            DAY_AMBIENT_COLOR,
            DAY_SKY,
        )
    } else {
        (
            NIGHT_SUN_ILLUMINANCE,
            NIGHT_SUN_COLOR,
            NIGHT_AMBIENT_BRIGHTNESS,
            NIGHT_AMBIENT_COLOR,
            NIGHT_SKY,
        )
    };

    let t = 1.0_f32 - (-TOGGLE_SMOOTH_RATE * time.delta_secs()).exp();

    ambient.brightness += (ambient_brightness - ambient.brightness) * t;
    ambient.color = lerp_color(ambient.color, ambient_color, t);
    clear_color.0 = lerp_color(clear_color.0, sky, t);

    for mut sun in suns.iter_mut() {
        sun.illuminance += (sun_illuminance - sun.illuminance) * t;
        sun.color = lerp_color(sun.color, sun_color, t);
    }
}

/// Helper to linearly interpolate between two colors
fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let a_rgba = a.to_srgba();
    let b_rgba = b.to_srgba();
    Color::srgba(
        a_rgba.red + (b_rgba.red - a_rgba.red) * t,
        a_rgba.green + (b_rgba.green - a_rgba.green) * t,
        a_rgba.blue + (b_rgba.blue - a_rgba.blue) * t,
        a_rgba.alpha + (b_rgba.alpha - a_rgba.alpha) * t,
    )
}
