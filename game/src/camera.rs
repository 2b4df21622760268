//! Orbit camera around the scene pivot.
//!
//! Azimuth-only orbit: dragging the mouse swings the camera around the
//! pivot at a fixed elevation and distance: no pan, no zoom. Motion is
//! exponentially damped so the swing settles instead of snapping.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

/// Point the camera looks at and orbits around.
const ORBIT_PIVOT: Vec3 = Vec3::new(0.0, 5.0, 0.0);

/// Orbit radius, matched to the initial camera position (20, 15, 60).
const ORBIT_DISTANCE: f32 = 64.0;

/// Fixed elevation of the orbit: 45 degrees above the horizon.
const ORBIT_PITCH: f32 = std::f32::consts::FRAC_PI_4;

/// Radians of yaw per pixel of horizontal mouse drag.
const ORBIT_SENSITIVITY: f32 = 0.005;

/// Damping rate for camera motion (higher settles faster).
const CAMERA_SMOOTH_RATE: f32 = 35.0;

/// Orbit state: the azimuth the camera is swinging toward.
#[derive(Component, Debug)]
pub struct OrbitCamera {
    pub yaw: f32,
}

pub fn setup_camera(mut commands: Commands) {
    // Start where the scene opens: (20, 15, 60), looking at the pivot.
    let initial_yaw = f32::atan2(20.0, 60.0);
    commands.spawn((
        Camera3d::default(),
        Tonemapping::AcesFitted,
        OrbitCamera { yaw: initial_yaw },
        Transform::from_xyz(20.0, 15.0, 60.0).looking_at(ORBIT_PIVOT, Vec3::Y),
        GlobalTransform::default(),
        Visibility::default(),
        InheritedVisibility::default(),
    ));
    info!("Camera initialized: orbiting {:?} at distance {ORBIT_DISTANCE}", ORBIT_PIVOT);
}

/// Accumulate horizontal mouse drag into the orbit azimuth.
pub fn orbit_camera_input(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut cameras: Query<&mut OrbitCamera>,
) {
    let mut delta = Vec2::ZERO;
    for motion in mouse_motion.read() {
        delta += motion.delta;
    }

    if delta == Vec2::ZERO || !mouse_button.pressed(MouseButton::Left) {
        return;
    }

    let Ok(mut orbit) = cameras.single_mut() else {
        return;
    };
    orbit.yaw -= delta.x * ORBIT_SENSITIVITY;
}

/// Move the camera toward its orbit target with damping.
pub fn update_camera(
    time: Res<Time>,
    mut cameras: Query<(&OrbitCamera, &mut Transform), With<Camera3d>>,
) {
    let Ok((orbit, mut transform)) = cameras.single_mut() else {
        return;
    };

    let target_pos = orbit_position(ORBIT_PIVOT, orbit.yaw, ORBIT_PITCH, ORBIT_DISTANCE);
    let target_rot = look_at_level(target_pos, ORBIT_PIVOT);

    let cam_t = 1.0_f32 - (-CAMERA_SMOOTH_RATE * time.delta_secs()).exp();
    transform.translation = transform.translation.lerp(target_pos, cam_t);
    transform.rotation = transform.rotation.slerp(target_rot, cam_t);
}

/// Camera position on the orbit sphere around `pivot`.
fn orbit_position(pivot: Vec3, yaw: f32, pitch: f32, distance: f32) -> Vec3 {
    let horizontal = distance * pitch.cos();
    let behind_dir = Vec3::new(yaw.sin(), 0.0, yaw.cos());
    let vertical = distance * pitch.sin();
    pivot + behind_dir * horizontal + Vec3::new(0.0, vertical, 0.0)
}

/// A rotation looking from `eye` at `target` with no roll.
fn look_at_level(eye: Vec3, target: Vec3) -> Quat {
    Transform::from_translation(eye).looking_at(target, Vec3::Y).rotation
}
