//! Scene construction: the sand floor and the beach props.
//!
//! Every prop that should block the walker carries an [`Obstacle`] with its
//! collision half-extents: spawning one is all it takes to register it; the
//! movement system reads the live set every tick.

use bevy::image::{ImageAddressMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor};
use bevy::math::Affine2;
use bevy::prelude::*;
use sim::{Obstacle, WORLD_HALF_EXTENT};

/// The floor covers the whole walkable square.
const FLOOR_SIZE: f32 = 2.0 * WORLD_HALF_EXTENT;

/// How many times the sand texture tiles across the floor.
const SAND_TILING: f32 = 16.0;

/// Root entity for all scene visuals
#[derive(Component)]
pub struct WorldRoot;

/// Marker for the sand floor
#[derive(Component)]
pub struct Floor;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_world);
    }
}

fn spawn_world(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Parent of floor / props. Needs the full spatial bundle or Bevy emits
    // B0004 warnings for the children.
    let root = commands
        .spawn((
            WorldRoot,
            Transform::default(),
            GlobalTransform::default(),
            Visibility::default(),
            InheritedVisibility::default(),
        ))
        .id();

    // --- Sand floor ---
    let sand_texture = asset_server.load_with_settings(
        "textures/sand.png",
        |settings: &mut ImageLoaderSettings| {
            settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
                address_mode_u: ImageAddressMode::Repeat,
                address_mode_v: ImageAddressMode::Repeat,
                ..default()
            });
        },
    );
    let floor_material = materials.add(StandardMaterial {
        base_color_texture: Some(sand_texture),
        uv_transform: Affine2::from_scale(Vec2::splat(SAND_TILING)),
        perceptual_roughness: 0.9,
        metallic: 0.0,
        ..default()
    });
    let floor = commands
        .spawn((
            Floor,
            Mesh3d(meshes.add(Plane3d::default().mesh().size(FLOOR_SIZE, FLOOR_SIZE))),
            MeshMaterial3d(floor_material),
            Transform::default(),
        ))
        .id();
    commands.entity(root).add_child(floor);

    // --- Palm trunks ---
    let trunk_mesh = meshes.add(Cylinder::new(0.35, 6.0));
    let trunk_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.32, 0.18),
        perceptual_roughness: 0.95,
        ..default()
    });
    let frond_mesh = meshes.add(Cone {
        radius: 2.2,
        height: 1.2,
    });
    let frond_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.18, 0.45, 0.16),
        perceptual_roughness: 0.8,
        ..default()
    });

    for trunk_pos in [Vec3::new(8.0, 3.0, -12.0), Vec3::new(-15.0, 3.0, 6.0)] {
        let trunk = commands
            .spawn((
                Mesh3d(trunk_mesh.clone()),
                MeshMaterial3d(trunk_material.clone()),
                Transform::from_translation(trunk_pos),
                Obstacle::new(Vec3::new(0.35, 3.0, 0.35)),
            ))
            .id();
        commands.entity(root).add_child(trunk);

        let fronds = commands
            .spawn((
                Mesh3d(frond_mesh.clone()),
                MeshMaterial3d(frond_material.clone()),
                Transform::from_translation(trunk_pos + Vec3::new(0.0, 3.3, 0.0)),
            ))
            .id();
        commands.entity(root).add_child(fronds);
    }

    // --- Beach crate ---
    let crate_entity = commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::new(1.2, 1.2, 1.2))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.72, 0.58, 0.36),
                perceptual_roughness: 0.9,
                ..default()
            })),
            Transform::from_xyz(4.0, 0.6, 3.0).with_rotation(Quat::from_rotation_y(0.6)),
            Obstacle::new(Vec3::splat(0.6)),
        ))
        .id();
    commands.entity(root).add_child(crate_entity);

    // --- Beach umbrella (pole blocks, canopy floats above head height) ---
    let pole = commands
        .spawn((
            Mesh3d(meshes.add(Cylinder::new(0.06, 2.6))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.85, 0.85, 0.88),
                perceptual_roughness: 0.4,
                metallic: 0.3,
                ..default()
            })),
            Transform::from_xyz(-6.0, 1.3, -4.0),
            Obstacle::new(Vec3::new(0.06, 1.3, 0.06)),
        ))
        .id();
    commands.entity(root).add_child(pole);

    let canopy = commands
        .spawn((
            Mesh3d(meshes.add(Cone {
                radius: 1.8,
                height: 0.8,
            })),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.85, 0.22, 0.2),
                perceptual_roughness: 0.7,
                ..default()
            })),
            Transform::from_xyz(-6.0, 2.7, -4.0),
        ))
        .id();
    commands.entity(root).add_child(canopy);

    // --- Scattered rocks ---
    let rock_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.5, 0.48, 0.46),
        perceptual_roughness: 1.0,
        ..default()
    });
    let mut rocks = 0;
    for _ in 0..6 {
        let angle = rand::random::<f32>() * std::f32::consts::TAU;
        // Keep a clear ring around the spawn point.
        let radius = 12.0 + rand::random::<f32>() * 30.0;
        let size = 0.4 + rand::random::<f32>() * 0.5;
        let pos = Vec3::new(angle.cos() * radius, size * 0.5, angle.sin() * radius);

        let rock = commands
            .spawn((
                Mesh3d(meshes.add(Sphere::new(size))),
                MeshMaterial3d(rock_material.clone()),
                Transform::from_translation(pos),
                Obstacle::new(Vec3::splat(size * 0.9)),
            ))
            .id();
        commands.entity(root).add_child(rock);
        rocks += 1;
    }

    info!(
        "Spawned beach scene: {FLOOR_SIZE}x{FLOOR_SIZE} floor, 2 palms, crate, umbrella, {rocks} rocks"
    );
}
