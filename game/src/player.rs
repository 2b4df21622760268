//! Player character: spawning, model loading, animation, and movement.
//!
//! Movement is the one place that integrates the walker's position: it
//! calls `sim::step_walker` exactly once per frame with a fresh snapshot of
//! the obstacle set. No other system moves the player.

use bevy::animation::graph::{AnimationGraph, AnimationGraphHandle, AnimationNodeIndex};
use bevy::animation::{AnimationClip, AnimationPlayer};
use bevy::prelude::*;
use sim::{step_walker, Heading, Obstacle, WalkIntent, WorldBounds, WALKER_SPAWN, WORLD_HALF_EXTENT};

use crate::input::InputState;
use crate::states::GameState;

// =============================================================================
// COMPONENTS & RESOURCES
// =============================================================================

/// The player-controlled walker
#[derive(Component)]
pub struct Player;

/// The entity we spawn `SceneRoot` onto for the character model.
#[derive(Component)]
pub struct CharacterModelRoot;

/// Loaded character assets (model + idle/walk animations)
#[derive(Resource, Clone)]
pub struct CharacterAssets {
    pub scene: Handle<Scene>,
    pub animation_graph: Handle<AnimationGraph>,
    pub idle_node: AnimationNodeIndex,
    pub walk_node: AnimationNodeIndex,
}

/// Tracks which clip the character rig is currently playing
#[derive(Component, Default)]
pub struct WalkAnimState {
    pub walking: bool,
}

// =============================================================================
// ASSET LOADING & SPAWNING
// =============================================================================

/// Load the character model and build an Idle/Walk animation graph.
pub fn setup_character_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut animation_graphs: ResMut<Assets<AnimationGraph>>,
) {
    let scene: Handle<Scene> = asset_server.load("models/Beachgoer.glb#Scene0");
    let idle_clip: Handle<AnimationClip> = asset_server.load("models/Beachgoer.glb#Animation0");
    let walk_clip: Handle<AnimationClip> = asset_server.load("models/Beachgoer.glb#Animation1");

    let (graph, nodes) = AnimationGraph::from_clips([idle_clip, walk_clip]);
    let animation_graph = animation_graphs.add(graph);

    commands.insert_resource(CharacterAssets {
        scene,
        animation_graph,
        idle_node: nodes[0],
        walk_node: nodes[1],
    });

    info!("Loading character assets (model + idle/walk clips)");
}

/// Spawn the player entity at its spawn point. The model is attached later,
/// once its assets are in.
pub fn spawn_player(mut commands: Commands) {
    commands.spawn((
        Player,
        WalkIntent::default(),
        Heading::default(),
        Transform::from_translation(WALKER_SPAWN),
        GlobalTransform::default(),
        Visibility::default(),
        InheritedVisibility::default(),
    ));
}

/// Hold in `Loading` until the character scene is in (or has definitively
/// failed: the scene still opens, just without the model).
pub fn advance_when_loaded(
    assets: Option<Res<CharacterAssets>>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(assets) = assets else { return };

    use bevy::asset::RecursiveDependencyLoadState;

    match asset_server.get_recursive_dependency_load_state(&assets.scene) {
        Some(RecursiveDependencyLoadState::Loaded) => {
            info!("Character assets loaded, entering scene");
            next_state.set(GameState::Playing);
        }
        Some(RecursiveDependencyLoadState::Failed(_)) => {
            error!("Character model failed to load; entering scene without it");
            next_state.set(GameState::Playing);
        }
        _ => {
            // Still loading
        }
    }
}

/// Attach the character model to the player once playing.
pub fn attach_character_model(
    mut commands: Commands,
    assets: Res<CharacterAssets>,
    players: Query<Entity, With<Player>>,
    existing: Query<(), With<CharacterModelRoot>>,
) {
    if !existing.is_empty() {
        return;
    }
    let Ok(player) = players.single() else {
        return;
    };

    // glTF models default to +Z forward; the walker treats -Z as forward.
    let model = commands
        .spawn((
            CharacterModelRoot,
            SceneRoot(assets.scene.clone()),
            Transform::from_xyz(0.0, -0.5, 0.0)
                .with_rotation(Quat::from_rotation_y(std::f32::consts::PI)),
            GlobalTransform::default(),
            Visibility::Inherited,
            InheritedVisibility::default(),
        ))
        .id();
    commands.entity(player).add_child(model);
}

// =============================================================================
// RIG SETUP & ANIMATION
// =============================================================================

/// Wire freshly spawned `AnimationPlayer`s (created by the glTF loader once
/// the scene instance is ready) to our graph and start them on Idle.
pub fn setup_character_rig(
    mut commands: Commands,
    assets: Option<Res<CharacterAssets>>,
    mut new_rigs: Query<(Entity, &mut AnimationPlayer), Added<AnimationPlayer>>,
) {
    let Some(assets) = assets else { return };

    for (entity, mut rig) in new_rigs.iter_mut() {
        commands.entity(entity).insert((
            WalkAnimState::default(),
            AnimationGraphHandle(assets.animation_graph.clone()),
        ));
        rig.start(assets.idle_node).repeat();
    }
}

/// Switch between Idle and Walk based on the held movement keys.
pub fn update_walk_animation(
    assets: Option<Res<CharacterAssets>>,
    players: Query<&WalkIntent, With<Player>>,
    mut rigs: Query<(&mut WalkAnimState, &mut AnimationPlayer)>,
) {
    let Some(assets) = assets else { return };
    let Ok(intent) = players.single() else { return };

    let moving = intent.is_walking();
    for (mut state, mut rig) in rigs.iter_mut() {
        if moving && !state.walking {
            rig.stop(assets.idle_node);
            rig.start(assets.walk_node).repeat();
            state.walking = true;
        } else if !moving && state.walking {
            rig.stop(assets.walk_node);
            rig.start(assets.idle_node).repeat();
            state.walking = false;
        }
    }
}

// =============================================================================
// MOVEMENT
// =============================================================================

/// The authoritative per-frame movement call.
pub fn move_player(
    time: Res<Time>,
    input_state: Res<InputState>,
    mut players: Query<(&mut Transform, &mut WalkIntent), With<Player>>,
    obstacles: Query<(&GlobalTransform, &Obstacle), Without<Player>>,
) {
    let Ok((mut transform, mut intent)) = players.single_mut() else {
        return;
    };

    intent.forward = input_state.forward;
    intent.backward = input_state.backward;
    intent.left = input_state.left;
    intent.right = input_state.right;

    // Snapshot the obstacle set under its current world transforms. The
    // walker's own volume is never part of it.
    let snapshot: Vec<sim::Aabb> = obstacles
        .iter()
        .map(|(obstacle_transform, obstacle)| obstacle.world_aabb(obstacle_transform))
        .collect();

    let bounds = WorldBounds::new(WORLD_HALF_EXTENT);
    let mut position = transform.translation;
    step_walker(&intent, bounds, &snapshot, &mut position, time.delta_secs());
    transform.translation = position;
}
