//! Movement domain: player spawn with physics and movement components.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    GameLayer, MovementState, MovementTuning, Player, RewindBuffer, RewindPlayback,
    RewindSampler, SpeedEnvelope,
};

const PLAYER_RADIUS: f32 = 0.5;
const PLAYER_CAPSULE_LENGTH: f32 = 1.0;
const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 2.0, 0.0);

pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    tuning: Res<MovementTuning>,
) {
    info!(
        "Spawning player: speed_floor={}, rewind_capacity={}, sample_period={}s",
        tuning.max_speed_floor, tuning.rewind_capacity, tuning.rewind_sample_period
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            MovementState::default(),
            SpeedEnvelope::new(tuning.max_speed_floor, tuning.speed_buffer),
            RewindBuffer::with_capacity(tuning.rewind_capacity),
            RewindPlayback::default(),
            RewindSampler::new(tuning.rewind_sample_period),
        ),
        // Rendering
        Mesh3d(meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_CAPSULE_LENGTH))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
        Transform::from_translation(PLAYER_SPAWN),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::capsule(PLAYER_RADIUS, PLAYER_CAPSULE_LENGTH),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Mass(tuning.body_mass),
            Friction::new(0.1),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Sensor],
            ),
        ),
    ));
}
