//! Core domain: startup spawning of the test course.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::layout::{arc_segments, mail_layout};
use crate::core::RunConfig;
use crate::delivery::{DeliveryTuning, Hover, MailDropoff, MailPoint};
use crate::movement::GameLayer;

const GROUND_SIZE: f32 = 200.0;
const WALL_HEIGHT: f32 = 6.0;
const WALL_THICKNESS: f32 = 0.5;
const WALL_LENGTH: f32 = 60.0;
const CORRIDOR_HALF_WIDTH: f32 = 8.0;
const TRIGGER_RADIUS: f32 = 1.2;

pub(crate) fn spawn_course(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    run_config: Res<RunConfig>,
    delivery: Res<DeliveryTuning>,
) {
    info!("Spawning course with seed: {}", run_config.seed);

    let ground_color = materials.add(Color::srgb(0.35, 0.4, 0.35));
    let wall_color = materials.add(Color::srgb(0.25, 0.25, 0.35));

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Ground slab, top face at y = 0
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Cuboid::new(GROUND_SIZE, 1.0, GROUND_SIZE))),
        MeshMaterial3d(ground_color),
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(GROUND_SIZE, 1.0, GROUND_SIZE),
        ground_layers,
    ));

    // Straight corridor walls along +Z
    let wall_mesh = meshes.add(Cuboid::new(WALL_THICKNESS, WALL_HEIGHT, WALL_LENGTH));
    for side in [-1.0, 1.0] {
        commands.spawn((
            Name::new("Wall"),
            Mesh3d(wall_mesh.clone()),
            MeshMaterial3d(wall_color.clone()),
            Transform::from_xyz(
                side * CORRIDOR_HALF_WIDTH,
                WALL_HEIGHT / 2.0,
                WALL_LENGTH / 2.0 + CORRIDOR_HALF_WIDTH,
            ),
            RigidBody::Static,
            Collider::cuboid(WALL_THICKNESS, WALL_HEIGHT, WALL_LENGTH),
            wall_layers,
        ));
    }

    // Curved wall: a half ring west of the spawn
    for (center, rotation, length) in arc_segments(Vec3::new(-30.0, 0.0, 0.0), 15.0, 0.0, 180.0, 24)
    {
        // Slight overlap so the ring has no gaps between segments
        let length = length + WALL_THICKNESS;
        commands.spawn((
            Name::new("Curved wall segment"),
            Mesh3d(meshes.add(Cuboid::new(length, WALL_HEIGHT, WALL_THICKNESS))),
            MeshMaterial3d(wall_color.clone()),
            Transform::from_translation(center + Vec3::Y * WALL_HEIGHT / 2.0)
                .with_rotation(rotation),
            RigidBody::Static,
            Collider::cuboid(length, WALL_HEIGHT, WALL_THICKNESS),
            wall_layers,
        ));
    }

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(20.0, 40.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    spawn_mail_sites(
        &mut commands,
        &mut meshes,
        &mut materials,
        run_config.seed,
        &delivery,
    );
}

fn spawn_mail_sites(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    seed: u64,
    delivery: &DeliveryTuning,
) {
    let sensor_layers = CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]);
    let marker_mesh = meshes.add(Cuboid::new(0.6, 0.4, 0.05));
    let point_color = materials.add(Color::srgb(0.95, 0.85, 0.3));
    let dropoff_color = materials.add(Color::srgb(0.3, 0.7, 0.95));

    let hover = || Hover {
        origin_y: 0.0,
        amplitude: delivery.hover_amplitude,
        frequency: delivery.hover_frequency,
    };

    for sites in mail_layout(seed, delivery.mail_count, delivery.course_radius) {
        commands
            .spawn((
                Name::new(format!("Mail point {}", sites.id)),
                MailPoint { id: sites.id },
                Transform::from_translation(sites.point),
                Visibility::default(),
                RigidBody::Static,
                Collider::sphere(TRIGGER_RADIUS),
                Sensor,
                sensor_layers,
            ))
            .with_children(|parent| {
                parent.spawn((
                    hover(),
                    Mesh3d(marker_mesh.clone()),
                    MeshMaterial3d(point_color.clone()),
                    Transform::default(),
                ));
            });

        let indicator = commands
            .spawn((
                hover(),
                Mesh3d(marker_mesh.clone()),
                MeshMaterial3d(dropoff_color.clone()),
                Transform::default(),
                Visibility::Hidden,
            ))
            .id();

        commands
            .spawn((
                Name::new(format!("Mail dropoff {}", sites.id)),
                MailDropoff {
                    id: sites.id,
                    armed: false,
                    indicator: Some(indicator),
                },
                Transform::from_translation(sites.dropoff),
                Visibility::default(),
                RigidBody::Static,
                Collider::sphere(TRIGGER_RADIUS),
                Sensor,
                sensor_layers,
            ))
            .add_child(indicator);
    }
}
