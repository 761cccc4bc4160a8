//! Movement domain: debug-only visualisation of the wall probes.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementMode, MovementState, MovementTuning, Player};
use crate::movement::geometry::{horizontal_direction, right_of};

pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    tuning: Res<MovementTuning>,
    query: Query<(&Position, &LinearVelocity, &MovementState), With<Player>>,
) {
    let detector = tuning.wall_detector();

    for (position, velocity, state) in &query {
        let forward = horizontal_direction(velocity.0);
        if forward == Vec3::ZERO {
            continue;
        }

        let previous = state.previous_position.unwrap_or(position.0);
        let right = right_of(forward) * detector.transition_distance;
        for origin in detector.transition_origins(previous, position.0) {
            gizmos.ray(origin, right, Color::srgb(0.9, 0.2, 0.2));
            gizmos.ray(origin, -right, Color::srgb(0.9, 0.2, 0.2));
        }

        if state.mode == MovementMode::Gliding {
            for direction in detector.fan_directions(velocity.0) {
                gizmos.ray(
                    position.0,
                    direction * detector.curvature_radius,
                    Color::srgb(0.2, 0.8, 0.9),
                );
            }
            gizmos.ray(position.0, state.wall_normal, Color::srgb(1.0, 0.9, 0.2));
        }
    }
}
