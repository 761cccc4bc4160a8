//! Core domain: seeded placement of mail pickups and dropoffs.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Height of trigger centers above the ground.
pub const SITE_HEIGHT: f32 = 1.5;
/// Minimum horizontal gap between a pickup and its dropoff.
pub const MIN_PAIR_SEPARATION: f32 = 10.0;
/// Keep sites off the spawn point.
pub const SPAWN_CLEARANCE: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MailSites {
    pub id: u32,
    pub point: Vec3,
    pub dropoff: Vec3,
}

fn random_site(rng: &mut ChaCha8Rng, radius: f32) -> Vec3 {
    let angle = rng.random_range(0.0..std::f32::consts::TAU);
    let distance = rng.random_range(SPAWN_CLEARANCE..radius.max(SPAWN_CLEARANCE + 1.0));
    Vec3::new(angle.cos() * distance, SITE_HEIGHT, angle.sin() * distance)
}

/// Place `count` pickup/dropoff pairs within `radius` of the origin.
pub fn mail_layout(seed: u64, count: u32, radius: f32) -> Vec<MailSites> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..count)
        .map(|id| {
            let point = random_site(&mut rng, radius);
            let mut dropoff = random_site(&mut rng, radius);
            // Bounded retries; the last draw is kept regardless
            for _ in 0..8 {
                if point.distance(dropoff) >= MIN_PAIR_SEPARATION {
                    break;
                }
                dropoff = random_site(&mut rng, radius);
            }
            MailSites { id, point, dropoff }
        })
        .collect()
}

/// Pose of each segment approximating an arc, as (center, yaw, length).
/// The arc sweeps counterclockwise from `start_degrees` around `center`.
pub fn arc_segments(
    center: Vec3,
    radius: f32,
    start_degrees: f32,
    sweep_degrees: f32,
    segments: u32,
) -> Vec<(Vec3, Quat, f32)> {
    let segments = segments.max(1);
    let step = sweep_degrees.to_radians() / segments as f32;
    let start = start_degrees.to_radians();
    let chord = 2.0 * radius * (step.abs() / 2.0).sin();

    (0..segments)
        .map(|i| {
            let a0 = start + step * i as f32;
            let a1 = a0 + step;
            let p0 = center + Vec3::new(a0.cos(), 0.0, a0.sin()) * radius;
            let p1 = center + Vec3::new(a1.cos(), 0.0, a1.sin()) * radius;
            let along = p1 - p0;
            let rotation = Quat::from_rotation_y(-along.z.atan2(along.x));
            ((p0 + p1) / 2.0, rotation, chord)
        })
        .collect()
}
