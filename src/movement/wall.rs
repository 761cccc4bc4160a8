//! Movement domain: ray-cast wall detection for gliding.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::geometry::{horizontal_direction, right_of, within_angle, yaw};

/// Result of a single ray cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec3,
    pub normal: Vec3,
}

/// Ray-cast query against the physics world.
pub trait RayProbe {
    fn cast(&self, origin: Vec3, direction: Vec3, max_distance: f32, mask: LayerMask)
    -> Option<RayHit>;
}

/// Estimates wall normals ahead of and beside the character.
#[derive(Debug, Clone, Copy)]
pub struct WallDetector {
    pub mask: LayerMask,
    /// Rays in the curvature fan.
    pub curvature_rays: usize,
    /// Total fan width in degrees, centered on the travel direction.
    pub curvature_arc_degrees: f32,
    pub curvature_radius: f32,
    /// Sample points along the path travelled since the previous tick.
    pub transition_rays: usize,
    pub transition_distance: f32,
    pub max_glide_angle_degrees: f32,
}

impl WallDetector {
    /// Directions of the curvature fan around the horizontal travel direction.
    pub fn fan_directions(&self, velocity: Vec3) -> Vec<Vec3> {
        let forward = horizontal_direction(velocity);
        if forward == Vec3::ZERO || self.curvature_rays == 0 {
            return Vec::new();
        }
        if self.curvature_rays == 1 {
            return vec![forward];
        }

        let half_arc = self.curvature_arc_degrees * 0.5;
        let spacing = self.curvature_arc_degrees / (self.curvature_rays - 1) as f32;
        (0..self.curvature_rays)
            .map(|i| yaw(forward, -half_arc + spacing * i as f32))
            .collect()
    }

    /// Refresh `normal` from the averaged hits of the curvature fan.
    ///
    /// With no hits `normal` is left exactly as it was. Returns the hit count.
    pub fn refresh_normal(
        &self,
        probe: &impl RayProbe,
        position: Vec3,
        velocity: Vec3,
        normal: &mut Vec3,
    ) -> usize {
        let mut accumulated = Vec3::ZERO;
        let mut hits = 0;

        for direction in self.fan_directions(velocity) {
            if let Some(hit) = probe.cast(position, direction, self.curvature_radius, self.mask) {
                accumulated += hit.normal;
                hits += 1;
            }
        }

        if hits > 0 {
            let averaged = (accumulated / hits as f32).normalize_or_zero();
            if averaged != Vec3::ZERO {
                *normal = averaged;
            }
        }
        hits
    }

    /// Ray origins spread along the segment travelled since the previous tick.
    pub fn transition_origins(&self, previous: Vec3, current: Vec3) -> Vec<Vec3> {
        let travel = current - previous;
        let steps = self.transition_rays.saturating_sub(1).max(1) as f32;
        (0..self.transition_rays)
            .map(|i| previous + travel * (i as f32 / steps))
            .collect()
    }

    /// Look for a glide-eligible wall to either side of the travel path.
    ///
    /// A wall qualifies when its normal points back along the opposite-side
    /// probe within the maximum glide angle. The first qualifying hit wins.
    pub fn scan_transition(
        &self,
        probe: &impl RayProbe,
        previous: Vec3,
        current: Vec3,
        velocity: Vec3,
    ) -> Option<Vec3> {
        let forward = horizontal_direction(velocity);
        if forward == Vec3::ZERO {
            return None;
        }
        let right = right_of(forward);
        let left = -right;

        for origin in self.transition_origins(previous, current) {
            for (side, opposite) in [(right, left), (left, right)] {
                let Some(hit) = probe.cast(origin, side, self.transition_distance, self.mask)
                else {
                    continue;
                };
                if within_angle(opposite, hit.normal, self.max_glide_angle_degrees) {
                    return Some(hit.normal.normalize_or_zero());
                }
            }
        }
        None
    }
}
