//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::rewind::RewindSettings;
use crate::movement::wall::WallDetector;
use crate::movement::GameLayer;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Continuous force pushed along the camera's flattened forward.
    pub initial_acceleration: f32,
    /// Lowest value the speed envelope may relax to.
    pub max_speed_floor: f32,
    /// Hysteresis band kept between actual speed and the envelope.
    pub speed_buffer: f32,
    /// Magnitude of gravity, pointing down.
    pub gravity: f32,
    pub body_mass: f32,
    pub jump_height: f32,
    pub jump_lockout: f32,
    pub steering_rate_degrees: f32,
    /// Steering only applies while camera and velocity are this closely aligned.
    pub steering_alignment_degrees: f32,
    pub crouch_downforce: f32,
    pub crouch_boost: f32,
    pub crouch_nudge: f32,
    pub ground_probe_distance: f32,
    pub glide_acceleration: f32,
    /// Inward push keeping the character on the wall while gliding.
    pub wall_force: f32,
    pub max_glide_angle_degrees: f32,
    pub wall_detection_distance: f32,
    pub transition_rays: usize,
    pub curvature_radius: f32,
    pub curvature_rays: usize,
    pub curvature_arc_degrees: f32,
    pub rewind_sample_period: f32,
    pub rewind_capacity: usize,
    pub rewind_snap_distance: f32,
    pub rewind_max_iterations: u32,
    pub rewind_max_steps_per_tick: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            initial_acceleration: 5.0,
            max_speed_floor: 16.0,
            speed_buffer: 2.0,
            gravity: 9.81,
            body_mass: 1.0,
            jump_height: 2.0,
            jump_lockout: 0.2,
            steering_rate_degrees: 160.0,
            steering_alignment_degrees: 70.0,
            crouch_downforce: 20.0,
            crouch_boost: 0.5,
            crouch_nudge: 0.5,
            ground_probe_distance: 1.1,
            glide_acceleration: 3.0,
            wall_force: 2.0,
            max_glide_angle_degrees: 30.0,
            wall_detection_distance: 1.0,
            transition_rays: 5,
            curvature_radius: 5.0,
            curvature_rays: 5,
            curvature_arc_degrees: 90.0,
            rewind_sample_period: 0.05,
            rewind_capacity: 100,
            rewind_snap_distance: 0.1,
            rewind_max_iterations: 100,
            rewind_max_steps_per_tick: 10.0,
        }
    }
}

impl MovementTuning {
    /// Launch speed reaching `jump_height` under gravity: v = sqrt(2gh).
    pub fn jump_speed(&self) -> f32 {
        (self.jump_height * 2.0 * self.gravity.abs()).sqrt()
    }

    pub fn wall_detector(&self) -> WallDetector {
        WallDetector {
            mask: GameLayer::Wall.into(),
            curvature_rays: self.curvature_rays,
            curvature_arc_degrees: self.curvature_arc_degrees,
            curvature_radius: self.curvature_radius,
            transition_rays: self.transition_rays,
            transition_distance: self.wall_detection_distance,
            max_glide_angle_degrees: self.max_glide_angle_degrees,
        }
    }

    pub fn rewind_settings(&self) -> RewindSettings {
        RewindSettings {
            sample_period: self.rewind_sample_period,
            snap_distance: self.rewind_snap_distance,
            max_iterations: self.rewind_max_iterations,
            max_steps_per_tick: self.rewind_max_steps_per_tick,
        }
    }
}

/// Logical input signals, polled once per frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct MovementInput {
    pub vertical: f32,
    pub horizontal: f32,
    pub jump_pressed: bool,
    pub rewind_pressed: bool,
    pub rewind_held: bool,
    pub crouch_held: bool,
}
