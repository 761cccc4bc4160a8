//! Movement domain: the dynamic ceiling on horizontal speed.

use bevy::prelude::*;

use crate::movement::geometry::flatten;

/// Soft ceiling on horizontal speed.
///
/// Grows immediately when the body outruns it and relaxes to sit `buffer`
/// above the actual speed once the body slows down, never dropping below
/// `floor`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SpeedEnvelope {
    current: f32,
    floor: f32,
    buffer: f32,
}

impl SpeedEnvelope {
    pub fn new(floor: f32, buffer: f32) -> Self {
        Self {
            current: floor,
            floor,
            buffer,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn floor(&self) -> f32 {
        self.floor
    }

    pub fn buffer(&self) -> f32 {
        self.buffer
    }

    /// Raise the ceiling, e.g. while gliding or building speed on the ground.
    pub fn grow(&mut self, delta: f32) {
        self.current = (self.current + delta).max(self.floor);
    }

    /// Overwrite the ceiling with a recorded value (rewind release).
    pub fn reset_to(&mut self, value: f32) {
        self.current = value.max(self.floor);
    }

    /// Clamp the horizontal part of `velocity` to the ceiling and relax the
    /// ceiling when the body is well below it. The vertical component is
    /// returned untouched.
    pub fn restrict(&mut self, velocity: Vec3) -> Vec3 {
        let horizontal = flatten(velocity);
        let speed = horizontal.length();

        if speed > self.current {
            let clamped = horizontal / speed * self.current;
            return Vec3::new(clamped.x, velocity.y, clamped.z);
        }

        if speed < self.current - self.buffer {
            self.current = (self.buffer + speed).max(self.floor);
        }

        velocity
    }
}
