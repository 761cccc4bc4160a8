//! Delivery domain: pickup, dropoff and marker components.

use bevy::prelude::*;

/// Trigger where a piece of mail is picked up.
#[derive(Component, Debug)]
pub struct MailPoint {
    pub id: u32,
}

/// Trigger where the matching piece of mail is handed in.
/// Only counts deliveries while `armed`.
#[derive(Component, Debug)]
pub struct MailDropoff {
    pub id: u32,
    pub armed: bool,
    /// Marker shown while the dropoff is armed.
    pub indicator: Option<Entity>,
}

/// Bobs up and down around `origin_y` and turns to face the camera.
#[derive(Component, Debug)]
pub struct Hover {
    pub origin_y: f32,
    pub amplitude: f32,
    pub frequency: f32,
}

impl Hover {
    pub fn height_at(&self, seconds: f32) -> f32 {
        self.origin_y + (seconds * self.frequency).sin() * self.amplitude
    }
}
