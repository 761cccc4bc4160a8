//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors and ramps
    Ground,
    /// Glide-eligible surfaces
    Wall,
    Player,
    /// Pickup and dropoff triggers - never block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementMode {
    #[default]
    Default,
    Gliding,
    Rewinding,
}

#[derive(Component, Debug, Clone)]
pub struct MovementState {
    pub mode: MovementMode,
    pub touching_ground: bool,
    /// Seconds left before jump input is accepted again.
    pub jump_lockout: f32,
    pub wall_normal: Vec3,
    /// Body position at the previous state evaluation.
    pub previous_position: Option<Vec3>,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            mode: MovementMode::Default,
            touching_ground: true,
            jump_lockout: 0.0,
            wall_normal: Vec3::ZERO,
            previous_position: None,
        }
    }
}

impl MovementState {
    pub fn is_jumping(&self) -> bool {
        self.jump_lockout > 0.0
    }
}
