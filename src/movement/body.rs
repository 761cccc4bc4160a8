//! Movement domain: the physics body seam and per-tick write-back.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceMode {
    /// Continuous force, integrated by the physics step.
    Force,
    /// Instantaneous change of velocity.
    VelocityChange,
}

/// Kinematic view of the rigid body the movement core drives.
///
/// The body stays the single owner of position and velocity; the core reads
/// it once per tick and writes back once.
pub trait PhysicsBody {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    fn velocity(&self) -> Vec3;
    fn set_velocity(&mut self, velocity: Vec3);
    fn apply_force(&mut self, force: Vec3, mode: ForceMode);
}

/// Body state captured at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyFrame {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl BodyFrame {
    pub fn capture(body: &impl PhysicsBody) -> Self {
        Self {
            position: body.position(),
            velocity: body.velocity(),
        }
    }
}

/// Mutations accumulated during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingMotion {
    pub position: Option<Vec3>,
    pub velocity: Vec3,
    pub force: Vec3,
    pub impulse: Vec3,
}

impl From<BodyFrame> for PendingMotion {
    fn from(frame: BodyFrame) -> Self {
        Self {
            position: None,
            velocity: frame.velocity,
            force: Vec3::ZERO,
            impulse: Vec3::ZERO,
        }
    }
}

impl PendingMotion {
    pub fn apply(&self, body: &mut impl PhysicsBody) {
        if let Some(position) = self.position {
            body.set_position(position);
        }
        body.set_velocity(self.velocity);
        if self.impulse != Vec3::ZERO {
            body.apply_force(self.impulse, ForceMode::VelocityChange);
        }
        if self.force != Vec3::ZERO {
            body.apply_force(self.force, ForceMode::Force);
        }
    }
}
