//! Movement domain: the player's movement state machine.
//!
//! Each frame the player runs exactly one of three behaviors: default ground
//! locomotion, wall gliding, or a bounded rewind through recorded history.
//! The pure logic lives in [`machine`], [`wall`], [`envelope`] and
//! [`rewind`]; the systems adapt it to avian rigid bodies and ray casts.

mod body;
mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod envelope;
mod geometry;
mod machine;
mod resources;
mod rewind;
mod systems;
mod wall;

pub use body::{BodyFrame, ForceMode, PendingMotion, PhysicsBody};
pub use components::{GameLayer, MovementMode, MovementState, Player};
pub use envelope::SpeedEnvelope;
pub use machine::MovementStateMachine;
pub use resources::{MovementInput, MovementTuning};
pub use rewind::{
    MotionSnapshot, REWIND_CAPACITY, RewindBuffer, RewindError, RewindPlayback, RewindSampler,
    RewindSettings, SAMPLE_PERIOD,
};
pub use wall::{RayHit, RayProbe, WallDetector};

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{detect_ground, read_input, sample_rewind_history, step_movement};

/// System set for the movement tick, so collaborators can order around it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovementSystems;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, (configure_gravity, spawn_player))
            .add_systems(
                Update,
                (
                    read_input,
                    detect_ground,
                    step_movement,
                    sample_rewind_history,
                )
                    .chain()
                    .in_set(MovementSystems),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::draw_probe_gizmos.after(MovementSystems));
    }
}

fn configure_gravity(mut commands: Commands, tuning: Res<MovementTuning>) {
    commands.insert_resource(Gravity(Vec3::NEG_Y * tuning.gravity.abs()));
}
