//! Movement domain: drives the state machine against avian rigid bodies.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::camera::FollowCamera;
use crate::movement::systems::collisions::SpatialProbe;
use crate::movement::{
    BodyFrame, ForceMode, MovementInput, MovementState, MovementStateMachine, MovementTuning,
    PhysicsBody, Player, RewindBuffer, RewindPlayback, RewindSampler, SpeedEnvelope,
};

/// [`PhysicsBody`] over avian's position and velocity components.
///
/// Continuous forces are integrated over the frame as `dv = F / m * dt`.
pub(crate) struct AvianBody<'a> {
    pub position: &'a mut Position,
    pub velocity: &'a mut LinearVelocity,
    pub inverse_mass: f32,
    pub dt: f32,
}

impl PhysicsBody for AvianBody<'_> {
    fn position(&self) -> Vec3 {
        self.position.0
    }

    fn set_position(&mut self, position: Vec3) {
        self.position.0 = position;
    }

    fn velocity(&self) -> Vec3 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity.0 = velocity;
    }

    fn apply_force(&mut self, force: Vec3, mode: ForceMode) {
        match mode {
            ForceMode::Force => self.velocity.0 += force * self.inverse_mass * self.dt,
            ForceMode::VelocityChange => self.velocity.0 += force,
        }
    }
}

type PlayerMotionQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static mut Position,
        &'static mut LinearVelocity,
        &'static mut MovementState,
        &'static mut SpeedEnvelope,
        &'static mut RewindBuffer,
        &'static mut RewindPlayback,
    ),
    With<Player>,
>;

pub(crate) fn step_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    spatial_query: SpatialQuery,
    camera: Query<&Transform, With<FollowCamera>>,
    mut query: PlayerMotionQuery,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    let camera_forward = camera
        .single()
        .map(|transform| *transform.forward())
        .unwrap_or(Vec3::NEG_Z);
    let probe = SpatialProbe::new(&spatial_query);
    let inverse_mass = tuning.body_mass.recip();

    for (mut position, mut velocity, mut state, mut envelope, mut history, mut playback) in
        &mut query
    {
        let mut body = AvianBody {
            position: &mut position,
            velocity: &mut velocity,
            inverse_mass,
            dt,
        };
        let mut machine = MovementStateMachine {
            tuning: &tuning,
            state: &mut state,
            envelope: &mut envelope,
            history: &mut history,
            playback: &mut playback,
        };
        machine.tick(&mut body, &probe, &input, camera_forward, dt);
    }
}

pub(crate) fn sample_rewind_history(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &Position,
            &LinearVelocity,
            &mut RewindSampler,
            &mut MovementState,
            &mut SpeedEnvelope,
            &mut RewindBuffer,
            &mut RewindPlayback,
        ),
        With<Player>,
    >,
) {
    for (position, velocity, mut sampler, mut state, mut envelope, mut history, mut playback) in
        &mut query
    {
        if !sampler.tick(time.delta()) {
            continue;
        }
        let mut machine = MovementStateMachine {
            tuning: &tuning,
            state: &mut state,
            envelope: &mut envelope,
            history: &mut history,
            playback: &mut playback,
        };
        machine.sample(&BodyFrame {
            position: position.0,
            velocity: velocity.0,
        });
    }
}
