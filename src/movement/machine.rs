//! Movement domain: the per-tick movement state machine.
//!
//! One tick resolves the mode, hands back rewind state if a rewind just
//! ended, runs exactly one behavior, clamps horizontal speed and writes the
//! result to the body in a single step.

use bevy::prelude::*;

use crate::movement::body::{BodyFrame, PendingMotion, PhysicsBody};
use crate::movement::envelope::SpeedEnvelope;
use crate::movement::geometry::{flatten, horizontal_direction, within_angle, yaw};
use crate::movement::rewind::{MotionSnapshot, RewindBuffer, RewindPlayback};
use crate::movement::wall::RayProbe;
use crate::movement::{MovementInput, MovementMode, MovementState, MovementTuning};

pub struct MovementStateMachine<'a> {
    pub tuning: &'a MovementTuning,
    pub state: &'a mut MovementState,
    pub envelope: &'a mut SpeedEnvelope,
    pub history: &'a mut RewindBuffer,
    pub playback: &'a mut RewindPlayback,
}

impl MovementStateMachine<'_> {
    /// Run one simulation tick and return the mode that ran.
    pub fn tick(
        &mut self,
        body: &mut impl PhysicsBody,
        probe: &impl RayProbe,
        input: &MovementInput,
        camera_forward: Vec3,
        dt: f32,
    ) -> MovementMode {
        let frame = BodyFrame::capture(body);
        let mut pending = PendingMotion::from(frame);

        self.state.jump_lockout = (self.state.jump_lockout - dt).max(0.0);

        let mode = self.determine_mode(&frame, probe, input);
        if mode != self.state.mode {
            debug!("Movement mode {:?} -> {:?}", self.state.mode, mode);
        }
        self.state.mode = mode;

        if mode != MovementMode::Rewinding {
            self.release_rewind(&mut pending);
        }

        match mode {
            MovementMode::Default => {
                self.default_movement(&mut pending, input, camera_forward, dt);
            }
            MovementMode::Gliding => self.glide(&frame, &mut pending, probe, input, dt),
            MovementMode::Rewinding => {
                self.rewind(&frame, &mut pending, input, camera_forward, dt);
            }
        }

        pending.velocity = self.envelope.restrict(pending.velocity);
        pending.apply(body);
        mode
    }

    /// Resolve this tick's mode. Rewind beats gliding beats default.
    pub fn determine_mode(
        &mut self,
        frame: &BodyFrame,
        probe: &impl RayProbe,
        input: &MovementInput,
    ) -> MovementMode {
        let previous = self
            .state
            .previous_position
            .replace(frame.position)
            .unwrap_or(frame.position);

        if input.rewind_pressed {
            // Re-pressed before a release tick ran: trim what the last rewind consumed
            if let Some((_, consumed)) = self.playback.release() {
                self.history.discard_newest(consumed);
            }
            let checkpoint = self.snapshot(frame);
            self.playback.begin(checkpoint);
            return MovementMode::Rewinding;
        }
        if input.rewind_held {
            return MovementMode::Rewinding;
        }

        if !self.state.touching_ground {
            let detector = self.tuning.wall_detector();
            if let Some(normal) =
                detector.scan_transition(probe, previous, frame.position, frame.velocity)
            {
                self.state.wall_normal = normal;
                return MovementMode::Gliding;
            }
        }

        MovementMode::Default
    }

    /// Record the body into the rewind history unless a rewind is scrubbing it.
    pub fn sample(&mut self, frame: &BodyFrame) -> bool {
        if self.state.mode == MovementMode::Rewinding {
            return false;
        }
        let snapshot = self.snapshot(frame);
        self.history.record(snapshot);
        true
    }

    fn snapshot(&self, frame: &BodyFrame) -> MotionSnapshot {
        MotionSnapshot {
            position: frame.position,
            velocity: frame.velocity,
            max_speed: self.envelope.current(),
        }
    }

    fn release_rewind(&mut self, pending: &mut PendingMotion) {
        let Some((target, consumed)) = self.playback.release() else {
            return;
        };
        pending.velocity = target.velocity;
        self.envelope.reset_to(target.max_speed);
        self.history.discard_newest(consumed);
        debug!(
            "Rewind released: velocity={:?}, max_speed={}, consumed={}",
            target.velocity, target.max_speed, consumed
        );
    }

    fn start_jump(&mut self, pending: &mut PendingMotion, direction: Vec3) {
        self.state.jump_lockout = self.tuning.jump_lockout;
        pending.impulse += direction.normalize_or_zero() * self.tuning.jump_speed();
        debug!("Jump: direction={:?}", direction);
    }

    fn default_movement(
        &mut self,
        pending: &mut PendingMotion,
        input: &MovementInput,
        camera_forward: Vec3,
        dt: f32,
    ) {
        let forward_input = if input.vertical.abs() > f32::EPSILON {
            input.vertical.signum()
        } else {
            0.0
        };
        let flat_forward = horizontal_direction(camera_forward);

        if self.state.touching_ground && !self.state.is_jumping() && input.jump_pressed {
            self.start_jump(pending, Vec3::Y);
        }

        // Drift steering: turn the velocity itself, not the thrust.
        if input.horizontal != 0.0
            && within_angle(
                flat_forward,
                horizontal_direction(pending.velocity),
                self.tuning.steering_alignment_degrees,
            )
        {
            let degrees = input.horizontal * self.tuning.steering_rate_degrees * dt;
            pending.velocity = yaw(pending.velocity, degrees);
        }

        pending.force += flat_forward * forward_input * self.tuning.initial_acceleration;

        if input.crouch_held {
            self.crouch(pending, dt);
        }
    }

    fn crouch(&mut self, pending: &mut PendingMotion, dt: f32) {
        pending.force += Vec3::NEG_Y * self.tuning.crouch_downforce;
        if !self.state.touching_ground {
            return;
        }

        let vertical = pending.velocity.y;
        let mut boost = vertical.abs() * self.tuning.crouch_boost;
        if vertical > 0.0 {
            boost *= 2.0;
        }
        let increment = boost * dt;
        self.envelope.grow(increment);
        pending.velocity +=
            horizontal_direction(pending.velocity) * increment * self.tuning.crouch_nudge;
    }

    fn glide(
        &mut self,
        frame: &BodyFrame,
        pending: &mut PendingMotion,
        probe: &impl RayProbe,
        input: &MovementInput,
        dt: f32,
    ) {
        if self.state.is_jumping() {
            return;
        }

        if input.jump_pressed {
            let direction = Vec3::Y + self.state.wall_normal;
            self.start_jump(pending, direction);
        }

        self.tuning.wall_detector().refresh_normal(
            probe,
            frame.position,
            pending.velocity,
            &mut self.state.wall_normal,
        );
        let wall_normal = self.state.wall_normal;

        let along_wall = wall_normal.cross(Vec3::Y).normalize_or_zero();
        let direction =
            (along_wall * flatten(pending.velocity).dot(along_wall)).normalize_or_zero();

        let increment = self.tuning.glide_acceleration * dt;
        let speed = pending.velocity.length() + increment;
        self.envelope.grow(increment);

        pending.velocity = direction * speed - wall_normal * self.tuning.wall_force;
    }

    fn rewind(
        &mut self,
        frame: &BodyFrame,
        pending: &mut PendingMotion,
        input: &MovementInput,
        camera_forward: Vec3,
        dt: f32,
    ) {
        if self.history.is_empty() {
            self.default_movement(pending, input, camera_forward, dt);
            return;
        }

        pending.velocity = Vec3::ZERO;
        let live = self.snapshot(frame);
        let settings = self.tuning.rewind_settings();
        match self.playback.step(&*self.history, live, dt, &settings) {
            Ok(Some(position)) => pending.position = Some(position),
            Ok(None) => {}
            Err(err) => warn!("{}", err),
        }
    }
}
