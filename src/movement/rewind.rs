//! Movement domain: recorded motion history and interpolated scrub-back playback.

use std::collections::VecDeque;
use std::fmt;

use bevy::prelude::*;

/// Default number of samples kept (five seconds at the default sample period).
pub const REWIND_CAPACITY: usize = 100;

/// Seconds between two recorded samples.
pub const SAMPLE_PERIOD: f32 = 0.05;

/// One recorded moment of the body's motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSnapshot {
    pub position: Vec3,
    pub velocity: Vec3,
    pub max_speed: f32,
}

impl MotionSnapshot {
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            velocity: self.velocity.lerp(other.velocity, t),
            max_speed: self.max_speed * (1.0 - t) + other.max_speed * t,
        }
    }
}

/// Fixed-capacity history of snapshots, newest first.
#[derive(Component, Debug, Clone)]
pub struct RewindBuffer {
    samples: VecDeque<MotionSnapshot>,
    capacity: usize,
}

impl Default for RewindBuffer {
    fn default() -> Self {
        Self::with_capacity(REWIND_CAPACITY)
    }
}

impl RewindBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Sample `index` steps back from the newest one.
    pub fn get(&self, index: usize) -> Option<&MotionSnapshot> {
        self.samples.get(index)
    }

    pub fn head(&self) -> Option<&MotionSnapshot> {
        self.samples.front()
    }

    /// Insert a new head, evicting the oldest sample first when full.
    pub fn record(&mut self, snapshot: MotionSnapshot) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_back();
        }
        self.samples.push_front(snapshot);
    }

    /// Drop the `count` newest samples (those a finished rewind scrubbed past).
    pub fn discard_newest(&mut self, count: usize) {
        let count = count.min(self.samples.len());
        self.samples.drain(..count);
    }

    pub fn iter(&self) -> impl Iterator<Item = &MotionSnapshot> {
        self.samples.iter()
    }
}

/// Limits applied to one playback step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewindSettings {
    pub sample_period: f32,
    pub snap_distance: f32,
    pub max_iterations: u32,
    /// Upper bound on buffer steps the accumulator may gain in a single tick.
    pub max_steps_per_tick: f32,
}

impl Default for RewindSettings {
    fn default() -> Self {
        Self {
            sample_period: SAMPLE_PERIOD,
            snap_distance: 0.1,
            max_iterations: 100,
            max_steps_per_tick: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RewindError {
    /// The scrub loop did not settle within the iteration cap.
    IterationCapExceeded {
        iterations: u32,
        interpolation_time: f32,
    },
}

impl fmt::Display for RewindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewindError::IterationCapExceeded {
                iterations,
                interpolation_time,
            } => write!(
                f,
                "rewind playback exceeded {} iterations (interpolation_time = {}), skipping tick",
                iterations, interpolation_time
            ),
        }
    }
}

impl std::error::Error for RewindError {}

/// Scrub state of an active (or just finished) rewind.
///
/// The buffer is never mutated while scrubbing: `cursor` counts the samples
/// already consumed, and the buffer is trimmed once the rewind is released.
#[derive(Component, Debug, Clone, Default)]
pub struct RewindPlayback {
    started: Option<MotionSnapshot>,
    release_target: Option<MotionSnapshot>,
    cursor: usize,
    interpolation_time: f32,
    release_pending: bool,
}

impl RewindPlayback {
    /// Checkpoint the live body as the start of a new rewind.
    pub fn begin(&mut self, live: MotionSnapshot) {
        self.started = Some(live);
        self.release_target = Some(live);
        self.cursor = 0;
        self.interpolation_time = 0.0;
    }

    pub fn started(&self) -> Option<&MotionSnapshot> {
        self.started.as_ref()
    }

    pub fn release_target(&self) -> Option<&MotionSnapshot> {
        self.release_target.as_ref()
    }

    /// Number of buffer samples scrubbed past so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    pub fn interpolation_time(&self) -> f32 {
        self.interpolation_time
    }

    pub fn release_pending(&self) -> bool {
        self.release_pending
    }

    /// Advance playback by `dt` seconds.
    ///
    /// Returns the position the body should be placed at, or `None` when the
    /// body should stay where it is. On error nothing but the release flag
    /// changes.
    pub fn step(
        &mut self,
        history: &RewindBuffer,
        live: MotionSnapshot,
        dt: f32,
        settings: &RewindSettings,
    ) -> Result<Option<Vec3>, RewindError> {
        self.release_pending = true;

        if history.is_empty() {
            return Ok(None);
        }
        if self.started.is_none() {
            self.begin(live);
        }

        let last = history.len() - 1;
        self.cursor = self.cursor.min(last);

        if self.cursor == last {
            let Some(sample) = history.get(last) else {
                return Ok(None);
            };
            self.release_target = Some(*sample);
            return Ok(Some(sample.position));
        }

        let mut next = self.clone();
        let gained = (dt / settings.sample_period).clamp(0.0, settings.max_steps_per_tick);
        next.interpolation_time += gained;

        let mut position = None;
        let mut iterations = 0;
        while next.interpolation_time > 0.0 && next.cursor < last {
            iterations += 1;
            if iterations > settings.max_iterations {
                return Err(RewindError::IterationCapExceeded {
                    iterations: settings.max_iterations,
                    interpolation_time: next.interpolation_time,
                });
            }

            let Some(target) = history.get(next.cursor).copied() else {
                break;
            };
            let from = next.started.unwrap_or(live);
            let fraction = next.interpolation_time.clamp(0.0, 1.0);
            let blended = from.lerp(&target, fraction);

            position = Some(blended.position);
            next.release_target = Some(blended);

            if fraction < 1.0 {
                break;
            }

            if blended.position.distance(target.position) <= settings.snap_distance {
                next.started = Some(target);
                next.cursor += 1;
                next.interpolation_time = (next.interpolation_time - 1.0).max(0.0);
            }
        }

        *self = next;
        Ok(position)
    }

    /// End the rewind, returning the values to hand back to the live body and
    /// how many newest samples were scrubbed past.
    pub fn release(&mut self) -> Option<(MotionSnapshot, usize)> {
        if !self.release_pending {
            return None;
        }
        let consumed = self.cursor;
        let target = self.release_target.or(self.started);
        *self = Self::default();
        target.map(|target| (target, consumed))
    }
}

/// Fixed cadence for recording history.
#[derive(Component, Debug, Clone)]
pub struct RewindSampler {
    pub timer: Timer,
}

impl Default for RewindSampler {
    fn default() -> Self {
        Self::new(SAMPLE_PERIOD)
    }
}

impl RewindSampler {
    pub fn new(period: f32) -> Self {
        Self {
            timer: Timer::from_seconds(period, TimerMode::Repeating),
        }
    }

    /// Advance the cadence; true when a sample is due this tick.
    pub fn tick(&mut self, delta: std::time::Duration) -> bool {
        self.timer.tick(delta);
        self.timer.just_finished()
    }
}
