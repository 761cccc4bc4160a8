//! Delivery domain: run clock, mail bookkeeping and the site registry.

use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeliveryTuning {
    /// Seconds available to deliver every piece of mail.
    pub time_limit: f32,
    /// Pickup/dropoff pairs placed on the course.
    pub mail_count: u32,
    pub course_radius: f32,
    pub hover_amplitude: f32,
    pub hover_frequency: f32,
}

impl Default for DeliveryTuning {
    fn default() -> Self {
        Self {
            time_limit: 240.0,
            mail_count: 4,
            course_radius: 40.0,
            hover_amplitude: 0.5,
            hover_frequency: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Won,
    Lost,
}

/// State of the current delivery run.
#[derive(Resource, Debug, Clone)]
pub struct DeliveryRun {
    pub time_limit: f32,
    pub time_left: f32,
    pub in_progress: bool,
    /// Mail registered but not yet delivered.
    pub outstanding: u32,
    /// Ids of mail currently carried.
    pub carried: Vec<u32>,
    pub outcome: Option<RunOutcome>,
}

impl Default for DeliveryRun {
    fn default() -> Self {
        Self::new(DeliveryTuning::default().time_limit)
    }
}

impl DeliveryRun {
    pub fn new(time_limit: f32) -> Self {
        Self {
            time_limit,
            time_left: time_limit,
            in_progress: false,
            outstanding: 0,
            carried: Vec::new(),
            outcome: None,
        }
    }

    pub fn register_mail(&mut self) {
        self.outstanding += 1;
    }

    pub fn start(&mut self) {
        self.time_left = self.time_limit;
        self.in_progress = true;
        self.outcome = None;
    }

    pub fn is_carrying(&self, id: u32) -> bool {
        self.carried.contains(&id)
    }

    pub fn obtain(&mut self, id: u32) {
        if !self.is_carrying(id) {
            self.carried.push(id);
        }
    }

    /// Hand in carried mail. Returns the outcome if this delivery ended the run.
    pub fn deliver(&mut self, id: u32) -> Option<RunOutcome> {
        let index = self.carried.iter().position(|carried| *carried == id)?;
        self.carried.remove(index);
        self.outstanding = self.outstanding.saturating_sub(1);

        if self.outstanding == 0 && self.in_progress {
            return Some(self.finish(RunOutcome::Won));
        }
        None
    }

    /// Count the clock down. Returns the outcome if time just ran out.
    pub fn tick(&mut self, dt: f32) -> Option<RunOutcome> {
        if !self.in_progress {
            return None;
        }
        self.time_left -= dt;
        if self.time_left < 0.0 {
            self.time_left = 0.0;
            return Some(self.finish(RunOutcome::Lost));
        }
        None
    }

    /// Whole seconds left on the clock.
    pub fn seconds_left(&self) -> u32 {
        self.time_left.max(0.0) as u32
    }

    fn finish(&mut self, outcome: RunOutcome) -> RunOutcome {
        self.in_progress = false;
        self.outcome = Some(outcome);
        outcome
    }
}

/// Lookup from mail id to the pickup and dropoff entities on the course.
#[derive(Resource, Debug, Default)]
pub struct DeliveryRegistry {
    pub points: HashMap<u32, Entity>,
    pub dropoffs: HashMap<u32, Entity>,
}

impl DeliveryRegistry {
    pub fn add_point(&mut self, id: u32, entity: Entity) {
        self.points.insert(id, entity);
    }

    pub fn add_dropoff(&mut self, id: u32, entity: Entity) {
        self.dropoffs.insert(id, entity);
    }

    pub fn point(&self, id: u32) -> Option<Entity> {
        self.points.get(&id).copied()
    }

    pub fn dropoff(&self, id: u32) -> Option<Entity> {
        self.dropoffs.get(&id).copied()
    }

    pub fn remove_point(&mut self, id: u32) -> Option<Entity> {
        self.points.remove(&id)
    }
}
