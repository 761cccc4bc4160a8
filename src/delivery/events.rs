//! Delivery domain: messages for pickups, deliveries and the run result.

use bevy::ecs::message::Message;

use crate::delivery::RunOutcome;

/// Fired when the player picks up a piece of mail
#[derive(Debug)]
pub struct MailObtainedEvent {
    pub id: u32,
}

impl Message for MailObtainedEvent {}

/// Fired when the player hands in a piece of mail
#[derive(Debug)]
pub struct MailDeliveredEvent {
    pub id: u32,
    pub remaining: u32,
}

impl Message for MailDeliveredEvent {}

/// Fired once when the run is won or lost
#[derive(Debug)]
pub struct RunFinishedEvent {
    pub outcome: RunOutcome,
}

impl Message for RunFinishedEvent {}
