//! Delivery domain: mail pickups, dropoffs and the run clock.
//!
//! Entirely event driven; nothing here reads or writes movement state.

mod components;
mod events;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Hover, MailDropoff, MailPoint};
pub use events::{MailDeliveredEvent, MailObtainedEvent, RunFinishedEvent};
pub use resources::{DeliveryRegistry, DeliveryRun, DeliveryTuning, RunOutcome};

use bevy::prelude::*;

use crate::delivery::systems::{
    animate_markers, handle_site_triggers, register_delivery_sites, start_delivery_run,
    tick_delivery_clock,
};

pub struct DeliveryPlugin;

impl Plugin for DeliveryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DeliveryTuning>()
            .init_resource::<DeliveryRegistry>()
            .init_resource::<DeliveryRun>()
            .add_message::<MailObtainedEvent>()
            .add_message::<MailDeliveredEvent>()
            .add_message::<RunFinishedEvent>()
            .add_systems(Startup, init_delivery_run)
            .add_systems(
                Update,
                (
                    register_delivery_sites,
                    start_delivery_run,
                    handle_site_triggers,
                    tick_delivery_clock,
                )
                    .chain(),
            )
            .add_systems(Update, animate_markers);
    }
}

fn init_delivery_run(mut commands: Commands, tuning: Res<DeliveryTuning>) {
    commands.insert_resource(DeliveryRun::new(tuning.time_limit));
}
