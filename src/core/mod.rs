//! Core domain: run configuration and the course the player runs on.

mod course;
mod layout;
mod resources;
#[cfg(test)]
mod tests;

pub use layout::{MailSites, arc_segments, mail_layout};
pub use resources::RunConfig;

use bevy::prelude::*;

use crate::core::course::spawn_course;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunConfig>()
            .add_systems(Startup, spawn_course);
    }
}
