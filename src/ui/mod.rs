//! UI domain: in-run HUD readouts for speed and deliveries.

mod hud_delivery;
mod hud_speed;

pub use hud_speed::HudTuning;

use bevy::prelude::*;

use crate::movement::MovementSystems;
use crate::ui::hud_delivery::{spawn_delivery_readout, update_delivery_readout};
use crate::ui::hud_speed::{SpeedRefresh, spawn_speed_readout, update_speed_readout};

pub(crate) const HUD_PADDING: f32 = 16.0;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HudTuning>()
            .init_resource::<SpeedRefresh>()
            .add_systems(Startup, (spawn_speed_readout, spawn_delivery_readout))
            .add_systems(
                Update,
                (
                    update_speed_readout.after(MovementSystems),
                    update_delivery_readout,
                ),
            );
    }
}
