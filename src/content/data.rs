//! Content domain: shape of the gameplay defaults file.

use serde::{Deserialize, Serialize};

use crate::camera::CameraTuning;
use crate::delivery::DeliveryTuning;
use crate::movement::MovementTuning;
use crate::ui::HudTuning;

pub const SCHEMA_VERSION: u32 = 1;

/// Every tunable loaded from `gameplay_defaults.ron`.
/// Omitted sections and fields keep their built-in defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    pub movement: MovementTuning,
    pub camera: CameraTuning,
    pub delivery: DeliveryTuning,
    pub hud: HudTuning,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            movement: MovementTuning::default(),
            camera: CameraTuning::default(),
            delivery: DeliveryTuning::default(),
            hud: HudTuning::default(),
        }
    }
}
