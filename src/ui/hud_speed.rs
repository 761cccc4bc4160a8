//! UI domain: periodically refreshed speed readout.

use avian3d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::Player;
use crate::ui::HUD_PADDING;

/// Meters per second to miles per hour.
const MPS_TO_MPH: f32 = 2.23694;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HudTuning {
    /// Seconds between speed readout refreshes.
    pub speed_refresh_interval: f32,
}

impl Default for HudTuning {
    fn default() -> Self {
        Self {
            speed_refresh_interval: 0.2,
        }
    }
}

#[derive(Resource, Debug)]
pub(crate) struct SpeedRefresh(pub Timer);

impl FromWorld for SpeedRefresh {
    fn from_world(world: &mut World) -> Self {
        let interval = world
            .get_resource::<HudTuning>()
            .map(|tuning| tuning.speed_refresh_interval)
            .unwrap_or(HudTuning::default().speed_refresh_interval);
        Self(Timer::from_seconds(interval, TimerMode::Repeating))
    }
}

/// Marker for the speed amount text
#[derive(Component)]
pub struct SpeedText;

pub(crate) fn spawn_speed_readout(mut commands: Commands) {
    commands.spawn((
        SpeedText,
        Text::new("0"),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        TextColor(Color::srgb(0.95, 0.95, 0.95)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(HUD_PADDING),
            bottom: Val::Px(HUD_PADDING),
            ..default()
        },
    ));
}

pub(crate) fn update_speed_readout(
    time: Res<Time>,
    mut refresh: ResMut<SpeedRefresh>,
    player: Query<&LinearVelocity, With<Player>>,
    mut text: Query<&mut Text, With<SpeedText>>,
) {
    if !refresh.0.tick(time.delta()).just_finished() {
        return;
    }
    let Ok(velocity) = player.single() else {
        return;
    };

    let mph = velocity.0.length() * MPS_TO_MPH;
    for mut text in &mut text {
        **text = format!("{:.0}", mph);
    }
}
