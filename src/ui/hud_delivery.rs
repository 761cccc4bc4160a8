//! UI domain: delivery clock and mail counter.

use bevy::prelude::*;

use crate::delivery::{DeliveryRun, RunOutcome};
use crate::ui::HUD_PADDING;

/// Marker for the delivery status text
#[derive(Component)]
pub struct DeliveryText;

pub(crate) fn spawn_delivery_readout(mut commands: Commands) {
    commands.spawn((
        DeliveryText,
        Text::new(""),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.85, 0.5)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            ..default()
        },
    ));
}

pub(crate) fn update_delivery_readout(
    run: Res<DeliveryRun>,
    mut query: Query<&mut Text, With<DeliveryText>>,
) {
    if !run.is_changed() {
        return;
    }

    let status = match run.outcome {
        Some(RunOutcome::Won) => "All mail delivered!".to_string(),
        Some(RunOutcome::Lost) => "Out of time".to_string(),
        None => format!(
            "Time {}s | Mail left {} | Carrying {}",
            run.seconds_left(),
            run.outstanding,
            run.carried.len()
        ),
    };
    for mut text in &mut query {
        **text = status.clone();
    }
}
