mod camera;
mod content;
mod core;
mod delivery;
mod movement;
mod ui;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Mailglide".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            // Content first so the domain plugins see the loaded tunables
            content::ContentPlugin,
            core::CorePlugin,
            movement::MovementPlugin,
            camera::CameraPlugin,
            delivery::DeliveryPlugin,
            ui::UiPlugin,
        ))
        .run();
}
