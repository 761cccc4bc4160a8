//! Camera domain: third-person orbit camera following the player.

use avian3d::prelude::*;
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};
use serde::{Deserialize, Serialize};

use crate::movement::{MovementSystems, Player};


#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Degrees of rotation per pixel of mouse motion.
    pub sensitivity: f32,
    pub distance: f32,
    pub height: f32,
    pub pitch_limit_degrees: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            sensitivity: 0.15,
            distance: 2.0,
            height: 1.0,
            pitch_limit_degrees: 89.9,
        }
    }
}

/// Orbit state of the follow camera. Angles are in degrees.
#[derive(Component, Debug, Default)]
pub struct FollowCamera {
    pub yaw: f32,
    pub pitch: f32,
}

impl FollowCamera {
    pub fn look(&mut self, delta: Vec2, tuning: &CameraTuning) {
        self.yaw -= delta.x * tuning.sensitivity;
        self.pitch = (self.pitch - delta.y * tuning.sensitivity)
            .clamp(-tuning.pitch_limit_degrees, tuning.pitch_limit_degrees);
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            0.0,
        )
    }

    /// Camera placement behind `target`, looking at it and raised by `height`.
    pub fn placement(&self, target: Vec3, tuning: &CameraTuning) -> Transform {
        let eye = target - self.rotation() * Vec3::NEG_Z * tuning.distance;
        let mut transform = Transform::from_translation(eye).looking_at(target, Vec3::Y);
        transform.translation.y += tuning.height;
        transform
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .add_systems(Startup, (spawn_camera, lock_cursor))
            .add_systems(Update, follow_player.after(MovementSystems));
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        FollowCamera::default(),
        Camera3d::default(),
        Transform::from_xyz(0.0, 3.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Capture the mouse so it drives the orbit instead of leaving the window.
pub(crate) fn lock_cursor(mut cursors: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    for mut cursor in &mut cursors {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
    }
}

fn follow_player(
    mouse_motion: Res<AccumulatedMouseMotion>,
    tuning: Res<CameraTuning>,
    player: Query<&Position, With<Player>>,
    mut camera: Query<(&mut FollowCamera, &mut Transform)>,
) {
    let Ok(target) = player.single() else {
        return;
    };
    let Ok((mut orbit, mut transform)) = camera.single_mut() else {
        return;
    };

    orbit.look(mouse_motion.delta, &tuning);
    *transform = orbit.placement(target.0, &tuning);
}
