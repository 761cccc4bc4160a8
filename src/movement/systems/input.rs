//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

fn axis(keyboard: &ButtonInput<KeyCode>, negative: [KeyCode; 2], positive: [KeyCode; 2]) -> f32 {
    let mut value = 0.0;
    if keyboard.any_pressed(negative) {
        value -= 1.0;
    }
    if keyboard.any_pressed(positive) {
        value += 1.0;
    }
    value
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    input.vertical = axis(
        &keyboard,
        [KeyCode::KeyS, KeyCode::ArrowDown],
        [KeyCode::KeyW, KeyCode::ArrowUp],
    );
    input.horizontal = axis(
        &keyboard,
        [KeyCode::KeyA, KeyCode::ArrowLeft],
        [KeyCode::KeyD, KeyCode::ArrowRight],
    );

    input.jump_pressed = keyboard.just_pressed(KeyCode::Space);
    input.rewind_pressed = keyboard.just_pressed(KeyCode::KeyR);
    input.rewind_held = keyboard.pressed(KeyCode::KeyR);
    input.crouch_held = keyboard.pressed(KeyCode::ShiftLeft);
}
