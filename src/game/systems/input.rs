//! Keyboard movement input

use crate::game::events::{MoveCommand, MoveDirection};
use bevy::prelude::*;

/// System translating arrow keys into movement commands
///
/// Arrow keys mirror the four swipe directions, so the game is playable
/// without a pointing device. WASD is deliberately left to the camera
/// controller.
pub fn keyboard_movement_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut moves: MessageWriter<MoveCommand>,
) {
    const BINDINGS: [(KeyCode, MoveDirection); 4] = [
        (KeyCode::ArrowUp, MoveDirection::Forward),
        (KeyCode::ArrowDown, MoveDirection::Backward),
        (KeyCode::ArrowLeft, MoveDirection::Left),
        (KeyCode::ArrowRight, MoveDirection::Right),
    ];

    for (key, direction) in BINDINGS {
        if keyboard.just_pressed(key) {
            debug!("[INPUT] Key {:?} -> {:?}", key, direction);
            moves.write(MoveCommand { direction });
        }
    }
}
