//! Swipe gesture recognition
//!
//! Turns a mouse drag into one of the four movement directions: press, drag at
//! least the configured distance, release. The dominant axis of the drag
//! decides the direction, so diagonal drags still resolve to a single step.
//!
//! Recognition only runs while the camera is locked; with free camera control
//! enabled the same drag rotates the view instead
//! (see [`crate::game::resources::CameraMode`]).

use crate::core::GameSettings;
use crate::game::events::{MoveCommand, MoveDirection};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Resource tracking an in-progress drag
#[derive(Resource, Debug, Default)]
pub struct SwipeTracker {
    press_start: Option<Vec2>,
}

/// Classify a completed drag, if it is long enough to count as a swipe.
///
/// Window coordinates grow downward, so a negative Y delta is a swipe up,
/// which maps to forward.
fn classify_swipe(delta: Vec2, min_distance: f32) -> Option<MoveDirection> {
    if delta.length() < min_distance {
        return None;
    }

    let direction = if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 {
            MoveDirection::Right
        } else {
            MoveDirection::Left
        }
    } else if delta.y < 0.0 {
        MoveDirection::Forward
    } else {
        MoveDirection::Backward
    };

    Some(direction)
}

/// System recognizing swipes from mouse drags
pub fn detect_swipes(
    mut tracker: ResMut<SwipeTracker>,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    settings: Res<GameSettings>,
    mut moves: MessageWriter<MoveCommand>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        tracker.press_start = window.cursor_position();
    }

    if buttons.just_released(MouseButton::Left) {
        let (Some(start), Some(end)) = (tracker.press_start.take(), window.cursor_position())
        else {
            return;
        };

        if let Some(direction) = classify_swipe(end - start, settings.swipe_min_distance) {
            debug!("[INPUT] Swipe {:?}", direction);
            moves.write(MoveCommand { direction });
        }
    }
}
