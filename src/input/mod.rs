//! Input module - swipe gesture recognition
//!
//! Keyboard movement lives with the game systems; this module handles the
//! pointer side of input.

pub mod swipe;

use crate::core::InPlay;
use crate::game::resources::camera_locked;
use crate::game::system_sets::GameSystems;
use bevy::prelude::*;

pub use swipe::SwipeTracker;

/// Plugin registering swipe recognition
pub struct SwipePlugin;

impl Plugin for SwipePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SwipeTracker>().add_systems(
            Update,
            swipe::detect_swipes
                .in_set(GameSystems::Input)
                .run_if(in_state(InPlay))
                .run_if(camera_locked),
        );
    }
}
