//! UI module - egui-based interfaces
//!
//! Manages the in-game HUD using `bevy_egui`:
//!
//! - **hud**: round label and the three game buttons
//! - **styles**: shared colors, typography, and component builders
//!
//! The completion screen lives with its state plugin in [`crate::states`].

pub mod hud;
pub mod styles;

use crate::core::InPlay;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Plugin registering the in-game HUD
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            hud::hud_ui_wrapper.run_if(in_state(InPlay)),
        );
    }
}
