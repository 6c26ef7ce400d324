//! In-game HUD
//!
//! Top bar with the round label and the current round's move count; bottom bar
//! with the three game buttons (camera toggle, next round, reset). Button
//! presses are turned into game messages, so the HUD never mutates game state
//! directly.
//!
//! # Error Handling
//!
//! The UI system returns `Result` to gracefully handle frames where the egui
//! context is not available (e.g. during state transitions); the wrapper
//! registered with the schedule discards that error.

use crate::core::RoundState;
use crate::game::events::{AdvanceRound, ResetGame};
use crate::game::resources::{CameraMode, MovementHistory};
use crate::ui::styles::*;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

/// Wrapper for hud_ui that handles Result
pub fn hud_ui_wrapper(
    contexts: EguiContexts,
    state: Res<State<RoundState>>,
    history: Res<MovementHistory>,
    camera_mode: ResMut<CameraMode>,
    advances: MessageWriter<AdvanceRound>,
    resets: MessageWriter<ResetGame>,
) {
    let _ = hud_ui(contexts, state, history, camera_mode, advances, resets);
}

/// In-game HUD system
fn hud_ui(
    mut contexts: EguiContexts,
    state: Res<State<RoundState>>,
    history: Res<MovementHistory>,
    mut camera_mode: ResMut<CameraMode>,
    mut advances: MessageWriter<AdvanceRound>,
    mut resets: MessageWriter<ResetGame>,
) -> Result<(), bevy::ecs::query::QuerySingleError> {
    let ctx = contexts.ctx_mut()?;

    let Some(round) = state.get().round() else {
        return Ok(());
    };

    // === TOP BAR: round label ===
    egui::TopBottomPanel::top("hud_top")
        .frame(StyledPanel::bar())
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(TextStyle::heading(format!("Round {}", round), TextSize::LG));
                ui.label(TextStyle::caption(format!(
                    "Moves this round: {}",
                    history.moves_in(round)
                )));
            });
        });

    // === BOTTOM BAR: game buttons ===
    egui::TopBottomPanel::bottom("hud_buttons")
        .frame(StyledPanel::bar())
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if StyledButton::toggle(ui, "Adjust Camera", camera_mode.adjustable).clicked() {
                    camera_mode.toggle();
                    info!(
                        "[HUD] Camera control {}",
                        if camera_mode.adjustable { "enabled" } else { "disabled" }
                    );
                }

                ui.add_space(Layout::ITEM_SPACING);

                if StyledButton::primary(ui, "Next Round").clicked() {
                    advances.write(AdvanceRound);
                }

                ui.add_space(Layout::ITEM_SPACING);

                if StyledButton::danger(ui, "Reset").clicked() {
                    resets.write(ResetGame);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(TextStyle::caption("Swipe or use arrow keys to move"));
                });
            });
        });

    Ok(())
}
