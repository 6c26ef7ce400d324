//! Completion screen plugin
//!
//! Shown once every round has been played and recorded. Replaces the HUD with
//! a full-screen overlay offering a single restart. Statistics are recorded by
//! the game systems on entering `Complete`; this plugin only presents them.

use crate::core::{GameStatistics, RoundState};
use crate::game::events::ResetGame;
use crate::game::resources::MovementHistory;
use crate::ui::styles::*;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

/// Plugin for the completion screen
pub struct CompletePlugin;

impl Plugin for CompletePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            complete_ui_wrapper.run_if(in_state(RoundState::Complete)),
        );
    }
}

/// Wrapper for complete_ui that handles Result
fn complete_ui_wrapper(
    contexts: EguiContexts,
    history: Res<MovementHistory>,
    stats: Res<GameStatistics>,
    resets: MessageWriter<ResetGame>,
) {
    let _ = complete_ui(contexts, history, stats, resets);
}

/// Completion screen UI
fn complete_ui(
    mut contexts: EguiContexts,
    history: Res<MovementHistory>,
    stats: Res<GameStatistics>,
    mut resets: MessageWriter<ResetGame>,
) -> Result<(), bevy::ecs::query::QuerySingleError> {
    let ctx = contexts.ctx_mut()?;

    egui::CentralPanel::default()
        .frame(StyledPanel::overlay())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                Layout::section_space(ui);

                ui.heading(TextStyle::heading("Game Complete!", TextSize::XL));

                Layout::item_space(ui);

                ui.label(TextStyle::body(format!(
                    "{} movements recorded over {} rounds",
                    history.total_moves(),
                    history.round_count()
                )));
                ui.label(TextStyle::body(format!(
                    "Runs completed: {} (average {:.1} moves per run)",
                    stats.runs_completed,
                    stats.average_moves()
                )));

                Layout::section_space(ui);

                if StyledButton::success(ui, "Restart Game?").clicked() {
                    info!("[COMPLETE] Restarting game");
                    resets.write(ResetGame);
                }
            });
        });

    Ok(())
}
