//! Round advancement and game reset
//!
//! The round lifecycle in one place: advancing spawns a ghost for the round
//! just played and restarts every ghost's replay, resetting tears the run back
//! down to round 1.

use crate::core::{GameSettings, GameStatistics, RoundState};
use crate::game::components::{Ghost, GhostReplay, PlayerToken, TOKEN_ORIGIN};
use crate::game::events::{AdvanceRound, ResetGame};
use crate::game::resources::MovementHistory;
use bevy::prelude::*;

/// System handling round advancement
///
/// On advance from round *n*:
/// - spawns a ghost for round *n* at the origin
/// - (re)starts a replay on every ghost, each walking its own round's
///   recorded sequence
/// - resets the player token to the origin
/// - opens a fresh history sequence and moves the state machine forward
///
/// Advancing from the final round transitions to `Complete` instead and spawns
/// nothing. Replays run concurrently with each other and with the player's
/// input in the new round; they only narrate immutable recorded data.
pub fn handle_round_advance(
    mut commands: Commands,
    mut advances: MessageReader<AdvanceRound>,
    state: Res<State<RoundState>>,
    mut next_state: ResMut<NextState<RoundState>>,
    mut history: ResMut<MovementHistory>,
    settings: Res<GameSettings>,
    mut player: Query<(&mut PlayerToken, &mut Transform), Without<Ghost>>,
    ghosts: Query<(Entity, &Ghost, &Transform), Without<PlayerToken>>,
) {
    // collapse repeated presses within one frame into a single advance
    if advances.read().count() == 0 {
        return;
    }
    let RoundState::Active { round } = *state.get() else {
        return;
    };

    if state.get().is_final_round() {
        info!("[ROUND] Final round played, game complete");
        next_state.set(RoundState::Complete);
        return;
    }

    info!("[ROUND] Starting round {}", round + 1);

    // ghost for the round just played, replaying it from the origin
    commands.spawn((
        Ghost { round },
        Transform::from_translation(TOKEN_ORIGIN),
        GhostReplay::new(
            history.sequence(round).to_vec(),
            TOKEN_ORIGIN,
            settings.replay_seconds_per_move,
        ),
    ));

    // ghosts of earlier rounds replay again from wherever they stand
    for (entity, ghost, transform) in ghosts.iter() {
        commands.entity(entity).insert(GhostReplay::new(
            history.sequence(ghost.round).to_vec(),
            transform.translation,
            settings.replay_seconds_per_move,
        ));
    }

    for (mut token, mut transform) in player.iter_mut() {
        token.position = TOKEN_ORIGIN;
        transform.translation = TOKEN_ORIGIN;
    }

    history.begin_round();
    next_state.set(RoundState::Active { round: round + 1 });
}

/// System recording run statistics once the final round has been played
///
/// Runs on entering `Complete`. A run that reaches the completion screen
/// counts as completed even if the player restarts from there.
pub fn record_run_complete(history: Res<MovementHistory>, mut stats: ResMut<GameStatistics>) {
    stats.record_completion(history.longest_sequence() as u32);
    info!(
        "[ROUND] Run complete: {} movements over {} rounds ({} runs completed, longest sequence {})",
        history.total_moves(),
        history.round_count(),
        stats.runs_completed,
        stats.longest_sequence
    );
}

/// System handling game reset
///
/// Returns the machine to its initial state: round 1, empty history, zero
/// ghosts, player at the origin. Despawning the ghosts drops their replay
/// handles with them, so no replay outlives the run it belonged to. Runs in
/// every state, since the completion screen restarts through the same path.
pub fn handle_reset(
    mut commands: Commands,
    mut resets: MessageReader<ResetGame>,
    state: Res<State<RoundState>>,
    mut next_state: ResMut<NextState<RoundState>>,
    mut history: ResMut<MovementHistory>,
    mut stats: ResMut<GameStatistics>,
    mut player: Query<(&mut PlayerToken, &mut Transform), Without<Ghost>>,
    ghosts: Query<Entity, With<Ghost>>,
) {
    if resets.read().count() == 0 {
        return;
    }

    info!("[ROUND] Resetting game");

    for entity in ghosts.iter() {
        commands.entity(entity).despawn();
    }

    history.clear();

    for (mut token, mut transform) in player.iter_mut() {
        token.position = TOKEN_ORIGIN;
        transform.translation = TOKEN_ORIGIN;
    }

    // resets from the completion screen are restarts, not abandoned runs
    if *state.get() != RoundState::Complete {
        stats.record_reset();
    }

    next_state.set(RoundState::Active { round: 1 });
}
