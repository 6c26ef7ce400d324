//! Player movement execution and animation

use crate::core::{GameSettings, GameStatistics, RoundState};
use crate::game::components::PlayerToken;
use crate::game::events::MoveCommand;
use crate::game::resources::MovementHistory;
use bevy::prelude::*;

/// Distance below which the rendered token snaps onto its target.
const SNAP_DISTANCE: f32 = 0.05;

/// System to execute movement commands
///
/// Moves the player's logical position by one fixed step per command and
/// appends the resulting absolute position to the current round's sequence.
/// Runs only while a round is active, so no movement is recorded once the run
/// is complete.
pub fn apply_move_commands(
    mut moves: MessageReader<MoveCommand>,
    state: Res<State<RoundState>>,
    settings: Res<GameSettings>,
    mut history: ResMut<MovementHistory>,
    mut stats: ResMut<GameStatistics>,
    mut player: Query<&mut PlayerToken>,
) {
    // drain first so commands never linger across a state change
    let commands: Vec<MoveCommand> = moves.read().copied().collect();

    let RoundState::Active { round } = *state.get() else {
        return;
    };
    let Ok(mut token) = player.single_mut() else {
        return;
    };

    for command in commands {
        token.position += command.direction.offset() * settings.move_step;
        history.record(round, token.position);
        stats.record_move();
        info!(
            "[MOVE] {:?} -> {:?} (round {}, step {})",
            command.direction,
            token.position,
            round,
            history.moves_in(round)
        );
    }
}

/// System to animate the player token
///
/// Glides the rendered transform toward the token's logical position. Queued
/// movements chain naturally: each new command retargets the glide from
/// wherever the token currently is.
pub fn animate_player_token(
    time: Res<Time>,
    settings: Res<GameSettings>,
    mut query: Query<(&PlayerToken, &mut Transform)>,
) {
    for (token, mut transform) in query.iter_mut() {
        let target = token.position;
        let current = transform.translation;
        let offset = target - current;

        if offset.length() > SNAP_DISTANCE {
            let step = offset.normalize() * settings.player_speed * time.delta_secs();
            if step.length() >= offset.length() {
                transform.translation = target;
            } else {
                transform.translation = current + step;
            }
        } else {
            transform.translation = target;
        }
    }
}
