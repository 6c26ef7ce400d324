//! Game flow integration tests
//!
//! Drives the full round/replay lifecycle through a headless app:
//! - Movement recording per round
//! - Ghost creation on round advancement
//! - Completion after the final round
//! - Reset and restart behavior, including replay cancellation

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use ghoststep::core::{GameStatistics, InPlay, RoundState};
use ghoststep::game::components::{Ghost, GhostReplay, PlayerToken, TOKEN_ORIGIN};
use ghoststep::game::events::{AdvanceRound, MoveCommand, MoveDirection, ResetGame};
use ghoststep::game::resources::MovementHistory;
use ghoststep::game::GamePlugin;

/// Build a headless app with the game logic and a player token, past startup.
fn game_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.init_state::<RoundState>();
    app.add_computed_state::<InPlay>();
    app.add_plugins(GamePlugin);

    app.world_mut()
        .spawn((PlayerToken::default(), Transform::default()));

    app.update();
    app
}

fn send_move(app: &mut App, direction: MoveDirection) {
    app.world_mut()
        .resource_mut::<Messages<MoveCommand>>()
        .write(MoveCommand { direction });
    app.update();
}

/// Advance one round and run the extra update that applies the transition.
fn advance_round(app: &mut App) {
    app.world_mut()
        .resource_mut::<Messages<AdvanceRound>>()
        .write(AdvanceRound);
    app.update();
    app.update();
}

fn reset_game(app: &mut App) {
    app.world_mut()
        .resource_mut::<Messages<ResetGame>>()
        .write(ResetGame);
    app.update();
    app.update();
}

fn current_state(app: &mut App) -> RoundState {
    *app.world().resource::<State<RoundState>>().get()
}

fn ghost_rounds(app: &mut App) -> Vec<u8> {
    let mut query = app.world_mut().query::<&Ghost>();
    let mut rounds: Vec<u8> = query
        .iter(app.world())
        .map(|ghost| ghost.round)
        .collect();
    rounds.sort_unstable();
    rounds
}

fn replay_count(app: &mut App) -> usize {
    let mut query = app.world_mut().query::<&GhostReplay>();
    query.iter(app.world()).count()
}

fn player_token(app: &mut App) -> (PlayerToken, Transform) {
    let mut query = app.world_mut().query::<(&PlayerToken, &Transform)>();
    let (token, transform) = query.single(app.world()).unwrap();
    (*token, *transform)
}

// ============================================================================
// Movement Recording
// ============================================================================

#[test]
fn test_each_movement_appends_one_position_to_current_round() {
    let mut app = game_app();

    send_move(&mut app, MoveDirection::Forward);
    send_move(&mut app, MoveDirection::Right);

    let history = app.world().resource::<MovementHistory>();
    assert_eq!(history.moves_in(1), 2);
    assert_eq!(history.total_moves(), 2);
    assert_eq!(
        history.sequence(1),
        &[Vec3::new(0.0, 0.0, -1.0), Vec3::new(1.0, 0.0, -1.0)]
    );
}

#[test]
fn test_movement_tracks_logical_player_position() {
    let mut app = game_app();

    send_move(&mut app, MoveDirection::Backward);
    send_move(&mut app, MoveDirection::Backward);

    let (token, _) = player_token(&mut app);
    assert_eq!(token.position, Vec3::new(0.0, 0.0, 2.0));
}

#[test]
fn test_movement_in_later_round_does_not_touch_earlier_sequences() {
    let mut app = game_app();

    send_move(&mut app, MoveDirection::Forward);
    advance_round(&mut app);
    send_move(&mut app, MoveDirection::Left);

    let history = app.world().resource::<MovementHistory>();
    assert_eq!(history.sequence(1), &[Vec3::new(0.0, 0.0, -1.0)]);
    assert_eq!(history.moves_in(2), 1);
}

// ============================================================================
// Round Advancement and Ghosts
// ============================================================================

#[test]
fn test_advancing_creates_ghosts_in_order() {
    let mut app = game_app();

    advance_round(&mut app);
    assert_eq!(current_state(&mut app), RoundState::Active { round: 2 });
    assert_eq!(ghost_rounds(&mut app), vec![1]);

    advance_round(&mut app);
    assert_eq!(current_state(&mut app), RoundState::Active { round: 3 });
    assert_eq!(ghost_rounds(&mut app), vec![1, 2]);
}

#[test]
fn test_advancing_resets_player_to_origin() {
    let mut app = game_app();

    send_move(&mut app, MoveDirection::Right);
    advance_round(&mut app);

    let (token, transform) = player_token(&mut app);
    assert_eq!(token.position, TOKEN_ORIGIN);
    assert_eq!(transform.translation, TOKEN_ORIGIN);
}

#[test]
fn test_advance_past_final_round_completes_without_new_ghost() {
    let mut app = game_app();

    advance_round(&mut app);
    advance_round(&mut app);
    advance_round(&mut app);

    assert_eq!(current_state(&mut app), RoundState::Complete);
    assert_eq!(ghost_rounds(&mut app), vec![1, 2], "no third ghost");
}

#[test]
fn test_no_movement_recorded_once_complete() {
    let mut app = game_app();

    advance_round(&mut app);
    advance_round(&mut app);
    advance_round(&mut app);

    let moves_before = app.world().resource::<MovementHistory>().total_moves();
    send_move(&mut app, MoveDirection::Forward);

    let history = app.world().resource::<MovementHistory>();
    assert_eq!(history.total_moves(), moves_before);
}

// ============================================================================
// Ghost Replay
// ============================================================================

#[test]
fn test_replay_handles_carry_the_recorded_sequences() {
    let mut app = game_app();

    send_move(&mut app, MoveDirection::Forward);
    send_move(&mut app, MoveDirection::Right);
    advance_round(&mut app);
    send_move(&mut app, MoveDirection::Left);
    advance_round(&mut app);

    let expected: Vec<(u8, Vec<Vec3>)> = {
        let history = app.world().resource::<MovementHistory>();
        vec![
            (1, history.sequence(1).to_vec()),
            (2, history.sequence(2).to_vec()),
        ]
    };

    let mut query = app.world_mut().query::<(&Ghost, &GhostReplay)>();
    let mut replays: Vec<(u8, Vec<Vec3>)> = query
        .iter(app.world())
        .map(|(ghost, replay)| (ghost.round, replay.path().to_vec()))
        .collect();
    replays.sort_by_key(|(round, _)| *round);

    assert_eq!(replays, expected, "each ghost replays its own round's path");
}

#[test]
fn test_ghost_without_movements_finishes_replay() {
    let mut app = game_app();

    // advance with an empty round 1; the replay has nothing to walk
    advance_round(&mut app);
    app.update();

    assert_eq!(
        replay_count(&mut app),
        0,
        "empty replays are removed immediately"
    );
    assert_eq!(ghost_rounds(&mut app), vec![1], "the ghost itself remains");
}

// ============================================================================
// Reset and Restart
// ============================================================================

#[test]
fn test_reset_returns_to_initial_state() {
    let mut app = game_app();

    send_move(&mut app, MoveDirection::Forward);
    advance_round(&mut app);
    send_move(&mut app, MoveDirection::Right);
    reset_game(&mut app);

    assert_eq!(current_state(&mut app), RoundState::Active { round: 1 });
    assert_eq!(ghost_rounds(&mut app), Vec::<u8>::new());

    let history = app.world().resource::<MovementHistory>();
    assert!(history.is_empty());
    assert_eq!(history.round_count(), 1);

    let (token, _) = player_token(&mut app);
    assert_eq!(token.position, TOKEN_ORIGIN);
}

#[test]
fn test_reset_cancels_outstanding_replays() {
    let mut app = game_app();

    send_move(&mut app, MoveDirection::Forward);
    send_move(&mut app, MoveDirection::Forward);
    advance_round(&mut app);

    assert_eq!(replay_count(&mut app), 1);

    reset_game(&mut app);

    assert_eq!(
        replay_count(&mut app),
        0,
        "despawned ghosts take their replays along"
    );
}

#[test]
fn test_restart_from_completion_counts_a_completed_run() {
    let mut app = game_app();

    advance_round(&mut app);
    advance_round(&mut app);
    advance_round(&mut app);
    assert_eq!(current_state(&mut app), RoundState::Complete);

    reset_game(&mut app);

    assert_eq!(current_state(&mut app), RoundState::Active { round: 1 });
    let stats = app.world().resource::<GameStatistics>();
    assert_eq!(stats.runs_completed, 1);
    assert_eq!(stats.runs_reset, 0, "a finished run is not an abandoned one");
}

#[test]
fn test_mid_run_reset_counts_as_abandoned() {
    let mut app = game_app();

    advance_round(&mut app);
    reset_game(&mut app);

    let stats = app.world().resource::<GameStatistics>();
    assert_eq!(stats.runs_reset, 1);
    assert_eq!(stats.runs_completed, 0);
}
