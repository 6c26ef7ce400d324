//! Round state machine for ghoststep
//!
//! Implements the game's round progression as a Bevy state machine. A run is a
//! fixed number of rounds; during each round the player's movements are
//! recorded, and advancing to the next round spawns a ghost that replays the
//! round just played.
//!
//! # State Flow
//!
//! ```text
//! [Active 1] → [Active 2] → [Active 3] → [Complete]
//!      ↑            |            |            |
//!      └──────── reset ──────────┴────────────┘
//! ```
//!
//! # Design
//!
//! Round state is a tagged variant rather than a raw counter, so an
//! out-of-range round cannot be represented. `InPlay` is a computed state
//! active for any `Active` round, which lets input and HUD systems gate on
//! "some round is being played" without matching every round number.
//!
//! State transitions are validated and logged by
//! [`validate_and_log_transitions`]; an illegal transition indicates a logic
//! error elsewhere and is reported as such.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

/// Number of rounds in a full run.
pub const TOTAL_ROUNDS: u8 = 3;

/// Primary game state: which round is being played, or the finished run.
///
/// Defaults to `Active { round: 1 }`. Rounds are 1-based and never exceed
/// [`TOTAL_ROUNDS`]; advancing past the final round transitions to `Complete`
/// instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, States, Reflect)]
pub enum RoundState {
    /// A round is being played and player movements are recorded.
    Active {
        /// The 1-based round number, in `1..=TOTAL_ROUNDS`.
        round: u8,
    },

    /// All rounds have been played. Movement input is ignored and the
    /// completion screen is shown in place of the HUD.
    Complete,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::Active { round: 1 }
    }
}

impl RoundState {
    /// The active round number, if a round is being played.
    pub fn round(&self) -> Option<u8> {
        match self {
            RoundState::Active { round } => Some(*round),
            RoundState::Complete => None,
        }
    }

    /// Whether this is the last round before completion.
    pub fn is_final_round(&self) -> bool {
        matches!(self, RoundState::Active { round } if *round == TOTAL_ROUNDS)
    }
}

/// Computed state active while any round is being played.
///
/// Gates movement input, swipe recognition, and the in-game HUD.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct InPlay;

impl ComputedStates for InPlay {
    type SourceStates = RoundState;

    fn compute(sources: RoundState) -> Option<Self> {
        match sources {
            RoundState::Active { .. } => Some(Self),
            RoundState::Complete => None,
        }
    }
}

/// Timer resource for the periodic state logger.
#[derive(Resource, Deref, DerefMut)]
pub struct StateLoggerTimer(pub Timer);

impl Default for StateLoggerTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(15.0, TimerMode::Repeating))
    }
}

/// Logs the current round state every 15 seconds.
pub fn log_round_state_system(
    state: Res<State<RoundState>>,
    mut timer: ResMut<StateLoggerTimer>,
    time: Res<Time>,
) {
    if timer.tick(time.delta()).just_finished() {
        let current = state.get();
        let in_play = InPlay::compute(*current).is_some();
        info!("[STATE] State: {:?} | InPlay: {}", current, in_play);
    }
}

/// Validate if a state transition is allowed
///
/// Returns true if the transition is valid according to the round state
/// machine. Invalid transitions indicate logic errors that should be fixed.
fn is_valid_transition(from: RoundState, to: RoundState) -> bool {
    match (from, to) {
        // A round can advance by one, or reset back to round 1
        (RoundState::Active { round: from_round }, RoundState::Active { round: to_round }) => {
            to_round == from_round + 1 || to_round == 1 || to_round == from_round
        }

        // Only the final round completes the run
        (RoundState::Active { round }, RoundState::Complete) => round == TOTAL_ROUNDS,

        // The completion screen can only restart the run
        (RoundState::Complete, RoundState::Active { round }) => round == 1,

        // Self-transition is a no-op
        (RoundState::Complete, RoundState::Complete) => true,
    }
}

/// System to validate and log state transitions
///
/// Logs every round transition and flags transitions outside the legal set as
/// errors, which helps catch bookkeeping bugs before they corrupt a run.
pub fn validate_and_log_transitions(
    mut transition_events: MessageReader<StateTransitionEvent<RoundState>>,
) {
    for event in transition_events.read() {
        match (event.exited, event.entered) {
            (Some(exited), Some(entered)) => {
                if is_valid_transition(exited, entered) {
                    info!("[TRANSITION] {:?} -> {:?}", exited, entered);
                } else {
                    error!(
                        "[TRANSITION] INVALID: {:?} -> {:?} (state may be inconsistent)",
                        exited, entered
                    );
                }
            }
            (Some(exited), None) => {
                debug!("[TRANSITION] Exit: {:?}", exited);
            }
            (None, Some(entered)) => {
                debug!("[TRANSITION] Enter: {:?}", entered);
            }
            (None, None) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_state_default() {
        let state = RoundState::default();
        assert_eq!(
            state,
            RoundState::Active { round: 1 },
            "A run should start at round 1"
        );
    }

    #[test]
    fn test_round_accessor() {
        assert_eq!(RoundState::Active { round: 2 }.round(), Some(2));
        assert_eq!(RoundState::Complete.round(), None);
    }

    #[test]
    fn test_is_final_round() {
        assert!(!RoundState::Active { round: 1 }.is_final_round());
        assert!(RoundState::Active { round: TOTAL_ROUNDS }.is_final_round());
        assert!(!RoundState::Complete.is_final_round());
    }

    #[test]
    fn test_in_play_computed_state() {
        // Active in every round
        for round in 1..=TOTAL_ROUNDS {
            assert!(InPlay::compute(RoundState::Active { round }).is_some());
        }

        // Inactive once the run is complete
        assert!(InPlay::compute(RoundState::Complete).is_none());
    }

    #[test]
    fn test_advance_by_one_is_valid() {
        assert!(is_valid_transition(
            RoundState::Active { round: 1 },
            RoundState::Active { round: 2 }
        ));
        assert!(is_valid_transition(
            RoundState::Active { round: 2 },
            RoundState::Active { round: 3 }
        ));
    }

    #[test]
    fn test_skipping_rounds_is_invalid() {
        assert!(!is_valid_transition(
            RoundState::Active { round: 1 },
            RoundState::Active { round: 3 }
        ));
    }

    #[test]
    fn test_only_final_round_completes() {
        assert!(!is_valid_transition(
            RoundState::Active { round: 1 },
            RoundState::Complete
        ));
        assert!(!is_valid_transition(
            RoundState::Active { round: 2 },
            RoundState::Complete
        ));
        assert!(is_valid_transition(
            RoundState::Active { round: TOTAL_ROUNDS },
            RoundState::Complete
        ));
    }

    #[test]
    fn test_reset_is_valid_from_any_state() {
        let reset = RoundState::Active { round: 1 };
        for round in 1..=TOTAL_ROUNDS {
            assert!(is_valid_transition(RoundState::Active { round }, reset));
        }
        assert!(is_valid_transition(RoundState::Complete, reset));
    }

    #[test]
    fn test_complete_cannot_jump_into_a_later_round() {
        assert!(!is_valid_transition(
            RoundState::Complete,
            RoundState::Active { round: 2 }
        ));
    }

    #[test]
    fn test_self_transitions_are_valid() {
        let mid_run = RoundState::Active { round: 2 };
        assert!(is_valid_transition(mid_run, mid_run));
        assert!(is_valid_transition(
            RoundState::Complete,
            RoundState::Complete
        ));
    }
}
