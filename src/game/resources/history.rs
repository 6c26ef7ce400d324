//! Movement history tracking resource
//!
//! Maintains the chronological record of the player's movements, one sequence
//! per round. Ghost replays are driven entirely from this record: a ghost for
//! round *i* walks `sequence(i)` front to back, so a sequence is never mutated
//! once its round has been played.
//!
//! # Architecture
//!
//! The history is a dynamically-sized list of per-round sequences. The round
//! cap lives in the state machine ([`crate::core::states::TOTAL_ROUNDS`]), not
//! in this container; the container just grows one sequence per
//! [`begin_round`](MovementHistory::begin_round) call.
//!
//! # Integration
//!
//! Appended to by [`crate::game::systems::movement`] while a round is active.
//! Read by the replay systems when ghosts are (re)started, and by the HUD to
//! show the current round's move count.

use bevy::prelude::*;

/// Resource storing the recorded movement sequences for the current run
///
/// One entry per round that has been started, each an ordered list of the
/// player's absolute positions after every movement input of that round.
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct MovementHistory {
    rounds: Vec<Vec<Vec3>>,
}

impl Default for MovementHistory {
    /// Starts with a single empty sequence, ready to record round 1.
    fn default() -> Self {
        Self {
            rounds: vec![Vec::new()],
        }
    }
}

impl MovementHistory {
    /// Open a fresh, empty sequence for the next round.
    pub fn begin_round(&mut self) {
        self.rounds.push(Vec::new());
    }

    /// Append a position to the sequence of the given 1-based round.
    ///
    /// A round without an open sequence should not occur given the state
    /// machine; if it does, the movement is logged and dropped rather than
    /// crashing the game.
    pub fn record(&mut self, round: u8, position: Vec3) {
        match (round as usize)
            .checked_sub(1)
            .and_then(|index| self.rounds.get_mut(index))
        {
            Some(sequence) => sequence.push(position),
            None => warn!(
                "[HISTORY] Round index {} out of bounds for movement history, movement dropped",
                round
            ),
        }
    }

    /// The recorded sequence for a 1-based round, empty if the round has not
    /// been started.
    pub fn sequence(&self, round: u8) -> &[Vec3] {
        let index = (round as usize).saturating_sub(1);
        self.rounds.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of rounds that have been started.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Number of movements recorded in a 1-based round.
    pub fn moves_in(&self, round: u8) -> usize {
        self.sequence(round).len()
    }

    /// Total movements recorded across all rounds.
    pub fn total_moves(&self) -> usize {
        self.rounds.iter().map(Vec::len).sum()
    }

    /// Length of the longest recorded round sequence.
    pub fn longest_sequence(&self) -> usize {
        self.rounds.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether no movement has been recorded at all.
    pub fn is_empty(&self) -> bool {
        self.total_moves() == 0
    }

    /// Drop all recorded sequences and open a fresh one for round 1.
    pub fn clear(&mut self) {
        self.rounds.clear();
        self.rounds.push(Vec::new());
    }
}
