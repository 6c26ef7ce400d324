//! System organization using SystemSets
//!
//! Defines execution order for game systems. Input is translated to messages
//! before game state is mutated, and visuals catch up last, which keeps the
//! recorded history independent of frame timing.

use bevy::prelude::*;

/// System execution order for game logic
///
/// Each set runs in the order defined here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Input handling (keyboard, swipe recognition, camera control)
    Input,

    /// Game state mutation (movement recording, round advancement, reset)
    Execution,

    /// Visual updates (player glide animation, ghost replay stepping)
    Visual,
}
