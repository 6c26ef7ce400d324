//! Token components for the live player and its ghosts

use bevy::prelude::*;

/// Spawn point for the player token and every ghost.
pub const TOKEN_ORIGIN: Vec3 = Vec3::ZERO;

/// Component marking the live player token
///
/// `position` is the token's logical absolute position, updated instantly on
/// each movement input; the rendered transform glides toward it (see
/// [`crate::game::systems::movement::animate_player_token`]). Recorded history
/// entries are taken from this logical position so a recorded step is always
/// the movement's end point, even when the animation is still in flight.
#[derive(Component, Debug, Default, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PlayerToken {
    /// Logical absolute position the token is moving toward
    pub position: Vec3,
}

/// Component marking a ghost token
///
/// One ghost exists per completed round. The round number ties the ghost to
/// the movement sequence it replays.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Ghost {
    /// The 1-based round whose recorded movements this ghost replays
    pub round: u8,
}
