//! Ghost replay stepping

use crate::game::components::{Ghost, GhostReplay};
use bevy::prelude::*;

/// System advancing every in-flight ghost replay
///
/// Each ghost's replay progresses independently of the others and of player
/// input. When a replay has visited its whole recorded sequence the handle is
/// removed; the ghost stays put on its final position until the next round
/// advance or reset.
pub fn advance_ghost_replays(
    mut commands: Commands,
    time: Res<Time>,
    mut ghosts: Query<(Entity, &Ghost, &mut GhostReplay, &mut Transform)>,
) {
    for (entity, ghost, mut replay, mut transform) in ghosts.iter_mut() {
        transform.translation = replay.tick(time.delta());

        if replay.is_finished() {
            info!("[REPLAY] Ghost for round {} finished replaying", ghost.round);
            commands.entity(entity).remove::<GhostReplay>();
        }
    }
}
