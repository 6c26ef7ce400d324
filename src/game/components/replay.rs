//! Ghost replay handle
//!
//! A [`GhostReplay`] is the explicit handle for one in-flight replay: it holds
//! the immutable recorded path and the progress through it. Attaching one to a
//! ghost starts the replay; removing it (or despawning the ghost, as reset
//! does) cancels the replay. The component is ticked each frame by
//! [`crate::game::systems::replay::advance_ghost_replays`].
//!
//! The path is walked as a chain of fixed-duration move-to segments, visiting
//! every recorded position in order with no omissions or reordering.

use bevy::prelude::*;
use std::time::Duration;

/// One in-flight ghost replay: a recorded path plus progress through it.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct GhostReplay {
    /// Recorded absolute positions, in the order they were played
    path: Vec<Vec3>,
    /// Index of the segment currently animating; equals `path.len()` when done
    segment: usize,
    /// Position the current segment started from
    from: Vec3,
    /// Progress through the current segment
    timer: Timer,
}

impl Default for GhostReplay {
    /// An empty, already-finished replay.
    fn default() -> Self {
        Self::new(Vec::new(), Vec3::ZERO, 0.0)
    }
}

impl GhostReplay {
    /// Create a replay of `path`, starting from `start`, spending
    /// `seconds_per_move` on each segment.
    ///
    /// An empty path produces an already-finished replay.
    pub fn new(path: Vec<Vec3>, start: Vec3, seconds_per_move: f32) -> Self {
        Self {
            path,
            segment: 0,
            from: start,
            timer: Timer::from_seconds(seconds_per_move, TimerMode::Once),
        }
    }

    /// Whether every recorded position has been visited.
    pub fn is_finished(&self) -> bool {
        self.segment >= self.path.len()
    }

    /// The position the current segment is heading toward, if any.
    pub fn target(&self) -> Option<Vec3> {
        self.path.get(self.segment).copied()
    }

    /// The recorded path this replay walks.
    pub fn path(&self) -> &[Vec3] {
        &self.path
    }

    /// Advance the replay by `delta` and return the ghost's current position.
    ///
    /// Completed segments land exactly on their recorded position before the
    /// next segment begins, so the full recorded sequence is always visited.
    pub fn tick(&mut self, delta: Duration) -> Vec3 {
        if self.is_finished() {
            return self.resting_position();
        }

        self.timer.tick(delta);
        while self.timer.finished() && !self.is_finished() {
            self.from = self.path[self.segment];
            self.segment += 1;
            if !self.is_finished() {
                self.timer.reset();
                // residual time beyond the segment boundary is dropped; each
                // segment takes at least one frame
                break;
            }
        }

        if self.is_finished() {
            return self.resting_position();
        }

        let target = self.path[self.segment];
        self.from.lerp(target, self.timer.fraction())
    }

    /// Where the ghost rests once the replay is over.
    fn resting_position(&self) -> Vec3 {
        self.path.last().copied().unwrap_or(self.from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 0.5;

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    #[test]
    fn test_empty_path_is_finished_immediately() {
        let mut replay = GhostReplay::new(Vec::new(), Vec3::ZERO, STEP);
        assert!(replay.is_finished());
        assert_eq!(replay.target(), None);
        assert_eq!(replay.tick(secs(STEP)), Vec3::ZERO);
    }

    #[test]
    fn test_replay_visits_positions_in_recorded_order() {
        let path = vec![
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, 0.0),
        ];
        let mut replay = GhostReplay::new(path.clone(), Vec3::ZERO, STEP);

        let mut visited = Vec::new();
        for _ in 0..path.len() {
            visited.push(replay.tick(secs(STEP)));
        }

        assert_eq!(visited, path, "each segment must land on its recorded position");
        assert!(replay.is_finished());
    }

    #[test]
    fn test_partial_tick_interpolates_toward_first_position() {
        let path = vec![Vec3::new(2.0, 0.0, 0.0)];
        let mut replay = GhostReplay::new(path, Vec3::ZERO, STEP);

        let halfway = replay.tick(secs(STEP / 2.0));
        assert!((halfway - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-4);
        assert!(!replay.is_finished());
    }

    #[test]
    fn test_target_tracks_current_segment() {
        let path = vec![Vec3::X, Vec3::new(1.0, 0.0, 1.0)];
        let mut replay = GhostReplay::new(path, Vec3::ZERO, STEP);

        assert_eq!(replay.target(), Some(Vec3::X));
        replay.tick(secs(STEP));
        assert_eq!(replay.target(), Some(Vec3::new(1.0, 0.0, 1.0)));
        replay.tick(secs(STEP));
        assert_eq!(replay.target(), None);
    }

    #[test]
    fn test_finished_replay_rests_on_last_position() {
        let path = vec![Vec3::X, Vec3::new(1.0, 0.0, -1.0)];
        let mut replay = GhostReplay::new(path, Vec3::ZERO, STEP);

        replay.tick(secs(STEP));
        replay.tick(secs(STEP));
        assert!(replay.is_finished());

        // further ticks hold the final position
        assert_eq!(replay.tick(secs(STEP)), Vec3::new(1.0, 0.0, -1.0));
    }

    #[test]
    fn test_tiny_ticks_make_progress_without_skipping() {
        let path = vec![Vec3::X, Vec3::new(2.0, 0.0, 0.0)];
        let mut replay = GhostReplay::new(path, Vec3::ZERO, STEP);

        let mut last_x = 0.0;
        let mut reached_first = false;
        for _ in 0..200 {
            let pos = replay.tick(secs(STEP / 10.0));
            assert!(pos.x >= last_x - 1e-4, "replay must not move backwards");
            if (pos - Vec3::X).length() < 1e-4 {
                reached_first = true;
            }
            last_x = pos.x;
            if replay.is_finished() {
                break;
            }
        }

        assert!(reached_first, "intermediate recorded position must be visited");
        assert!(replay.is_finished());
    }
}
