//! Core resources for game-wide state management
//!
//! These resources are used across multiple states and provide global
//! configuration and tracking capabilities.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Resource holding user-tunable gameplay and presentation settings
///
/// Loaded from disk at startup and saved back whenever it changes; see
/// [`crate::core::settings_persistence`].
#[derive(Resource, Debug, Clone, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
pub struct GameSettings {
    /// Distance the player token travels per directional input, in world units
    pub move_step: f32,

    /// Speed at which the player token glides toward its target position,
    /// in world units per second
    pub player_speed: f32,

    /// Duration of each move-to segment of a ghost replay, in seconds
    pub replay_seconds_per_move: f32,

    /// Minimum drag distance for a gesture to register as a swipe,
    /// in logical pixels
    pub swipe_min_distance: f32,

    /// Whether to show the origin axes marker in the scene
    pub show_origin_axes: bool,

    /// Free camera control tuning
    pub camera: CameraTuning,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            move_step: 1.0,
            player_speed: 10.0,
            replay_seconds_per_move: 0.5,
            swipe_min_distance: 40.0,
            show_origin_axes: true,
            camera: CameraTuning::default(),
        }
    }
}

/// Tuning values for the free camera controller
#[derive(Debug, Clone, Serialize, Deserialize, Reflect)]
pub struct CameraTuning {
    /// Panning speed in units per second
    pub move_speed: f32,

    /// Height change per mouse wheel tick
    pub zoom_speed: f32,

    /// Lowest camera height above the ground plane
    pub min_height: f32,

    /// Highest camera height above the ground plane
    pub max_height: f32,

    /// Mouse rotation sensitivity multiplier
    pub rotation_sensitivity: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            move_speed: 12.0,
            zoom_speed: 2.0,
            min_height: 4.0,
            max_height: 30.0,
            rotation_sensitivity: 1.0,
        }
    }
}

/// Resource for tracking run statistics
#[derive(Resource, Debug, Clone, Default, Reflect)]
#[reflect(Resource)]
pub struct GameStatistics {
    /// Runs played to completion
    pub runs_completed: u32,

    /// Runs abandoned via the reset button
    pub runs_reset: u32,

    /// Total movement inputs recorded across all runs
    pub total_moves: u32,

    /// Longest single-round movement sequence ever recorded
    pub longest_sequence: u32,
}

impl GameStatistics {
    /// Count one recorded movement input.
    pub fn record_move(&mut self) {
        self.total_moves += 1;
    }

    /// Count one completed run, keeping track of the longest round sequence
    /// it contained.
    pub fn record_completion(&mut self, longest_sequence: u32) {
        self.runs_completed += 1;
        self.longest_sequence = self.longest_sequence.max(longest_sequence);
    }

    /// Count one abandoned run.
    pub fn record_reset(&mut self) {
        self.runs_reset += 1;
    }

    /// Average recorded moves per started run.
    pub fn average_moves(&self) -> f32 {
        let runs = self.runs_completed + self.runs_reset;
        if runs > 0 {
            self.total_moves as f32 / runs as f32
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = GameSettings::default();
        assert_eq!(settings.move_step, 1.0);
        assert_eq!(settings.replay_seconds_per_move, 0.5);
        assert!(settings.show_origin_axes);
        assert!(settings.camera.min_height < settings.camera.max_height);
    }

    #[test]
    fn test_settings_json_round_trip() {
        let mut settings = GameSettings::default();
        settings.move_step = 2.0;
        settings.show_origin_axes = false;
        settings.camera.move_speed = 20.0;

        let json = serde_json::to_string_pretty(&settings).unwrap();
        let restored: GameSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.move_step, 2.0);
        assert!(!restored.show_origin_axes);
        assert_eq!(restored.camera.move_speed, 20.0);
        assert_eq!(restored.player_speed, settings.player_speed);
    }

    #[test]
    fn test_statistics_default() {
        let stats = GameStatistics::default();
        assert_eq!(stats.runs_completed, 0);
        assert_eq!(stats.runs_reset, 0);
        assert_eq!(stats.total_moves, 0);
        assert_eq!(stats.average_moves(), 0.0);
    }

    #[test]
    fn test_statistics_record_moves_and_completion() {
        let mut stats = GameStatistics::default();

        for _ in 0..6 {
            stats.record_move();
        }
        stats.record_completion(4);

        assert_eq!(stats.total_moves, 6);
        assert_eq!(stats.runs_completed, 1);
        assert_eq!(stats.longest_sequence, 4);
        assert_eq!(stats.average_moves(), 6.0);
    }

    #[test]
    fn test_statistics_longest_sequence_keeps_maximum() {
        let mut stats = GameStatistics::default();
        stats.record_completion(4);
        stats.record_completion(2);

        assert_eq!(stats.runs_completed, 2);
        assert_eq!(stats.longest_sequence, 4);
    }

    #[test]
    fn test_statistics_record_reset() {
        let mut stats = GameStatistics::default();
        stats.record_move();
        stats.record_reset();

        assert_eq!(stats.runs_reset, 1);
        assert_eq!(stats.average_moves(), 1.0);
    }
}
