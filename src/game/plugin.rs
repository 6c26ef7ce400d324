//! Game plugin - Round/replay game logic and systems
//!
//! Registers every resource, message, and system the puzzle needs, with
//! explicit ordering via [`GameSystems`] sets: input is translated to messages,
//! then game state is mutated, then visuals catch up.
//!
//! This plugin is rendering-agnostic: it spawns ghosts as bare entities and
//! moves transforms, while [`crate::rendering`] attaches meshes and materials.
//! That split keeps the whole round lifecycle runnable in headless tests.

use super::components::{Ghost, GhostReplay, PlayerToken};
use super::events::{AdvanceRound, MoveCommand, ResetGame};
use super::resources::{camera_adjustable, CameraMode, MovementHistory};
use super::system_sets::GameSystems;
use super::systems::*;
use crate::core::{GameSettings, GameStatistics, InPlay, RoundState};
use bevy::prelude::*;

/// Game plugin for ghoststep
///
/// Should be added after [`crate::core::CorePlugin`], which owns the round
/// state machine this plugin's systems are gated on.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        // Register resources
        // GameSettings is replaced by the persisted copy at startup; the
        // default here keeps headless apps self-contained
        app.init_resource::<GameSettings>()
            .init_resource::<GameStatistics>()
            .init_resource::<MovementHistory>()
            .init_resource::<CameraMode>();

        // Register messages
        app.add_message::<MoveCommand>()
            .add_message::<AdvanceRound>()
            .add_message::<ResetGame>();

        // Register types for reflection
        app.register_type::<MovementHistory>()
            .register_type::<CameraMode>()
            .register_type::<PlayerToken>()
            .register_type::<Ghost>()
            .register_type::<GhostReplay>()
            .register_type::<CameraController>();

        // Input → Execution → Visual
        app.configure_sets(
            Update,
            (
                GameSystems::Input,
                GameSystems::Execution,
                GameSystems::Visual,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                // Input set: keyboard movement and free camera control
                keyboard_movement_input
                    .in_set(GameSystems::Input)
                    .run_if(in_state(InPlay)),
                (
                    camera_movement_system,
                    camera_zoom_system,
                    camera_rotation_system,
                )
                    .in_set(GameSystems::Input)
                    .run_if(camera_adjustable),
                // Execution set: mutate game state in a fixed order
                (apply_move_commands, handle_round_advance, handle_reset)
                    .chain()
                    .in_set(GameSystems::Execution),
                // Visual set: rendered transforms catch up with the state
                (animate_player_token, advance_ghost_replays).in_set(GameSystems::Visual),
            ),
        );

        // The run ledger is part of game logic, not the completion screen, so
        // headless apps keep accurate statistics too
        app.add_systems(OnEnter(RoundState::Complete), record_run_complete);
    }
}
