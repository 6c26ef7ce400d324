//! Game logic module - round/replay gameplay with ECS
//!
//! Implements the memory-puzzle loop using Bevy's ECS, with a clean split
//! between game state and rendering:
//!
//! - `components` - ECS components (PlayerToken, Ghost, GhostReplay)
//! - `resources` - Global game state (MovementHistory, CameraMode)
//! - `events` - Buffered messages connecting input and UI to game systems
//! - `systems` - ECS systems for gameplay (input, movement, rounds, replay,
//!   camera)
//! - `plugin` - GamePlugin that registers everything
//!
//! # System Ordering
//!
//! 1. Input systems translate keys/swipes into [`events::MoveCommand`]s
//! 2. Execution systems record movements and run the round lifecycle
//! 3. Visual systems glide the player and step ghost replays

pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod system_sets;
pub mod systems;

// Re-export the plugin and camera controller (main entry points)
pub use plugin::GamePlugin;
pub use systems::CameraController;
