//! Core module - Round state machine and application infrastructure
//!
//! Provides the round state machine and foundational application setup for
//! ghoststep.
//!
//! # Architecture Overview
//!
//! ## State Architecture
//!
//! - [`RoundState`] - Primary state: `Active { round }` during play,
//!   `Complete` once every round has been recorded
//! - [`InPlay`] - Computed state active during any round
//!
//! ## Core Plugin
//!
//! The [`CorePlugin`] sets up:
//! - Panic hook configuration for crash reporting
//! - Window configuration via [`WindowConfig`]
//! - State machine registration with transition validation and logging
//! - Settings persistence for [`GameSettings`]
//!
//! ## Resources
//!
//! - [`WindowConfig`] - Window settings configuration
//! - [`GameSettings`] - User preferences (movement, replay, camera tuning)
//! - [`GameStatistics`] - Run tracking across resets and completions

pub mod error;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;
pub mod states;
pub mod window_config;

// Re-export commonly used items
pub use plugin::CorePlugin;
pub use resources::*;
pub use states::*;
pub use window_config::WindowConfig;
