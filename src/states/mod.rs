//! State-specific plugins
//!
//! Active rounds are handled by [`crate::game::GamePlugin`] and
//! [`crate::ui::HudPlugin`]; this module holds the plugin for the terminal
//! `Complete` state.

pub mod complete;

pub use complete::CompletePlugin;
