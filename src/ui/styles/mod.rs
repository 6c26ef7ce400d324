//! UI styling system for ghoststep
//!
//! Provides a centralized theme system with consistent colors, typography,
//! and component styles across the HUD and completion screen.

pub mod colors;
pub mod components;
pub mod typography;

pub use colors::*;
pub use components::*;
pub use typography::*;
