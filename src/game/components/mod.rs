//! ECS components for the puzzle game
//!
//! - `token` - The live player token and ghost markers
//! - `replay` - The cancellable per-ghost replay handle

pub mod replay;
pub mod token;

pub use replay::GhostReplay;
pub use token::{Ghost, PlayerToken, TOKEN_ORIGIN};
