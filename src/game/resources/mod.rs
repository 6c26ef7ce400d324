//! Global game resources
//!
//! - `history` - Recorded per-round movement sequences
//! - `camera_mode` - Free camera control toggle

pub mod camera_mode;
pub mod history;

pub use camera_mode::{camera_adjustable, camera_locked, CameraMode};
pub use history::MovementHistory;
