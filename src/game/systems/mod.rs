//! ECS systems for gameplay
//!
//! - `input` - Keyboard movement input
//! - `movement` - Movement execution and player glide animation
//! - `rounds` - Round advancement and game reset
//! - `replay` - Ghost replay stepping
//! - `camera` - Free camera control

pub mod camera;
pub mod input;
pub mod movement;
pub mod replay;
pub mod rounds;

pub use camera::{
    camera_movement_system, camera_rotation_system, camera_zoom_system, CameraController,
};
pub use input::keyboard_movement_input;
pub use movement::{animate_player_token, apply_move_commands};
pub use replay::advance_ghost_replays;
pub use rounds::{handle_reset, handle_round_advance, record_run_complete};
