//! Rendering module - scene setup and token visuals
//!
//! Everything visual lives here; game logic never touches meshes or
//! materials. `scene` spawns the static scene, `tokens` owns the shared token
//! assets and dresses up logic-spawned entities.

pub mod scene;
pub mod tokens;

use bevy::prelude::*;

pub use tokens::{ghost_color, TokenAssets, TOKEN_RADIUS};

/// Plugin wiring up scene setup and token visuals
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, tokens::setup_token_assets)
            .add_systems(PostStartup, (scene::setup_scene, tokens::spawn_player))
            .add_systems(Update, tokens::attach_ghost_visuals);
    }
}
