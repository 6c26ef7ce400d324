//! Token visuals
//!
//! Game systems spawn the player and ghosts as bare logic entities; this
//! module owns their meshes and materials. Ghost visuals are attached by a
//! system watching for newly added [`Ghost`] components, which keeps spawning
//! usable from headless tests where no asset storage exists.

use crate::game::components::{Ghost, PlayerToken, TOKEN_ORIGIN};
use bevy::prelude::*;

/// Radius shared by the player token and every ghost.
pub const TOKEN_RADIUS: f32 = 0.5;

/// Color of a ghost by the round it replays. Rounds beyond the known palette
/// fall back to white.
pub fn ghost_color(round: u8) -> Color {
    match round {
        1 => Color::srgb(1.0, 0.9, 0.1),
        2 => Color::srgb(0.2, 0.4, 1.0),
        _ => Color::WHITE,
    }
}

/// Shared mesh and material handles for tokens
#[derive(Resource)]
pub struct TokenAssets {
    pub token_mesh: Handle<Mesh>,
    pub player_material: Handle<StandardMaterial>,
    ghost_materials: Vec<Handle<StandardMaterial>>,
    fallback_material: Handle<StandardMaterial>,
}

impl TokenAssets {
    /// Material for a ghost of the given round.
    pub fn ghost_material(&self, round: u8) -> Handle<StandardMaterial> {
        (round as usize)
            .checked_sub(1)
            .and_then(|index| self.ghost_materials.get(index))
            .unwrap_or(&self.fallback_material)
            .clone()
    }
}

/// Build the shared token assets.
pub fn setup_token_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let token_mesh = meshes.add(Sphere::new(TOKEN_RADIUS));
    let player_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.9, 0.1, 0.1),
        ..default()
    });
    let ghost_materials = (1..=2)
        .map(|round| {
            materials.add(StandardMaterial {
                base_color: ghost_color(round),
                ..default()
            })
        })
        .collect();
    let fallback_material = materials.add(StandardMaterial {
        base_color: ghost_color(u8::MAX),
        ..default()
    });

    commands.insert_resource(TokenAssets {
        token_mesh,
        player_material,
        ghost_materials,
        fallback_material,
    });
}

/// Spawn the live player token.
pub fn spawn_player(mut commands: Commands, assets: Res<TokenAssets>) {
    commands.spawn((
        PlayerToken::default(),
        Mesh3d(assets.token_mesh.clone()),
        MeshMaterial3d(assets.player_material.clone()),
        Transform::from_translation(TOKEN_ORIGIN),
        Name::new("Player"),
    ));
}

/// Attach mesh, material, and name to freshly spawned ghosts.
pub fn attach_ghost_visuals(
    mut commands: Commands,
    assets: Option<Res<TokenAssets>>,
    ghosts: Query<(Entity, &Ghost), Added<Ghost>>,
) {
    let Some(assets) = assets else {
        return;
    };

    for (entity, ghost) in ghosts.iter() {
        commands.entity(entity).insert((
            Mesh3d(assets.token_mesh.clone()),
            MeshMaterial3d(assets.ghost_material(ghost.round)),
            Name::new(format!("Ghost {}", ghost.round)),
        ));
    }
}
