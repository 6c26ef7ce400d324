use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use ghoststep::core::{CorePlugin, WindowConfig};
use ghoststep::game::GamePlugin;
use ghoststep::input::SwipePlugin;
use ghoststep::rendering::ScenePlugin;
use ghoststep::states::CompletePlugin;
use ghoststep::ui::HudPlugin;

fn main() {
    let window_config = WindowConfig::default();

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        // Core plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window_config.to_window()),
            ..default()
        }))
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: false,
        })
        // Game plugins
        .add_plugins(CorePlugin)
        .add_plugins(GamePlugin)
        .add_plugins(SwipePlugin)
        .add_plugins(ScenePlugin)
        .add_plugins(HudPlugin)
        .add_plugins(CompletePlugin)
        .run();
}
