//! Primary window configuration
//!
//! Collects the window properties in one resource so they are tweaked in a
//! single place and turned into a Bevy `Window` at startup.

use bevy::prelude::*;
use bevy::window::{
    MonitorSelection, PresentMode, VideoModeSelection, Window, WindowMode, WindowResolution,
};

/// Configuration for the primary application window
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct WindowConfig {
    /// Title shown in the window chrome
    pub title: String,
    /// Logical width in pixels
    pub width: u32,
    /// Logical height in pixels
    pub height: u32,
    /// Whether the user may resize the window
    pub resizable: bool,
    /// Start fullscreen instead of windowed
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ghoststep".to_string(),
            width: 1280,
            height: 720,
            resizable: true,
            fullscreen: false,
        }
    }
}

impl WindowConfig {
    /// Build the Bevy window description for this configuration.
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            mode: self.mode(),
            ..default()
        }
    }

    fn mode(&self) -> WindowMode {
        if self.fullscreen {
            WindowMode::Fullscreen(MonitorSelection::Current, VideoModeSelection::Current)
        } else {
            WindowMode::Windowed
        }
    }
}
