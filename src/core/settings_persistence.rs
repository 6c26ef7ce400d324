//! Settings persistence system
//!
//! Saves and loads [`GameSettings`] to/from a JSON file, so user preferences
//! survive across application sessions.
//!
//! # File Location
//!
//! Settings are stored as `settings.json` in the user's configuration
//! directory, falling back to the working directory when no configuration
//! directory can be resolved.
//!
//! # Error Handling
//!
//! Both load and save operations handle errors gracefully:
//! - Load failures fall back to default settings
//! - Save failures are logged but don't interrupt gameplay

use crate::core::error::CoreResult;
use crate::core::GameSettings;
use bevy::prelude::*;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Helper to resolve the settings file path
fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "ghoststep", "ghoststep") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

fn read_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn write_settings(path: &Path, settings: &GameSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load settings from file on startup
///
/// Attempts to load settings from the configuration directory. If the file
/// doesn't exist or is invalid, uses default settings. Runs early in the
/// startup schedule so settings are available to scene setup.
pub fn load_settings_system(mut commands: Commands) {
    let path = settings_path();

    if path.exists() {
        match read_settings(&path) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                commands.insert_resource(settings);
                return;
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to load settings from {:?}: {}. Using defaults.",
                    path, e
                );
            }
        }
    } else {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
    }

    commands.insert_resource(GameSettings::default());
}

/// Save settings to file when they change
pub fn save_settings_system(settings: Res<GameSettings>) {
    if !settings.is_changed() {
        return;
    }

    let path = settings_path();
    match write_settings(&path, settings.as_ref()) {
        Ok(()) => info!("[SETTINGS] Saved settings to {:?}", path),
        Err(e) => error!("[SETTINGS] Failed to save settings to {:?}: {}", path, e),
    }
}
