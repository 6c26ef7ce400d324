//! Core plugin for ghoststep
//!
//! Provides fundamental application setup including:
//! - Panic hook configuration for crash reporting
//! - Window configuration
//! - Round state machine registration
//! - Settings persistence
//!
//! This plugin has no dependencies on other ghoststep plugins and should be
//! added before them; it sets up the state machine and resources they rely on.

use bevy::prelude::*;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::panic;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use super::{
    settings_persistence::{load_settings_system, save_settings_system},
    states::{log_round_state_system, validate_and_log_transitions},
    GameSettings, GameStatistics, InPlay, RoundState, StateLoggerTimer, WindowConfig,
};

/// Round state snapshot for the panic hook, kept outside the ECS so the hook
/// can read it after the world is gone.
static PANIC_STATE_TRACKER: OnceLock<Mutex<Option<RoundState>>> = OnceLock::new();

/// Core plugin for the ghoststep application
///
/// # Usage
///
/// ```rust,ignore
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(CorePlugin)
///     // ... other plugins
/// ```
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        // Window configuration
        app.init_resource::<WindowConfig>();

        // Round state machine
        app.init_state::<RoundState>()
            .add_computed_state::<InPlay>()
            .init_resource::<StateLoggerTimer>();

        // Core game resources
        // Note: GameSettings is inserted by load_settings_system
        app.init_resource::<GameStatistics>();

        // Register types for reflection
        app.register_type::<WindowConfig>()
            .register_type::<GameSettings>()
            .register_type::<GameStatistics>()
            .register_type::<RoundState>();

        app.add_systems(Startup, load_settings_system);

        app.add_systems(
            Update,
            (
                log_round_state_system,
                validate_and_log_transitions,
                update_panic_state_tracker,
                save_settings_system,
            ),
        );
    }

    fn finish(&self, _app: &mut App) {
        // Configured in finish() so it lands after all plugins are built but
        // before the app runs
        setup_panic_hook();
    }
}

/// Set up a custom panic hook that reports the panic message, location, and
/// the round state at the time of the crash, and writes the report to a log
/// file under `logs/`.
fn setup_panic_hook() {
    PANIC_STATE_TRACKER.get_or_init(|| Mutex::new(None));

    panic::set_hook(Box::new(|panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "<unknown>".to_string()
        };

        let location = if let Some(loc) = panic_info.location() {
            format!("{}:{}:{}", loc.file(), loc.line(), loc.column())
        } else {
            "<unknown>".to_string()
        };

        let mut round_state = "<unknown>".to_string();
        if let Some(tracker) = PANIC_STATE_TRACKER.get() {
            if let Ok(snapshot) = tracker.lock() {
                if let Some(state) = *snapshot {
                    round_state = format!("{:?}", state);
                }
            }
        }

        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let report = format!(
            "PANIC DETECTED [{}]\n\
            ============================================\n\
            Message: {}\n\
            Location: {}\n\
            RoundState: {}\n\
            ============================================\n",
            timestamp, message, location, round_state
        );

        eprintln!("\n{}", report);

        let logs_dir = Path::new("logs");
        if !logs_dir.exists() {
            let _ = fs::create_dir_all(logs_dir);
        }

        let log_file = logs_dir.join(format!("crash_{}.log", timestamp));
        if let Ok(mut file) = OpenOptions::new().create(true).write(true).open(&log_file) {
            let _ = writeln!(file, "{}", report);
            eprintln!("[PANIC] Crash log written to: {:?}", log_file);
        }
    }));
}

/// System that mirrors the current round state into the panic tracker.
fn update_panic_state_tracker(state: Option<Res<State<RoundState>>>) {
    if let Some(tracker) = PANIC_STATE_TRACKER.get() {
        if let Ok(mut snapshot) = tracker.lock() {
            *snapshot = state.map(|s| *s.get());
        }
    }
}
