//! Core error types
//!
//! Settings persistence is the only fallible core concern; both of its failure
//! modes surface through [`CoreError`] so callers can log and fall back to
//! defaults instead of aborting.

use thiserror::Error;

/// Errors raised by core infrastructure
#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading or writing the settings file failed
    #[error("settings file I/O failed: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// The settings file did not hold valid settings JSON
    #[error("settings JSON invalid: {0}")]
    SettingsSerialization(#[from] serde_json::Error),
}

/// Result alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
