// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

use crate::tracker::TransportError;

/// All errors surfaced by the reqlink command line.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Jira configuration is incomplete\n  hint: run 'reqlink check-config' to see what is missing")]
    ConfigurationIncomplete,

    #[error("settings file not found: {}\n  hint: pass --config or set REQLINK_CONFIG", .0.display())]
    SettingsNotFound(PathBuf),

    #[error("invalid settings: {0}")]
    Settings(String),

    #[error("invalid settings file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{failed} of {total} requirements failed to export")]
    ExportFailed { failed: usize, total: usize },

    #[error("tracker error: {0}")]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Core(#[from] reqlink_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for reqlink operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
