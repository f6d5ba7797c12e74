// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for reqlink-core operations.

use thiserror::Error;

/// All possible errors that can occur in reqlink-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid heading level: {0}\n  hint: heading levels run from 1 to 6")]
    InvalidHeadingLevel(u8),

    #[error("invalid issue kind: '{0}'\n  hint: valid kinds are: task, sub-task")]
    InvalidIssueKind(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for reqlink-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
