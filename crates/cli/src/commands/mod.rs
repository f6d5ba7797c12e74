// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod check;
pub mod export;
pub mod ping;
pub mod preview;
pub mod schema;

use crate::error::Result;

/// Runtime for commands that talk to the tracker.
///
/// Exports issue one call at a time, so a single-threaded runtime is enough.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
