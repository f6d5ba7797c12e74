// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Export of requirement trees into the tracker.

mod orchestrator;

pub use orchestrator::{ExportOptions, ExportOrchestrator, LinkPolicy};
