// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! reqlink-core: Shared library for the reqlink requirement exporter
//!
//! This crate provides the data model for requirement trees, the tracker
//! configuration check, and the formatting that turns requirements and test
//! cases into tracker-ready summaries and structured documents. It performs
//! no I/O against the tracker; the `reqlink` crate drives the network side.

pub mod bdd;
pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod issue;
pub mod report;
pub mod requirement;
pub mod summary;

pub use bdd::{Bdd, BddFallbacks};
pub use config::{ConfigIssue, ConfigValidator, TrackerConfig};
pub use document::{Block, Mark, StructuredDocument, TextRun};
pub use error::{Error, Result};
pub use format::{FormatStrategy, Formatter};
pub use issue::{IssueKind, IssueRecord, LinkRecord, NewIssue};
pub use report::{
    ExportProgress, ExportResult, Outcome, ProgressEvent, RequirementReport, SubtaskProgress,
};
pub use requirement::{Requirement, TestCase};
