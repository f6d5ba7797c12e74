// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Export results and progress notifications.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Final state of one requirement after an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Parent and every subtask were created.
    Created,
    /// Parent was created but at least one subtask (or strict link) failed.
    Partial,
    /// Parent creation failed; no subtasks were attempted.
    Failed,
    /// Never attempted because the export was cancelled.
    Cancelled,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Created => "created",
            Outcome::Partial => "partial",
            Outcome::Failed => "failed",
            Outcome::Cancelled => "cancelled",
        }
    }

    /// Whether the requirement counts toward `success_count`.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Created | Outcome::Partial)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-requirement detail of an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RequirementReport {
    /// 1-based position in the input tree.
    pub index: usize,
    pub requirement_id: String,
    /// Parent issue key, when created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub outcome: Outcome,
    pub subtasks_created: usize,
    pub subtasks_failed: usize,
    pub links_failed: usize,
}

/// Aggregated outcome of an export run.
///
/// `success_count + failed_count` always equals the number of requirements
/// in the input. Subtask and link failures never change either count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ExportResult {
    pub success_count: usize,
    pub failed_count: usize,
    /// Successful requirements with at least one failed subtask.
    pub partial_count: usize,
    /// One `Requirement #i: <message>` entry per failed requirement.
    pub errors: Vec<String>,
    /// One `Requirement #i, TC-j: <message>` entry per failed subtask.
    pub subtask_errors: Vec<String>,
    pub requirements: Vec<RequirementReport>,
    pub cancelled: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ExportResult {
    /// An empty result for a run starting now.
    pub fn new() -> Self {
        let now = Utc::now();
        ExportResult {
            success_count: 0,
            failed_count: 0,
            partial_count: 0,
            errors: Vec::new(),
            subtask_errors: Vec::new(),
            requirements: Vec::new(),
            cancelled: false,
            started_at: now,
            finished_at: now,
        }
    }

    /// Number of requirements accounted for.
    pub fn total(&self) -> usize {
        self.success_count + self.failed_count
    }

    /// True when every requirement and every subtask was created.
    pub fn is_clean(&self) -> bool {
        self.failed_count == 0 && self.partial_count == 0 && !self.cancelled
    }

    /// Record the final state of a requirement and update the counters.
    pub fn record(&mut self, report: RequirementReport, error: Option<String>) {
        match report.outcome {
            Outcome::Created => self.success_count += 1,
            Outcome::Partial => {
                self.success_count += 1;
                self.partial_count += 1;
            }
            Outcome::Failed | Outcome::Cancelled => self.failed_count += 1,
        }
        if let Some(message) = error {
            self.errors
                .push(format!("Requirement #{}: {}", report.index, message));
        }
        self.requirements.push(report);
    }

    /// Record a failed subtask of the requirement at `index`.
    pub fn record_subtask_error(&mut self, index: usize, position: usize, message: &str) {
        self.subtask_errors
            .push(format!("Requirement #{index}, TC-{position}: {message}"));
    }

    /// Stamp the end of the run.
    pub fn finish(&mut self) {
        self.finished_at = Utc::now();
    }
}

impl Default for ExportResult {
    fn default() -> Self {
        ExportResult::new()
    }
}

/// Progress after a requirement's parent issue was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportProgress {
    /// 1-based index of the requirement just attempted.
    pub current: usize,
    /// Number of requirements in the run.
    pub total: usize,
    /// Parent key when creation succeeded.
    pub last_created_key: Option<String>,
}

/// Progress after a subtask was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtaskProgress {
    /// 1-based index of the owning requirement.
    pub requirement: usize,
    /// 1-based position of the test case.
    pub current: usize,
    /// Number of test cases in the requirement.
    pub total: usize,
    /// Subtask key when creation succeeded.
    pub key: Option<String>,
}

/// Notification emitted while an export runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Requirement(ExportProgress),
    Subtask(SubtaskProgress),
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
