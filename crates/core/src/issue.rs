// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker-facing issue and link records.
//!
//! [`NewIssue`] is what the exporter asks the tracker to create;
//! [`IssueRecord`] is what the tracker hands back. Payload types mirror the
//! tracker's REST bodies exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::document::StructuredDocument;
use crate::error::{Error, Result};

/// Link type used for requirement traceability.
pub const RELATES: &str = "Relates";

/// Level of an issue in the exported hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Parent work item for a requirement.
    Task,
    /// Child work item for a test case.
    Subtask,
}

impl IssueKind {
    /// Returns the issue type name the tracker expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::Task => "Task",
            IssueKind::Subtask => "Sub-task",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "task" => Ok(IssueKind::Task),
            "sub-task" | "subtask" => Ok(IssueKind::Subtask),
            _ => Err(Error::InvalidIssueKind(s.to_string())),
        }
    }
}

/// An issue to be created in the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub project_key: String,
    pub summary: String,
    pub description: StructuredDocument,
    pub kind: IssueKind,
    pub labels: Vec<String>,
    /// Parent issue key; set for subtasks only.
    pub parent_key: Option<String>,
}

impl NewIssue {
    /// The `POST /issue` request body.
    pub fn payload(&self) -> IssuePayload<'_> {
        IssuePayload {
            fields: IssueFields {
                project: KeyRef {
                    key: &self.project_key,
                },
                parent: self.parent_key.as_deref().map(|key| KeyRef { key }),
                summary: &self.summary,
                description: &self.description,
                issuetype: NameRef {
                    name: self.kind.as_str(),
                },
                labels: &self.labels,
            },
        }
    }
}

/// Body of an issue creation request.
#[derive(Debug, Serialize)]
pub struct IssuePayload<'a> {
    fields: IssueFields<'a>,
}

#[derive(Debug, Serialize)]
struct IssueFields<'a> {
    project: KeyRef<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<KeyRef<'a>>,
    summary: &'a str,
    description: &'a StructuredDocument,
    issuetype: NameRef<'a>,
    labels: &'a [String],
}

#[derive(Debug, Serialize)]
struct KeyRef<'a> {
    key: &'a str,
}

#[derive(Debug, Serialize)]
struct NameRef<'a> {
    name: &'a str,
}

/// An issue that exists in the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Human-readable key, e.g. `PROJ-123`.
    pub key: String,
    /// Tracker-internal id.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_key: Option<String>,
}

/// A directional relationship between two issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub link_type: String,
    pub inward_key: String,
    pub outward_key: String,
}

impl LinkRecord {
    /// A traceability link from a subtask to its requirement.
    pub fn relates(inward_key: impl Into<String>, outward_key: impl Into<String>) -> Self {
        LinkRecord {
            link_type: RELATES.to_string(),
            inward_key: inward_key.into(),
            outward_key: outward_key.into(),
        }
    }

    /// The `POST /issueLink` request body.
    pub fn payload(&self) -> LinkPayload<'_> {
        LinkPayload {
            link_type: NameRef {
                name: &self.link_type,
            },
            inward_issue: KeyRef {
                key: &self.inward_key,
            },
            outward_issue: KeyRef {
                key: &self.outward_key,
            },
        }
    }
}

/// Body of a link creation request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPayload<'a> {
    #[serde(rename = "type")]
    link_type: NameRef<'a>,
    inward_issue: KeyRef<'a>,
    outward_issue: KeyRef<'a>,
}

impl fmt::Display for LinkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.inward_key, self.outward_key, self.link_type
        )
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
