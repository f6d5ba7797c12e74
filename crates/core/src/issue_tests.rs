// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::document::{Block, TextRun};
use serde_json::json;
use yare::parameterized;

#[parameterized(
    task = { "task", IssueKind::Task },
    task_upper = { "Task", IssueKind::Task },
    subtask_dash = { "Sub-task", IssueKind::Subtask },
    subtask_plain = { "subtask", IssueKind::Subtask },
)]
fn issue_kind_from_str_valid(input: &str, expected: IssueKind) {
    assert_eq!(input.parse::<IssueKind>().unwrap(), expected);
}

#[parameterized(
    story = { "story" },
    empty = { "" },
)]
fn issue_kind_from_str_invalid(input: &str) {
    assert!(input.parse::<IssueKind>().is_err());
}

#[parameterized(
    task = { IssueKind::Task, "Task" },
    subtask = { IssueKind::Subtask, "Sub-task" },
)]
fn issue_kind_as_str(kind: IssueKind, expected: &str) {
    assert_eq!(kind.as_str(), expected);
    assert_eq!(kind.to_string(), expected);
}

fn sample(kind: IssueKind, parent_key: Option<&str>) -> NewIssue {
    NewIssue {
        project_key: "QA".to_string(),
        summary: "REQ-1: Login".to_string(),
        description: crate::StructuredDocument::from_blocks(vec![Block::paragraph(vec![
            TextRun::plain("body"),
        ])]),
        kind,
        labels: vec!["healthtestai".to_string()],
        parent_key: parent_key.map(str::to_string),
    }
}

#[test]
fn task_payload_has_no_parent() {
    let value = serde_json::to_value(sample(IssueKind::Task, None).payload()).unwrap();

    assert_eq!(value["fields"]["project"], json!({ "key": "QA" }));
    assert_eq!(value["fields"]["issuetype"], json!({ "name": "Task" }));
    assert_eq!(value["fields"]["summary"], "REQ-1: Login");
    assert_eq!(value["fields"]["labels"], json!(["healthtestai"]));
    assert_eq!(value["fields"]["description"]["type"], "doc");
    assert!(value["fields"].get("parent").is_none());
}

#[test]
fn subtask_payload_references_parent() {
    let value =
        serde_json::to_value(sample(IssueKind::Subtask, Some("QA-7")).payload()).unwrap();

    assert_eq!(value["fields"]["parent"], json!({ "key": "QA-7" }));
    assert_eq!(value["fields"]["issuetype"], json!({ "name": "Sub-task" }));
}

#[test]
fn link_payload_shape() {
    let link = LinkRecord::relates("QA-8", "QA-7");
    let value = serde_json::to_value(link.payload()).unwrap();

    assert_eq!(
        value,
        json!({
            "type": { "name": "Relates" },
            "inwardIssue": { "key": "QA-8" },
            "outwardIssue": { "key": "QA-7" }
        })
    );
    assert_eq!(link.to_string(), "QA-8 -> QA-7 (Relates)");
}

#[test]
fn issue_record_parses_tracker_response() {
    let record: IssueRecord =
        serde_json::from_str(r#"{"id":"10001","key":"QA-7","self":"https://x/rest/api/3/issue/10001"}"#)
            .unwrap();

    assert_eq!(record.key, "QA-7");
    assert_eq!(record.id, "10001");
    assert_eq!(record.parent_key, None);
}
