// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn input_schema_uses_wire_names() {
    let json = serde_json::to_string(&schema(SchemaCommand::Input)).unwrap();

    assert!(json.contains("\"$schema\""));
    assert!(json.contains("\"requirement\""));
    assert!(json.contains("\"testCases\""));
    assert!(json.contains("\"compliance\""));
}

#[test]
fn result_schema_lists_counters() {
    let json = serde_json::to_string(&schema(SchemaCommand::Result)).unwrap();

    for field in ["success_count", "failed_count", "errors", "subtask_errors", "requirements"] {
        assert!(json.contains(&format!("\"{field}\"")), "missing {field}");
    }
    assert!(json.contains("\"Outcome\""));
}
