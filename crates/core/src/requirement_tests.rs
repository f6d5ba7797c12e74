// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::Error;

#[test]
fn parses_generator_output() {
    let json = r#"[
        {
            "requirement": "REQ-INT-001: Validate login (Critical)",
            "testCases": [
                { "description": "Verify valid credentials", "compliance": ["HIPAA", "GDPR"] },
                { "description": "Verify lockout", "compliance": [] }
            ]
        }
    ]"#;

    let tree = parse_requirements(json).unwrap();

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].text, "REQ-INT-001: Validate login (Critical)");
    assert_eq!(tree[0].test_cases.len(), 2);
    assert_eq!(tree[0].test_cases[0].compliance, vec!["HIPAA", "GDPR"]);
}

#[test]
fn missing_compliance_and_test_cases_default_to_empty() {
    let json = r#"[
        { "requirement": "REQ-A-1", "testCases": [{ "description": "x" }] },
        { "requirement": "REQ-A-2" }
    ]"#;

    let tree = parse_requirements(json).unwrap();

    assert!(tree[0].test_cases[0].compliance.is_empty());
    assert!(tree[1].test_cases.is_empty());
}

#[test]
fn compliance_keeps_order_and_duplicates() {
    let tc = TestCase::new("x").with_compliance(["ISO 13485", "HIPAA", "ISO 13485"]);
    assert_eq!(tc.compliance, vec!["ISO 13485", "HIPAA", "ISO 13485"]);
}

#[test]
fn serializes_with_generator_field_names() {
    let req = Requirement::new("REQ-A-1", vec![TestCase::new("check it")]);
    let value = serde_json::to_value(&req).unwrap();

    assert_eq!(value["requirement"], "REQ-A-1");
    assert_eq!(value["testCases"][0]["description"], "check it");
}

#[test]
fn malformed_json_is_an_error() {
    let err = parse_requirements("{ not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn read_missing_file_is_io_error() {
    let err = read_requirements(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
