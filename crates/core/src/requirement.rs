// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Requirement tree handed over by the test-case generator.
//!
//! The exporter only reads this tree; it never mutates it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// A single generated test case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct TestCase {
    /// Free-form description, possibly already in Given/When/Then form.
    pub description: String,
    /// Standards the test case covers, in display order. Duplicates are kept.
    #[serde(default)]
    pub compliance: Vec<String>,
}

impl TestCase {
    pub fn new(description: impl Into<String>) -> Self {
        TestCase {
            description: description.into(),
            compliance: Vec::new(),
        }
    }

    /// Attach compliance standards.
    pub fn with_compliance<I, S>(mut self, standards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.compliance = standards.into_iter().map(Into::into).collect();
        self
    }
}

/// A requirement and the test cases generated for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Requirement {
    /// Requirement text, typically prefixed with an identifier like `REQ-INT-001`.
    #[serde(rename = "requirement")]
    pub text: String,
    /// Test cases in creation order.
    #[serde(rename = "testCases", default)]
    pub test_cases: Vec<TestCase>,
}

impl Requirement {
    pub fn new(text: impl Into<String>, test_cases: Vec<TestCase>) -> Self {
        Requirement {
            text: text.into(),
            test_cases,
        }
    }
}

/// Parse a requirement tree from its JSON form.
pub fn parse_requirements(json: &str) -> Result<Vec<Requirement>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a requirement tree from a JSON file.
pub fn read_requirements(path: &Path) -> Result<Vec<Requirement>> {
    let content = fs::read_to_string(path)?;
    parse_requirements(&content)
}

#[cfg(test)]
#[path = "requirement_tests.rs"]
mod tests;
