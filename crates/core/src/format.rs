// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Turns requirements and test cases into tracker issues.
//!
//! Every tunable (summary length, action verbs, labels, footer, fallbacks)
//! lives in [`FormatStrategy`] so alternate house styles are a settings
//! change rather than a code change.

use serde::{Deserialize, Serialize};

use crate::bdd::{self, Bdd, BddFallbacks, DEFAULT_ACTION_VERBS};
use crate::document::{Block, StructuredDocument, TextRun};
use crate::issue::{IssueKind, NewIssue};
use crate::requirement::{Requirement, TestCase};
use crate::summary::{self, DEFAULT_MAX_SUMMARY_LEN};

const REQUIREMENT_HEADING_LEVEL: u8 = 2;

/// Formatting constants for summaries, labels and documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatStrategy {
    /// Maximum summary length in characters.
    pub max_summary_len: usize,
    /// Verbs marking the action line of an unstructured test case.
    pub action_verbs: Vec<String>,
    /// Labels on requirement issues.
    pub parent_labels: Vec<String>,
    /// Labels on test case subtasks.
    pub subtask_labels: Vec<String>,
    /// Italic closing lines appended to every document.
    pub footer: Vec<String>,
    /// Sentences used when a test case lacks Given/When/Then parts.
    pub fallbacks: BddFallbacks,
}

impl Default for FormatStrategy {
    fn default() -> Self {
        FormatStrategy {
            max_summary_len: DEFAULT_MAX_SUMMARY_LEN,
            action_verbs: DEFAULT_ACTION_VERBS.iter().map(|v| v.to_string()).collect(),
            parent_labels: vec![
                "healthtestai".to_string(),
                "automated-requirement".to_string(),
            ],
            subtask_labels: vec!["healthtestai".to_string(), "test-case".to_string()],
            footer: vec![
                "Generated by HealthTestAI".to_string(),
                "For any queries reach to the quality assurance team.".to_string(),
            ],
            fallbacks: BddFallbacks::default(),
        }
    }
}

/// Document and summary builder driven by a [`FormatStrategy`].
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    strategy: FormatStrategy,
}

impl Formatter {
    pub fn new(strategy: FormatStrategy) -> Self {
        Formatter { strategy }
    }

    pub fn strategy(&self) -> &FormatStrategy {
        &self.strategy
    }

    /// First sentence of `text`, or `text` truncated to the summary limit.
    pub fn summarize(&self, text: &str) -> String {
        summary::summarize(text, self.strategy.max_summary_len)
    }

    /// Given/When/Then parts of a test case description.
    pub fn to_bdd(&self, description: &str) -> Bdd {
        bdd::to_bdd(
            description,
            &self.strategy.action_verbs,
            &self.strategy.fallbacks,
        )
    }

    /// `<requirement id>: <summary>` for the requirement at 1-based `position`.
    pub fn parent_summary(&self, requirement: &Requirement, position: usize) -> String {
        summary::parent_summary(&requirement.text, position, self.strategy.max_summary_len)
    }

    /// `TC-<position>: <summary>` for a test case.
    pub fn subtask_summary(&self, test_case: &TestCase, position: usize) -> String {
        summary::subtask_summary(
            &test_case.description,
            position,
            self.strategy.max_summary_len,
        )
    }

    /// Description document for a requirement's parent issue.
    pub fn build_parent_document(&self, requirement: &Requirement) -> StructuredDocument {
        let heading = match Block::heading(REQUIREMENT_HEADING_LEVEL, "Requirement") {
            Ok(block) => block,
            Err(_) => unreachable!("static heading level"),
        };

        let mut doc = StructuredDocument::from_blocks(vec![
            heading,
            Block::paragraph(vec![TextRun::plain(requirement.text.as_str())]),
            Block::paragraph(vec![TextRun::bold(format!(
                "Total Test Cases: {}",
                requirement.test_cases.len()
            ))]),
        ]);
        doc.extend(self.footer_blocks());
        doc
    }

    /// Description document for a test case subtask.
    pub fn build_subtask_document(&self, test_case: &TestCase) -> StructuredDocument {
        let bdd = self.to_bdd(&test_case.description);

        let mut doc = StructuredDocument::from_blocks(vec![
            Block::labeled("Given: ", bdd.given),
            Block::labeled("When: ", bdd.when),
            Block::labeled("Then: ", bdd.then),
        ]);

        if !test_case.compliance.is_empty() {
            doc.push(Block::rule());
            doc.push(Block::labeled(
                "Compliance Standards: ",
                test_case.compliance.join(", "),
            ));
        }

        doc.extend(self.footer_blocks());
        doc
    }

    /// The parent issue for the requirement at 1-based `position`.
    pub fn parent_issue(
        &self,
        requirement: &Requirement,
        position: usize,
        project_key: &str,
    ) -> NewIssue {
        NewIssue {
            project_key: project_key.to_string(),
            summary: self.parent_summary(requirement, position),
            description: self.build_parent_document(requirement),
            kind: IssueKind::Task,
            labels: self.strategy.parent_labels.clone(),
            parent_key: None,
        }
    }

    /// The subtask for the test case at 1-based `position` under `parent_key`.
    pub fn subtask_issue(
        &self,
        test_case: &TestCase,
        position: usize,
        project_key: &str,
        parent_key: &str,
    ) -> NewIssue {
        NewIssue {
            project_key: project_key.to_string(),
            summary: self.subtask_summary(test_case, position),
            description: self.build_subtask_document(test_case),
            kind: IssueKind::Subtask,
            labels: self.strategy.subtask_labels.clone(),
            parent_key: Some(parent_key.to_string()),
        }
    }

    fn footer_blocks(&self) -> Vec<Block> {
        let mut blocks = vec![Block::rule()];
        blocks.extend(
            self.strategy
                .footer
                .iter()
                .map(|line| Block::paragraph(vec![TextRun::italic(line.as_str())])),
        );
        blocks
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
