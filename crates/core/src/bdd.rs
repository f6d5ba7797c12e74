// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Given/When/Then phrasing for test case descriptions.
//!
//! Descriptions that already carry `Given`/`When`/`Then` lines pass through.
//! Anything else is split with a line-based heuristic around the first line
//! that mentions an action verb. The conversion never fails: missing parts
//! are filled from [`BddFallbacks`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Verbs that mark the action line of an unstructured description.
pub const DEFAULT_ACTION_VERBS: [&str; 6] =
    ["verify", "check", "ensure", "validate", "test", "confirm"];

static GIVEN_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"(?i)^given:?\s*") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

static WHEN_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"(?i)^when:?\s*") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

static THEN_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"(?i)^then:?\s*") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// A test case in Given/When/Then form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bdd {
    pub given: String,
    pub when: String,
    pub then: String,
}

/// Sentences used when a description lacks a part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BddFallbacks {
    /// Precondition when the description is empty.
    pub given: String,
    /// Action when nothing follows the first line.
    pub when: String,
    /// Outcome when no action line was found.
    pub then: String,
    /// Outcome when the action line is the last line.
    pub verified: String,
}

impl Default for BddFallbacks {
    fn default() -> Self {
        BddFallbacks {
            given: "The system is in a ready state".to_string(),
            when: "The test action is performed".to_string(),
            then: "The expected outcome matches the requirement".to_string(),
            verified: "The expected outcome is verified".to_string(),
        }
    }
}

/// Convert a free-form description into Given/When/Then parts.
pub fn to_bdd<S: AsRef<str>>(
    description: &str,
    action_verbs: &[S],
    fallbacks: &BddFallbacks,
) -> Bdd {
    let lines: Vec<&str> = description
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if let Some(bdd) = structured(&lines) {
        return bdd;
    }

    let action_line = lines.iter().position(|line| {
        let lower = line.to_lowercase();
        action_verbs
            .iter()
            .any(|verb| lower.contains(&verb.as_ref().to_lowercase()))
    });

    // An action on the first line leaves no precondition; use the plain split.
    if let Some(k) = action_line.filter(|&k| k > 0) {
        return Bdd {
            given: lines[..k].join(" "),
            when: lines[k].to_string(),
            then: or_fallback(lines[k + 1..].join(" "), &fallbacks.verified),
        };
    }

    Bdd {
        given: lines
            .first()
            .map(|line| line.to_string())
            .unwrap_or_else(|| fallbacks.given.clone()),
        when: or_fallback(
            lines.get(1..).map(|rest| rest.join(" ")).unwrap_or_default(),
            &fallbacks.when,
        ),
        then: fallbacks.then.clone(),
    }
}

fn structured(lines: &[&str]) -> Option<Bdd> {
    let find = |keyword: &str| {
        lines
            .iter()
            .find(|line| line.to_lowercase().starts_with(keyword))
            .copied()
    };

    let given = find("given")?;
    let when = find("when")?;
    let then = find("then")?;

    Some(Bdd {
        given: GIVEN_RE.replace(given, "").into_owned(),
        when: WHEN_RE.replace(when, "").into_owned(),
        then: THEN_RE.replace(then, "").into_owned(),
    })
}

fn or_fallback(text: String, fallback: &str) -> String {
    if text.is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

#[cfg(test)]
#[path = "bdd_tests.rs"]
mod tests;
