// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-line summaries and requirement identifiers.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Default summary length limit, in characters.
pub const DEFAULT_MAX_SUMMARY_LEN: usize = 80;

const ELLIPSIS: &str = "...";

// Sentence terminator followed by whitespace.
static SENTENCE_END_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"[.!?]\s") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

static REQ_ID_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"REQ-[A-Z]+-\d+") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

// Parenthesized annotations such as `(Critical)`.
static PAREN_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"\([^)]*\)") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

static LEADING_SEP_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^[:\s]+") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Condense text to its first sentence, or truncate it to `max_len` chars.
///
/// The first sentence keeps its terminating punctuation. When it is longer
/// than `max_len`, the result is the first `max_len - 3` characters of the
/// trimmed text followed by `...`. Lengths count characters, not bytes.
pub fn summarize(text: &str, max_len: usize) -> String {
    let text = text.trim();
    let candidate = first_sentence(text);

    if candidate.chars().count() <= max_len {
        return candidate.to_string();
    }

    let keep = max_len.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

fn first_sentence(text: &str) -> &str {
    match SENTENCE_END_RE.find(text) {
        // Terminators are single-byte ASCII.
        Some(m) => &text[..=m.start()],
        None => text,
    }
}

/// The requirement identifier embedded in `text`, e.g. `REQ-INT-007`.
///
/// Falls back to `REQ-<position>` where `position` is 1-based.
pub fn requirement_id(text: &str, position: usize) -> String {
    match REQ_ID_RE.find(text) {
        Some(m) => m.as_str().to_string(),
        None => format!("REQ-{position}"),
    }
}

/// Strip identifiers, parenthesized annotations and leading separators.
pub fn clean_requirement_text(text: &str) -> String {
    let without_ids = REQ_ID_RE.replace_all(text, "");
    let without_parens = PAREN_RE.replace_all(&without_ids, "");
    match LEADING_SEP_RE.replace(&without_parens, "") {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

/// Summary line for a requirement's parent issue: `<id>: <summary>`.
pub fn parent_summary(text: &str, position: usize, max_len: usize) -> String {
    let id = requirement_id(text, position);
    let cleaned = clean_requirement_text(text);
    format!("{}: {}", id, summarize(&cleaned, max_len))
}

/// Summary line for a test case subtask: `TC-<position>: <summary>`.
pub fn subtask_summary(description: &str, position: usize, max_len: usize) -> String {
    format!("TC-{}: {}", position, summarize(description, max_len))
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
