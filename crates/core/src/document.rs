// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structured rich-text documents for tracker description fields.
//!
//! A closed set of block kinds (heading, paragraph, rule) made of styled text
//! runs. Serializes to the tracker's document format:
//!
//! ```text
//! { "type": "doc", "version": 1, "content": [
//!     { "type": "heading", "attrs": { "level": 2 }, "content": [ { "type": "text", "text": "..." } ] },
//!     { "type": "paragraph", "content": [ { "type": "text", "text": "...", "marks": [ { "type": "strong" } ] } ] },
//!     { "type": "rule" }
//! ] }
//! ```
//!
//! Invariants are enforced when blocks are built: heading levels are 1-6 and
//! text runs are never empty, so a finished document is always accepted by
//! the tracker's schema.

use serde::Serialize;

use crate::error::{Error, Result};

/// Document format version understood by the tracker.
pub const DOCUMENT_VERSION: u32 = 1;

/// Inline style applied to a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Mark {
    /// Bold.
    Strong,
    /// Italic.
    Em,
}

/// A run of text with uniform styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "text")]
pub struct TextRun {
    text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    marks: Vec<Mark>,
}

impl TextRun {
    /// Unstyled text.
    pub fn plain(text: impl Into<String>) -> Self {
        TextRun {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    /// Bold text.
    pub fn bold(text: impl Into<String>) -> Self {
        TextRun::plain(text).with_mark(Mark::Strong)
    }

    /// Italic text.
    pub fn italic(text: impl Into<String>) -> Self {
        TextRun::plain(text).with_mark(Mark::Em)
    }

    fn with_mark(mut self, mark: Mark) -> Self {
        if !self.marks.contains(&mark) {
            self.marks.push(mark);
        }
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn is_bold(&self) -> bool {
        self.marks.contains(&Mark::Strong)
    }

    pub fn is_italic(&self) -> bool {
        self.marks.contains(&Mark::Em)
    }
}

/// Heading attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

/// A top-level document block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Heading {
        attrs: HeadingAttrs,
        content: Vec<TextRun>,
    },
    Paragraph {
        content: Vec<TextRun>,
    },
    Rule,
}

impl Block {
    /// A heading of the given level (1-6).
    pub fn heading(level: u8, text: impl Into<String>) -> Result<Self> {
        if !(1..=6).contains(&level) {
            return Err(Error::InvalidHeadingLevel(level));
        }
        Ok(Block::Heading {
            attrs: HeadingAttrs { level },
            content: non_empty(vec![TextRun::plain(text)]),
        })
    }

    /// A paragraph made of the given runs. Empty runs are dropped.
    pub fn paragraph(runs: Vec<TextRun>) -> Self {
        Block::Paragraph {
            content: non_empty(runs),
        }
    }

    /// A paragraph holding a bold label followed by plain text.
    pub fn labeled(label: &str, text: impl Into<String>) -> Self {
        Block::paragraph(vec![TextRun::bold(label), TextRun::plain(text)])
    }

    /// A horizontal rule.
    pub fn rule() -> Self {
        Block::Rule
    }

    /// Text runs of the block (empty for rules).
    pub fn runs(&self) -> &[TextRun] {
        match self {
            Block::Heading { content, .. } | Block::Paragraph { content } => content,
            Block::Rule => &[],
        }
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs().iter().map(TextRun::text).collect()
    }
}

fn non_empty(runs: Vec<TextRun>) -> Vec<TextRun> {
    runs.into_iter().filter(|run| !run.text.is_empty()).collect()
}

/// A complete description document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "doc")]
pub struct StructuredDocument {
    version: u32,
    content: Vec<Block>,
}

impl Default for StructuredDocument {
    fn default() -> Self {
        StructuredDocument::new()
    }
}

impl StructuredDocument {
    pub fn new() -> Self {
        StructuredDocument {
            version: DOCUMENT_VERSION,
            content: Vec::new(),
        }
    }

    /// Build a document from blocks.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        StructuredDocument {
            version: DOCUMENT_VERSION,
            content: blocks,
        }
    }

    pub fn push(&mut self, block: Block) {
        self.content.push(block);
    }

    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.content.extend(blocks);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.content
    }

    /// Render the document as plain text, one line per block.
    ///
    /// Rules render as `---`.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|block| match block {
                Block::Rule => "---".to_string(),
                other => other.text(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
