// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client abstraction over the tracker's issue API.
//!
//! The exporter only sees [`IssueClient`], so tests can substitute an
//! in-memory client that records calls and scripts failures.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use reqlink_core::{IssueRecord, LinkRecord, NewIssue};
use serde::{Deserialize, Serialize};

use super::error::{TransportError, TransportResult};

/// Boxed future returned by every client call.
pub type ClientFuture<'a, T> = Pin<Box<dyn Future<Output = TransportResult<T>> + Send + 'a>>;

/// Operations the exporter needs from the tracker.
pub trait IssueClient: Send + Sync {
    /// Create a parent issue or subtask.
    fn create_issue<'a>(&'a self, issue: &'a NewIssue) -> ClientFuture<'a, IssueRecord>;

    /// Link two existing issues.
    fn create_link<'a>(&'a self, link: &'a LinkRecord) -> ClientFuture<'a, ()>;

    /// Upload a file to an existing issue.
    fn attach_file<'a>(
        &'a self,
        issue_key: &'a str,
        attachment: &'a Attachment,
    ) -> ClientFuture<'a, ()>;

    /// Fetch the account the credentials belong to.
    fn myself(&self) -> ClientFuture<'_, TrackerUser>;
}

/// Account details returned by the connectivity probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerUser {
    pub account_id: String,
    pub display_name: String,
    #[serde(default)]
    pub email_address: Option<String>,
}

/// A file to upload, held in memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    file_name: String,
    bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Attachment {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file from disk, keeping only its final path component as the name.
    pub fn read(path: &Path) -> TransportResult<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| TransportError::Attachment(format!("{}: {e}", path.display())))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());
        Ok(Attachment::new(file_name, bytes))
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}
