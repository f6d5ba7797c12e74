// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory tracker client and pacer for tests.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use reqlink_core::{IssueRecord, LinkRecord, NewIssue};
use tokio_util::sync::CancellationToken;

use super::client::{Attachment, ClientFuture, IssueClient, TrackerUser};
use super::error::TransportError;
use super::pacer::Pacer;

/// A call observed by [`MockClient`], successful or not.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CreateIssue(NewIssue),
    CreateLink(LinkRecord),
    AttachFile { key: String, file_name: String },
    Myself,
}

#[derive(Default)]
struct Script {
    /// Failures keyed by 1-based `create_issue` attempt number.
    issue_failures: HashMap<usize, TransportError>,
    link_failure: Option<TransportError>,
    attach_failure: Option<TransportError>,
    /// Cancel this token once the given number of issue attempts was made.
    cancel_after: Option<(usize, CancellationToken)>,
}

/// Records every call and answers from a script.
///
/// Created issues get keys `QA-1`, `QA-2`, ... in creation order.
#[derive(Clone, Default)]
pub(crate) struct MockClient {
    calls: Arc<Mutex<Vec<Call>>>,
    issue_attempts: Arc<AtomicUsize>,
    created: Arc<AtomicUsize>,
    script: Arc<Mutex<Script>>,
}

impl MockClient {
    pub fn new() -> Self {
        MockClient::default()
    }

    /// Fail the `attempt`-th call to `create_issue` (1-based, retries included).
    pub fn fail_issue(self, attempt: usize, err: TransportError) -> Self {
        self.script
            .lock()
            .unwrap()
            .issue_failures
            .insert(attempt, err);
        self
    }

    pub fn fail_links(self, err: TransportError) -> Self {
        self.script.lock().unwrap().link_failure = Some(err);
        self
    }

    pub fn fail_attachments(self, err: TransportError) -> Self {
        self.script.lock().unwrap().attach_failure = Some(err);
        self
    }

    pub fn cancel_after(self, attempts: usize, token: CancellationToken) -> Self {
        self.script.lock().unwrap().cancel_after = Some((attempts, token));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn issues(&self) -> Vec<NewIssue> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::CreateIssue(issue) => Some(issue),
                _ => None,
            })
            .collect()
    }

    pub fn links(&self) -> Vec<LinkRecord> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::CreateLink(link) => Some(link),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl IssueClient for MockClient {
    fn create_issue<'a>(&'a self, issue: &'a NewIssue) -> ClientFuture<'a, IssueRecord> {
        Box::pin(async move {
            self.record(Call::CreateIssue(issue.clone()));
            let attempt = self.issue_attempts.fetch_add(1, Ordering::SeqCst) + 1;

            let script = self.script.lock().unwrap();
            if let Some((after, token)) = &script.cancel_after {
                if attempt >= *after {
                    token.cancel();
                }
            }
            if let Some(err) = script.issue_failures.get(&attempt) {
                return Err(err.clone());
            }
            drop(script);

            let n = self.created.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(IssueRecord {
                key: format!("QA-{n}"),
                id: format!("{}", 10_000 + n),
                parent_key: issue.parent_key.clone(),
            })
        })
    }

    fn create_link<'a>(&'a self, link: &'a LinkRecord) -> ClientFuture<'a, ()> {
        Box::pin(async move {
            self.record(Call::CreateLink(link.clone()));
            match &self.script.lock().unwrap().link_failure {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        })
    }

    fn attach_file<'a>(
        &'a self,
        issue_key: &'a str,
        attachment: &'a Attachment,
    ) -> ClientFuture<'a, ()> {
        Box::pin(async move {
            self.record(Call::AttachFile {
                key: issue_key.to_string(),
                file_name: attachment.file_name().to_string(),
            });
            match &self.script.lock().unwrap().attach_failure {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        })
    }

    fn myself(&self) -> ClientFuture<'_, TrackerUser> {
        Box::pin(async move {
            self.record(Call::Myself);
            Ok(TrackerUser {
                account_id: "5b10a2844c20165700ede21g".to_string(),
                display_name: "Test User".to_string(),
                email_address: Some("test@example.com".to_string()),
            })
        })
    }
}

/// Counts waits without sleeping.
#[derive(Clone, Default)]
pub(crate) struct CountingPacer {
    waits: Arc<AtomicUsize>,
}

impl CountingPacer {
    pub fn waits(&self) -> usize {
        self.waits.load(Ordering::SeqCst)
    }
}

impl Pacer for CountingPacer {
    fn wait(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(async move {
            self.waits.fetch_add(1, Ordering::SeqCst);
        })
    }
}

pub(crate) fn status(code: u16, message: &str) -> TransportError {
    TransportError::Status {
        status: code,
        message: message.to_string(),
    }
}
