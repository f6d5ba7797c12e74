// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Walks a requirement tree and mirrors it into the tracker.
//!
//! Each requirement becomes a parent issue; each of its test cases becomes
//! a subtask linked back to the parent. Calls are issued one at a time, in
//! input order, with the pacer spacing consecutive issue creations.

use reqlink_core::summary::requirement_id;
use reqlink_core::{
    ConfigValidator, ExportProgress, ExportResult, Formatter, IssueRecord, LinkRecord, NewIssue,
    Outcome, ProgressEvent, Requirement, RequirementReport, SubtaskProgress, TrackerConfig,
};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::tracker::{
    Attachment, IssueClient, Pacer, RetryPolicy, TransportError, TransportResult,
};

const CANCELLED: &str = "export cancelled";

/// How failed traceability links affect the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkPolicy {
    /// Log the failure and move on.
    #[default]
    BestEffort,
    /// Record the failure against the subtask and mark the requirement partial.
    Strict,
}

/// Knobs for a single export run.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub link_type: String,
    pub link_policy: LinkPolicy,
    pub retry: RetryPolicy,
    /// Uploaded to the first requirement's parent issue, if set.
    pub attachment: Option<Attachment>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            link_type: reqlink_core::issue::RELATES.to_string(),
            link_policy: LinkPolicy::BestEffort,
            retry: RetryPolicy::default(),
            attachment: None,
        }
    }
}

/// Drives an export against an [`IssueClient`].
///
/// The orchestrator holds no per-run state; every call to
/// [`export`](ExportOrchestrator::export) starts from fresh counters.
pub struct ExportOrchestrator<C, P> {
    client: C,
    pacer: P,
    formatter: Formatter,
    validator: ConfigValidator,
    options: ExportOptions,
}

/// State owned by one in-flight run.
struct Run<'a> {
    project_key: String,
    total: usize,
    issues_attempted: usize,
    result: ExportResult,
    progress: &'a mut dyn FnMut(&ProgressEvent),
    cancel: &'a CancellationToken,
}

impl Run<'_> {
    fn emit(&mut self, event: ProgressEvent) {
        (self.progress)(&event);
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl<C: IssueClient, P: Pacer> ExportOrchestrator<C, P> {
    pub fn new(client: C, pacer: P) -> Self {
        ExportOrchestrator {
            client,
            pacer,
            formatter: Formatter::default(),
            validator: ConfigValidator::default(),
            options: ExportOptions::default(),
        }
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_validator(mut self, validator: ConfigValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Export every requirement in order.
    ///
    /// Fails with [`Error::ConfigurationIncomplete`] before any remote call
    /// when the configuration does not validate. Otherwise every
    /// requirement is accounted for in the returned result, whether it was
    /// created, failed, or skipped because of cancellation.
    pub async fn export(
        &self,
        config: &TrackerConfig,
        requirements: &[Requirement],
        progress: &mut dyn FnMut(&ProgressEvent),
        cancel: &CancellationToken,
    ) -> Result<ExportResult> {
        if !self.validator.validate(config) {
            return Err(Error::ConfigurationIncomplete);
        }
        let project_key = config
            .resolved_project_key()
            .ok_or(Error::ConfigurationIncomplete)?;

        info!(project = %project_key, requirements = requirements.len(), "starting export");

        let mut run = Run {
            project_key,
            total: requirements.len(),
            issues_attempted: 0,
            result: ExportResult::new(),
            progress,
            cancel,
        };

        for (i, requirement) in requirements.iter().enumerate() {
            let index = i + 1;
            if run.is_cancelled() {
                self.skip_remaining(&mut run, &requirements[i..], index);
                break;
            }
            self.export_requirement(&mut run, requirement, index).await;
        }

        if run.is_cancelled() {
            run.result.cancelled = true;
        }
        run.result.finish();

        info!(
            created = run.result.success_count,
            failed = run.result.failed_count,
            partial = run.result.partial_count,
            "export finished"
        );
        Ok(run.result)
    }

    async fn export_requirement(
        &self,
        run: &mut Run<'_>,
        requirement: &Requirement,
        index: usize,
    ) {
        let mut report = RequirementReport {
            index,
            requirement_id: requirement_id(&requirement.text, index),
            key: None,
            outcome: Outcome::Created,
            subtasks_created: 0,
            subtasks_failed: 0,
            links_failed: 0,
        };

        let issue = self
            .formatter
            .parent_issue(requirement, index, &run.project_key);
        let parent = match self.create_issue(run, &issue).await {
            Ok(parent) => parent,
            Err(err) => {
                warn!(
                    index,
                    requirement = %report.requirement_id,
                    error = %err,
                    "requirement issue failed"
                );
                report.outcome = match err {
                    TransportError::Cancelled => Outcome::Cancelled,
                    _ => Outcome::Failed,
                };
                run.result.record(report, Some(err.to_string()));
                run.emit(ProgressEvent::Requirement(ExportProgress {
                    current: index,
                    total: run.total,
                    last_created_key: None,
                }));
                return;
            }
        };

        info!(
            index,
            key = %parent.key,
            requirement = %report.requirement_id,
            "created requirement issue"
        );
        report.key = Some(parent.key.clone());
        run.emit(ProgressEvent::Requirement(ExportProgress {
            current: index,
            total: run.total,
            last_created_key: Some(parent.key.clone()),
        }));

        if index == 1 {
            self.attach(run, &parent.key).await;
        }

        let mut strict_failure = false;
        let subtask_total = requirement.test_cases.len();
        for (j, test_case) in requirement.test_cases.iter().enumerate() {
            let position = j + 1;
            if run.is_cancelled() {
                let remaining = subtask_total - j;
                report.subtasks_failed += remaining;
                for skipped in position..=subtask_total {
                    run.result.record_subtask_error(index, skipped, CANCELLED);
                }
                break;
            }

            let subtask = self.formatter.subtask_issue(
                test_case,
                position,
                &run.project_key,
                &parent.key,
            );
            let created = match self.create_issue(run, &subtask).await {
                Ok(created) => created,
                Err(err) => {
                    warn!(index, position, error = %err, "test case subtask failed");
                    report.subtasks_failed += 1;
                    run.result
                        .record_subtask_error(index, position, &err.to_string());
                    run.emit(ProgressEvent::Subtask(SubtaskProgress {
                        requirement: index,
                        current: position,
                        total: subtask_total,
                        key: None,
                    }));
                    continue;
                }
            };

            debug!(index, position, key = %created.key, "created test case subtask");
            report.subtasks_created += 1;
            run.emit(ProgressEvent::Subtask(SubtaskProgress {
                requirement: index,
                current: position,
                total: subtask_total,
                key: Some(created.key.clone()),
            }));

            if run.is_cancelled() {
                debug!(key = %created.key, "skipping link after cancellation");
                continue;
            }
            let link = LinkRecord {
                link_type: self.options.link_type.clone(),
                inward_key: created.key.clone(),
                outward_key: parent.key.clone(),
            };
            if let Err(err) = self.client.create_link(&link).await {
                warn!(link = %link, error = %err, "traceability link failed");
                report.links_failed += 1;
                if self.options.link_policy == LinkPolicy::Strict {
                    strict_failure = true;
                    run.result.record_subtask_error(
                        index,
                        position,
                        &format!("link to {} failed: {err}", parent.key),
                    );
                }
            }
        }

        if report.subtasks_failed > 0 || strict_failure {
            report.outcome = Outcome::Partial;
        }
        run.result.record(report, None);
    }

    /// Create an issue, pacing after the previous creation of this run.
    ///
    /// A cancellation that lands during the pacing wait fails the call
    /// without sending it.
    async fn create_issue(
        &self,
        run: &mut Run<'_>,
        issue: &NewIssue,
    ) -> TransportResult<IssueRecord> {
        if run.issues_attempted > 0 {
            tokio::select! {
                _ = run.cancel.cancelled() => return Err(TransportError::Cancelled),
                _ = self.pacer.wait() => {}
            }
        }
        run.issues_attempted += 1;
        self.options
            .retry
            .run(run.cancel, || self.client.create_issue(issue))
            .await
    }

    async fn attach(&self, run: &mut Run<'_>, key: &str) {
        let Some(attachment) = &self.options.attachment else {
            return;
        };
        if run.is_cancelled() {
            return;
        }
        match self.client.attach_file(key, attachment).await {
            Ok(()) => info!(key, file = attachment.file_name(), "attached source file"),
            Err(err) => {
                warn!(key, file = attachment.file_name(), error = %err, "attachment failed")
            }
        }
    }

    fn skip_remaining(&self, run: &mut Run<'_>, skipped: &[Requirement], first_index: usize) {
        warn!(remaining = skipped.len(), "export cancelled");
        for (offset, requirement) in skipped.iter().enumerate() {
            let index = first_index + offset;
            let report = RequirementReport {
                index,
                requirement_id: requirement_id(&requirement.text, index),
                key: None,
                outcome: Outcome::Cancelled,
                subtasks_created: 0,
                subtasks_failed: 0,
                links_failed: 0,
            };
            run.result.record(report, Some(CANCELLED.to_string()));
        }
    }
}
