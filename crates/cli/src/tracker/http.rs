// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTPS client for the tracker's REST API.

use std::time::Duration;

use reqlink_core::{IssueRecord, LinkRecord, NewIssue, TrackerConfig};
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use tracing::debug;

use super::client::{Attachment, ClientFuture, IssueClient, TrackerUser};
use super::error::{TransportError, TransportResult};

/// REST API prefix below the site URL.
const API_PREFIX: &str = "/rest/api/3";

/// Header the tracker requires on attachment uploads.
const NO_CHECK_HEADER: &str = "X-Atlassian-Token";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Issue client backed by reqwest with basic authentication.
pub struct HttpIssueClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    api_token: String,
}

impl HttpIssueClient {
    /// Build a client for the given tracker site.
    pub fn new(config: &TrackerConfig) -> TransportResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(concat!("reqlink/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(HttpIssueClient {
            http,
            base_url: config.base_url().to_string(),
            username: config.username.trim().to_string(),
            api_token: config.api_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, endpoint)
    }

    /// Authenticate, send, and turn non-2xx answers into errors.
    async fn send(&self, request: RequestBuilder) -> TransportResult<Response> {
        let response = request
            .basic_auth(&self.username, Some(&self.api_token))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), body = %body, "tracker rejected request");
        Err(TransportError::from_response(
            status.as_u16(),
            status.canonical_reason(),
            &body,
        ))
    }
}

impl IssueClient for HttpIssueClient {
    fn create_issue<'a>(&'a self, issue: &'a NewIssue) -> ClientFuture<'a, IssueRecord> {
        Box::pin(async move {
            let url = self.api_url("/issue");
            debug!(kind = %issue.kind, summary = %issue.summary, "creating issue");
            let response = self
                .send(self.http.post(&url).json(&issue.payload()))
                .await?;
            let mut record: IssueRecord = response.json().await?;
            record.parent_key = issue.parent_key.clone();
            Ok(record)
        })
    }

    fn create_link<'a>(&'a self, link: &'a LinkRecord) -> ClientFuture<'a, ()> {
        Box::pin(async move {
            let url = self.api_url("/issueLink");
            debug!(link = %link, "creating link");
            self.send(self.http.post(&url).json(&link.payload())).await?;
            Ok(())
        })
    }

    fn attach_file<'a>(
        &'a self,
        issue_key: &'a str,
        attachment: &'a Attachment,
    ) -> ClientFuture<'a, ()> {
        Box::pin(async move {
            let url = self.api_url(&format!("/issue/{issue_key}/attachments"));
            debug!(
                key = issue_key,
                file = attachment.file_name(),
                bytes = attachment.len(),
                "uploading attachment"
            );
            let part = Part::bytes(attachment.bytes().to_vec())
                .file_name(attachment.file_name().to_string());
            let form = Form::new().part("file", part);
            self.send(
                self.http
                    .post(&url)
                    .header(NO_CHECK_HEADER, HeaderValue::from_static("no-check"))
                    .multipart(form),
            )
            .await?;
            Ok(())
        })
    }

    fn myself(&self) -> ClientFuture<'_, TrackerUser> {
        Box::pin(async move {
            let url = self.api_url("/myself");
            let response = self.send(self.http.get(&url)).await?;
            Ok(response.json().await?)
        })
    }
}
