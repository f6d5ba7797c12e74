// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the HTTP client against a local mock tracker.

#![allow(clippy::unwrap_used)]

use reqlink_core::{IssueKind, LinkRecord, NewIssue, StructuredDocument, TrackerConfig};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::{Attachment, IssueClient};
use super::error::TransportError;
use super::http::HttpIssueClient;

fn client_for(server: &MockServer) -> HttpIssueClient {
    // Trailing slash exercises URL normalization.
    let config = TrackerConfig::new(
        format!("{}/", server.uri()),
        "qa@example.com",
        "secret-token",
        Some("QA".to_string()),
    );
    HttpIssueClient::new(&config).unwrap()
}

fn subtask() -> NewIssue {
    NewIssue {
        project_key: "QA".to_string(),
        summary: "TC-1: Verify login".to_string(),
        description: StructuredDocument::new(),
        kind: IssueKind::Subtask,
        labels: vec!["test-case".to_string()],
        parent_key: Some("QA-1".to_string()),
    }
}

#[tokio::test]
async fn base_url_drops_trailing_slash() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    assert_eq!(client.base_url(), server.uri());
}

#[tokio::test]
async fn create_issue_posts_payload_with_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .and(basic_auth("qa@example.com", "secret-token"))
        .and(body_partial_json(json!({
            "fields": {
                "project": { "key": "QA" },
                "parent": { "key": "QA-1" },
                "summary": "TC-1: Verify login",
                "issuetype": { "name": "Sub-task" },
                "labels": ["test-case"]
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "10002",
            "key": "QA-2",
            "self": "https://example.atlassian.net/rest/api/3/issue/10002"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = client_for(&server)
        .create_issue(&subtask())
        .await
        .unwrap();

    assert_eq!(record.key, "QA-2");
    assert_eq!(record.id, "10002");
    assert_eq!(record.parent_key.as_deref(), Some("QA-1"));
}

#[tokio::test]
async fn create_issue_surfaces_tracker_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errorMessages": ["Issue type 'Sub-task' is not valid for this project"],
            "errors": {}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_issue(&subtask())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        TransportError::Status {
            status: 400,
            message: "Issue type 'Sub-task' is not valid for this project".to_string(),
        }
    );
}

#[tokio::test]
async fn empty_error_body_falls_back_to_status_line() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_issue(&subtask())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "HTTP 401: Unauthorized");
    assert!(!err.is_transient());
}

#[tokio::test]
async fn create_link_posts_relates_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/api/3/issueLink"))
        .and(body_partial_json(json!({
            "type": { "name": "Relates" },
            "inwardIssue": { "key": "QA-2" },
            "outwardIssue": { "key": "QA-1" }
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .create_link(&LinkRecord::relates("QA-2", "QA-1"))
        .await
        .unwrap();
}

#[tokio::test]
async fn attach_file_sends_no_check_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue/QA-1/attachments"))
        .and(header("X-Atlassian-Token", "no-check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "1" }])))
        .expect(1)
        .mount(&server)
        .await;

    let attachment = Attachment::new("source.pdf", b"%PDF-1.4".to_vec());
    client_for(&server)
        .attach_file("QA-1", &attachment)
        .await
        .unwrap();
}

#[tokio::test]
async fn myself_returns_account() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/3/myself"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accountId": "abc123",
            "displayName": "QA Bot",
            "emailAddress": "qa@example.com",
            "active": true
        })))
        .mount(&server)
        .await;

    let user = client_for(&server).myself().await.unwrap();

    assert_eq!(user.account_id, "abc123");
    assert_eq!(user.display_name, "QA Bot");
    assert_eq!(user.email_address.as_deref(), Some("qa@example.com"));
}

#[tokio::test]
async fn refused_connection_is_retryable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let config = TrackerConfig::new(
        format!("http://{addr}"),
        "qa@example.com",
        "secret-token",
        Some("QA".to_string()),
    );
    let client = HttpIssueClient::new(&config).unwrap();

    let err = client.myself().await.unwrap_err();

    assert!(matches!(err, TransportError::Connect(_)), "{err:?}");
    assert!(err.is_transient());
}
