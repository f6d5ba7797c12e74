// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors from individual tracker calls.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Error type for a single tracker call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The tracker answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The connection could not be established, so the request was never sent.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The request failed after it may have reached the tracker.
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be understood.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The file to attach could not be read.
    #[error("attachment error: {0}")]
    Attachment(String),

    /// The run was cancelled before the call was sent.
    #[error("export cancelled")]
    Cancelled,
}

/// Result type for tracker calls.
pub type TransportResult<T> = Result<T, TransportError>;

/// Error body returned by the tracker on failures.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorEnvelope {
    #[serde(default)]
    error_messages: Vec<String>,
    #[serde(default)]
    errors: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

impl TransportError {
    /// Build a status error from a failed response.
    ///
    /// The message is the tracker's own explanation when the body carries
    /// one, otherwise `HTTP <code>: <reason>`.
    pub fn from_response(status: u16, reason: Option<&str>, body: &str) -> Self {
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap_or_default();

        let from_messages = envelope
            .error_messages
            .into_iter()
            .find(|m| !m.trim().is_empty());
        let from_fields = envelope
            .errors
            .into_iter()
            .find_map(|(field, value)| value.as_str().map(|msg| format!("{field}: {msg}")));
        let from_message = envelope.message.filter(|m| !m.trim().is_empty());

        let message = from_messages
            .or(from_fields)
            .or(from_message)
            .unwrap_or_else(|| match reason {
                Some(reason) => format!("HTTP {status}: {reason}"),
                None => format!("HTTP {status}"),
            });

        TransportError::Status { status, message }
    }

    /// HTTP status of the failure, if the tracker answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the same call can be sent again without risking a duplicate.
    ///
    /// Only failures the tracker reported as temporary, or connections that
    /// never opened, qualify. A timeout or reset may follow a successful write.
    pub fn is_transient(&self) -> bool {
        match self {
            TransportError::Status { status, .. } => matches!(status, 429 | 502 | 503 | 504),
            TransportError::Connect(_) => true,
            TransportError::Network(_)
            | TransportError::Decode(_)
            | TransportError::Attachment(_)
            | TransportError::Cancelled => false,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}
