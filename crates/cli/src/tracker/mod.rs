// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote tracker access.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Orchestrator │────►│ IssueClient  │────►│   Tracker    │
//! │              │◄────│   (trait)    │◄────│   REST API   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │
//!        ▼
//! ┌──────────────┐  ┌──────────────┐
//! │    Pacer     │  │ RetryPolicy  │
//! │ (inter-call) │  │ (transient)  │
//! └──────────────┘  └──────────────┘
//! ```
//!
//! - [`HttpIssueClient`] talks to the tracker over HTTPS with basic auth
//! - [`Pacer`] spaces consecutive calls to stay under the tracker's throttle
//! - [`RetryPolicy`] optionally retries transient failures with backoff
//! - The client trait is injectable so the exporter can be tested in memory

mod client;
mod error;
mod http;
mod pacer;
mod retry;

pub use client::{Attachment, ClientFuture, IssueClient, TrackerUser};
pub use error::{TransportError, TransportResult};
pub use http::HttpIssueClient;
pub use pacer::{FixedPacer, NoPacer, Pacer, DEFAULT_PACE_MS};
pub use retry::RetryPolicy;

#[cfg(test)]
pub(crate) mod test_helpers;


#[cfg(test)]
mod http_tests;
