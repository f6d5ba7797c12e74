// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded retry of transient tracker failures.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::error::{TransportError, TransportResult};

/// Retry settings for issue creation. Disabled unless configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RetryPolicy {
    pub enabled: bool,
    /// Total attempts including the first.
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            enabled: false,
            max_attempts: 3,
            initial_delay_ms: 200,
            max_delay_ms: 5000,
        }
    }
}

impl RetryPolicy {
    /// A policy that retries transient failures with the default bounds.
    pub fn enabled() -> Self {
        RetryPolicy {
            enabled: true,
            ..RetryPolicy::default()
        }
    }

    /// Number of attempts a call gets under this policy.
    pub fn attempts(&self) -> u32 {
        if self.enabled {
            self.max_attempts.max(1)
        } else {
            1
        }
    }

    /// Backoff before the given retry (1 = first retry), doubling up to the cap.
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 1u64
            .checked_shl(retry.saturating_sub(1))
            .unwrap_or(u64::MAX);
        let ms = self
            .initial_delay_ms
            .saturating_mul(factor)
            .min(self.max_delay_ms);
        Duration::from_millis(ms)
    }

    /// Run `op`, retrying while it fails transiently and attempts remain.
    ///
    /// Cancellation stops the loop before the next attempt: a cancelled
    /// backoff returns the last error, and an op is never started once
    /// `cancel` has fired.
    pub async fn run<T, F, Fut>(&self, cancel: &CancellationToken, mut op: F) -> TransportResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = TransportResult<T>>,
    {
        if cancel.is_cancelled() {
            return Err(TransportError::Cancelled);
        }
        let attempts = self.attempts();
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transient() && attempt < attempts => {
                    let delay = self.delay_for(attempt);
                    warn!(
                        attempt,
                        max_attempts = attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "transient tracker failure, retrying"
                    );
                    tokio::select! {
                        _ = cancel.cancelled() => {
                            debug!(attempt, "retry abandoned after cancellation");
                            return Err(err);
                        }
                        _ = tokio::time::sleep(delay) => {}
                    }
                    if cancel.is_cancelled() {
                        return Err(err);
                    }
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
