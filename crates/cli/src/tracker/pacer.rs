// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spacing between consecutive issue creations.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Default gap between issue creations, in milliseconds.
pub const DEFAULT_PACE_MS: u64 = 500;

/// Suspends the exporter between remote calls.
pub trait Pacer: Send + Sync {
    fn wait(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

/// Sleeps for a fixed delay on the tokio timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPacer {
    delay: Duration,
}

impl FixedPacer {
    pub fn new(delay: Duration) -> Self {
        FixedPacer { delay }
    }

    pub fn from_millis(ms: u64) -> Self {
        FixedPacer::new(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for FixedPacer {
    fn default() -> Self {
        FixedPacer::from_millis(DEFAULT_PACE_MS)
    }
}

impl Pacer for FixedPacer {
    fn wait(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(async move {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        })
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn wait(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(async {})
    }
}
