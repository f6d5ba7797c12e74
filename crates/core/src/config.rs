// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker connection configuration and its pre-flight check.
//!
//! The check is purely local: it never touches the network. A configuration
//! that fails it must stop an export before the first remote call.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Host suffix expected in tracker URLs unless overridden.
pub const DEFAULT_HOST_SUFFIX: &str = "atlassian.net";

// Project key embedded in a browse URL, e.g. `.../browse/PROJ-123`.
static BROWSE_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"/browse/([A-Z][A-Z0-9_]*)-") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Connection settings for the remote tracker.
///
/// Fixed for the duration of one export run.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Base URL of the tracker site.
    pub url: String,
    /// Account name used for basic auth.
    pub username: String,
    /// API token used as the basic auth password.
    pub api_token: String,
    /// Target project. Derived from `url` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_key: Option<String>,
}

// Hand-written so the token never reaches logs.
impl fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("api_token", &"<redacted>")
            .field("project_key", &self.project_key)
            .finish()
    }
}

impl TrackerConfig {
    /// Create a configuration with an explicit project key.
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        api_token: impl Into<String>,
        project_key: Option<String>,
    ) -> Self {
        TrackerConfig {
            url: url.into(),
            username: username.into(),
            api_token: api_token.into(),
            project_key,
        }
    }

    /// The project key to create issues in.
    ///
    /// An explicit, non-blank `project_key` wins; otherwise the key is taken
    /// from a `/browse/<KEY>-` segment of the URL.
    pub fn resolved_project_key(&self) -> Option<String> {
        match self.project_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Some(key.to_string()),
            _ => extract_project_key(&self.url),
        }
    }

    /// The URL without trailing slashes, ready for path concatenation.
    pub fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }
}

/// Extract a project key from a tracker browse URL.
pub fn extract_project_key(url: &str) -> Option<String> {
    BROWSE_KEY_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// A single reason a configuration is unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    MissingUrl,
    ForeignHost { expected: String },
    MissingUsername,
    MissingApiToken,
    MissingProjectKey,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::MissingUrl => write!(f, "tracker url is empty"),
            ConfigIssue::ForeignHost { expected } => {
                write!(f, "tracker url must point at a '{expected}' host")
            }
            ConfigIssue::MissingUsername => write!(f, "username is empty"),
            ConfigIssue::MissingApiToken => write!(f, "api token is empty"),
            ConfigIssue::MissingProjectKey => write!(
                f,
                "no project key: set project_key or use a url containing /browse/<KEY>-"
            ),
        }
    }
}

/// Verifies a configuration is complete before any network call is made.
#[derive(Debug, Clone)]
pub struct ConfigValidator {
    host_suffix: String,
}

impl Default for ConfigValidator {
    fn default() -> Self {
        ConfigValidator::new(DEFAULT_HOST_SUFFIX)
    }
}

impl ConfigValidator {
    /// Create a validator expecting URLs on the given host suffix.
    pub fn new(host_suffix: impl Into<String>) -> Self {
        ConfigValidator {
            host_suffix: host_suffix.into(),
        }
    }

    /// The host suffix this validator expects.
    pub fn host_suffix(&self) -> &str {
        &self.host_suffix
    }

    /// Returns `true` only when the configuration can be used for an export.
    pub fn validate(&self, config: &TrackerConfig) -> bool {
        self.diagnose(config).is_empty()
    }

    /// List every problem with the configuration, in field order.
    pub fn diagnose(&self, config: &TrackerConfig) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let url = config.url.trim();

        if url.is_empty() {
            issues.push(ConfigIssue::MissingUrl);
        } else if !url.contains(self.host_suffix.as_str()) {
            issues.push(ConfigIssue::ForeignHost {
                expected: self.host_suffix.clone(),
            });
        }
        if config.username.trim().is_empty() {
            issues.push(ConfigIssue::MissingUsername);
        }
        if config.api_token.trim().is_empty() {
            issues.push(ConfigIssue::MissingApiToken);
        }
        if config.resolved_project_key().is_none() {
            issues.push(ConfigIssue::MissingProjectKey);
        }

        issues
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
