// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User settings stored in a TOML file.
//!
//! The file is looked up at `--config`, then `REQLINK_CONFIG`, then
//! `<config dir>/reqlink/config.toml`, and has these sections:
//! - `[tracker]`: site URL, credentials and project key
//! - `[export]`: pacing, linking, attachment and `[export.retry]`
//! - `[format]`: summary length, action verbs, labels, footer and BDD fallbacks
//!
//! `REQLINK_URL` and `REQLINK_API_TOKEN` override the file so the token can
//! stay out of it.

use std::fs;
use std::path::{Path, PathBuf};

use reqlink_core::config::DEFAULT_HOST_SUFFIX;
use reqlink_core::issue::RELATES;
use reqlink_core::{ConfigValidator, FormatStrategy, Formatter, TrackerConfig};
use serde::{Deserialize, Serialize};

use crate::env;
use crate::error::{Error, Result};
use crate::export::{ExportOptions, LinkPolicy};
use crate::tracker::{FixedPacer, RetryPolicy};

const APP_DIR_NAME: &str = "reqlink";
const SETTINGS_FILE_NAME: &str = "config.toml";

/// Complete settings for a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub tracker: TrackerSettings,
    pub export: ExportSettings,
    pub format: FormatStrategy,
}

/// Connection to the tracker site.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerSettings {
    pub url: String,
    pub username: String,
    pub api_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_key: Option<String>,
    /// Host suffix the site URL must contain.
    pub host_suffix: String,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        TrackerSettings {
            url: String::new(),
            username: String::new(),
            api_token: String::new(),
            project_key: None,
            host_suffix: DEFAULT_HOST_SUFFIX.to_string(),
        }
    }
}

impl std::fmt::Debug for TrackerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackerSettings")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("api_token", &"<redacted>")
            .field("project_key", &self.project_key)
            .field("host_suffix", &self.host_suffix)
            .finish()
    }
}

/// How the export walks the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportSettings {
    /// Delay between issue creations in milliseconds.
    pub pace_ms: u64,
    pub link_type: String,
    pub link_policy: LinkPolicy,
    /// Allow `--attach` to upload the source file.
    pub attach_file: bool,
    pub retry: RetryPolicy,
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            pace_ms: crate::tracker::DEFAULT_PACE_MS,
            link_type: RELATES.to_string(),
            link_policy: LinkPolicy::default(),
            attach_file: false,
            retry: RetryPolicy::default(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.check()?;
        Ok(settings)
    }

    /// Load settings from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::SettingsNotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        Settings::parse(&text)
    }

    /// Resolve and load settings, then apply environment overrides.
    ///
    /// An explicit path must exist. When no file was named, a missing
    /// default file yields defaults so env overrides alone can be checked.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let named = explicit.map(Path::to_path_buf).or_else(env::config_path);
        let mut settings = match named {
            Some(path) => Settings::load(&path)?,
            None => match default_path() {
                Some(path) if path.exists() => Settings::load(&path)?,
                _ => Settings::default(),
            },
        };
        settings.apply_overrides(env::tracker_url(), env::api_token());
        Ok(settings)
    }

    /// Replace the URL and token with values from outside the file.
    pub fn apply_overrides(&mut self, url: Option<String>, api_token: Option<String>) {
        if let Some(url) = url {
            self.tracker.url = url;
        }
        if let Some(token) = api_token {
            self.tracker.api_token = token;
        }
    }

    fn check(&self) -> Result<()> {
        if self.format.max_summary_len < 4 {
            return Err(Error::Settings(format!(
                "format.max_summary_len must be at least 4, got {}",
                self.format.max_summary_len
            )));
        }
        if self.export.link_type.trim().is_empty() {
            return Err(Error::Settings("export.link_type must not be empty".into()));
        }
        Ok(())
    }

    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig::new(
            self.tracker.url.clone(),
            self.tracker.username.clone(),
            self.tracker.api_token.clone(),
            self.tracker.project_key.clone(),
        )
    }

    pub fn validator(&self) -> ConfigValidator {
        ConfigValidator::new(self.tracker.host_suffix.clone())
    }

    pub fn formatter(&self) -> Formatter {
        Formatter::new(self.format.clone())
    }

    pub fn pacer(&self) -> FixedPacer {
        FixedPacer::from_millis(self.export.pace_ms)
    }

    /// Export options; the attachment is filled in by the caller.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            link_type: self.export.link_type.clone(),
            link_policy: self.export.link_policy,
            retry: self.export.retry,
            attachment: None,
        }
    }
}

/// `<config dir>/reqlink/config.toml`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
