// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `check-config`: report what the settings resolve to and what is missing.

use std::io::Write;

use reqlink_core::config::extract_project_key;

use crate::error::{Error, Result};
use crate::settings::Settings;

pub fn run(settings: &Settings) -> Result<()> {
    run_impl(settings, &mut std::io::stdout())
}

pub(crate) fn run_impl(settings: &Settings, out: &mut dyn Write) -> Result<()> {
    let config = settings.tracker_config();
    let issues = settings.validator().diagnose(&config);

    let project = match (&settings.tracker.project_key, config.resolved_project_key()) {
        (Some(explicit), Some(key)) if explicit.trim() == key => key,
        (_, Some(key)) if extract_project_key(&config.url).is_some() => format!("{key} (from url)"),
        (_, Some(key)) => key,
        (_, None) => "-".to_string(),
    };

    writeln!(out, "url:         {}", or_dash(config.base_url()))?;
    writeln!(out, "username:    {}", or_dash(config.username.trim()))?;
    writeln!(
        out,
        "api token:   {}",
        if config.api_token.trim().is_empty() { "-" } else { "set" }
    )?;
    writeln!(out, "project key: {project}")?;

    if issues.is_empty() {
        writeln!(out, "configuration ok")?;
        return Ok(());
    }

    for issue in &issues {
        writeln!(out, "problem: {issue}")?;
    }
    Err(Error::ConfigurationIncomplete)
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
