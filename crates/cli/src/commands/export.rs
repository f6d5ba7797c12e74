// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `export`: create the issue hierarchy for a requirements file.

use std::path::Path;

use reqlink_core::requirement::read_requirements;
use reqlink_core::{ExportResult, ProgressEvent};
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::cli::OutputFormat;
use crate::colors;
use crate::commands::runtime;
use crate::error::{Error, Result};
use crate::export::ExportOrchestrator;
use crate::settings::Settings;
use crate::tracker::{Attachment, HttpIssueClient};

pub fn run(
    settings: &Settings,
    input: &Path,
    attach: Option<&Path>,
    output: OutputFormat,
) -> Result<()> {
    let requirements = read_requirements(input)?;
    let config = settings.tracker_config();
    if !settings.validator().validate(&config) {
        return Err(Error::ConfigurationIncomplete);
    }

    let mut options = settings.export_options();
    if let Some(path) = attach {
        if settings.export.attach_file {
            options.attachment = Some(Attachment::read(path)?);
        } else {
            warn!(file = %path.display(), "ignoring --attach: export.attach_file is disabled");
        }
    }

    let orchestrator = ExportOrchestrator::new(HttpIssueClient::new(&config)?, settings.pacer())
        .with_formatter(settings.formatter())
        .with_validator(settings.validator())
        .with_options(options);

    let color = output == OutputFormat::Text && colors::should_colorize();
    let cancel = CancellationToken::new();
    let result = runtime()?.block_on(async {
        let on_interrupt = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("interrupted, stopping after the current call");
                on_interrupt.cancel();
            }
        });

        let mut on_progress = |event: &ProgressEvent| {
            if output == OutputFormat::Text {
                println!("{}", progress_line(event, color));
            }
        };
        orchestrator
            .export(&config, &requirements, &mut on_progress, &cancel)
            .await
    })?;

    match output {
        OutputFormat::Text => print!("{}", summary(&result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    if result.failed_count > 0 {
        return Err(Error::ExportFailed {
            failed: result.failed_count,
            total: result.total(),
        });
    }
    Ok(())
}

/// One line per attempted issue.
pub(crate) fn progress_line(event: &ProgressEvent, color: bool) -> String {
    let paint = |ok: bool, text: &str| match (color, ok) {
        (false, _) => text.to_string(),
        (true, true) => colors::success(text),
        (true, false) => colors::failure(text),
    };

    match event {
        ProgressEvent::Requirement(p) => match &p.last_created_key {
            Some(key) => format!("[{}/{}] {} {key}", p.current, p.total, paint(true, "created")),
            None => format!("[{}/{}] {}", p.current, p.total, paint(false, "failed")),
        },
        ProgressEvent::Subtask(s) => match &s.key {
            Some(key) => format!("      TC-{} {} {key}", s.current, paint(true, "created")),
            None => format!("      TC-{} {}", s.current, paint(false, "failed")),
        },
    }
}

/// Closing summary for text output.
pub(crate) fn summary(result: &ExportResult) -> String {
    let mut text = format!(
        "created {} of {} requirements",
        result.success_count,
        result.total()
    );
    let mut notes = Vec::new();
    if result.failed_count > 0 {
        notes.push(format!("{} failed", result.failed_count));
    }
    if result.partial_count > 0 {
        notes.push(format!("{} partial", result.partial_count));
    }
    if result.cancelled {
        notes.push("cancelled".to_string());
    }
    if !notes.is_empty() {
        text.push_str(&format!(" ({})", notes.join(", ")));
    }
    text.push('\n');

    if !result.errors.is_empty() {
        text.push_str("errors:\n");
        for error in &result.errors {
            text.push_str(&format!("  {error}\n"));
        }
    }
    if !result.subtask_errors.is_empty() {
        text.push_str("test case errors:\n");
        for error in &result.subtask_errors {
            text.push_str(&format!("  {error}\n"));
        }
    }
    text
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
