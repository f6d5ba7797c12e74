// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `preview`: render every issue an export would create, offline.

use std::io::Write;
use std::path::Path;

use reqlink_core::issue::IssuePayload;
use reqlink_core::requirement::read_requirements;
use reqlink_core::summary::requirement_id;
use reqlink_core::{NewIssue, Requirement};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::settings::Settings;

/// Project key shown when none is configured yet.
const UNSET_PROJECT: &str = "PROJECT";

/// Issues planned for one requirement.
pub(crate) struct Plan {
    pub index: usize,
    pub requirement_id: String,
    pub parent: NewIssue,
    pub subtasks: Vec<NewIssue>,
}

#[derive(Serialize)]
struct PlanJson<'a> {
    index: usize,
    requirement_id: &'a str,
    parent: IssuePayload<'a>,
    subtasks: Vec<IssuePayload<'a>>,
}

pub fn run(settings: &Settings, input: &Path, output: OutputFormat) -> Result<()> {
    let requirements = read_requirements(input)?;
    let plans = plan(settings, &requirements);
    run_impl(&plans, output, &mut std::io::stdout())
}

/// Build the issues without creating them.
///
/// Subtasks point at a `<requirement #i>` placeholder since the parent key
/// is only known after creation.
pub(crate) fn plan(settings: &Settings, requirements: &[Requirement]) -> Vec<Plan> {
    let formatter = settings.formatter();
    let project_key = settings
        .tracker_config()
        .resolved_project_key()
        .unwrap_or_else(|| UNSET_PROJECT.to_string());

    requirements
        .iter()
        .enumerate()
        .map(|(i, requirement)| {
            let index = i + 1;
            let parent_ref = format!("<requirement #{index}>");
            Plan {
                index,
                requirement_id: requirement_id(&requirement.text, index),
                parent: formatter.parent_issue(requirement, index, &project_key),
                subtasks: requirement
                    .test_cases
                    .iter()
                    .enumerate()
                    .map(|(j, tc)| formatter.subtask_issue(tc, j + 1, &project_key, &parent_ref))
                    .collect(),
            }
        })
        .collect()
}

pub(crate) fn run_impl(plans: &[Plan], output: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match output {
        OutputFormat::Json => {
            let json: Vec<PlanJson<'_>> = plans
                .iter()
                .map(|p| PlanJson {
                    index: p.index,
                    requirement_id: &p.requirement_id,
                    parent: p.parent.payload(),
                    subtasks: p.subtasks.iter().map(NewIssue::payload).collect(),
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
        OutputFormat::Text => {
            let mut subtask_count = 0;
            for plan in plans {
                writeln!(out, "[{}] {} ({})", plan.index, plan.parent.summary, plan.parent.kind)?;
                for subtask in &plan.subtasks {
                    writeln!(out, "      {} ({})", subtask.summary, subtask.kind)?;
                }
                subtask_count += plan.subtasks.len();
            }
            writeln!(
                out,
                "{} issues would be created: {} requirements, {} test cases",
                plans.len() + subtask_count,
                plans.len(),
                subtask_count
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "preview_tests.rs"]
mod tests;
