// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema for the requirements file and the export result.

use reqlink_core::{ExportResult, Requirement};
use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::cli::SchemaCommand;
use crate::error::Result;

pub fn run(cmd: SchemaCommand) -> Result<()> {
    let json = serde_json::to_string_pretty(&schema(cmd))?;
    println!("{}", json);
    Ok(())
}

pub(crate) fn schema(cmd: SchemaCommand) -> RootSchema {
    match cmd {
        SchemaCommand::Input => schema_for!(Vec<Requirement>),
        SchemaCommand::Result => schema_for!(ExportResult),
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
