// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "reqlink")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Export generated requirements and test cases to a Jira project")]
#[command(
    long_about = "Export generated requirements and test cases to a Jira project.\n\n\
    Each requirement becomes a Task, each test case a Sub-task linked back to it."
)]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Settings file (default: REQLINK_CONFIG or the user config dir)
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create issues for every requirement in a JSON file
    #[command(after_help = colors::examples("\
Examples:
  reqlink export reqs.json                     Export with progress lines
  reqlink export reqs.json -o json             Print the result as JSON
  reqlink export reqs.json --attach src.pdf    Attach the source document"))]
    Export {
        /// Requirements JSON file
        input: PathBuf,

        /// File to attach to the first requirement (needs export.attach_file)
        #[arg(long, value_name = "file")]
        attach: Option<PathBuf>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Check that tracker settings are complete
    CheckConfig,

    /// Verify the credentials against the tracker
    Ping,

    /// Show the issues an export would create, without network calls
    Preview {
        /// Requirements JSON file
        input: PathBuf,

        /// Output format
        #[arg(long, short, value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Output JSON Schema for input or output documents
    Schema {
        #[command(subcommand)]
        kind: SchemaCommand,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Schema of the requirements file read by export and preview
    Input,
    /// Schema of `export --output json`
    Result,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
