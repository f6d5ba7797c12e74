// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! reqlink - export generated requirements and test cases to a Jira project.
//!
//! This crate drives the network side of the export: it loads settings,
//! talks to the tracker's REST API, and walks requirement trees into a
//! Task / Sub-task hierarchy with traceability links. Formatting and the
//! data model live in `reqlink-core`.
//!
//! # Main Components
//!
//! - [`ExportOrchestrator`] - sequential export with pacing, retry and cancellation
//! - [`tracker::IssueClient`] - tracker operations, with [`tracker::HttpIssueClient`] over reqwest
//! - [`Settings`] - TOML settings with environment overrides
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use reqlink::{ExportOrchestrator, Settings};
//! use reqlink::tracker::HttpIssueClient;
//!
//! let settings = Settings::discover(None)?;
//! let config = settings.tracker_config();
//! let orchestrator = ExportOrchestrator::new(HttpIssueClient::new(&config)?, settings.pacer())
//!     .with_formatter(settings.formatter())
//!     .with_options(settings.export_options());
//! let result = orchestrator
//!     .export(&config, &requirements, &mut |_| {}, &CancellationToken::new())
//!     .await?;
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod env;
pub mod export;
pub mod help;
pub mod logging;
pub mod settings;
pub mod tracker;

pub mod error;

pub use cli::{Cli, Command, OutputFormat, SchemaCommand};
pub use error::{Error, Result};
pub use export::{ExportOptions, ExportOrchestrator, LinkPolicy};
pub use settings::Settings;

use clap::CommandFactory;
use clap_complete::generate;

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Command::Export {
            input,
            attach,
            output,
        } => {
            let settings = Settings::discover(config)?;
            commands::export::run(&settings, &input, attach.as_deref(), output)
        }
        Command::CheckConfig => commands::check::run(&Settings::discover(config)?),
        Command::Ping => commands::ping::run(&Settings::discover(config)?),
        Command::Preview { input, output } => {
            commands::preview::run(&Settings::discover(config)?, &input, output)
        }
        Command::Schema { kind } => commands::schema::run(kind),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "reqlink", &mut std::io::stdout());
            Ok(())
        }
    }
}
