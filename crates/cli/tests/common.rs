// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The binary with a clean, colorless environment.
pub fn reqlink() -> Command {
    let mut cmd = cargo_bin_cmd!("reqlink");
    cmd.env_remove("REQLINK_CONFIG")
        .env_remove("REQLINK_URL")
        .env_remove("REQLINK_API_TOKEN")
        .env_remove("RUST_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

pub const TWO_CASES: &str = r#"[
  {
    "requirement": "REQ-INT-001: Validate login",
    "testCases": [
      { "description": "Given a registered user\nWhen they sign in\nThen the dashboard opens", "compliance": ["HIPAA"] },
      { "description": "Verify lockout after three failed attempts", "compliance": [] }
    ]
  }
]"#;

/// Settings for a tracker at `url`, accepting any host.
pub fn settings_for(url: &str) -> String {
    format!(
        r#"
[tracker]
url = "{url}"
username = "qa@acme.com"
api_token = "secret-token"
project_key = "QA"
host_suffix = "127.0.0.1"

[export]
pace_ms = 0
"#
    )
}

pub fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
