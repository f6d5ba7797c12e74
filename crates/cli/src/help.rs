// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// clap styles matching the color codes in [`colors::codes`].
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));

    Styles::styled()
        .header(color(colors::codes::HEADER))
        .usage(color(colors::codes::HEADER))
        .literal(color(colors::codes::LITERAL))
        .placeholder(color(colors::codes::CONTEXT))
        .valid(color(colors::codes::CONTEXT))
        .error(color(colors::codes::FAILURE))
}

/// Steps shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  reqlink check-config              Validate tracker settings
  reqlink ping                      Verify credentials
  reqlink preview <file>            Show what would be created
  reqlink export <file>             Create issues in the tracker",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
