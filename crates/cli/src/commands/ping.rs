// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `ping`: confirm the credentials work before a long export.

use tracing::debug;

use crate::commands::runtime;
use crate::error::{Error, Result};
use crate::settings::Settings;
use crate::tracker::{HttpIssueClient, IssueClient, TrackerUser};

pub fn run(settings: &Settings) -> Result<()> {
    let config = settings.tracker_config();
    if !settings.validator().validate(&config) {
        return Err(Error::ConfigurationIncomplete);
    }

    let client = HttpIssueClient::new(&config)?;
    debug!(url = client.base_url(), "probing tracker");
    let user = runtime()?.block_on(client.myself())?;

    println!("connected to {} as {}", client.base_url(), describe(&user));
    Ok(())
}

/// `Name <email> (account)`, without the email when the tracker hides it.
pub(crate) fn describe(user: &TrackerUser) -> String {
    match &user.email_address {
        Some(email) if !email.is_empty() => {
            format!("{} <{}> ({})", user.display_name, email, user.account_id)
        }
        _ => format!("{} ({})", user.display_name, user.account_id),
    }
}

#[cfg(test)]
#[path = "ping_tests.rs"]
mod tests;
