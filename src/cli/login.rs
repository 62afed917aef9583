//! Login gate for the interactive shell
//!
//! A plaintext check against the one account in `cafe.toml`. Not a security
//! boundary.

use std::io::{BufRead, Write};

use chrono::Local;

use super::prompt::{Prompt, PromptResult};
use crate::storage::Config;

/// Asks for credentials up to `max_login_attempts` times
///
/// Returns true once a username/password pair matches.
pub fn login<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, config: &Config) -> PromptResult<bool> {
    let credentials = &config.credentials;

    for attempt in 1..=config.max_login_attempts {
        let username = prompt.line("Please enter your username: ")?;

        if !credentials.knows_user(&username) {
            tracing::warn!(attempt, "login with unknown username");
            prompt.say("Username not found. Please try again.")?;
            continue;
        }

        let password = prompt.line(&format!("Please enter the password for '{}': ", username))?;
        if credentials.matches(&username, &password) {
            prompt.say(&format!(
                "\nLogin successful\nTime: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S")
            ))?;
            return Ok(true);
        }

        tracing::warn!(attempt, "login with wrong password");
        prompt.say("Incorrect password. Please try again.")?;
    }

    prompt.say("Too many failed login attempts.")?;
    Ok(false)
}
