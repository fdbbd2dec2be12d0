//! Interactive shell command.
//!
//! Spawns a subshell with the credential exported, for poking at the bot
//! during development.

use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::constants;
use crate::core::credential;
use crate::error::Result;

/// Spawn an interactive shell with the credential exported.
pub fn execute(auth: Option<String>) -> Result<()> {
    let config = Config::load_or_default()?;
    let credential = credential::resolve(auth, &config)?;

    // Determine which shell to use
    let shell = std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string());

    match &credential {
        Some(credential) => output::success(&format!(
            "Entering shell. {} set from {}. Type 'exit' to leave.",
            constants::AUTH_ENV,
            credential.source()
        )),
        None => output::warn(&format!(
            "Entering shell without a credential; {} will not be set.",
            constants::AUTH_ENV
        )),
    }
    output::blank();

    let mut cmd = std::process::Command::new(&shell);
    if let Some(credential) = credential {
        let value = Zeroizing::new(credential.value().to_string());
        cmd.env(constants::AUTH_ENV, value.as_str());
    }

    let status = cmd.status()?;

    output::blank();
    output::success("Left shell.");

    // Return the shell's exit code
    std::process::exit(status.code().unwrap_or(0));
}
