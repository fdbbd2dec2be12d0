//! Run command.
//!
//! Executes a command with the credential injected as an environment
//! variable, forwarding all arguments verbatim.

use tracing::warn;
use zeroize::Zeroizing;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::credential;
use crate::error::Result;

/// Run a command with the credential injected.
pub fn execute(auth: Option<String>, command: &[String]) -> Result<()> {
    let exit_code = run_with_credential(auth, command)?;
    std::process::exit(exit_code);
}

fn run_with_credential(auth: Option<String>, command: &[String]) -> Result<i32> {
    if command.is_empty() {
        return Err(crate::error::Error::Other(
            "no command specified".to_string(),
        ));
    }

    let config = Config::load_or_default()?;
    let credential = credential::resolve(auth, &config)?;

    let mut cmd = std::process::Command::new(&command[0]);
    cmd.args(&command[1..]);

    // Use Zeroizing to ensure the credential is wiped from memory after use
    match credential {
        Some(credential) => {
            let value = Zeroizing::new(credential.value().to_string());
            cmd.env(constants::AUTH_ENV, value.as_str());
        }
        None => warn!("no credential found; {} will not be set", constants::AUTH_ENV),
    }

    let status = cmd.status()?;
    // Return the actual exit code, or 1 if unavailable (e.g. killed by signal)
    Ok(status.code().unwrap_or(1))
}
