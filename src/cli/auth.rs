//! Credential management commands.

use std::io::Read;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::{constants, credential};
use crate::error::{CredentialError, Result};

/// Store the credential in the local key file.
///
/// Prompts with hidden input unless `--stdin` was given.
pub fn set(stdin: bool) -> Result<()> {
    let value = if stdin {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer.trim_end_matches(&['\n', '\r'][..]).to_string()
    } else {
        dialoguer::Password::new()
            .with_prompt("Credential")
            .interact()
            .map_err(|e| crate::error::Error::Other(format!("prompt failed: {e}")))?
    };

    if value.is_empty() {
        return Err(CredentialError::Empty {
            origin: "input".to_string(),
        }
        .into());
    }

    let path = credential::store(&value)?;
    output::success(&format!("credential stored in {}", path.display()));
    output::hint(&format!(
        "{} and {} will export it as {}",
        output::cmd("mathsproofbot run"),
        output::cmd("mathsproofbot shell"),
        constants::AUTH_ENV
    ));

    Ok(())
}

/// Show which credential source is active. Never prints the value.
pub fn status() -> Result<()> {
    let config = Config::load_or_default()?;

    output::section("Credential");

    let env_value = std::env::var(constants::AUTH_ENV).ok();
    let env_status = match &env_value {
        Some(v) if !v.trim().is_empty() => "set",
        Some(_) => "set but empty",
        None => "unset",
    };
    output::kv(constants::AUTH_ENV, env_status);

    let file_status = match &config.auth.credential_file {
        Some(path) if path.exists() => format!("{} (found)", path.display()),
        Some(path) => format!("{} (missing)", path.display()),
        None => "not configured".to_string(),
    };
    output::kv("credential_file", file_status);

    let key_status = match credential::default_key_file() {
        Some(path) if path.exists() => format!("{} (found)", path.display()),
        Some(path) => format!("{} (missing)", path.display()),
        None => "no home directory".to_string(),
    };
    output::kv("key file", key_status);

    match credential::resolve(env_value, &config)? {
        Some(credential) => output::kv("active source", credential.source()),
        None => {
            output::kv("active source", "none");
            println!();
            output::hint(&format!(
                "store one with {}",
                output::cmd("mathsproofbot auth set")
            ));
        }
    }

    Ok(())
}
