//! Init command - write the default configuration.

use tracing::info;

use crate::cli::{banner, output};
use crate::core::config::{self, Config};
use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Initialize mathsproofbot in the current directory.
pub fn execute(force: bool, no_banner: bool) -> Result<()> {
    if Config::exists() && !force {
        return Err(ConfigError::AlreadyInitialized.into());
    }

    if !no_banner {
        banner::print_banner();
    }

    let config = Config::default();
    config.save()?;
    config::ensure_gitignore()?;

    info!("initialized");

    output::success(&format!("initialized {}", constants::CONFIG_FILE));
    println!("  config:  {} (commit this)", constants::CONFIG_FILE);
    println!(
        "  key:     ~/{}/{} (written by `mathsproofbot auth set`)",
        constants::KEY_DIR,
        constants::KEY_FILE
    );
    println!();
    output::hint(&format!(
        "next: {} to store the credential, then {}",
        output::cmd("mathsproofbot auth set"),
        output::cmd("mathsproofbot listen")
    ));

    Ok(())
}
