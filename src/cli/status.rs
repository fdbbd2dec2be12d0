//! Quick status overview command.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::{constants, credential};
use crate::error::Result;

/// Show quick status overview.
pub fn execute() -> Result<()> {
    let config = Config::load_or_default()?;

    output::section("Mathsproofbot Status");

    let config_status = if Config::exists() {
        constants::CONFIG_FILE.to_string()
    } else {
        "not found (using defaults)".to_string()
    };
    output::kv("config", config_status);

    output::kv("proof depth", config.bot.max_proof_depth);
    output::kv("poll interval", format!("{}s", config.bot.poll_interval_secs));
    output::kv("reply limit", config.bot.reply_limit);

    let feed_status = match &config.feed.user_id {
        Some(user_id) => format!("{} ({})", config.feed.base_url, user_id),
        None => format!("{} (feed.user_id not set)", config.feed.base_url),
    };
    output::kv("feed", feed_status);

    let env_value = std::env::var(constants::AUTH_ENV).ok();
    let credential = credential::resolve(env_value, &config)?;
    let credential_status = match &credential {
        Some(credential) => format!("from {}", credential.source()),
        None => "none found".to_string(),
    };
    output::kv("credential", credential_status);

    output::kv(
        "restart policy",
        format!(
            "{}ms → {}ms backoff, give up after {} failures",
            config.supervisor.initial_delay_ms,
            config.supervisor.max_delay_ms,
            config.supervisor.max_failures
        ),
    );

    // Suggestions
    println!();
    if !Config::exists() {
        output::hint(&format!(
            "create a config with {}",
            output::cmd("mathsproofbot init")
        ));
    } else if credential.is_none() {
        output::hint(&format!(
            "store a credential with {}",
            output::cmd("mathsproofbot auth set")
        ));
    } else if config.feed.user_id.is_none() {
        output::hint("set feed.user_id in .mathsproofbot.toml to enable listening");
    } else {
        output::dimmed(&format!(
            "ready: start the bot with {}",
            output::cmd("mathsproofbot listen")
        ));
    }

    Ok(())
}
