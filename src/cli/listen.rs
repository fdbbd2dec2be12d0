//! Listen command.
//!
//! The bot's persistent mode: poll the feed for challenges and reply with
//! proofs, under a supervised restart loop. Refuses to start without a
//! credential; a listener that can never authenticate would only spin.

use std::time::Duration;

use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::credential;
use crate::core::feed::http::HttpFeed;
use crate::core::session::{self, Settings};
use crate::core::supervisor;
use crate::error::{ConfigError, CredentialError, Result};

/// Listen for challenges and reply with proofs.
pub fn execute(auth: Option<String>, poll_secs: Option<u64>) -> Result<()> {
    let config = Config::load_or_default()?;
    config.validate()?;

    let credential = credential::resolve(auth, &config)?.ok_or(CredentialError::Missing)?;
    let user_id = config
        .feed
        .user_id
        .clone()
        .ok_or(ConfigError::MissingField {
            field: "feed.user_id",
        })?;

    let poll_interval = Duration::from_secs(poll_secs.unwrap_or(config.bot.poll_interval_secs));
    let settings = Settings {
        max_proof_depth: config.bot.max_proof_depth,
        reply_limit: config.bot.reply_limit,
    };
    let policy = config.supervisor.policy();

    output::success(&format!(
        "listening for challenges (poll every {}s, credential from {})",
        poll_interval.as_secs(),
        credential.source()
    ));
    info!(user_id = %user_id, "starting listener");

    supervisor::supervise(&policy, || {
        let mut feed = HttpFeed::new(&config.feed.base_url, &user_id, &credential)?;
        loop {
            let outcomes = session::run_once(&mut feed, &settings)?;
            if !outcomes.is_empty() {
                info!(handled = outcomes.len(), "handled challenges");
            }
            std::thread::sleep(poll_interval);
        }
    })
}
