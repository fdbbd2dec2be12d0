//! Configuration file management.
//!
//! Handles reading, writing, and validating `.mathsproofbot.toml`
//! configuration files. Every section and field is optional: a missing
//! file or a partial one falls back to defaults, so the one-shot commands
//! work without any setup.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::supervisor::RestartPolicy;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.mathsproofbot.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Proving and reply behavior.
    #[serde(default)]
    pub bot: BotConfig,
    /// Feed endpoint and account.
    #[serde(default)]
    pub feed: FeedConfig,
    /// Credential sources.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Restart policy for the listen loop.
    #[serde(default)]
    pub supervisor: SupervisorConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BotConfig {
    /// Proof search depth before giving up on a challenge.
    #[serde(default = "default_max_proof_depth")]
    pub max_proof_depth: usize,
    /// Seconds between feed polls.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Per-post character limit for replies.
    #[serde(default = "default_reply_limit")]
    pub reply_limit: usize,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            max_proof_depth: default_max_proof_depth(),
            poll_interval_secs: default_poll_interval_secs(),
            reply_limit: default_reply_limit(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Base URL of the feed service API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Account id whose mentions are polled. Required for `listen`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_id: None,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Path to a runtime-provisioned credential file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_file: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SupervisorConfig {
    /// Delay before the first restart, in milliseconds.
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    /// Backoff ceiling, in milliseconds.
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
    /// Consecutive failures tolerated before giving up.
    #[serde(default = "default_max_failures")]
    pub max_failures: u32,
    /// Uptime in seconds after which the failure count resets.
    #[serde(default = "default_reset_after_secs")]
    pub reset_after_secs: u64,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            max_failures: default_max_failures(),
            reset_after_secs: default_reset_after_secs(),
        }
    }
}

impl SupervisorConfig {
    /// The restart policy these settings describe.
    pub fn policy(&self) -> RestartPolicy {
        RestartPolicy {
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            max_delay: Duration::from_millis(self.max_delay_ms),
            max_failures: self.max_failures,
            reset_after: Duration::from_secs(self.reset_after_secs),
        }
    }
}

fn default_max_proof_depth() -> usize {
    constants::DEFAULT_MAX_PROOF_DEPTH
}

fn default_poll_interval_secs() -> u64 {
    constants::DEFAULT_POLL_INTERVAL_SECS
}

fn default_reply_limit() -> usize {
    constants::DEFAULT_REPLY_LIMIT
}

fn default_base_url() -> String {
    "https://api.twitter.com".to_string()
}

fn default_initial_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    60_000
}

fn default_max_failures() -> u32 {
    8
}

fn default_reset_after_secs() -> u64 {
    60
}

impl Config {
    /// Path to the configuration file in the current directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Check if a configuration file exists in the current directory.
    pub fn exists() -> bool {
        Self::config_path().exists()
    }

    /// Load configuration from `.mathsproofbot.toml`, falling back to
    /// defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be
    /// read, or `ConfigError::Parse` if the TOML is malformed.
    pub fn load_or_default() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            debug!("no config file; using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Save configuration to `.mathsproofbot.toml`.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self) -> Result<()> {
        debug!("saving config");
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(Self::config_path(), contents)?;
        Ok(())
    }

    /// Validate field values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` describing the first offending
    /// field.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if self.bot.max_proof_depth == 0 || self.bot.max_proof_depth > 100 {
            return Err(ConfigError::InvalidValue {
                field: "bot.max_proof_depth",
                reason: format!("must be between 1 and 100, got {}", self.bot.max_proof_depth),
            }
            .into());
        }

        if self.bot.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "bot.poll_interval_secs",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        if self.bot.reply_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "bot.reply_limit",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        if !self.feed.base_url.starts_with("http://") && !self.feed.base_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                field: "feed.base_url",
                reason: format!("not an http(s) url: {}", self.feed.base_url),
            }
            .into());
        }

        if self.supervisor.max_failures == 0 {
            return Err(ConfigError::InvalidValue {
                field: "supervisor.max_failures",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        if self.supervisor.initial_delay_ms > self.supervisor.max_delay_ms {
            return Err(ConfigError::InvalidValue {
                field: "supervisor.initial_delay_ms",
                reason: format!(
                    "exceeds max_delay_ms ({} > {})",
                    self.supervisor.initial_delay_ms, self.supervisor.max_delay_ms
                ),
            }
            .into());
        }

        Ok(())
    }
}

/// Ensure `.gitignore` covers locally stored credentials.
///
/// # Errors
///
/// Returns error if file operations fail.
pub fn ensure_gitignore() -> Result<()> {
    let gitignore = std::path::Path::new(".gitignore");

    let existing = if gitignore.exists() {
        std::fs::read_to_string(gitignore)?
    } else {
        String::new()
    };

    let mut updated = existing.clone();
    for entry in constants::GITIGNORE_ENTRIES {
        if !existing.lines().any(|l| l.trim() == *entry) {
            if !updated.is_empty() && !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(entry);
            updated.push('\n');
        }
    }

    if updated != existing {
        std::fs::write(gitignore, updated)?;
    }

    Ok(())
}
