//! Constants used throughout mathsproofbot.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.mathsproofbot.toml).
pub const CONFIG_FILE: &str = ".mathsproofbot.toml";

/// Environment variable carrying the feed credential.
pub const AUTH_ENV: &str = "MATHSPROOFBOT_AUTH";

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "MATHSPROOFBOT_LOG";

/// Key storage directory relative to HOME (~/.mathsproofbot).
pub const KEY_DIR: &str = ".mathsproofbot";

/// Key file name inside the key directory.
pub const KEY_FILE: &str = "auth.key";

/// Gitignore entries to protect a locally stored credential.
pub const GITIGNORE_ENTRIES: &[&str] = &["auth.key", "*.auth"];

/// Default proof search depth before the prover gives up.
pub const DEFAULT_MAX_PROOF_DEPTH: usize = 25;

/// Default feed poll interval in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

/// Default per-reply character limit.
pub const DEFAULT_REPLY_LIMIT: usize = 280;
