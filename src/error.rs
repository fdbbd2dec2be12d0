//! Error types for mathsproofbot.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Supervisor(#[from] SupervisorError),

    #[error("no proof found within depth {depth}")]
    NoProof { depth: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("already initialized: .mathsproofbot.toml exists")]
    AlreadyInitialized,

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("missing config field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Credential resolution errors.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("no credential found: set MATHSPROOFBOT_AUTH or configure a credential file")]
    Missing,

    #[error("credential from {origin} is empty")]
    Empty { origin: String },

    #[error("failed to read credential file {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Proposition parse errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty proposition")]
    Empty,

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("unclosed group starting at position {pos}")]
    Unclosed { pos: usize },

    #[error("unexpected trailing input: '{rest}'")]
    Trailing { rest: String },

    #[error("invalid character '{ch}' at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },
}

/// Feed transport and reply errors.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed api error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("reply line of {len} characters exceeds the {limit} character limit")]
    LineTooLong { len: usize, limit: usize },
}

/// Supervisor errors.
#[derive(Error, Debug)]
pub enum SupervisorError {
    #[error("giving up after {attempts} consecutive session failures (last: {last})")]
    TooManyFailures { attempts: u32, last: String },
}

pub type Result<T> = std::result::Result<T, Error>;
