//! Mathsproofbot - proves propositional theorems and replies with proofs.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mathsproofbot::cli::output;
use mathsproofbot::cli::{execute, Cli};
use mathsproofbot::core::constants;
use mathsproofbot::error::{ConfigError, CredentialError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("mathsproofbot=debug")
        } else {
            EnvFilter::new("mathsproofbot=warn")
        }
    });

    // Logs go to stderr so `run` keeps the child's stdout clean.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Credential(CredentialError::Missing) => {
                Some("run: mathsproofbot auth set")
            }
            Error::Config(ConfigError::AlreadyInitialized) => {
                Some("use --force to overwrite")
            }
            Error::Config(ConfigError::MissingField {
                field: "feed.user_id",
            }) => Some("set feed.user_id in .mathsproofbot.toml"),
            Error::NoProof { .. } => Some("not every proposition is a theorem; raise --depth if it should be"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
