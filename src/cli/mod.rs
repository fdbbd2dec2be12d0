//! Command-line interface.

pub mod auth;
pub mod banner;
pub mod completions;
pub mod init;
pub mod listen;
pub mod output;
pub mod prove;
pub mod run;
pub mod shell;
pub mod status;

use clap::{Parser, Subcommand};

/// Mathsproofbot - proves propositional theorems and replies with proofs.
#[derive(Parser)]
#[command(
    name = "mathsproofbot",
    about = "Proves propositional theorems and replies with Fitch-style proofs",
    version,
    after_help = "Send it a theorem. ⊢"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize a .mathsproofbot.toml config in the current directory
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
        /// Skip ASCII art banner
        #[arg(long)]
        no_banner: bool,
    },

    /// Prove a proposition and print its Fitch-style proof
    Prove {
        /// The proposition, e.g. "((a>b)&(b>c))>(a>c)"
        #[arg(allow_hyphen_values = true)]
        proposition: String,
        /// Maximum proof depth before giving up
        #[arg(short, long)]
        depth: Option<usize>,
        /// Also print the raw rule tree
        #[arg(long)]
        tree: bool,
    },

    /// Listen for challenges on the feed and reply with proofs
    Listen {
        /// Feed credential
        #[arg(long, env = "MATHSPROOFBOT_AUTH", hide_env_values = true)]
        auth: Option<String>,
        /// Override the poll interval in seconds
        #[arg(long)]
        poll_secs: Option<u64>,
    },

    /// Run a command with the credential injected as MATHSPROOFBOT_AUTH
    Run {
        /// Feed credential
        #[arg(long, env = "MATHSPROOFBOT_AUTH", hide_env_values = true)]
        auth: Option<String>,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true)]
        command: Vec<String>,
    },

    /// Spawn a shell with the credential exported
    Shell {
        /// Feed credential
        #[arg(long, env = "MATHSPROOFBOT_AUTH", hide_env_values = true)]
        auth: Option<String>,
    },

    /// Manage the stored credential
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Show configuration and credential status
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Credential subcommands.
#[derive(Subcommand)]
pub enum AuthAction {
    /// Store the credential in the local key file
    Set {
        /// Read the credential from stdin instead of prompting
        #[arg(long)]
        stdin: bool,
    },

    /// Show which credential source is active
    Status,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    match command {
        Command::Init { force, no_banner } => init::execute(force, no_banner),
        Command::Prove {
            proposition,
            depth,
            tree,
        } => prove::execute(&proposition, depth, tree),
        Command::Listen { auth, poll_secs } => listen::execute(auth, poll_secs),
        Command::Run { auth, command } => run::execute(auth, &command),
        Command::Shell { auth } => shell::execute(auth),
        Command::Auth { action } => match action {
            AuthAction::Set { stdin } => auth::set(stdin),
            AuthAction::Status => auth::status(),
        },
        Command::Status => status::execute(),
        Command::Completions { shell } => completions::execute(shell),
    }
}
