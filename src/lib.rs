//! Mathsproofbot - a bot that proves propositional theorems on demand.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Write the default config
//! │   ├── prove         # One-shot: parse, prove, print
//! │   ├── listen        # Persistent supervised feed session
//! │   ├── run           # Run a command with the credential injected
//! │   ├── shell         # Subshell with the credential exported
//! │   ├── auth          # Credential provisioning
//! │   ├── status        # Config and credential overview
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── prop          # Proposition AST
//!     ├── parse         # Proposition parser
//!     ├── proof         # Proof trees and rules
//!     ├── prove         # Natural-deduction proof search
//!     ├── fitch         # Fitch-style arrangement and rendering
//!     ├── feed/         # Feed backends
//!     │   ├── mod       # Feed trait + reply chunking
//!     │   └── http      # HTTP mentions/replies implementation
//!     ├── session       # Poll/prove/reply cycle
//!     ├── supervisor    # Restart loop with backoff
//!     ├── credential    # Credential resolution
//!     └── config        # .mathsproofbot.toml management
//! ```
//!
//! # Features
//!
//! - Full natural-deduction prover with iterative-deepening search
//! - Fitch-style proof rendering with line citations
//! - Threaded, chunked replies that never split a proof line
//! - Supervised listen loop with exponential backoff and a failure breaker
//! - Credential injection via flag, environment, or key file

pub mod cli;
pub mod core;
pub mod error;
