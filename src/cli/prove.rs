//! One-shot prove command.
//!
//! Parses a proposition, searches for a proof, and prints it Fitch-style.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::{fitch, parse, prove};
use crate::error::{Error, Result};

/// Prove a proposition and print the proof.
pub fn execute(proposition: &str, depth: Option<usize>, tree: bool) -> Result<()> {
    let config = Config::load_or_default()?;
    let depth = depth.unwrap_or(config.bot.max_proof_depth);

    let prop = parse::parse(proposition)?;

    match prove::prove(&prop, depth) {
        Some(proof) => {
            if tree {
                output::section("Rule tree");
                println!("{}", proof.long_form());
                output::section("Fitch proof");
            }
            println!("{}", fitch::pretty_print(&proof));
            Ok(())
        }
        None => Err(Error::NoProof { depth }),
    }
}
