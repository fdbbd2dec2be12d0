//! The bot's poll/prove/reply cycle.
//!
//! A session handles each challenge independently: parse the text as a
//! proposition, search for a proof, and reply with the rendered Fitch
//! proof. Bad input is a fact of life on a public feed, so unparseable and
//! unprovable challenges are logged and skipped rather than allowed to
//! kill the session; only feed transport errors propagate to the
//! supervisor.

use tracing::{info, warn};

use crate::core::feed::{self, Challenge, Feed};
use crate::core::{fitch, parse, prove};
use crate::error::{Error, FeedError, Result};

/// Per-session proving and reply settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Proof search depth before giving up on a challenge.
    pub max_proof_depth: usize,
    /// Per-post character limit for replies.
    pub reply_limit: usize,
}

/// What happened to a single challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A proof was found and posted over this many chunks.
    Replied { chunks: usize },
    /// The challenge text is not a proposition.
    Unparseable,
    /// No proof within the depth cap (non-theorem, or too deep).
    NoProof,
    /// The proof rendered to a line too long to post.
    Oversize,
}

/// Handle one challenge.
///
/// # Errors
///
/// Returns an error only for feed transport failures; every per-challenge
/// problem is reported through the returned [`Outcome`].
pub fn handle(feed: &mut dyn Feed, challenge: &Challenge, settings: &Settings) -> Result<Outcome> {
    info!(id = %challenge.id, text = %challenge.text, "new theorem to prove");

    let prop = match parse::parse(&challenge.text) {
        Ok(prop) => prop,
        Err(err) => {
            warn!(id = %challenge.id, %err, "challenge does not parse");
            return Ok(Outcome::Unparseable);
        }
    };

    let proof = match prove::prove(&prop, settings.max_proof_depth) {
        Some(proof) => proof,
        None => {
            warn!(
                id = %challenge.id,
                depth = settings.max_proof_depth,
                "no proof found"
            );
            return Ok(Outcome::NoProof);
        }
    };

    let reply = format!("Proof:\n{}", fitch::pretty_print(&proof));
    match feed::send_reply(feed, challenge, &reply, settings.reply_limit) {
        Ok(chunks) => {
            info!(id = %challenge.id, chunks, "replied with proof");
            Ok(Outcome::Replied { chunks })
        }
        Err(Error::Feed(FeedError::LineTooLong { len, limit })) => {
            warn!(id = %challenge.id, len, limit, "proof line too long to post");
            Ok(Outcome::Oversize)
        }
        Err(err) => Err(err),
    }
}

/// Poll once and handle everything that arrived.
pub fn run_once(feed: &mut dyn Feed, settings: &Settings) -> Result<Vec<Outcome>> {
    let challenges = feed.poll()?;
    let mut outcomes = Vec::with_capacity(challenges.len());
    for challenge in &challenges {
        outcomes.push(handle(feed, challenge, settings)?);
    }
    Ok(outcomes)
}
