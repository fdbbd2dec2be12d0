//! Feed abstraction and reply chunking.
//!
//! The bot talks to its social feed through the [`Feed`] trait: poll for
//! newly arrived challenges, post threaded replies. The production backend
//! is HTTP ([`http::HttpFeed`]); tests substitute an in-memory double.

pub mod http;

use crate::error::{FeedError, Result};

/// A mention asking the bot to prove something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    /// Feed-assigned post id.
    pub id: String,
    /// The post text, expected to spell a proposition.
    pub text: String,
}

/// A source of challenges and sink for replies.
pub trait Feed {
    /// Fetch challenges that arrived since the previous poll, oldest first.
    fn poll(&mut self) -> Result<Vec<Challenge>>;

    /// Post a reply under the post `in_reply_to`, returning the id of the
    /// newly created post.
    fn post_reply(&mut self, in_reply_to: &str, text: &str) -> Result<String>;
}

/// Split a reply into chunks of at most `limit` characters without ever
/// splitting a line.
///
/// # Errors
///
/// Returns `FeedError::LineTooLong` if any single line exceeds the limit;
/// such a reply cannot be posted at all.
pub fn chunk_reply(text: &str, limit: usize) -> std::result::Result<Vec<String>, FeedError> {
    let lines: Vec<&str> = text.split('\n').collect();

    for line in &lines {
        let len = line.chars().count();
        if len > limit {
            return Err(FeedError::LineTooLong { len, limit });
        }
    }

    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0usize;

    for line in lines {
        let line_len = line.chars().count();
        let joined_len = if current.is_empty() {
            line_len
        } else {
            current_len + 1 + line_len
        };

        if !current.is_empty() && joined_len > limit {
            chunks.push(current.join("\n"));
            current = vec![line];
            current_len = line_len;
        } else {
            current.push(line);
            current_len = joined_len;
        }
    }

    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current.join("\n"));
    }

    Ok(chunks)
}

/// Reply to a challenge, splitting over several posts when the text exceeds
/// the per-post limit. Each chunk threads under the previous one. Returns
/// the number of posts made.
pub fn send_reply(
    feed: &mut dyn Feed,
    challenge: &Challenge,
    text: &str,
    limit: usize,
) -> Result<usize> {
    let chunks = chunk_reply(text, limit)?;
    let mut parent = challenge.id.clone();
    for chunk in &chunks {
        parent = feed.post_reply(&parent, chunk)?;
    }
    Ok(chunks.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_reply_single_chunk() {
        let chunks = chunk_reply("Proof:\n1. a", 280).unwrap();
        assert_eq!(chunks, vec!["Proof:\n1. a"]);
    }

    #[test]
    fn test_lines_never_split() {
        let text = "aaaa\nbbbb\ncccc";
        let chunks = chunk_reply(text, 9).unwrap();
        assert_eq!(chunks, vec!["aaaa\nbbbb", "cccc"]);
    }

    #[test]
    fn test_exact_fit() {
        let chunks = chunk_reply("aaaa\nbbbb", 9).unwrap();
        assert_eq!(chunks, vec!["aaaa\nbbbb"]);
    }

    #[test]
    fn test_overlong_line_rejected() {
        let err = chunk_reply("short\naaaaaaaaaa", 8).unwrap_err();
        assert!(matches!(err, FeedError::LineTooLong { len: 10, limit: 8 }));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(chunk_reply("", 280).unwrap(), vec![""]);
    }

    #[test]
    fn test_char_counting_not_bytes() {
        // Five gutter characters are five characters, not fifteen bytes.
        let chunks = chunk_reply("│││││", 5).unwrap();
        assert_eq!(chunks, vec!["│││││"]);
    }

    proptest! {
        #[test]
        fn chunks_respect_limit_and_preserve_text(
            lines in prop::collection::vec("[a-z│→]{0,12}", 1..20),
            limit in 12usize..40,
        ) {
            let text = lines.join("\n");
            let chunks = chunk_reply(&text, limit).unwrap();

            for chunk in &chunks {
                prop_assert!(chunk.chars().count() <= limit);
            }
            prop_assert_eq!(chunks.join("\n"), text);
        }
    }
}
