//! HTTP feed backend.
//!
//! Polls the social service's v2 API for mentions of the bot's account and
//! posts threaded replies, authenticating every request with the bearer
//! credential. Pagination state is a `since_id` cursor held in memory for
//! the lifetime of the session; a fresh session starts from the newest
//! mentions.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::credential::Credential;
use crate::core::feed::{Challenge, Feed};
use crate::error::{FeedError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpFeed {
    client: reqwest::blocking::Client,
    base_url: String,
    user_id: String,
    token: Zeroizing<String>,
    since_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MentionsResponse {
    #[serde(default)]
    data: Vec<Mention>,
    meta: Option<MentionsMeta>,
}

#[derive(Debug, Deserialize)]
struct Mention {
    id: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct MentionsMeta {
    newest_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PostResponse {
    data: PostData,
}

#[derive(Debug, Deserialize)]
struct PostData {
    id: String,
}

impl HttpFeed {
    pub fn new(base_url: &str, user_id: &str, credential: &Credential) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FeedError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.to_string(),
            token: Zeroizing::new(credential.value().to_string()),
            since_id: None,
        })
    }
}

impl Feed for HttpFeed {
    fn poll(&mut self) -> Result<Vec<Challenge>> {
        let url = format!("{}/2/users/{}/mentions", self.base_url, self.user_id);
        let mut request = self.client.get(&url).bearer_auth(self.token.as_str());
        if let Some(since) = &self.since_id {
            request = request.query(&[("since_id", since.as_str())]);
        }

        let response = request.send().map_err(FeedError::Http)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: MentionsResponse = response.json().map_err(FeedError::Http)?;
        if let Some(newest) = parsed.meta.and_then(|m| m.newest_id) {
            self.since_id = Some(newest);
        }

        debug!(mentions = parsed.data.len(), "polled mentions");

        // The API returns newest first; hand challenges out oldest first.
        Ok(parsed
            .data
            .into_iter()
            .rev()
            .map(|m| Challenge {
                id: m.id,
                text: m.text,
            })
            .collect())
    }

    fn post_reply(&mut self, in_reply_to: &str, text: &str) -> Result<String> {
        let url = format!("{}/2/tweets", self.base_url);
        let body = serde_json::json!({
            "text": text,
            "reply": { "in_reply_to_tweet_id": in_reply_to },
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.token.as_str())
            .json(&body)
            .send()
            .map_err(FeedError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: PostResponse = response.json().map_err(FeedError::Http)?;
        debug!(id = %parsed.data.id, "posted reply");
        Ok(parsed.data.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentions_response_shape() {
        let parsed: MentionsResponse = serde_json::from_str(
            r#"{
                "data": [
                    {"id": "1002", "text": "-(a&-a)"},
                    {"id": "1001", "text": "a>a"}
                ],
                "meta": {"newest_id": "1002", "result_count": 2}
            }"#,
        )
        .unwrap();

        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].id, "1002");
        assert_eq!(parsed.meta.unwrap().newest_id.as_deref(), Some("1002"));
    }

    #[test]
    fn test_empty_mentions_response() {
        let parsed: MentionsResponse =
            serde_json::from_str(r#"{"meta": {"result_count": 0}}"#).unwrap();
        assert!(parsed.data.is_empty());
        assert_eq!(parsed.meta.unwrap().newest_id, None);
    }

    #[test]
    fn test_post_response_shape() {
        let parsed: PostResponse =
            serde_json::from_str(r#"{"data": {"id": "1003", "text": "Proof:"}}"#).unwrap();
        assert_eq!(parsed.data.id, "1003");
    }
}
