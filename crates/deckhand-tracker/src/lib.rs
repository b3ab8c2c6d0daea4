use deckhand_core::TrackerConfig;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

const DEFAULT_BASE_URL: &str = "https://www.pivotaltracker.com/services/v5";
const TOKEN_HEADER: &str = "X-TrackerToken";

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("tracker api error: {0}")]
    Api(String),
}

/// HTTP client for the external work tracker.
///
/// The credential travels only in the `X-TrackerToken` header and is
/// never logged.
pub struct TrackerClient {
    base_url: String,
    client: Client,
    token: String,
}

#[derive(Debug, Deserialize)]
struct StoryResponse {
    project_id: i64,
}

impl TrackerClient {
    pub fn new(config: &TrackerConfig) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, &config.token)
    }

    pub fn with_base_url(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: token.to_string(),
        }
    }

    /// Resolve the tracker project that owns `item_id`.
    /// Any non-200 response is an error; an unknown item is not
    /// distinguished from other failures at this layer.
    pub async fn project_for_item(&self, item_id: &str) -> Result<i64, TrackerError> {
        let resp = self
            .client
            .get(format!("{}/stories/{item_id}", self.base_url))
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await
            .map_err(|e| TrackerError::Api(format!("get story {item_id}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TrackerError::Api(format!(
                "get story {item_id}: non-200 response: {status}"
            )));
        }

        let story = resp
            .json::<StoryResponse>()
            .await
            .map_err(|e| TrackerError::Api(format!("json decode: {e}")))?;
        Ok(story.project_id)
    }

    /// Post `text` as a comment on `item_id`, resolving its project first.
    ///
    /// Posting is best-effort: a non-200 response from the tracker is
    /// logged and swallowed. Only a failed project resolution or a
    /// transport failure before any response surfaces as an error.
    pub async fn post_comment(&self, item_id: &str, text: &str) -> Result<(), TrackerError> {
        let project_id = self.project_for_item(item_id).await?;

        let resp = self
            .client
            .post(format!(
                "{}/projects/{project_id}/stories/{item_id}/comments",
                self.base_url
            ))
            .query(&[("text", text)])
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await
            .map_err(|e| TrackerError::Api(format!("post comment on {item_id}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!("non-200 response posting comment on item {item_id}: {status} {body}");
        }
        Ok(())
    }
}
