//! Video title lookup via YouTube's oEmbed endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;
use ytt_models::VideoId;

use crate::metrics;

#[derive(Debug, Error)]
pub enum TitleError {
    #[error("oEmbed request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("oEmbed response has no title")]
    MissingTitle,
}

/// Looks up a display title for a video.
#[async_trait]
pub trait TitleLookup: Send + Sync {
    async fn fetch_title(&self, video_id: &VideoId) -> Result<String, TitleError>;
}

/// oEmbed response. Only the title is used.
#[derive(Debug, Deserialize)]
struct OembedResponse {
    title: Option<String>,
}

/// [`TitleLookup`] against an oEmbed endpoint.
#[derive(Clone)]
pub struct OembedTitleLookup {
    client: Client,
    endpoint: String,
}

impl OembedTitleLookup {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, TitleError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl TitleLookup for OembedTitleLookup {
    async fn fetch_title(&self, video_id: &VideoId) -> Result<String, TitleError> {
        let response: OembedResponse = self
            .client
            .get(&self.endpoint)
            .query(&[("url", video_id.watch_url().as_str()), ("format", "json")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .title
            .filter(|title| !title.is_empty())
            .ok_or(TitleError::MissingTitle)
    }
}

/// Resolve the title for a video, substituting the video ID on any failure.
pub async fn title_or_id(lookup: &dyn TitleLookup, video_id: &VideoId) -> String {
    match lookup.fetch_title(video_id).await {
        Ok(title) => title,
        Err(e) => {
            warn!(video_id = %video_id, error = %e, "Title lookup failed, using video ID");
            metrics::record_title_fallback();
            video_id.to_string()
        }
    }
}
