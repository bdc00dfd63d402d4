//! Transcript retrieval.
//!
//! Fetches caption tracks through `yt-transcript-rs`. No language parameter
//! is exposed; English is requested first, the same default the upstream
//! library applies.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};
use yt_transcript_rs::api::YouTubeTranscriptApi;
use ytt_models::{TranscriptSegment, VideoId};

/// Language preference passed to the transcript API.
pub const DEFAULT_LANGUAGES: &[&str] = &["en"];

#[derive(Debug, Error)]
pub enum TranscriptError {
    /// No transcript, captions disabled, network failure, ...
    #[error("{0}")]
    Unavailable(String),

    #[error("Transcript request timed out after {0:?}")]
    TimedOut(Duration),

    #[error("Failed to initialize transcript client: {0}")]
    Client(String),
}

pub type TranscriptResult<T> = Result<T, TranscriptError>;

/// Source of ordered caption segments for a video.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch_transcript(&self, video_id: &VideoId) -> TranscriptResult<Vec<TranscriptSegment>>;
}

/// [`TranscriptSource`] backed by YouTube's caption tracks.
///
/// Calls are unbounded here; the handler applies the upstream timeout to
/// every source.
#[derive(Clone)]
pub struct YoutubeTranscriptSource {
    api: YouTubeTranscriptApi,
}

impl YoutubeTranscriptSource {
    pub fn new() -> TranscriptResult<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| TranscriptError::Client(e.to_string()))?;
        Ok(Self { api })
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptSource {
    async fn fetch_transcript(&self, video_id: &VideoId) -> TranscriptResult<Vec<TranscriptSegment>> {
        debug!(video_id = %video_id, "Fetching transcript");

        let fetched = self
            .api
            .fetch_transcript(video_id.as_str(), DEFAULT_LANGUAGES, false)
            .await
            .map_err(|e| TranscriptError::Unavailable(e.to_string()))?;

        let segments: Vec<TranscriptSegment> = fetched
            .snippets
            .into_iter()
            .map(|snippet| TranscriptSegment::new(snippet.text, snippet.start, snippet.duration))
            .collect();

        info!(
            video_id = %video_id,
            segments = segments.len(),
            "Transcript fetched"
        );

        Ok(segments)
    }
}
