//! Application state.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::services::{OembedTitleLookup, TitleLookup, TranscriptSource, YoutubeTranscriptSource};

/// Shared application state.
///
/// Holds only immutable configuration and stateless collaborators; requests
/// never share mutable data.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub transcripts: Arc<dyn TranscriptSource>,
    pub titles: Arc<dyn TitleLookup>,
}

impl AppState {
    /// Create new application state backed by YouTube.
    pub fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let transcripts = YoutubeTranscriptSource::new()?;
        let titles = OembedTitleLookup::new(config.oembed_endpoint.clone(), config.upstream_timeout)?;

        Ok(Self::with_services(config, Arc::new(transcripts), Arc::new(titles)))
    }

    /// Create state from explicit collaborators.
    pub fn with_services(
        config: ApiConfig,
        transcripts: Arc<dyn TranscriptSource>,
        titles: Arc<dyn TitleLookup>,
    ) -> Self {
        Self {
            config,
            transcripts,
            titles,
        }
    }
}
