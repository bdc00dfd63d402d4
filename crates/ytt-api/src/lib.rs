//! Axum HTTP API server.
//!
//! Serves `/get_transcript`: resolves a YouTube URL to a video ID, fetches
//! the transcript and returns it as JSON, Pretty Print, Text, WebVTT or SRT.

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::{TitleLookup, TranscriptSource};
pub use state::AppState;
