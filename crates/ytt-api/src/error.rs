//! API error types.
//!
//! Every failure is rendered as a status code plus a plain-text body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use ytt_models::{FormatError, VideoIdError};

use crate::services::TranscriptError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("YouTube URL is required")]
    MissingUrl,

    #[error("Could not extract video ID from URL")]
    InvalidVideoUrl(#[source] VideoIdError),

    #[error("Error occurred: {0}")]
    Transcript(#[from] TranscriptError),

    #[error("Error occurred: {0}")]
    Format(#[from] FormatError),
}

impl From<VideoIdError> for ApiError {
    fn from(err: VideoIdError) -> Self {
        Self::InvalidVideoUrl(err)
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl | ApiError::InvalidVideoUrl(_) => StatusCode::BAD_REQUEST,
            ApiError::Transcript(_) | ApiError::Format(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_bad_request_messages() {
        assert_eq!(ApiError::MissingUrl.to_string(), "YouTube URL is required");
        assert_eq!(ApiError::MissingUrl.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::from(VideoIdError::MissingVideoParam);
        assert_eq!(err.to_string(), "Could not extract video ID from URL");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_failures_embed_cause() {
        let err = ApiError::from(TranscriptError::Unavailable("captions disabled".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("Error occurred: "));
        assert!(err.to_string().contains("captions disabled"));

        let err = ApiError::from(TranscriptError::TimedOut(Duration::from_secs(15)));
        assert_eq!(err.to_string(), "Error occurred: Transcript request timed out after 15s");
    }
}
