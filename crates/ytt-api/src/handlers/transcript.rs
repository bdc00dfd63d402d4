//! Transcript handler.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{error, info};
use ytt_models::{extract_video_id, sanitize_filename, select_formatter, TranscriptFormat};

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::services::{title_or_id, TranscriptError};
use crate::state::AppState;

/// A formatted transcript ready to be sent.
#[derive(Debug, Clone)]
pub struct TranscriptResponse {
    pub format: TranscriptFormat,
    /// Suggested download filename (sanitized title plus extension)
    pub filename: String,
    pub body: String,
}

impl TranscriptResponse {
    /// `Content-Disposition` value carrying the suggested filename.
    ///
    /// The quoted `filename` is an ASCII fallback; `filename*` carries the
    /// full UTF-8 name.
    pub fn content_disposition(&self) -> String {
        let ascii: String = self
            .filename
            .chars()
            .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '_' })
            .collect();
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            ascii,
            urlencoding::encode(&self.filename)
        )
    }
}

impl IntoResponse for TranscriptResponse {
    fn into_response(self) -> Response {
        let disposition = HeaderValue::from_str(&self.content_disposition()).ok();
        let mut response = (StatusCode::OK, self.body).into_response();
        if let Some(value) = disposition {
            response.headers_mut().insert(header::CONTENT_DISPOSITION, value);
        }
        response
    }
}

/// `GET|POST /get_transcript`
///
/// Expects a JSON body `{"url": "<YouTube URL>"}` and an optional `format`
/// query parameter. Only the first `format` value counts; unknown or absent
/// names select Text.
pub async fn get_transcript(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
    body: Bytes,
) -> ApiResult<TranscriptResponse> {
    let url = requested_url(&body).ok_or(ApiError::MissingUrl)?;
    let format_name = requested_format(&params);

    let response = build_transcript(&state, &url, format_name).await;
    match &response {
        Ok(transcript) => metrics::record_transcript_served(transcript.format.name()),
        Err(e) if e.status_code().is_server_error() => {
            error!(url = %url, error = %e, "Transcript request failed");
            metrics::record_transcript_failure();
        }
        Err(_) => {}
    }
    response
}

/// Resolve, fetch and format the transcript for `url`.
pub async fn build_transcript(
    state: &AppState,
    url: &str,
    format_name: &str,
) -> ApiResult<TranscriptResponse> {
    let video_id = extract_video_id(url)?;
    let (format, extension) = select_formatter(format_name);

    info!(video_id = %video_id, format = %format, "Serving transcript");

    let timeout = state.config.upstream_timeout;
    let (title, segments) = tokio::join!(
        title_or_id(state.titles.as_ref(), &video_id),
        tokio::time::timeout(timeout, state.transcripts.fetch_transcript(&video_id)),
    );
    let segments = segments.map_err(|_| TranscriptError::TimedOut(timeout))??;
    let body = format.format_transcript(&segments)?;

    Ok(TranscriptResponse {
        filename: format!("{}.{}", sanitize_filename(&title), extension),
        format,
        body,
    })
}

/// The first `format` query value, or Text's name.
fn requested_format(params: &[(String, String)]) -> &str {
    params
        .iter()
        .find(|(key, _)| key == "format")
        .map(|(_, value)| value.as_str())
        .unwrap_or(TranscriptFormat::Text.name())
}

/// The non-empty `url` string from a JSON object body, if any.
fn requested_url(body: &[u8]) -> Option<String> {
    let payload: serde_json::Value = serde_json::from_slice(body).ok()?;
    payload
        .get("url")?
        .as_str()
        .filter(|url| !url.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_url() {
        assert_eq!(
            requested_url(br#"{"url": "https://youtu.be/abc123"}"#),
            Some("https://youtu.be/abc123".to_string())
        );
        assert_eq!(requested_url(br#"{}"#), None);
        assert_eq!(requested_url(br#"{"url": ""}"#), None);
        assert_eq!(requested_url(br#"{"url": null}"#), None);
        assert_eq!(requested_url(br#"{"url": 42}"#), None);
        assert_eq!(requested_url(br#"["https://youtu.be/abc123"]"#), None);
        assert_eq!(requested_url(b""), None);
        assert_eq!(requested_url(b"url=https://youtu.be/abc123"), None);
    }

    #[test]
    fn test_requested_format_takes_first() {
        let params = vec![
            ("format".to_string(), "SRT".to_string()),
            ("format".to_string(), "JSON".to_string()),
        ];
        assert_eq!(requested_format(&params), "SRT");
        assert_eq!(requested_format(&[("other".to_string(), "x".to_string())]), "Text");
        assert_eq!(requested_format(&[]), "Text");
    }

    #[test]
    fn test_content_disposition() {
        let response = TranscriptResponse {
            format: TranscriptFormat::Srt,
            filename: "My Video.srt".to_string(),
            body: String::new(),
        };
        assert_eq!(
            response.content_disposition(),
            "attachment; filename=\"My Video.srt\"; filename*=UTF-8''My%20Video.srt"
        );
    }

    #[test]
    fn test_content_disposition_non_ascii() {
        let response = TranscriptResponse {
            format: TranscriptFormat::Text,
            filename: "café.txt".to_string(),
            body: String::new(),
        };
        let value = response.content_disposition();
        assert!(value.contains("filename=\"caf_.txt\""));
        assert!(value.contains("filename*=UTF-8''caf%C3%A9.txt"));
        assert!(HeaderValue::from_str(&value).is_ok());
    }
}
