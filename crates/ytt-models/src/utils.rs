//! Utility functions for URL parsing and filename handling.

use thiserror::Error;
use url::Url;

use crate::video::VideoId;

/// Host marker for short links (`https://youtu.be/{id}`).
const SHORT_LINK_HOST: &str = "youtu.be";

/// Host marker for the main site (`watch?v=`, `/shorts/`).
const MAIN_HOST: &str = "youtube.com";

/// Characters that are not allowed in suggested download filenames.
const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Maximum length of a sanitized filename stem, in characters.
pub const MAX_FILENAME_CHARS: usize = 50;

/// Errors that can occur during video ID extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VideoIdError {
    /// Input could not be parsed as a URL at all
    #[error("URL could not be parsed")]
    InvalidUrl,

    /// Host is neither youtu.be nor youtube.com
    #[error("Unsupported host: {0}")]
    UnsupportedHost(String),

    /// youtube.com URL without a `v` query parameter
    #[error("Missing 'v' query parameter")]
    MissingVideoParam,

    /// Extraction yielded an empty identifier
    #[error("Video ID is empty")]
    EmptyId,
}

/// Result type for video ID extraction.
pub type VideoIdResult<T> = Result<T, VideoIdError>;

/// Extract the video ID from a YouTube URL.
///
/// Recognized shapes:
/// - `https://youtu.be/VIDEO_ID` (everything after the first `/` of the path)
/// - `https://www.youtube.com/shorts/VIDEO_ID` (last non-empty path segment)
/// - `https://www.youtube.com/watch?v=VIDEO_ID` (first non-blank `v` value)
///
/// Host matching is by substring on the parsed host (userinfo and port are
/// excluded) and the scheme is not checked. The returned
/// token is not validated for length or charset; it is only guaranteed to be
/// non-empty.
pub fn extract_video_id(url: &str) -> VideoIdResult<VideoId> {
    let parsed = Url::parse(url).map_err(|_| VideoIdError::InvalidUrl)?;
    let host = parsed.host_str().unwrap_or("");
    let path = parsed.path();

    let id = if host.contains(SHORT_LINK_HOST) {
        path.strip_prefix('/').unwrap_or(path).to_string()
    } else if host.contains(MAIN_HOST) {
        if path.contains("shorts") {
            path.split('/')
                .filter(|segment| !segment.is_empty())
                .last()
                .unwrap_or("")
                .to_string()
        } else {
            parsed
                .query_pairs()
                .find(|(key, value)| key == "v" && !value.is_empty())
                .map(|(_, value)| value.into_owned())
                .ok_or(VideoIdError::MissingVideoParam)?
        }
    } else {
        return Err(VideoIdError::UnsupportedHost(host.to_string()));
    };

    if id.is_empty() {
        return Err(VideoIdError::EmptyId);
    }

    Ok(VideoId::from_string(id))
}

/// Strip characters that are invalid in filenames and truncate the result to
/// [`MAX_FILENAME_CHARS`] characters.
pub fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .filter(|c| !INVALID_FILENAME_CHARS.contains(c))
        .take(MAX_FILENAME_CHARS)
        .collect()
}
