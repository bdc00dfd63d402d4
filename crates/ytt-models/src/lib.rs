//! Shared data models for the transcript relay.
//!
//! This crate provides:
//! - Video ID extraction from YouTube URLs
//! - Transcript segment types
//! - Output formats (JSON, Pretty Print, Text, WebVTT, SRT)

pub mod format;
pub mod timestamp;
pub mod transcript;
pub mod utils;
pub mod video;

// Re-export common types
pub use format::{select_formatter, FormatError, TranscriptFormat};
pub use transcript::TranscriptSegment;
pub use utils::{extract_video_id, sanitize_filename, VideoIdError, VideoIdResult};
pub use video::VideoId;
