//! Transcript output formats.
//!
//! A [`TranscriptFormat`] is selected from the format name supplied by the
//! caller and turns an ordered list of [`TranscriptSegment`]s into the final
//! response body. Unknown names fall back to [`TranscriptFormat::Text`].

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timestamp::{format_cue_timestamp, MillisSeparator};
use crate::transcript::TranscriptSegment;

/// Errors raised while serializing a transcript.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TranscriptFormat {
    /// JSON array of `{text, start, duration}`
    #[serde(rename = "JSON")]
    Json,
    /// Indented, human-readable dump of the segments
    #[serde(rename = "Pretty Print")]
    PrettyPrint,
    /// Caption text only, one segment per line
    #[default]
    #[serde(rename = "Text")]
    Text,
    /// WebVTT subtitle track
    #[serde(rename = "WebVTT")]
    WebVtt,
    /// SRT subtitle track
    #[serde(rename = "SRT")]
    Srt,
}

impl TranscriptFormat {
    /// All formats, in display order.
    pub const ALL: [TranscriptFormat; 5] = [
        TranscriptFormat::Json,
        TranscriptFormat::PrettyPrint,
        TranscriptFormat::Text,
        TranscriptFormat::WebVtt,
        TranscriptFormat::Srt,
    ];

    /// Look up a format by its exact name.
    ///
    /// Matching is case-sensitive. Any unrecognized name, including the empty
    /// string, selects [`TranscriptFormat::Text`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "JSON" => TranscriptFormat::Json,
            "Pretty Print" => TranscriptFormat::PrettyPrint,
            "Text" => TranscriptFormat::Text,
            "WebVTT" => TranscriptFormat::WebVtt,
            "SRT" => TranscriptFormat::Srt,
            _ => TranscriptFormat::default(),
        }
    }

    /// Name as accepted by [`TranscriptFormat::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            TranscriptFormat::Json => "JSON",
            TranscriptFormat::PrettyPrint => "Pretty Print",
            TranscriptFormat::Text => "Text",
            TranscriptFormat::WebVtt => "WebVTT",
            TranscriptFormat::Srt => "SRT",
        }
    }

    /// Suggested file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            TranscriptFormat::Json => "json",
            TranscriptFormat::PrettyPrint | TranscriptFormat::Text => "txt",
            TranscriptFormat::WebVtt => "vtt",
            TranscriptFormat::Srt => "srt",
        }
    }

    /// Serialize segments in this format.
    pub fn format_transcript(&self, segments: &[TranscriptSegment]) -> Result<String, FormatError> {
        let output = match self {
            TranscriptFormat::Json => serde_json::to_string(segments)?,
            TranscriptFormat::PrettyPrint => serde_json::to_string_pretty(segments)?,
            TranscriptFormat::Text => to_text(segments),
            TranscriptFormat::WebVtt => to_webvtt(segments),
            TranscriptFormat::Srt => to_srt(segments),
        };
        Ok(output)
    }
}

impl fmt::Display for TranscriptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Map a format name to its strategy and file extension.
pub fn select_formatter(name: &str) -> (TranscriptFormat, &'static str) {
    let format = TranscriptFormat::from_name(name);
    (format, format.extension())
}

fn to_text(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|seg| seg.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn to_srt(segments: &[TranscriptSegment]) -> String {
    let cues: Vec<String> = cue_times(segments, MillisSeparator::Comma)
        .into_iter()
        .enumerate()
        .map(|(i, (timing, text))| format!("{}\n{}\n{}", i + 1, timing, text))
        .collect();
    format!("{}\n", cues.join("\n\n"))
}

fn to_webvtt(segments: &[TranscriptSegment]) -> String {
    let cues: Vec<String> = cue_times(segments, MillisSeparator::Dot)
        .into_iter()
        .map(|(timing, text)| format!("{}\n{}", timing, text))
        .collect();
    format!("WEBVTT\n\n{}\n", cues.join("\n\n"))
}

/// Timing line and text for each cue.
///
/// A cue ends at `start + duration`, or at the next segment's start when that
/// comes first, so cues never overlap.
fn cue_times(segments: &[TranscriptSegment], separator: MillisSeparator) -> Vec<(String, &str)> {
    segments
        .iter()
        .enumerate()
        .map(|(i, seg)| {
            let mut end = seg.end();
            if let Some(next) = segments.get(i + 1) {
                if next.start < end {
                    end = next.start;
                }
            }
            let timing = format!(
                "{} --> {}",
                format_cue_timestamp(seg.start, separator),
                format_cue_timestamp(end, separator)
            );
            (timing, seg.text.as_str())
        })
        .collect()
}
