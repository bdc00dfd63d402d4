//! Transcript segment model.

use serde::{Deserialize, Serialize};

/// One timed caption unit.
///
/// Field order matches the JSON output format: `text`, `start`, `duration`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Caption text as delivered by the transcript source
    pub text: String,
    /// Start offset in seconds
    pub start: f64,
    /// Duration in seconds
    pub duration: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }

    /// Nominal end offset (`start + duration`).
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}
