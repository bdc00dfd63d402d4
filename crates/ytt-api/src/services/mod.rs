//! External collaborators: transcript retrieval and title lookup.

pub mod title;
pub mod transcript;

pub use title::{title_or_id, OembedTitleLookup, TitleError, TitleLookup};
pub use transcript::{TranscriptError, TranscriptResult, TranscriptSource, YoutubeTranscriptSource};
