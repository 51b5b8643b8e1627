pub mod captions;
pub mod config;
pub mod embedded;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod http;
pub mod innertube;
pub mod output;
pub mod page;
pub mod session;
pub mod tracks;

use serde::{Deserialize, Serialize};

pub use engine::{Outcome, StrategyOutcome, TranscriptEngine};
pub use error::{ErrorKind, TranscriptError};

/// A single captioned segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptSegment {
    pub text: String,
    /// Start offset in seconds
    pub offset: f64,
    /// Duration in seconds
    pub duration: f64,
}

/// A caption language the video offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub code: String,
    pub name: String,
    pub is_generated: bool,
}

/// Strategy that produced a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum TranscriptSource {
    #[serde(rename = "watch_page")]
    WatchPage,
    #[serde(rename = "innertube")]
    InnerTube,
    #[serde(rename = "fallback")]
    Fallback,
}

/// Complete transcript for a video
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptResult {
    pub segments: Vec<TranscriptSegment>,
    pub available_languages: Vec<LanguageOption>,
    pub source: TranscriptSource,
    pub language: Option<String>,
}

impl std::fmt::Display for TranscriptSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscriptSource::WatchPage => write!(f, "watch_page"),
            TranscriptSource::InnerTube => write!(f, "innertube"),
            TranscriptSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// Extract video ID from various YouTube URL formats
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    // Bare 11-character video ID
    if regex::Regex::new(r"^[a-zA-Z0-9_-]{11}$").ok()?.is_match(input) {
        return Some(input.to_string());
    }

    let patterns = [
        // youtube.com/watch?v=ID
        r"(?:youtube\.com/watch\?.*v=)([a-zA-Z0-9_-]{11})",
        // youtu.be/ID
        r"youtu\.be/([a-zA-Z0-9_-]{11})",
        r"youtube\.com/embed/([a-zA-Z0-9_-]{11})",
        r"youtube\.com/shorts/([a-zA-Z0-9_-]{11})",
        r"youtube\.com/live/([a-zA-Z0-9_-]{11})",
    ];

    patterns.iter().find_map(|pattern| {
        regex::Regex::new(pattern)
            .ok()?
            .captures(input)
            .map(|caps| caps[1].to_string())
    })
}
