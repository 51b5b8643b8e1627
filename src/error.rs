use serde::Serialize;

/// Category of a transcript failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    VideoUnavailable,
    CaptionsDisabled,
    NoTranscript,
    LanguageUnavailable,
    RateLimited,
    UpstreamUnreachable,
    AuthenticationRequired,
    ParseFailure,
}

impl ErrorKind {
    /// HTTP status a web surface should answer with for this kind
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::VideoUnavailable
            | ErrorKind::CaptionsDisabled
            | ErrorKind::NoTranscript
            | ErrorKind::LanguageUnavailable => 404,
            ErrorKind::RateLimited => 429,
            ErrorKind::UpstreamUnreachable => 502,
            ErrorKind::AuthenticationRequired => 403,
            ErrorKind::ParseFailure => 500,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::VideoUnavailable => "video unavailable",
            ErrorKind::CaptionsDisabled => "captions disabled",
            ErrorKind::NoTranscript => "no transcript",
            ErrorKind::LanguageUnavailable => "language unavailable",
            ErrorKind::RateLimited => "rate limited",
            ErrorKind::UpstreamUnreachable => "upstream unreachable",
            ErrorKind::AuthenticationRequired => "authentication required",
            ErrorKind::ParseFailure => "parse failure",
        };
        write!(f, "{name}")
    }
}

/// Error returned by the transcript engine.
///
/// The same type doubles as the reason carried by a soft strategy outcome, so a
/// strategy can say *why* it gave up without the orchestrator seeing transport
/// or parser internals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TranscriptError {
    pub kind: ErrorKind,
    pub message: String,
}

impl TranscriptError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn recommended_status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn video_unavailable(reason: &str) -> Self {
        let message = if reason.is_empty() {
            "This video is unavailable or has been removed.".to_string()
        } else {
            format!("This video is unavailable: {reason}")
        };
        Self::new(ErrorKind::VideoUnavailable, message)
    }

    pub fn captions_disabled() -> Self {
        Self::new(
            ErrorKind::CaptionsDisabled,
            "Transcripts are disabled for this video.",
        )
    }

    pub fn no_transcript(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoTranscript, detail)
    }

    pub fn language_unavailable(requested: &str, available: &[&str]) -> Self {
        Self::new(
            ErrorKind::LanguageUnavailable,
            format!(
                "Transcript not available in \"{requested}\". Available languages: {}",
                available.join(", ")
            ),
        )
    }

    pub fn rate_limited(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::RateLimited, detail)
    }

    pub fn unreachable(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::UpstreamUnreachable, detail)
    }

    pub fn parse_failure(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseFailure, detail)
    }

    /// Map a non-success HTTP status from YouTube into a soft reason
    pub fn from_status(status: u16, what: &str) -> Self {
        match status {
            429 => Self::rate_limited(format!("{what} was rate limited (HTTP 429)")),
            _ => Self::unreachable(format!("{what} failed (HTTP {status})")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::VideoUnavailable.status_code(), 404);
        assert_eq!(ErrorKind::CaptionsDisabled.status_code(), 404);
        assert_eq!(ErrorKind::NoTranscript.status_code(), 404);
        assert_eq!(ErrorKind::LanguageUnavailable.status_code(), 404);
        assert_eq!(ErrorKind::RateLimited.status_code(), 429);
        assert_eq!(ErrorKind::UpstreamUnreachable.status_code(), 502);
        assert_eq!(ErrorKind::AuthenticationRequired.status_code(), 403);
        assert_eq!(ErrorKind::ParseFailure.status_code(), 500);
    }

    #[test]
    fn test_language_unavailable_lists_codes() {
        let err = TranscriptError::language_unavailable("fr", &["en", "de", "es"]);
        assert_eq!(err.kind, ErrorKind::LanguageUnavailable);
        assert_eq!(
            err.to_string(),
            "Transcript not available in \"fr\". Available languages: en, de, es"
        );
    }

    #[test]
    fn test_from_status() {
        assert_eq!(TranscriptError::from_status(429, "watch page").kind, ErrorKind::RateLimited);
        assert_eq!(
            TranscriptError::from_status(503, "watch page").kind,
            ErrorKind::UpstreamUnreachable
        );
    }
}
