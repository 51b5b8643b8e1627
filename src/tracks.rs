use log::debug;
use serde::Deserialize;

use crate::LanguageOption;
use crate::error::TranscriptError;

/// Caption track as YouTube embeds it in a player response
#[derive(Debug, Deserialize)]
pub(crate) struct RawCaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: Option<String>,
    #[serde(rename = "languageCode")]
    language_code: Option<String>,
    name: Option<TrackName>,
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TrackName {
    #[serde(rename = "simpleText")]
    simple_text: Option<String>,
    runs: Option<Vec<TextRun>>,
}

#[derive(Debug, Deserialize)]
struct TextRun {
    text: Option<String>,
}

impl TrackName {
    fn text(&self) -> Option<String> {
        if let Some(ref simple) = self.simple_text {
            return Some(simple.clone());
        }
        let joined: String = self
            .runs
            .as_ref()?
            .iter()
            .filter_map(|r| r.text.as_deref())
            .collect();
        (!joined.is_empty()).then_some(joined)
    }
}

/// One available caption variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionTrackDescriptor {
    pub resource_url: String,
    pub language_code: String,
    pub display_name: String,
    pub is_auto_generated: bool,
}

impl CaptionTrackDescriptor {
    fn from_raw(raw: RawCaptionTrack) -> Option<Self> {
        let resource_url = raw.base_url?;
        let language_code = raw.language_code?;
        let display_name = raw
            .name
            .as_ref()
            .and_then(TrackName::text)
            .unwrap_or_else(|| language_code.clone());

        Some(Self {
            resource_url,
            is_auto_generated: raw.kind.as_deref() == Some("asr"),
            display_name,
            language_code,
        })
    }
}

/// Caption tracks from a single strategy attempt, in upstream order
#[derive(Debug, Clone, Default)]
pub struct TrackCatalog {
    tracks: Vec<CaptionTrackDescriptor>,
}

impl TrackCatalog {
    pub fn new(tracks: Vec<CaptionTrackDescriptor>) -> Self {
        Self { tracks }
    }

    pub(crate) fn from_raw(raw: Vec<RawCaptionTrack>) -> Self {
        let total = raw.len();
        let tracks: Vec<_> = raw.into_iter().filter_map(CaptionTrackDescriptor::from_raw).collect();
        if tracks.len() != total {
            debug!("Dropped {} caption tracks without url or language", total - tracks.len());
        }
        Self { tracks }
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> &[CaptionTrackDescriptor] {
        &self.tracks
    }

    /// Caller-facing language list, one entry per track
    pub fn languages(&self) -> Vec<LanguageOption> {
        self.tracks
            .iter()
            .map(|t| LanguageOption {
                code: t.language_code.clone(),
                name: t.display_name.clone(),
                is_generated: t.is_auto_generated,
            })
            .collect()
    }

    /// Pick the exact language match, or the first track when none is requested
    pub fn select(&self, requested: Option<&str>) -> Result<&CaptionTrackDescriptor, TranscriptError> {
        match requested {
            Some(lang) => self.tracks.iter().find(|t| t.language_code == lang).ok_or_else(|| {
                let codes: Vec<&str> = self.tracks.iter().map(|t| t.language_code.as_str()).collect();
                TranscriptError::language_unavailable(lang, &codes)
            }),
            None => self
                .tracks
                .first()
                .ok_or_else(|| TranscriptError::no_transcript("No caption tracks found for this video.")),
        }
    }
}
