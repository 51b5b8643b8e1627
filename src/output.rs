use serde::Serialize;

use crate::{LanguageOption, TranscriptResult, TranscriptSegment, TranscriptSource};

#[derive(Serialize)]
struct JsonDocument<'a> {
    video_id: &'a str,
    language: Option<&'a str>,
    source: TranscriptSource,
    languages: &'a [LanguageOption],
    segments: &'a [TranscriptSegment],
    plain_text: String,
    timestamped_text: String,
}

/// Render transcript as plain text (one segment per line, no timestamps)
pub fn render_text(result: &TranscriptResult) -> String {
    result
        .segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render transcript with a `[m:ss]` prefix on every line
pub fn render_timestamped(result: &TranscriptResult) -> String {
    result
        .segments
        .iter()
        .map(|s| format!("[{}] {}", format_time(s.offset), s.text))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(video_id: &str, result: &TranscriptResult) -> String {
    let doc = JsonDocument {
        video_id,
        language: result.language.as_deref(),
        source: result.source,
        languages: &result.available_languages,
        segments: &result.segments,
        plain_text: render_text(result),
        timestamped_text: render_timestamped(result),
    };
    serde_json::to_string_pretty(&doc).unwrap_or_default()
}

pub fn render_srt(result: &TranscriptResult) -> String {
    result
        .segments
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "{}\n{} --> {}\n{}\n",
                i + 1,
                srt_time(s.offset),
                srt_time(s.offset + s.duration),
                s.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per available caption track
pub fn render_languages(languages: &[LanguageOption]) -> String {
    languages
        .iter()
        .map(|l| {
            let kind = if l.is_generated { "auto-generated" } else { "manual" };
            format!("{}\t{}\t{kind}", l.code, l.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `m:ss`, or `h:mm:ss` past the hour
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let (hours, mins, secs) = (total / 3600, (total / 60) % 60, total % 60);
    if hours > 0 {
        format!("{hours}:{mins:02}:{secs:02}")
    } else {
        format!("{mins}:{secs:02}")
    }
}

fn srt_time(seconds: f64) -> String {
    let millis = (seconds.max(0.0) * 1000.0).round() as u64;
    let (hours, mins, secs, ms) = (
        millis / 3_600_000,
        (millis / 60_000) % 60,
        (millis / 1000) % 60,
        millis % 1000,
    );
    format!("{hours:02}:{mins:02}:{secs:02},{ms:03}")
}
