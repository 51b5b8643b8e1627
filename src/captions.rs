use eyre::{Result, bail};
use log::debug;
use reqwest::Url;
use serde::Deserialize;

use crate::TranscriptSegment;
use crate::config::EngineConfig;
use crate::error::TranscriptError;
use crate::http::{HttpRequest, Transport};
use crate::tracks::CaptionTrackDescriptor;

#[derive(Debug, Deserialize)]
struct TimedText {
    events: Option<Vec<TimedEvent>>,
}

#[derive(Debug, Deserialize)]
struct TimedEvent {
    #[serde(rename = "tStartMs")]
    t_start_ms: Option<f64>,
    #[serde(rename = "dDurationMs")]
    d_duration_ms: Option<f64>,
    segs: Option<Vec<TimedSeg>>,
}

#[derive(Debug, Deserialize)]
struct TimedSeg {
    utf8: Option<String>,
}

/// Fetch a caption track and parse it into ordered segments
pub async fn fetch_segments(
    transport: &dyn Transport,
    config: &EngineConfig,
    track: &CaptionTrackDescriptor,
) -> Result<Vec<TranscriptSegment>, TranscriptError> {
    let url = json3_url(&track.resource_url);
    debug!("Fetching caption track: lang={} url={url}", track.language_code);

    let request = HttpRequest::get(url, config.caption_timeout)
        .header("User-Agent", config.user_agent.as_str())
        .header("Cookie", config.consent_cookie.as_str());

    let resp = transport
        .send(request)
        .await
        .map_err(|e| e.into_reason("caption track fetch"))?;

    if !resp.is_success() {
        return Err(TranscriptError::from_status(resp.status, "caption track fetch"));
    }
    if resp.body.trim().is_empty() {
        return Err(TranscriptError::no_transcript("Caption track returned an empty body."));
    }

    let segments = parse_timed_text(&resp.body)
        .map_err(|e| TranscriptError::parse_failure(format!("Failed to parse caption track: {e}")))?;

    if segments.is_empty() {
        return Err(TranscriptError::no_transcript("Transcript data was empty for this video."));
    }
    debug!("Parsed {} caption segments", segments.len());
    Ok(segments)
}

/// Request the JSON timed-text format, replacing any format already on the URL
pub fn json3_url(base_url: &str) -> String {
    let Ok(mut url) = Url::parse(base_url) else {
        let separator = if base_url.contains('?') { '&' } else { '?' };
        return format!("{base_url}{separator}fmt=json3");
    };

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .into_owned()
        .filter(|(key, _)| key != "fmt")
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair("fmt", "json3");
    url.to_string()
}

/// Decode HTML entities
pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Decode entities, fold newlines into spaces, trim
pub fn normalize_text(raw: &str) -> String {
    decode_entities(raw).replace('\n', " ").trim().to_string()
}

fn parse_timed_text(body: &str) -> Result<Vec<TranscriptSegment>> {
    if body.trim_start().starts_with('<') {
        return parse_caption_xml(body);
    }
    parse_json3(body)
}

fn parse_json3(body: &str) -> Result<Vec<TranscriptSegment>> {
    let data: TimedText = serde_json::from_str(body)?;

    let segments = data
        .events
        .unwrap_or_default()
        .into_iter()
        .filter_map(|event| {
            let raw: String = event.segs?.iter().filter_map(|s| s.utf8.as_deref()).collect();
            let text = normalize_text(&raw);
            if text.is_empty() {
                return None;
            }
            Some(TranscriptSegment {
                text,
                offset: event.t_start_ms.unwrap_or(0.0).max(0.0) / 1000.0,
                duration: event.d_duration_ms.unwrap_or(0.0).max(0.0) / 1000.0,
            })
        })
        .collect();

    Ok(segments)
}

/// Legacy `<transcript><text start=".." dur="..">` format, values in seconds
fn parse_caption_xml(xml: &str) -> Result<Vec<TranscriptSegment>> {
    use quick_xml::Reader;
    use quick_xml::events::Event;

    let mut reader = Reader::from_str(xml);
    let mut segments = Vec::new();
    let mut current: Option<(f64, f64)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"text" => {
                let mut start = None;
                let mut dur = 0.0;
                for attr in e.attributes().flatten() {
                    let value = String::from_utf8_lossy(&attr.value).parse::<f64>().ok();
                    match attr.key.as_ref() {
                        b"start" => start = value,
                        b"dur" => dur = value.unwrap_or(0.0),
                        _ => {}
                    }
                }
                current = start.map(|s| (s.max(0.0), dur.max(0.0)));
            }
            Ok(Event::Text(ref e)) => {
                if let Some((offset, duration)) = current.take() {
                    let raw = e.unescape().unwrap_or_default();
                    let text = normalize_text(&raw);
                    if !text.is_empty() {
                        segments.push(TranscriptSegment { text, offset, duration });
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => bail!("error parsing caption XML: {e}"),
            _ => {}
        }
    }

    Ok(segments)
}
