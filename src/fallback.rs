use log::debug;
use reqwest::Url;
use serde::Deserialize;

use crate::captions::normalize_text;
use crate::config::{EngineConfig, FallbackConfig};
use crate::error::TranscriptError;
use crate::http::{HttpRequest, Transport};
use crate::{LanguageOption, TranscriptResult, TranscriptSegment, TranscriptSource};

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    segments: Option<Vec<ProviderSegment>>,
    languages: Option<Vec<ProviderLanguage>>,
}

#[derive(Debug, Deserialize)]
struct ProviderSegment {
    text: Option<String>,
    #[serde(alias = "start")]
    offset: Option<f64>,
    duration: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ProviderLanguage {
    code: String,
    name: Option<String>,
    #[serde(default)]
    is_generated: bool,
}

/// Ask the configured external provider for a transcript
pub async fn fetch_from_provider(
    transport: &dyn Transport,
    config: &EngineConfig,
    provider: &FallbackConfig,
    video_id: &str,
    language: Option<&str>,
) -> Result<TranscriptResult, TranscriptError> {
    let mut url = Url::parse(&provider.endpoint).map_err(|e| {
        TranscriptError::unreachable(format!("Invalid fallback endpoint {}: {e}", provider.endpoint))
    })?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("video_id", video_id);
        if let Some(lang) = language {
            query.append_pair("lang", lang);
        }
    }
    debug!("Requesting transcript from fallback provider: {url}");

    let mut request = HttpRequest::get(url.as_str(), config.fallback_timeout).header("Accept", "application/json");
    if let Some(token) = provider_token(provider) {
        request = request.header("Authorization", format!("Bearer {token}"));
    }

    let resp = transport
        .send(request)
        .await
        .map_err(|e| e.into_reason("fallback provider"))?;

    match resp.status {
        404 => return Err(TranscriptError::no_transcript("Fallback provider has no transcript for this video.")),
        s if !resp.is_success() => return Err(TranscriptError::from_status(s, "fallback provider")),
        _ => {}
    }

    let body: ProviderResponse = serde_json::from_str(&resp.body)
        .map_err(|e| TranscriptError::parse_failure(format!("Fallback provider response did not parse: {e}")))?;

    let segments: Vec<TranscriptSegment> = body
        .segments
        .unwrap_or_default()
        .into_iter()
        .filter_map(|s| {
            let text = normalize_text(s.text.as_deref()?);
            if text.is_empty() {
                return None;
            }
            Some(TranscriptSegment {
                text,
                offset: s.offset.unwrap_or(0.0).max(0.0),
                duration: s.duration.unwrap_or(0.0).max(0.0),
            })
        })
        .collect();

    if segments.is_empty() {
        return Err(TranscriptError::no_transcript("Fallback provider returned no segments."));
    }

    let available_languages: Vec<LanguageOption> = body
        .languages
        .unwrap_or_default()
        .into_iter()
        .map(|l| LanguageOption {
            name: l.name.unwrap_or_else(|| l.code.clone()),
            code: l.code,
            is_generated: l.is_generated,
        })
        .collect();

    let language = language
        .map(str::to_string)
        .or_else(|| available_languages.first().map(|l| l.code.clone()));

    Ok(TranscriptResult {
        segments,
        available_languages,
        source: TranscriptSource::Fallback,
        language,
    })
}

fn provider_token(provider: &FallbackConfig) -> Option<String> {
    let var = provider.api_key_env.as_deref()?;
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}
