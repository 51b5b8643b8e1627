use log::{debug, info, warn};

use crate::captions;
use crate::config::EngineConfig;
use crate::embedded::{self, PLAYER_RESPONSE_MARKER};
use crate::error::{ErrorKind, TranscriptError};
use crate::fallback;
use crate::http::{ReqwestTransport, Transport};
use crate::innertube::{self, Playability, PlayerResponse};
use crate::page;
use crate::session::SessionTokens;
use crate::tracks::TrackCatalog;
use crate::{LanguageOption, TranscriptResult, TranscriptSource};

/// Result of one strategy (or one step inside a strategy)
#[derive(Debug)]
pub enum Outcome<T> {
    Success(T),
    /// Recoverable: the next strategy may still succeed
    Soft(TranscriptError),
    /// Conclusive: no other strategy can do better
    Fatal(TranscriptError),
}

pub type StrategyOutcome = Outcome<TranscriptResult>;

enum ChainState {
    NotStarted,
    Trying(usize),
    Succeeded(TranscriptResult),
    Exhausted(TranscriptError),
}

/// Per-request scratch state. The watch page is fetched at most once and shared.
struct RequestState<'a> {
    video_id: &'a str,
    language: Option<&'a str>,
    /// Stop at the track catalog; no segments are downloaded
    languages_only: bool,
    page: Option<Result<String, TranscriptError>>,
}

/// Turns a video ID into a transcript by running the configured strategies in order.
///
/// A success ends the chain, a fatal verdict ends it with that error, and a soft
/// failure moves on to the next strategy.
pub struct TranscriptEngine<T: Transport = ReqwestTransport> {
    config: EngineConfig,
    transport: T,
}

impl TranscriptEngine<ReqwestTransport> {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::default())
    }
}

impl<T: Transport> TranscriptEngine<T> {
    pub fn with_transport(config: EngineConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the transcript for an already-validated video ID.
    ///
    /// Dropping the returned future cancels any in-flight request; nothing
    /// partial is ever returned.
    pub async fn fetch_transcript(
        &self,
        video_id: &str,
        language: Option<&str>,
    ) -> Result<TranscriptResult, TranscriptError> {
        info!("Fetching transcript for {video_id} (language: {language:?})");
        self.run_chain(RequestState {
            video_id,
            language,
            languages_only: false,
            page: None,
        })
        .await
    }

    /// List the caption languages of the first strategy that finds a catalog.
    ///
    /// Same chain as [`fetch_transcript`](Self::fetch_transcript), but stops
    /// before selecting a track, so segment downloads never happen.
    pub async fn list_languages(&self, video_id: &str) -> Result<Vec<LanguageOption>, TranscriptError> {
        info!("Listing caption languages for {video_id}");
        let result = self
            .run_chain(RequestState {
                video_id,
                language: None,
                languages_only: true,
                page: None,
            })
            .await?;
        Ok(result.available_languages)
    }

    async fn run_chain(&self, mut request: RequestState<'_>) -> Result<TranscriptResult, TranscriptError> {
        let video_id = request.video_id;
        let mut soft_failures: Vec<TranscriptError> = Vec::new();
        let mut state = ChainState::NotStarted;

        loop {
            state = match state {
                ChainState::NotStarted => ChainState::Trying(0),
                ChainState::Trying(i) => match self.config.strategies.get(i) {
                    None => ChainState::Exhausted(self.exhausted_error(&soft_failures)),
                    Some(&source) => {
                        debug!("Trying strategy {source}");
                        match self.run_strategy(source, &mut request).await {
                            Outcome::Success(result) if result.segments.is_empty() && !request.languages_only => {
                                warn!("Strategy {source} returned no segments");
                                soft_failures.push(TranscriptError::no_transcript("Transcript was empty."));
                                ChainState::Trying(i + 1)
                            }
                            Outcome::Success(result) => ChainState::Succeeded(result),
                            Outcome::Fatal(e) => {
                                warn!("Strategy {source} failed conclusively ({}): {e}", e.kind);
                                ChainState::Exhausted(e)
                            }
                            Outcome::Soft(e) => {
                                warn!("Strategy {source} gave up ({}): {e}", e.kind);
                                soft_failures.push(e);
                                ChainState::Trying(i + 1)
                            }
                        }
                    }
                },
                ChainState::Succeeded(result) => {
                    info!(
                        "Result for {video_id} from {}: {} segments, {} languages",
                        result.source,
                        result.segments.len(),
                        result.available_languages.len()
                    );
                    return Ok(result);
                }
                ChainState::Exhausted(e) => return Err(e),
            };
        }
    }

    async fn run_strategy(&self, source: TranscriptSource, request: &mut RequestState<'_>) -> StrategyOutcome {
        match source {
            TranscriptSource::WatchPage => self.from_watch_page(request).await,
            TranscriptSource::InnerTube => self.from_innertube(request).await,
            TranscriptSource::Fallback => self.from_fallback(request).await,
        }
    }

    async fn load_page<'r>(&self, request: &'r mut RequestState<'_>) -> Result<&'r str, TranscriptError> {
        let page = match request.page.take() {
            Some(page) => page,
            None => page::fetch_watch_page(&self.transport, &self.config, request.video_id).await,
        };
        request
            .page
            .insert(page)
            .as_ref()
            .map(String::as_str)
            .map_err(Clone::clone)
    }

    async fn from_watch_page(&self, request: &mut RequestState<'_>) -> StrategyOutcome {
        let (language, languages_only) = (request.language, request.languages_only);
        let html = match self.load_page(request).await {
            Ok(html) => html,
            Err(e) => return Outcome::Soft(e),
        };

        let Some(player) = embedded::extract_json::<PlayerResponse>(html, PLAYER_RESPONSE_MARKER) else {
            if let Some(reason) = raw_unplayable_status(html) {
                return Outcome::Fatal(TranscriptError::video_unavailable(&reason));
            }
            return Outcome::Soft(TranscriptError::parse_failure(
                "Could not find a readable player response in the watch page.",
            ));
        };

        if let Playability::Unplayable(reason) = player.playability() {
            return Outcome::Fatal(TranscriptError::video_unavailable(&reason));
        }

        let catalog = player.into_catalog();
        if catalog.is_empty() {
            return Outcome::Soft(TranscriptError::no_transcript(
                "The watch page lists no caption tracks.",
            ));
        }
        if languages_only {
            return catalog_only(TranscriptSource::WatchPage, &catalog);
        }
        self.finish(TranscriptSource::WatchPage, catalog, language).await
    }

    async fn from_innertube(&self, request: &mut RequestState<'_>) -> StrategyOutcome {
        let (video_id, language, languages_only) = (request.video_id, request.language, request.languages_only);
        let session = match self.load_page(request).await {
            Ok(html) => SessionTokens::discover(html),
            Err(e) => return Outcome::Soft(e),
        };
        let Some(ref api_key) = session.api_key else {
            return Outcome::Soft(TranscriptError::parse_failure(
                "No InnerTube API key on the watch page; player API not attempted.",
            ));
        };

        match innertube::fetch_caption_tracks(&self.transport, &self.config, video_id, api_key, &session).await {
            Outcome::Success(catalog) if languages_only => catalog_only(TranscriptSource::InnerTube, &catalog),
            Outcome::Success(catalog) => self.finish(TranscriptSource::InnerTube, catalog, language).await,
            Outcome::Soft(e) => Outcome::Soft(e),
            Outcome::Fatal(e) => Outcome::Fatal(e),
        }
    }

    async fn from_fallback(&self, request: &mut RequestState<'_>) -> StrategyOutcome {
        let Some(ref provider) = self.config.fallback else {
            debug!("No fallback provider configured, skipping");
            return Outcome::Soft(TranscriptError::unreachable("No fallback provider configured."));
        };

        match fallback::fetch_from_provider(
            &self.transport,
            &self.config,
            provider,
            request.video_id,
            request.language,
        )
        .await
        {
            Ok(result) => Outcome::Success(result),
            Err(e) => Outcome::Soft(e),
        }
    }

    /// Select a track from this attempt's catalog and fetch its segments
    async fn finish(&self, source: TranscriptSource, catalog: TrackCatalog, language: Option<&str>) -> StrategyOutcome {
        let track = match catalog.select(language) {
            Ok(track) => track,
            Err(e) if e.kind == ErrorKind::LanguageUnavailable => return Outcome::Fatal(e),
            Err(e) => return Outcome::Soft(e),
        };
        debug!(
            "Selected track lang={} generated={} via {source}",
            track.language_code, track.is_auto_generated
        );

        match captions::fetch_segments(&self.transport, &self.config, track).await {
            Ok(segments) => Outcome::Success(TranscriptResult {
                segments,
                available_languages: catalog.languages(),
                source,
                language: Some(track.language_code.clone()),
            }),
            Err(e) => Outcome::Soft(e),
        }
    }

    fn exhausted_error(&self, soft_failures: &[TranscriptError]) -> TranscriptError {
        let has = |kind: ErrorKind| soft_failures.iter().any(|e| e.kind == kind);
        let fallback_hint = if self.config.fallback.is_none() {
            " Configure a fallback transcript provider ([fallback] in config.toml) to route around the block."
        } else {
            ""
        };

        if has(ErrorKind::RateLimited) {
            return TranscriptError::rate_limited(format!(
                "YouTube is rate limiting requests from this network. Wait a while before retrying.{fallback_hint}"
            ));
        }

        let cause = if has(ErrorKind::AuthenticationRequired) {
            "YouTube asked for sign-in to confirm this is not a bot."
        } else {
            "YouTube could not be reached or returned no usable caption data."
        };
        if self.config.fallback.is_some() {
            TranscriptError::unreachable(format!(
                "{cause} All strategies failed, including the fallback provider. Try again later."
            ))
        } else {
            TranscriptError::unreachable(format!("{cause}{fallback_hint}"))
        }
    }
}

fn catalog_only(source: TranscriptSource, catalog: &TrackCatalog) -> StrategyOutcome {
    Outcome::Success(TranscriptResult {
        segments: Vec::new(),
        available_languages: catalog.languages(),
        source,
        language: None,
    })
}

/// Playability verdict visible in the raw page even when the blob does not parse
fn raw_unplayable_status(html: &str) -> Option<String> {
    ["ERROR", "UNPLAYABLE"]
        .iter()
        .any(|status| html.contains(&format!("\"playabilityStatus\":{{\"status\":\"{status}\"")))
        .then(String::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::config::FallbackConfig;
    use crate::http::fake::{FakeTransport, Reply};
    use crate::http::{HttpRequest, HttpResponse, TransportError};

    const VIDEO: &str = "btLZQzynfoA";
    const WATCH: &str = "https://www.youtube.com/watch";
    const PLAYER: &str = "https://www.youtube.com/youtubei/v1/player";
    const TIMEDTEXT: &str = "https://www.youtube.com/api/timedtext";
    const PROVIDER: &str = "https://transcripts.example.com/v1/transcript";

    fn caption_track(lang: &str, asr: bool) -> serde_json::Value {
        let mut track = serde_json::json!({
            "baseUrl": format!("{TIMEDTEXT}?v={VIDEO}&lang={lang}"),
            "languageCode": lang,
            "name": {"simpleText": lang.to_uppercase()}
        });
        if asr {
            track["kind"] = serde_json::json!("asr");
        }
        track
    }

    fn player(status: &str, tracks: Vec<serde_json::Value>) -> serde_json::Value {
        let mut player = serde_json::json!({"playabilityStatus": {"status": status}});
        if !tracks.is_empty() {
            player["captions"] = serde_json::json!({
                "playerCaptionsTracklistRenderer": {"captionTracks": tracks}
            });
        }
        player
    }

    fn watch_html(player_blob: &str, api_key: Option<&str>) -> String {
        let ytcfg = api_key
            .map(|k| format!(r#"ytcfg.set({{"INNERTUBE_API_KEY":"{k}","VISITOR_DATA":"VIS"}});"#))
            .unwrap_or_default();
        format!("<html><script>{ytcfg}</script><script>var ytInitialPlayerResponse = {player_blob};var meta = {{}};</script></html>")
    }

    fn json3(texts: &[(&str, u64, u64)]) -> String {
        let events: Vec<_> = texts
            .iter()
            .map(|(t, start, dur)| serde_json::json!({"tStartMs": start, "dDurationMs": dur, "segs": [{"utf8": t}]}))
            .collect();
        serde_json::json!({ "events": events }).to_string()
    }

    /// Accepts every request and never answers
    #[derive(Default)]
    struct StalledTransport {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Transport for StalledTransport {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::future::pending().await
        }
    }

    fn engine(transport: FakeTransport) -> TranscriptEngine<FakeTransport> {
        TranscriptEngine::with_transport(EngineConfig::default(), transport)
    }

    fn engine_with_fallback(transport: FakeTransport) -> TranscriptEngine<FakeTransport> {
        let config = EngineConfig {
            fallback: Some(FallbackConfig {
                endpoint: PROVIDER.to_string(),
                api_key_env: None,
            }),
            ..EngineConfig::default()
        };
        TranscriptEngine::with_transport(config, transport)
    }

    #[tokio::test]
    async fn test_watch_page_success() {
        let page = watch_html(
            &player("OK", vec![caption_track("en", true), caption_track("de", false)]).to_string(),
            Some("KEY"),
        );
        let transport = FakeTransport::new()
            .ok(WATCH, &page)
            .ok(TIMEDTEXT, &json3(&[("Hello", 0, 1200), ("world &amp; all", 1200, 800)]));
        let engine = engine(transport);

        let result = engine.fetch_transcript(VIDEO, None).await.unwrap();
        assert_eq!(result.source, TranscriptSource::WatchPage);
        assert_eq!(result.language.as_deref(), Some("en"));
        assert_eq!(result.segments.len(), 2);
        assert!((result.segments[0].offset - 0.0).abs() < f64::EPSILON);
        assert_eq!(result.segments[1].text, "world & all");
        assert!(result.segments.windows(2).all(|w| w[0].offset <= w[1].offset));

        assert_eq!(result.available_languages.len(), 2);
        assert!(result.available_languages[0].is_generated);
        assert!(!result.available_languages[1].is_generated);

        assert_eq!(engine.transport().call_count(), 2);
        assert_eq!(engine.transport().calls_to(PLAYER), 0);
    }

    #[tokio::test]
    async fn test_requested_language_selects_track() {
        let page = watch_html(
            &player("OK", vec![caption_track("en", true), caption_track("de", false)]).to_string(),
            None,
        );
        let transport = FakeTransport::new()
            .ok(WATCH, &page)
            .ok(TIMEDTEXT, &json3(&[("Hallo", 0, 1000)]));
        let engine = engine(transport);

        let result = engine.fetch_transcript(VIDEO, Some("de")).await.unwrap();
        assert_eq!(result.language.as_deref(), Some("de"));
        assert!(engine.transport().calls()[1].url.contains("lang=de"));
    }

    #[tokio::test]
    async fn test_fatal_unplayable_stops_chain() {
        let page = watch_html(&player("ERROR", vec![]).to_string(), Some("KEY"));
        let transport = FakeTransport::new().ok(WATCH, &page);
        let engine = engine_with_fallback(transport);

        let err = engine.fetch_transcript(VIDEO, None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::VideoUnavailable);
        assert_eq!(err.recommended_status_code(), 404);
        assert_eq!(engine.transport().call_count(), 1);
    }

    #[tokio::test]
    async fn test_language_unavailable_is_fatal_and_lists_codes() {
        let page = watch_html(
            &player("OK", vec![caption_track("en", false), caption_track("es", true)]).to_string(),
            Some("KEY"),
        );
        let transport = FakeTransport::new().ok(WATCH, &page);
        let engine = engine(transport);

        let err = engine.fetch_transcript(VIDEO, Some("fr")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::LanguageUnavailable);
        assert!(err.message.contains("en"));
        assert!(err.message.contains("es"));
        assert_eq!(engine.transport().call_count(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_blob_falls_through_to_innertube() {
        let page = watch_html(r#"{"captions": {"playerCaptionsTracklistRenderer": {"captionTracks": [}"#, Some("KEY"));
        let rpc = player("OK", vec![caption_track("en", false)]).to_string();
        let transport = FakeTransport::new()
            .ok(WATCH, &page)
            .ok(PLAYER, &rpc)
            .ok(TIMEDTEXT, &json3(&[("from rpc", 0, 500)]));
        let engine = engine(transport);

        let result = engine.fetch_transcript(VIDEO, None).await.unwrap();
        assert_eq!(result.source, TranscriptSource::InnerTube);
        assert_eq!(result.segments[0].text, "from rpc");
        assert_eq!(engine.transport().calls_to(WATCH), 1);
        assert_eq!(engine.transport().calls_to(PLAYER), 1);
    }

    #[tokio::test]
    async fn test_catalogs_are_not_merged() {
        let page = watch_html(&player("OK", vec![caption_track("en", false)]).to_string(), Some("KEY"));
        let rpc = player("OK", vec![caption_track("de", false), caption_track("fr", true)]).to_string();
        let transport = FakeTransport::new()
            .ok(WATCH, &page)
            .ok(&format!("{TIMEDTEXT}?v={VIDEO}&lang=en"), "")
            .ok(PLAYER, &rpc)
            .ok(&format!("{TIMEDTEXT}?v={VIDEO}&lang=de"), &json3(&[("Guten Tag", 0, 900)]));
        let engine = engine(transport);

        let result = engine.fetch_transcript(VIDEO, None).await.unwrap();
        assert_eq!(result.source, TranscriptSource::InnerTube);
        let codes: Vec<&str> = result.available_languages.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["de", "fr"]);
    }

    #[tokio::test]
    async fn test_missing_api_key_skips_player_call() {
        let page = watch_html(&player("OK", vec![]).to_string(), None);
        let transport = FakeTransport::new().ok(WATCH, &page);
        let engine = engine(transport);

        let err = engine.fetch_transcript(VIDEO, None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::UpstreamUnreachable);
        assert!(err.message.contains("fallback"));
        assert_eq!(engine.transport().calls_to(PLAYER), 0);
        assert_eq!(engine.transport().call_count(), 1);
    }

    #[tokio::test]
    async fn test_all_soft_without_fallback_is_unreachable() {
        let transport = FakeTransport::new().route(WATCH, vec![Reply::Timeout]);
        let engine = engine(transport);

        let err = engine.fetch_transcript(VIDEO, None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::UpstreamUnreachable);
        assert!(err.message.contains("Configure a fallback transcript provider"));
        assert!(!err.message.contains("timed out"));
        assert_eq!(engine.transport().call_count(), 1);
    }

    #[tokio::test]
    async fn test_rate_limit_is_reported_when_exhausted() {
        let transport = FakeTransport::new().route(WATCH, vec![Reply::Status(429, String::new())]);
        let engine = engine(transport);

        let err = engine.fetch_transcript(VIDEO, None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::RateLimited);
        assert_eq!(err.recommended_status_code(), 429);
    }

    #[tokio::test]
    async fn test_login_wall_exhausted_is_unreachable() {
        let page = watch_html(&player("LOGIN_REQUIRED", vec![]).to_string(), Some("KEY"));
        let transport = FakeTransport::new()
            .ok(WATCH, &page)
            .ok(PLAYER, &player("LOGIN_REQUIRED", vec![]).to_string());
        let engine = engine(transport);

        let err = engine.fetch_transcript(VIDEO, None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::UpstreamUnreachable);
        assert!(err.message.contains("sign-in"));
    }

    #[tokio::test]
    async fn test_fallback_provider_rescues() {
        let page = watch_html(&player("LOGIN_REQUIRED", vec![]).to_string(), None);
        let transport = FakeTransport::new()
            .ok(WATCH, &page)
            .ok(PROVIDER, r#"{"segments":[{"text":"provided","offset":0,"duration":2}]}"#);
        let engine = engine_with_fallback(transport);

        let result = engine.fetch_transcript(VIDEO, None).await.unwrap();
        assert_eq!(result.source, TranscriptSource::Fallback);
        assert_eq!(result.segments[0].text, "provided");
    }

    #[tokio::test]
    async fn test_captions_disabled_prevents_fallback() {
        let page = watch_html(&player("OK", vec![]).to_string(), Some("KEY"));
        let transport = FakeTransport::new()
            .ok(WATCH, &page)
            .ok(PLAYER, &player("OK", vec![]).to_string())
            .ok(PROVIDER, r#"{"segments":[{"text":"x","offset":0,"duration":1}]}"#);
        let engine = engine_with_fallback(transport);

        let err = engine.fetch_transcript(VIDEO, None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::CaptionsDisabled);
        assert_eq!(engine.transport().calls_to(PROVIDER), 0);
    }

    #[tokio::test]
    async fn test_fallback_failure_message() {
        let transport = FakeTransport::new()
            .route(WATCH, vec![Reply::Status(503, String::new())])
            .route(PROVIDER, vec![Reply::Status(500, String::new())]);
        let engine = engine_with_fallback(transport);

        let err = engine.fetch_transcript(VIDEO, None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::UpstreamUnreachable);
        assert!(err.message.contains("including the fallback provider"));
    }

    #[tokio::test]
    async fn test_no_strategies() {
        let config = EngineConfig {
            strategies: Vec::new(),
            ..EngineConfig::default()
        };
        let engine = TranscriptEngine::with_transport(config, FakeTransport::new());
        let err = engine.fetch_transcript(VIDEO, None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::UpstreamUnreachable);
        assert_eq!(engine.transport().call_count(), 0);
    }

    #[tokio::test]
    async fn test_dropping_request_cancels_in_flight_call() {
        let engine = TranscriptEngine::with_transport(EngineConfig::default(), StalledTransport::default());

        let outcome = tokio::time::timeout(Duration::from_millis(50), engine.fetch_transcript(VIDEO, None)).await;
        assert!(outcome.is_err(), "request should still be pending when cancelled");
        assert_eq!(engine.transport().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_list_languages_skips_segment_download() {
        let page = watch_html(
            &player("OK", vec![caption_track("en", true), caption_track("de", false)]).to_string(),
            Some("KEY"),
        );
        let transport = FakeTransport::new()
            .ok(WATCH, &page)
            .route(TIMEDTEXT, vec![Reply::Status(500, String::new())]);
        let engine = engine(transport);

        let languages = engine.list_languages(VIDEO).await.unwrap();
        let codes: Vec<(&str, bool)> = languages.iter().map(|l| (l.code.as_str(), l.is_generated)).collect();
        assert_eq!(codes, vec![("en", true), ("de", false)]);
        assert_eq!(engine.transport().calls_to(TIMEDTEXT), 0);
        assert_eq!(engine.transport().call_count(), 1);
    }

    #[tokio::test]
    async fn test_list_languages_from_innertube() {
        let page = watch_html(&player("LOGIN_REQUIRED", vec![]).to_string(), Some("KEY"));
        let rpc = player("OK", vec![caption_track("ja", true)]).to_string();
        let transport = FakeTransport::new().ok(WATCH, &page).ok(PLAYER, &rpc);
        let engine = engine(transport);

        let languages = engine.list_languages(VIDEO).await.unwrap();
        assert_eq!(languages.len(), 1);
        assert_eq!(languages[0].code, "ja");
        assert_eq!(engine.transport().calls_to(TIMEDTEXT), 0);
    }

    #[test]
    fn test_raw_unplayable_status() {
        assert!(raw_unplayable_status(r#"x"playabilityStatus":{"status":"ERROR","reason":"gone""#).is_some());
        assert!(raw_unplayable_status(r#""playabilityStatus":{"status":"OK"}"#).is_none());
    }
}
