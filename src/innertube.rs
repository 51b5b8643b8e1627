use log::{debug, info, warn};
use serde::Deserialize;

use crate::config::EngineConfig;
use crate::engine::Outcome;
use crate::error::{ErrorKind, TranscriptError};
use crate::http::{HttpRequest, Transport};
use crate::session::SessionTokens;
use crate::tracks::{RawCaptionTrack, TrackCatalog};

/// Request parameters simulating one YouTube client application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientProfile {
    pub client_name: &'static str,
    pub client_version: &'static str,
    /// Send a `thirdParty.embedUrl` like an embedded player would
    pub embedded: bool,
}

/// Embedded clients pass playability checks that the web client fails, so they go first
pub const DEFAULT_PROFILES: [ClientProfile; 3] = [
    ClientProfile {
        client_name: "WEB_EMBEDDED_PLAYER",
        client_version: "1.20250219.01.00",
        embedded: true,
    },
    ClientProfile {
        client_name: "TVHTML5_SIMPLY_EMBEDDED_PLAYER",
        client_version: "2.0",
        embedded: true,
    },
    ClientProfile {
        client_name: "WEB",
        client_version: "2.20250219.01.00",
        embedded: false,
    },
];

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PlayerResponse {
    #[serde(rename = "playabilityStatus")]
    playability_status: Option<PlayabilityStatus>,
    captions: Option<CaptionsData>,
}

#[derive(Debug, Deserialize)]
struct PlayabilityStatus {
    status: Option<String>,
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CaptionsData {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    player_captions_tracklist_renderer: Option<CaptionTracklistRenderer>,
}

#[derive(Debug, Deserialize)]
struct CaptionTracklistRenderer {
    #[serde(rename = "captionTracks")]
    caption_tracks: Option<Vec<RawCaptionTrack>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Playability {
    Ok,
    Unplayable(String),
    LoginRequired(String),
    Other(String, String),
}

impl PlayerResponse {
    pub(crate) fn playability(&self) -> Playability {
        let Some(ps) = self.playability_status.as_ref() else {
            return Playability::Ok;
        };
        let reason = ps.reason.clone().unwrap_or_default();
        match ps.status.as_deref() {
            None | Some("OK") => Playability::Ok,
            Some("ERROR") | Some("UNPLAYABLE") => Playability::Unplayable(reason),
            Some("LOGIN_REQUIRED") => Playability::LoginRequired(reason),
            Some(other) => Playability::Other(other.to_string(), reason),
        }
    }

    pub(crate) fn into_catalog(self) -> TrackCatalog {
        let tracks = self
            .captions
            .and_then(|c| c.player_captions_tracklist_renderer)
            .and_then(|r| r.caption_tracks)
            .unwrap_or_default();
        TrackCatalog::from_raw(tracks)
    }
}

enum ProfileVerdict {
    Tracks(TrackCatalog),
    Unplayable(String),
    CaptionsDisabled,
    LoginRequired(String),
    Failed(TranscriptError),
}

/// Query the player endpoint under each client profile in order.
///
/// Stops at the first profile that yields caption tracks, or at the first
/// error/unplayable verdict. Profiles are never tried concurrently.
pub async fn fetch_caption_tracks(
    transport: &dyn Transport,
    config: &EngineConfig,
    video_id: &str,
    api_key: &str,
    session: &SessionTokens,
) -> Outcome<TrackCatalog> {
    let mut all_captions_disabled = !config.client_profiles.is_empty();
    let mut last: Option<ProfileVerdict> = None;

    for profile in &config.client_profiles {
        let verdict = attempt(transport, config, profile, video_id, api_key, session).await;
        match verdict {
            ProfileVerdict::Tracks(catalog) => {
                info!(
                    "InnerTube {} returned {} caption tracks",
                    profile.client_name,
                    catalog.tracks().len()
                );
                return Outcome::Success(catalog);
            }
            ProfileVerdict::Unplayable(reason) => {
                warn!("InnerTube {} reports video unplayable: {reason}", profile.client_name);
                return Outcome::Fatal(TranscriptError::video_unavailable(&reason));
            }
            ProfileVerdict::CaptionsDisabled => {
                debug!("InnerTube {} reports no caption tracks", profile.client_name);
            }
            ProfileVerdict::LoginRequired(ref reason) => {
                debug!("InnerTube {} requires login: {reason}", profile.client_name);
                all_captions_disabled = false;
            }
            ProfileVerdict::Failed(ref e) => {
                debug!("InnerTube {} failed: {e}", profile.client_name);
                all_captions_disabled = false;
            }
        }
        last = Some(verdict);
    }

    if all_captions_disabled {
        return Outcome::Fatal(TranscriptError::captions_disabled());
    }

    match last {
        Some(ProfileVerdict::LoginRequired(reason)) => Outcome::Soft(TranscriptError::new(
            ErrorKind::AuthenticationRequired,
            format!("YouTube requires sign-in for this request: {reason}"),
        )),
        Some(ProfileVerdict::Failed(e)) if e.kind == ErrorKind::RateLimited => Outcome::Soft(e),
        _ => Outcome::Soft(TranscriptError::unreachable(
            "All InnerTube client profiles were exhausted without caption tracks.",
        )),
    }
}

async fn attempt(
    transport: &dyn Transport,
    config: &EngineConfig,
    profile: &ClientProfile,
    video_id: &str,
    api_key: &str,
    session: &SessionTokens,
) -> ProfileVerdict {
    let what = format!("InnerTube {}", profile.client_name);
    let request = player_request(config, profile, video_id, api_key, session);

    let resp = match transport.send(request).await {
        Ok(resp) => resp,
        Err(e) => return ProfileVerdict::Failed(e.into_reason(&what)),
    };
    if !resp.is_success() {
        return ProfileVerdict::Failed(TranscriptError::from_status(resp.status, &what));
    }

    let player: PlayerResponse = match serde_json::from_str(&resp.body) {
        Ok(player) => player,
        Err(e) => {
            return ProfileVerdict::Failed(TranscriptError::parse_failure(format!(
                "{what} response did not parse: {e}"
            )));
        }
    };

    match player.playability() {
        Playability::Ok => {
            let catalog = player.into_catalog();
            if catalog.is_empty() {
                ProfileVerdict::CaptionsDisabled
            } else {
                ProfileVerdict::Tracks(catalog)
            }
        }
        Playability::Unplayable(reason) => ProfileVerdict::Unplayable(reason),
        Playability::LoginRequired(reason) => ProfileVerdict::LoginRequired(reason),
        Playability::Other(status, reason) => ProfileVerdict::Failed(TranscriptError::unreachable(format!(
            "{what} returned playability {status}: {reason}"
        ))),
    }
}

fn player_request(
    config: &EngineConfig,
    profile: &ClientProfile,
    video_id: &str,
    api_key: &str,
    session: &SessionTokens,
) -> HttpRequest {
    let mut client = serde_json::json!({
        "hl": "en",
        "gl": "US",
        "clientName": profile.client_name,
        "clientVersion": profile.client_version
    });
    if let Some(ref visitor) = session.visitor_data {
        client["visitorData"] = serde_json::json!(visitor);
    }

    let mut body = serde_json::json!({
        "context": { "client": client },
        "videoId": video_id,
        "contentCheckOk": true,
        "racyCheckOk": true
    });
    if profile.embedded {
        body["context"]["thirdParty"] = serde_json::json!({
            "embedUrl": format!("https://www.youtube.com/embed/{video_id}")
        });
    }

    let url = format!("{}?key={api_key}&prettyPrint=false", config.player_url);
    let mut request = HttpRequest::post_json(url, body, config.rpc_timeout)
        .header("User-Agent", config.user_agent.as_str())
        .header("Origin", "https://www.youtube.com")
        .header("Cookie", config.consent_cookie.as_str());
    if let Some(ref visitor) = session.visitor_data {
        request = request.header("X-Goog-Visitor-Id", visitor.as_str());
    }
    request
}
