use log::{debug, warn};

use crate::config::EngineConfig;
use crate::error::TranscriptError;
use crate::http::{HttpRequest, Transport};

/// Fetch the public watch page HTML with a browser identity and consent cookie
pub async fn fetch_watch_page(
    transport: &dyn Transport,
    config: &EngineConfig,
    video_id: &str,
) -> Result<String, TranscriptError> {
    let url = watch_page_url(config, video_id);
    debug!("Fetching watch page: {url}");

    let request = HttpRequest::get(url, config.page_timeout)
        .header("User-Agent", config.user_agent.as_str())
        .header("Accept-Language", config.accept_language.as_str())
        .header("Cookie", config.consent_cookie.as_str());

    let resp = transport
        .send(request)
        .await
        .map_err(|e| e.into_reason("watch page"))?;

    if !resp.is_success() {
        return Err(TranscriptError::from_status(resp.status, "watch page"));
    }

    check_walls(&resp.body)?;
    Ok(resp.body)
}

fn watch_page_url(config: &EngineConfig, video_id: &str) -> String {
    format!(
        "{}?v={video_id}&hl=en&bpctr=9999999999&has_verified=1",
        config.watch_url
    )
}

/// A 200 page can still be a bot check or consent interstitial
fn check_walls(html: &str) -> Result<(), TranscriptError> {
    if html.contains("g-recaptcha") || html.contains("unusual traffic from your computer network") {
        warn!("Watch page is an anti-automation challenge");
        return Err(TranscriptError::rate_limited(
            "YouTube is challenging requests from this network (captcha).",
        ));
    }
    if html.contains("action=\"https://consent.youtube.com/s\"") {
        warn!("Watch page is a consent interstitial");
        return Err(TranscriptError::unreachable("YouTube returned a consent page instead of the video."));
    }
    Ok(())
}
