use log::debug;
use regex::Regex;

/// Ephemeral tokens scraped from the watch page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionTokens {
    pub api_key: Option<String>,
    pub visitor_data: Option<String>,
}

impl SessionTokens {
    pub fn discover(html: &str) -> Self {
        let tokens = Self {
            api_key: extract_api_key(html),
            visitor_data: extract_visitor_data(html),
        };
        debug!(
            "Session discovery: api_key={} visitor_data={}",
            tokens.api_key.is_some(),
            tokens.visitor_data.is_some()
        );
        tokens
    }
}

fn extract_api_key(html: &str) -> Option<String> {
    first_capture(
        html,
        &[
            r#""INNERTUBE_API_KEY"\s*:\s*"([^"]+)""#,
            // older page layout
            r#"innertubeApiKey\s*[=:]\s*"([^"]+)""#,
        ],
    )
}

fn extract_visitor_data(html: &str) -> Option<String> {
    first_capture(
        html,
        &[r#""VISITOR_DATA"\s*:\s*"([^"]+)""#, r#""visitorData"\s*:\s*"([^"]+)""#],
    )
}

fn first_capture(html: &str, patterns: &[&str]) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        Regex::new(pattern)
            .ok()?
            .captures(html)
            .map(|caps| caps[1].to_string())
    })
}
