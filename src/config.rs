use std::path::PathBuf;
use std::time::Duration;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::TranscriptSource;
use crate::innertube::{ClientProfile, DEFAULT_PROFILES};

pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/133.0.0.0 Safari/537.36";

/// Pre-accepted consent so EU-routed requests skip the interstitial
pub const CONSENT_COOKIE: &str = "CONSENT=PENDING+999; SOCS=CAESEwgDEgk2NjU1NjU2NTcaAmVuIAEaBgiA_LyuBg";

const WATCH_URL: &str = "https://www.youtube.com/watch";
const PLAYER_URL: &str = "https://www.youtube.com/youtubei/v1/player";

/// External transcript provider used as the last strategy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FallbackConfig {
    pub endpoint: String,
    /// Environment variable holding the provider's bearer token
    pub api_key_env: Option<String>,
}

/// Static settings for one engine instance. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub watch_url: String,
    pub player_url: String,
    pub user_agent: String,
    pub accept_language: String,
    pub consent_cookie: String,
    pub page_timeout: Duration,
    pub rpc_timeout: Duration,
    pub caption_timeout: Duration,
    pub fallback_timeout: Duration,
    pub client_profiles: Vec<ClientProfile>,
    pub strategies: Vec<TranscriptSource>,
    pub fallback: Option<FallbackConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            watch_url: WATCH_URL.to_string(),
            player_url: PLAYER_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
            consent_cookie: CONSENT_COOKIE.to_string(),
            page_timeout: Duration::from_secs(8),
            rpc_timeout: Duration::from_secs(10),
            caption_timeout: Duration::from_secs(10),
            fallback_timeout: Duration::from_secs(15),
            client_profiles: DEFAULT_PROFILES.to_vec(),
            strategies: vec![
                TranscriptSource::WatchPage,
                TranscriptSource::InnerTube,
                TranscriptSource::Fallback,
            ],
            fallback: None,
        }
    }
}

/// User config file contents
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub default_lang: Option<String>,
    pub default_format: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
    pub strategies: Option<Vec<TranscriptSource>>,
    pub fallback: Option<FallbackConfig>,
}

impl Config {
    /// Load config from ~/.config/captx/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    /// Build the engine settings, applying any overrides from the file
    pub fn engine_config(&self) -> EngineConfig {
        let mut engine = EngineConfig::default();
        if let Some(ref ua) = self.user_agent {
            engine.user_agent = ua.clone();
        }
        if let Some(secs) = self.timeout_secs {
            let timeout = Duration::from_secs(secs);
            engine.page_timeout = timeout;
            engine.rpc_timeout = timeout;
            engine.caption_timeout = timeout;
            engine.fallback_timeout = timeout;
        }
        if let Some(ref strategies) = self.strategies {
            engine.strategies = strategies.clone();
        }
        engine.fallback = self.fallback.clone();
        engine
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("captx")
        .join("config.toml")
}
