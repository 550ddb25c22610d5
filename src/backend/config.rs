#![cfg(feature = "server")]
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Duration;

/// Resolved once at boot (see `main`) and handed to the data-fetch layer;
/// nothing reads the environment after startup.
pub static GLOBAL_CONFIG: OnceCell<Arc<NasaConfig>> = OnceCell::new();

pub const DEFAULT_API_KEY: &str = "DEMO_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct NasaConfig {
    pub api_key: String,
    pub base_url: String,
    /// false = serve the canned fallback payloads without touching the network.
    pub live_upstream: bool,
    pub upstream_timeout: Duration,
}

impl NasaConfig {
    pub fn from_env() -> Self {
        use std::env;
        let api_key = env::var("NASA_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
        let live_upstream = parse_live_flag(env::var("USE_REAL_NASA_API").ok().as_deref());
        let upstream_timeout = env::var("NASA_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS));
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            live_upstream,
            upstream_timeout,
        }
    }

    /// Mock-mode config for tests; never reaches the network.
    pub fn mock() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            live_upstream: false,
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }
}

fn parse_live_flag(value: Option<&str>) -> bool {
    matches!(value, Some("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_flag_requires_the_literal_true() {
        assert!(parse_live_flag(Some("true")));
        assert!(!parse_live_flag(Some("TRUE")));
        assert!(!parse_live_flag(Some("1")));
        assert!(!parse_live_flag(Some("")));
        assert!(!parse_live_flag(None));
    }

    #[test]
    fn mock_config_defaults() {
        let cfg = NasaConfig::mock();
        assert!(!cfg.live_upstream);
        assert_eq!(cfg.api_key, DEFAULT_API_KEY);
        assert_eq!(cfg.upstream_timeout, Duration::from_secs(10));
    }
}
