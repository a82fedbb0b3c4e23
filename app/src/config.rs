use connectors::coinlore::{COINLORE_TICKERS_URL, DEFAULT_TIMEOUT};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upstream tickers endpoint
    pub tickers_url: String,
    /// Timeout applied to the ticker fetch
    pub fetch_timeout: Duration,
    /// Where the theme preference file lives
    pub prefs_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tickers_url: COINLORE_TICKERS_URL.to_string(),
            fetch_timeout: DEFAULT_TIMEOUT,
            prefs_path: PathBuf::from("prefs.json"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let tickers_url =
            std::env::var("TICKERS_URL").unwrap_or(defaults.tickers_url);
        let fetch_timeout = std::env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.fetch_timeout);
        let prefs_path = std::env::var("PREFS_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.prefs_path);

        Self {
            tickers_url,
            fetch_timeout,
            prefs_path,
        }
    }
}
