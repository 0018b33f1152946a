//! Configuration management for EpochWatch
//!
//! Loads defaults, an optional config file and environment overrides via .env

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub endpoints: EndpointsConfig,
    pub epoch: EpochConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointsConfig {
    /// AscendEx bar-history base URL (carries its own query string; `&symbol=`/`&to=` are appended)
    pub ascendex: String,
    /// Binance klines base URL (carries its own query string; `&symbol=`/`&endTime=`/`&startTime=` are appended)
    pub binance: String,
    /// CoinGecko coins base URL (`/<id>/tickers` is appended)
    pub coingecko: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EpochConfig {
    /// Length of the voting period preceding epoch close, in seconds
    pub voting_window_secs: i64,
    /// Maximum number of epoch records consumed from the dataset
    pub max_windows: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from defaults, file and environment
    pub fn load() -> Result<Self> {
        // Load .env file first
        dotenvy::dotenv().ok();

        let config = Config::builder()
            // Endpoint defaults
            .set_default(
                "endpoints.ascendex",
                "https://ascendex.com/api/pro/v1/barhist?interval=1&n=10",
            )?
            .set_default(
                "endpoints.binance",
                "https://api.binance.com/api/v3/klines?interval=1m",
            )?
            .set_default("endpoints.coingecko", "https://api.coingecko.com/api/v3/coins")?
            // Epoch window defaults
            .set_default("epoch.voting_window_secs", 180)?
            .set_default("epoch.max_windows", 5)?
            // HTTP defaults
            .set_default("http.timeout_secs", 30)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            // Override with environment variables (EPOCHWATCH_*)
            .add_source(Environment::with_prefix("EPOCHWATCH").separator("__"))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Generate a digest of the config for startup logging
    pub fn digest(&self) -> String {
        format!(
            "voting_window={}s max_windows={} timeout={}s",
            self.epoch.voting_window_secs, self.epoch.max_windows, self.http.timeout_secs
        )
    }
}

impl std::fmt::Display for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digest())
    }
}
