//! CoinGecko ticker-list source
//!
//! Answers "current price" rather than a historical window: fetches the
//! live ticker list for an asset, keeps USD-quoted venues and reduces
//! their last prices to a median.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::exchange::median;
use crate::exchange::sources::SpotPriceSource;

#[derive(Debug, Deserialize)]
struct TickersResponse {
    #[serde(default)]
    tickers: Vec<Ticker>,
}

#[derive(Debug, Deserialize)]
struct Ticker {
    /// Quote-target currency symbol (e.g. "USDT", "EUR")
    target: String,
    /// Last traded price in the target currency
    last: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct CoingeckoClient {
    base_url: String,
}

impl CoingeckoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Keep last prices of tickers quoted against a USD-family currency
    fn usd_prices(tickers: Vec<Ticker>) -> Vec<f64> {
        tickers
            .into_iter()
            .filter(|t| t.target.contains("USD"))
            .filter_map(|t| t.last)
            .collect()
    }
}

#[async_trait]
impl SpotPriceSource for CoingeckoClient {
    fn name(&self) -> &'static str {
        "coingecko-latest"
    }

    async fn fetch_spot_price(&self, client: &reqwest::Client, pair: &str) -> Result<f64> {
        let url = format!("{}/{}/tickers", self.base_url, pair);

        tracing::info!(
            source = %"coingecko-latest",
            asset = %pair,
            url = %url,
            "Fetching tickers..."
        );

        let body: TickersResponse = client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let prices = Self::usd_prices(body.tickers);
        median(&prices).ok_or(AppError::NoEligibleTickers)
    }
}
