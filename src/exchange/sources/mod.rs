//! Exchange source implementations (AscendEx, Binance, CoinGecko)

mod ascendex;
mod binance;
mod coingecko;

pub use ascendex::AscendexClient;
pub use binance::BinanceClient;
pub use coingecko::CoingeckoClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{EpochWindow, NormalizedCandle};

/// A venue serving historical candles bounded by the epoch voting windows
#[async_trait]
pub trait CandleSource: Send + Sync {
    /// Get the source name
    fn name(&self) -> &'static str;

    /// Query the span covered by `windows` and normalize the response.
    ///
    /// `windows` is newest-first and must be non-empty; an empty sequence is
    /// reported as a missing-window failure before any request is built.
    async fn fetch_candles(
        &self,
        client: &reqwest::Client,
        pair: &str,
        windows: &[EpochWindow],
    ) -> Result<Vec<NormalizedCandle>>;
}

/// A venue answering "current price", with no window bound
#[async_trait]
pub trait SpotPriceSource: Send + Sync {
    /// Get the source name
    fn name(&self) -> &'static str;

    /// Fetch a single representative current price for the asset
    async fn fetch_spot_price(&self, client: &reqwest::Client, pair: &str) -> Result<f64>;
}
