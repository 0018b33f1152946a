//! Exchange module - per-venue fetching and normalization
//!
//! Selects one source per run via the exchange discriminant and reduces the
//! venue's response to a uniform, renderer-agnostic record shape.

mod median;
pub mod sources;

pub use median::median;

use std::time::Duration;

use crate::config::AppConfig;
use crate::error::Result;
use crate::types::{EpochWindow, Exchange, NormalizedCandle};
use sources::{AscendexClient, BinanceClient, CandleSource, CoingeckoClient, SpotPriceSource};

/// Normalized output of a single exchange query
#[derive(Debug, Clone, PartialEq)]
pub enum ExchangeData {
    /// Time-bounded candles, chronologically ascending
    Candles(Vec<NormalizedCandle>),
    /// A single representative current price
    SpotPrice(f64),
}

/// Fetch and normalize data for one pair from the selected exchange.
///
/// Exactly one request is issued per invocation and awaited to completion;
/// failures propagate to the caller's boundary and are never retried.
pub async fn fetch_exchange_data(
    exchange: Exchange,
    pair: &str,
    windows: &[EpochWindow],
    cfg: &AppConfig,
) -> Result<ExchangeData> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cfg.http.timeout_secs))
        .build()?;

    match exchange {
        Exchange::Ascendex => {
            let source = AscendexClient::new(&cfg.endpoints.ascendex);
            let candles = source.fetch_candles(&client, pair, windows).await?;
            Ok(ExchangeData::Candles(candles))
        }
        Exchange::Binance => {
            let source = BinanceClient::new(&cfg.endpoints.binance);
            let candles = source.fetch_candles(&client, pair, windows).await?;
            Ok(ExchangeData::Candles(candles))
        }
        Exchange::CoingeckoLatest => {
            let source = CoingeckoClient::new(&cfg.endpoints.coingecko);
            let price = source.fetch_spot_price(&client, pair).await?;
            Ok(ExchangeData::SpotPrice(price))
        }
    }
}
