//! AscendEx bar-history source
//!
//! Queries the public bar-history endpoint bounded above by the newest
//! epoch window and normalizes the wrapped bar records.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::exchange::sources::CandleSource;
use crate::types::{EpochWindow, NormalizedCandle};

#[derive(Debug, Deserialize)]
struct BarhistResponse {
    data: Option<Vec<BarEnvelope>>,
}

#[derive(Debug, Deserialize)]
struct BarEnvelope {
    data: Bar,
}

#[derive(Debug, Deserialize)]
struct Bar {
    /// Bar timestamp in milliseconds
    ts: i64,
    /// Open price, quoted as a string
    o: String,
    /// Close price, quoted as a string
    c: String,
}

#[derive(Debug, Clone)]
pub struct AscendexClient {
    base_url: String,
}

impl AscendexClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Normalize wrapped bars into candles, restoring chronological order.
    ///
    /// Each bar carries a single millisecond timestamp; bars with
    /// unparsable prices are skipped.
    fn normalize(bars: Vec<BarEnvelope>) -> Vec<NormalizedCandle> {
        let mut candles: Vec<NormalizedCandle> = bars
            .into_iter()
            .filter_map(|b| {
                let open: f64 = b.data.o.parse().ok()?;
                let close: f64 = b.data.c.parse().ok()?;
                Some(NormalizedCandle {
                    start: b.data.ts / 1000,
                    end: None,
                    open,
                    close,
                })
            })
            .collect();

        candles.reverse();
        candles
    }
}

#[async_trait]
impl CandleSource for AscendexClient {
    fn name(&self) -> &'static str {
        "ascendex"
    }

    async fn fetch_candles(
        &self,
        client: &reqwest::Client,
        pair: &str,
        windows: &[EpochWindow],
    ) -> Result<Vec<NormalizedCandle>> {
        let newest = windows.first().ok_or(AppError::MissingEpochWindow)?;

        let url = format!(
            "{}&symbol={}&to={}",
            self.base_url,
            pair,
            newest.time * 1000
        );

        tracing::info!(
            source = %"ascendex",
            pair = %pair,
            url = %url.split('?').next().unwrap_or(url.as_str()),
            "Fetching candles..."
        );

        let body: BarhistResponse = client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let bars = body.data.ok_or(AppError::EmptyUpstreamResponse {
            exchange: "ascendex",
        })?;

        Ok(Self::normalize(bars))
    }
}
