//! Binance klines source
//!
//! Queries the public REST klines endpoint across the full span covered by
//! the known epoch windows and normalizes the fixed-width tuple rows.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::exchange::sources::CandleSource;
use crate::types::{EpochWindow, NormalizedCandle};

#[derive(Debug, Clone)]
pub struct BinanceClient {
    base_url: String,
}

impl BinanceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Normalize kline rows into candles, restoring chronological order.
    ///
    /// Rows are fixed-width tuples:
    /// [open_time, open, high, low, close, volume, close_time, ...]
    /// with millisecond timestamps and string prices. Rows too short to
    /// carry a close time are skipped.
    pub fn normalize(rows: Vec<Vec<Value>>) -> Vec<NormalizedCandle> {
        let mut candles: Vec<NormalizedCandle> = rows
            .into_iter()
            .filter_map(|row| {
                if row.len() < 7 {
                    return None;
                }

                let open_time = row[0].as_i64()?;
                let open: f64 = row[1].as_str()?.parse().ok()?;
                let close: f64 = row[4].as_str()?.parse().ok()?;
                let close_time = row[6].as_i64()?;

                Some(NormalizedCandle {
                    start: open_time / 1000,
                    end: Some(close_time / 1000),
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
impl CandleSource for BinanceClient {
    fn name(&self) -> &'static str {
        "binance"
    }

    async fn fetch_candles(
        &self,
        client: &reqwest::Client,
        pair: &str,
        windows: &[EpochWindow],
    ) -> Result<Vec<NormalizedCandle>> {
        let newest = windows.first().ok_or(AppError::MissingEpochWindow)?;
        let oldest = windows.last().ok_or(AppError::MissingEpochWindow)?;

        let url = format!(
            "{}&symbol={}&endTime={}&startTime={}",
            self.base_url,
            pair,
            newest.time * 1000,
            oldest.time * 1000
        );

        tracing::info!(
            source = %"binance",
            pair = %pair,
            url = %url.split('?').next().unwrap_or(url.as_str()),
            "Fetching candles..."
        );

        let rows: Vec<Vec<Value>> = client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(Self::normalize(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_fixed_tuples() {
        // Native order is newest-first; normalization restores ascending time
        let rows = vec![
            vec![
                json!(2_000_000),
                json!("11"),
                json!(""),
                json!(""),
                json!("41"),
                json!(""),
                json!(8_000_000),
            ],
            vec![
                json!(1_000_000),
                json!("10"),
                json!(""),
                json!(""),
                json!("40"),
                json!(""),
                json!(7_000_000),
            ],
        ];

        let candles = BinanceClient::normalize(rows);

        assert_eq!(
            candles,
            vec![
                NormalizedCandle {
                    start: 1_000,
                    end: Some(7_000),
                    open: 10.0,
                    close: 40.0,
                },
                NormalizedCandle {
                    start: 2_000,
                    end: Some(8_000),
                    open: 11.0,
                    close: 41.0,
                },
            ]
        );
    }

    #[test]
    fn test_normalize_close_time_floors() {
        let rows = vec![vec![
            json!(60_000),
            json!("1.5"),
            json!(""),
            json!(""),
            json!("1.6"),
            json!(""),
            json!(119_999),
        ]];

        let candles = BinanceClient::normalize(rows);
        assert_eq!(candles[0].start, 60);
        assert_eq!(candles[0].end, Some(119));
    }

    #[test]
    fn test_normalize_ascending_after_single_reversal() {
        let rows: Vec<Vec<Value>> = (0..5)
            .rev()
            .map(|i| {
                vec![
                    json!(i * 60_000),
                    json!("1"),
                    json!(""),
                    json!(""),
                    json!("2"),
                    json!(""),
                    json!(i * 60_000 + 59_999),
                ]
            })
            .collect();

        let candles = BinanceClient::normalize(rows);
        assert_eq!(candles.len(), 5);
        assert!(candles.windows(2).all(|c| c[0].start < c[1].start));
    }

    #[test]
    fn test_normalize_skips_short_rows() {
        let rows = vec![
            vec![json!(1_000)],
            vec![
                json!(60_000),
                json!("1"),
                json!(""),
                json!(""),
                json!("2"),
                json!(""),
                json!(119_999),
            ],
        ];

        let candles = BinanceClient::normalize(rows);
        assert_eq!(candles.len(), 1);
    }

    #[test]
    fn test_normalize_skips_unparsable_prices() {
        let rows = vec![vec![
            json!(60_000),
            json!("not-a-price"),
            json!(""),
            json!(""),
            json!("2"),
            json!(""),
            json!(119_999),
        ]];

        assert!(BinanceClient::normalize(rows).is_empty());
    }

    #[tokio::test]
    async fn test_fetch_without_windows_fails() {
        let client = reqwest::Client::new();
        let source = BinanceClient::new("https://api.binance.com/api/v3/klines?interval=1m");

        let err = source
            .fetch_candles(&client, "BTCUSDC", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingEpochWindow));
    }
}
