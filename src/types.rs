//! Core types used throughout EpochWatch
//!
//! Defines the exchange discriminant and the epoch/candle value records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported exchanges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exchange {
    Ascendex,
    Binance,
    CoingeckoLatest,
}

impl Exchange {
    /// Parse from the CLI discriminant string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ascendex" => Some(Exchange::Ascendex),
            "binance" => Some(Exchange::Binance),
            "coingecko-latest" => Some(Exchange::CoingeckoLatest),
            _ => None,
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exchange::Ascendex => write!(f, "ascendex"),
            Exchange::Binance => write!(f, "binance"),
            Exchange::CoingeckoLatest => write!(f, "coingecko-latest"),
        }
    }
}

/// One epoch as recorded by the upstream reward tracker.
///
/// Supplied newest-first in the dataset file; only the leading records are
/// consumed when deriving windows.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpochRecord {
    pub epoch_id: i64,
    /// Epoch close time in unix seconds
    pub end_time: i64,
    pub high_rewarded_price: f64,
    pub low_rewarded_price: f64,
}

/// The voting window derived from one epoch record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EpochWindow {
    pub epoch: i64,
    /// Start of the voting period in unix seconds
    /// (epoch close minus the voting-window length, shifted by the operator offset)
    pub time: i64,
    /// Epoch close time in unix seconds
    pub end: i64,
    pub high: f64,
    pub low: f64,
}

/// A candle-like record normalized from an exchange response
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedCandle {
    /// Candle open time in unix seconds
    pub start: i64,
    /// Candle close time in unix seconds.
    /// AscendEx bars carry a single timestamp, so no close bound.
    pub end: Option<i64>,
    pub open: f64,
    pub close: f64,
}
