//! Tabular rendering of epoch windows and normalized exchange data
//!
//! The core hands over plain structured records; this module only formats.

use chrono::{TimeZone, Utc};

use crate::exchange::ExchangeData;
use crate::types::{EpochWindow, NormalizedCandle};

/// Render the derived voting windows as a fixed-width table
pub fn print_windows(windows: &[EpochWindow]) {
    println!(
        "{:>8} {:>12} {:>12} {:>20} {:>14} {:>14}",
        "epoch", "time", "end", "end (UTC)", "high", "low"
    );

    for w in windows {
        println!(
            "{:>8} {:>12} {:>12} {:>20} {:>14.6} {:>14.6}",
            w.epoch,
            w.time,
            w.end,
            format_utc(w.end),
            w.high,
            w.low
        );
    }
}

/// Render the normalized output of an exchange query
pub fn print_exchange_data(data: &ExchangeData) {
    match data {
        ExchangeData::Candles(candles) => print_candles(candles),
        ExchangeData::SpotPrice(price) => println!("median USD price: {price}"),
    }
}

fn print_candles(candles: &[NormalizedCandle]) {
    println!(
        "{:>12} {:>12} {:>20} {:>14} {:>14}",
        "start", "end", "start (UTC)", "open", "close"
    );

    for c in candles {
        let end = c.end.map(|e| e.to_string()).unwrap_or_else(|| "-".into());
        println!(
            "{:>12} {:>12} {:>20} {:>14.6} {:>14.6}",
            c.start,
            end,
            format_utc(c.start),
            c.open,
            c.close
        );
    }
}

fn format_utc(secs: i64) -> String {
    Utc.timestamp_opt(secs, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".into())
}
