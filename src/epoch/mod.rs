//! Epoch dataset loading and voting-window derivation
//!
//! The dataset file is a JSON object exposing a `data` array of epoch
//! records, newest-first. Only the leading records are consumed.

use std::path::Path;

use serde::Deserialize;

use crate::config::EpochConfig;
use crate::error::{AppError, Result};
use crate::types::{EpochRecord, EpochWindow};

#[derive(Debug, Default, Deserialize)]
struct EpochDataset {
    #[serde(default)]
    data: Vec<EpochRecord>,
}

/// Load and validate an epoch dataset file.
///
/// A missing `data` key is an empty dataset; a record with missing or
/// mistyped fields is a malformed dataset, not a silent zero.
pub fn load_dataset(path: &Path) -> Result<Vec<EpochRecord>> {
    let raw = std::fs::read_to_string(path)?;
    let dataset: EpochDataset =
        serde_json::from_str(&raw).map_err(|e| AppError::MalformedDataset {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    Ok(dataset.data)
}

/// Derive the voting windows for the most recent epochs.
///
/// Each window starts `voting_window_secs` before the epoch close, shifted
/// by the operator-supplied correction offset. Input order is preserved
/// (newest-first) and at most `max_windows` records are consumed.
pub fn build_windows(
    records: &[EpochRecord],
    offset_secs: i64,
    cfg: &EpochConfig,
) -> Vec<EpochWindow> {
    records
        .iter()
        .take(cfg.max_windows)
        .map(|r| EpochWindow {
            epoch: r.epoch_id,
            time: r.end_time - cfg.voting_window_secs + offset_secs,
            end: r.end_time,
            high: r.high_rewarded_price,
            low: r.low_rewarded_price,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epoch_cfg() -> EpochConfig {
        EpochConfig {
            voting_window_secs: 180,
            max_windows: 5,
        }
    }

    fn make_record(epoch_id: i64, end_time: i64) -> EpochRecord {
        EpochRecord {
            epoch_id,
            end_time,
            high_rewarded_price: 10.5,
            low_rewarded_price: 9.5,
        }
    }

    #[test]
    fn test_window_arithmetic() {
        let records = vec![make_record(42, 1_700_000_000)];
        let windows = build_windows(&records, 10, &epoch_cfg());

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].epoch, 42);
        assert_eq!(windows[0].time, 1_700_000_000 - 180 + 10);
        assert_eq!(windows[0].end, 1_700_000_000);
        assert_eq!(windows[0].high, 10.5);
        assert_eq!(windows[0].low, 9.5);
    }

    #[test]
    fn test_window_zero_offset() {
        let records = vec![make_record(1, 1_000)];
        let windows = build_windows(&records, 0, &epoch_cfg());
        assert_eq!(windows[0].time, 820);
    }

    #[test]
    fn test_window_negative_offset() {
        let records = vec![make_record(1, 1_000)];
        let windows = build_windows(&records, -30, &epoch_cfg());
        assert_eq!(windows[0].time, 790);
    }

    #[test]
    fn test_truncates_to_max_windows() {
        let records: Vec<EpochRecord> = (0..8)
            .map(|i| make_record(100 - i, 1_700_000_000 - i * 3600))
            .collect();
        let windows = build_windows(&records, 0, &epoch_cfg());

        assert_eq!(windows.len(), 5);
        // Newest-first input order is preserved
        assert_eq!(windows[0].epoch, 100);
        assert_eq!(windows[4].epoch, 96);
        assert!(windows.windows(2).all(|w| w[0].end > w[1].end));
    }

    #[test]
    fn test_empty_input_yields_empty_windows() {
        let windows = build_windows(&[], 10, &epoch_cfg());
        assert!(windows.is_empty());
    }

    #[test]
    fn test_load_dataset_missing_data_key() {
        let path = std::env::temp_dir().join("epochwatch_empty_dataset.json");
        std::fs::write(&path, "{}").unwrap();
        let records = load_dataset(&path).unwrap();
        assert!(records.is_empty());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_dataset_malformed() {
        let path = std::env::temp_dir().join("epochwatch_malformed_dataset.json");
        std::fs::write(&path, r#"{"data": [{"epochId": "not-a-number"}]}"#).unwrap();
        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, AppError::MalformedDataset { .. }));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_dataset_valid() {
        let path = std::env::temp_dir().join("epochwatch_valid_dataset.json");
        std::fs::write(
            &path,
            r#"{"data": [{"epochId": 7, "endTime": 1700000000, "highRewardedPrice": 1.25, "lowRewardedPrice": 1.20}]}"#,
        )
        .unwrap();
        let records = load_dataset(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].epoch_id, 7);
        assert_eq!(records[0].end_time, 1_700_000_000);
        std::fs::remove_file(&path).ok();
    }
}
