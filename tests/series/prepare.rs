//! Unit tests for the series preparator

use coinsight::models::indicators::RawTick;
use coinsight::series::{prepare, PrepareError, MIN_RAW_POINTS};

fn tick(timestamp: i64, close: f64, volume: Option<f64>) -> RawTick {
    RawTick {
        timestamp,
        open: close,
        high: close + 0.5,
        low: close - 0.5,
        close,
        volume,
    }
}

#[test]
fn test_sorts_ascending() {
    let raw = vec![
        tick(3_000_000_000_000, 3.0, Some(10.0)),
        tick(1_000_000_000_000, 1.0, Some(10.0)),
        tick(2_000_000_000_000, 2.0, Some(10.0)),
    ];
    let candles = prepare(&raw, 2).unwrap();
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    assert_eq!(closes, vec![1.0, 2.0, 3.0]);
    assert!(candles.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
}

#[test]
fn test_duplicate_timestamps_keep_last() {
    let raw = vec![
        tick(1_000_000_000_000, 1.0, Some(10.0)),
        tick(2_000_000_000_000, 2.0, Some(10.0)),
        tick(1_000_000_000_000, 9.0, Some(10.0)),
    ];
    let candles = prepare(&raw, 2).unwrap();
    assert_eq!(candles.len(), 2);
    assert_eq!(candles[0].close, 9.0);
}

#[test]
fn test_second_timestamps_normalized_to_millis() {
    // Same instant, one in seconds and one in milliseconds; the second
    // row wins as a duplicate.
    let raw = vec![
        tick(1_700_000_000, 1.0, Some(10.0)),
        tick(1_700_000_000_000, 2.0, Some(10.0)),
        tick(1_700_000_060, 3.0, Some(10.0)),
    ];
    let candles = prepare(&raw, 2).unwrap();
    assert_eq!(candles.len(), 2);
    assert_eq!(candles[0].close, 2.0);
    assert_eq!(candles[1].close, 3.0);
}

#[test]
fn test_drops_invalid_rows() {
    let mut bad_price = tick(2_000_000_000_000, 2.0, Some(10.0));
    bad_price.low = -1.0;
    let raw = vec![
        tick(1_000_000_000_000, 1.0, Some(10.0)),
        bad_price,
        tick(3_000_000_000_000, f64::NAN, Some(10.0)),
        tick(4_000_000_000_000, 4.0, Some(-5.0)),
        tick(5_000_000_000_000, 5.0, Some(10.0)),
    ];
    let candles = prepare(&raw, 2).unwrap();
    assert_eq!(candles.len(), 2);
    assert_eq!(candles[0].close, 1.0);
    assert_eq!(candles[1].close, 5.0);
}

#[test]
fn test_partial_volume_stripped_uniformly() {
    let raw = vec![
        tick(1_000_000_000_000, 1.0, Some(10.0)),
        tick(2_000_000_000_000, 2.0, None),
        tick(3_000_000_000_000, 3.0, Some(10.0)),
    ];
    let candles = prepare(&raw, 2).unwrap();
    assert!(candles.iter().all(|c| c.volume.is_none()));
}

#[test]
fn test_full_volume_preserved() {
    let raw = vec![
        tick(1_000_000_000_000, 1.0, Some(10.0)),
        tick(2_000_000_000_000, 2.0, Some(20.0)),
    ];
    let candles = prepare(&raw, 2).unwrap();
    assert_eq!(candles[0].volume, Some(10.0));
    assert_eq!(candles[1].volume, Some(20.0));
}

#[test]
fn test_insufficient_data_after_cleaning() {
    let raw = vec![
        tick(1_000_000_000_000, 1.0, None),
        tick(1_000_000_000_000, 2.0, None),
    ];
    let err = prepare(&raw, 2).unwrap_err();
    assert_eq!(
        err,
        PrepareError::InsufficientData {
            required: 2,
            got: 1
        }
    );
}

#[test]
fn test_min_len_floor() {
    let raw = vec![tick(1_000_000_000_000, 1.0, None)];
    // Caller asking for less than the absolute floor still gets the floor.
    let err = prepare(&raw, 0).unwrap_err();
    assert_eq!(
        err,
        PrepareError::InsufficientData {
            required: MIN_RAW_POINTS,
            got: 1
        }
    );
}

#[test]
fn test_caller_specified_minimum() {
    let raw: Vec<RawTick> = (0..10)
        .map(|i| tick(1_000_000_000_000 + i * 60_000, 1.0 + i as f64, None))
        .collect();
    assert!(prepare(&raw, 10).is_ok());
    assert!(matches!(
        prepare(&raw, 11),
        Err(PrepareError::InsufficientData {
            required: 11,
            got: 10
        })
    ));
}
