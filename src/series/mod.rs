//! Series preparator: raw ticks in, a clean ascending candle series out.

use std::collections::BTreeMap;

use chrono::DateTime;
use thiserror::Error;

use crate::models::indicators::{Candle, RawTick};

/// Absolute floor on usable candles; below this no evaluation is possible.
pub const MIN_RAW_POINTS: usize = 2;

/// Timestamps below this are interpreted as seconds and scaled up.
const MS_THRESHOLD: i64 = 100_000_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrepareError {
    #[error("insufficient data: {got} usable candles, need at least {required}")]
    InsufficientData { required: usize, got: usize },
}

/// Clean a raw tick list into an evaluation-ready series.
///
/// - second-precision timestamps are normalized to milliseconds;
/// - rows with non-finite or non-positive prices, negative or non-finite
///   volume, or unrepresentable timestamps are dropped;
/// - the result is sorted ascending with duplicate timestamps resolved by
///   keeping the last occurrence in input order;
/// - if any surviving candle lacks volume, volume is stripped from the
///   whole series so absence is uniform.
///
/// Fails only with [`PrepareError::InsufficientData`] when fewer than
/// `max(min_len, MIN_RAW_POINTS)` candles survive cleaning.
pub fn prepare(raw: &[RawTick], min_len: usize) -> Result<Vec<Candle>, PrepareError> {
    let mut by_timestamp: BTreeMap<i64, Candle> = BTreeMap::new();

    for tick in raw {
        if !is_usable(tick) {
            continue;
        }
        let millis = if tick.timestamp < MS_THRESHOLD {
            tick.timestamp.saturating_mul(1000)
        } else {
            tick.timestamp
        };
        let Some(timestamp) = DateTime::from_timestamp_millis(millis) else {
            continue;
        };
        let candle = Candle::new(
            tick.open,
            tick.high,
            tick.low,
            tick.close,
            tick.volume,
            timestamp,
        );
        // Last occurrence wins on duplicate timestamps.
        by_timestamp.insert(millis, candle);
    }

    let mut candles: Vec<Candle> = by_timestamp.into_values().collect();

    if candles.iter().any(|c| c.volume.is_none()) {
        for candle in &mut candles {
            candle.volume = None;
        }
    }

    let required = min_len.max(MIN_RAW_POINTS);
    if candles.len() < required {
        return Err(PrepareError::InsufficientData {
            required,
            got: candles.len(),
        });
    }

    Ok(candles)
}

fn is_usable(tick: &RawTick) -> bool {
    let prices = [tick.open, tick.high, tick.low, tick.close];
    if prices.iter().any(|p| !p.is_finite() || *p <= 0.0) {
        return false;
    }
    match tick.volume {
        Some(v) if !v.is_finite() || v < 0.0 => false,
        _ => true,
    }
}
