//! Bollinger Bands and band width.
//!
//! Middle band = SMA(period); upper/lower = middle ± std_dev * σ.

use crate::common::math;
use crate::models::indicators::{BollingerIndicator, Candle};

pub fn calculate_bollinger(
    candles: &[Candle],
    period: usize,
    std_dev: f64,
) -> Option<BollingerIndicator> {
    if candles.len() < period {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let middle = math::sma(&closes, period)?;
    let sigma = math::standard_deviation(&closes, period)?;

    let upper = middle + std_dev * sigma;
    let lower = middle - std_dev * sigma;

    Some(BollingerIndicator {
        upper,
        middle,
        lower,
        width: upper - lower,
        period,
        std_dev,
    })
}
