//! EMA trend: latest close against its own exponential moving average.

use crate::common::math;
use crate::models::indicators::{Candle, EmaTrendIndicator, TrendPosition};

/// Whether the latest close sits above or below the `period`-EMA of close.
/// A close exactly on the line counts as below.
pub fn calculate_ema_trend(candles: &[Candle], period: usize) -> Option<EmaTrendIndicator> {
    if candles.len() < period {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let ema = math::ema(&closes, period)?;
    let close = *closes.last()?;

    let position = if close > ema {
        TrendPosition::Above
    } else {
        TrendPosition::Below
    };

    Some(EmaTrendIndicator {
        ema,
        close,
        period,
        position,
    })
}
