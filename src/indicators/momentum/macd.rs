//! MACD (Moving Average Convergence Divergence) with crossover detection.

use crate::common::math;
use crate::models::indicators::{Candle, MacdCross, MacdIndicator};

/// MACD line series: EMA(fast) - EMA(slow), aligned so element `i`
/// corresponds to `closes[slow - 1 + i]`.
pub fn macd_series(closes: &[f64], fast: usize, slow: usize) -> Option<Vec<f64>> {
    if fast == 0 || slow <= fast {
        return None;
    }
    let fast_series = math::ema_series(closes, fast)?;
    let slow_series = math::ema_series(closes, slow)?;
    let offset = slow - fast;
    Some(
        slow_series
            .iter()
            .enumerate()
            .map(|(i, slow_ema)| fast_series[i + offset] - slow_ema)
            .collect(),
    )
}

/// Latest MACD line, signal line, histogram, and the crossover state
/// between the two most recent points.
///
/// Needs at least `slow + signal` candles so two signal-line points exist
/// for crossover detection.
pub fn calculate_macd(
    candles: &[Candle],
    fast: usize,
    slow: usize,
    signal: usize,
) -> Option<MacdIndicator> {
    if signal == 0 || candles.len() < slow + signal {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let macd_values = macd_series(&closes, fast, slow)?;
    let signal_values = math::ema_series(&macd_values, signal)?;
    if macd_values.len() < 2 || signal_values.len() < 2 {
        return None;
    }

    let macd_prev = macd_values[macd_values.len() - 2];
    let macd_last = macd_values[macd_values.len() - 1];
    let signal_prev = signal_values[signal_values.len() - 2];
    let signal_last = signal_values[signal_values.len() - 1];

    let cross = if macd_prev <= signal_prev && macd_last > signal_last {
        MacdCross::Bullish
    } else if macd_prev >= signal_prev && macd_last < signal_last {
        MacdCross::Bearish
    } else {
        MacdCross::None
    };

    Some(MacdIndicator {
        macd: macd_last,
        signal: signal_last,
        histogram: macd_last - signal_last,
        cross,
    })
}
