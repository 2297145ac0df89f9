//! Stochastic RSI: a stochastic oscillator applied to the RSI series.

use crate::common::math;
use crate::indicators::momentum::rsi::rsi_series;
use crate::models::indicators::{Candle, StochRsiCross, StochRsiIndicator};

/// %K threshold for the oversold bullish cross.
pub const OVERSOLD_LINE: f64 = 0.2;

/// Latest smoothed %K with crossover state against the 0.20 line.
///
/// StochRSI = (RSI - min RSI) / (max RSI - min RSI) over a `window`-value
/// RSI lookback; %K is the `smooth`-period SMA of that. The cross is
/// bullish when %K moved from below to above 0.20 between the two most
/// recent points. A flat RSI window (max == min) degrades to `None`.
pub fn calculate_stoch_rsi(
    candles: &[Candle],
    rsi_period: usize,
    window: usize,
    smooth: usize,
) -> Option<StochRsiIndicator> {
    if window == 0 || smooth == 0 {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let rsi_values = rsi_series(&closes, rsi_period)?;
    if rsi_values.len() < window + smooth {
        return None;
    }

    let mut stoch = Vec::with_capacity(rsi_values.len() - window + 1);
    for i in (window - 1)..rsi_values.len() {
        let lookback = &rsi_values[i + 1 - window..=i];
        let min = lookback.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = lookback.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        if max == min {
            return None;
        }
        stoch.push((rsi_values[i] - min) / (max - min));
    }
    if stoch.len() < smooth + 1 {
        return None;
    }

    let k = math::sma(&stoch, smooth)?;
    let prev_k = math::sma(&stoch[..stoch.len() - 1], smooth)?;

    let cross = if prev_k < OVERSOLD_LINE && k > OVERSOLD_LINE {
        StochRsiCross::Bullish
    } else {
        StochRsiCross::None
    };

    Some(StochRsiIndicator { k, prev_k, cross })
}
