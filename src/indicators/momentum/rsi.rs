//! RSI (Relative Strength Index) with Wilder smoothing.

use crate::models::indicators::{Candle, RsiIndicator};

/// RSI series over a close-price slice.
///
/// Seeded with the simple average of the first `period` gains/losses, then
/// Wilder-smoothed: `avg = (avg * (period - 1) + change) / period`.
/// Element `i` corresponds to `closes[period + i]`; an all-gain window
/// reads 100, an all-loss window 0.
pub fn rsi_series(closes: &[f64], period: usize) -> Option<Vec<f64>> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=period {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            avg_gain += change;
        } else {
            avg_loss += change.abs();
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;

    let mut series = Vec::with_capacity(closes.len() - period);
    series.push(rsi_from_averages(avg_gain, avg_loss));

    for i in (period + 1)..closes.len() {
        let change = closes[i] - closes[i - 1];
        let (gain, loss) = if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, change.abs())
        };
        avg_gain = (avg_gain * (period as f64 - 1.0) + gain) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + loss) / period as f64;
        series.push(rsi_from_averages(avg_gain, avg_loss));
    }

    Some(series)
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            // Flat window: no momentum either way.
            return 50.0;
        }
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Latest RSI value over candle closes.
pub fn calculate_rsi(candles: &[Candle], period: usize) -> Option<RsiIndicator> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let series = rsi_series(&closes, period)?;
    let value = *series.last()?;
    Some(RsiIndicator { value, period })
}
