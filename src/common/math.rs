//! Moving averages and related building blocks shared by the indicators.

/// Simple moving average over the trailing `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let sum: f64 = values[values.len() - period..].iter().sum();
    Some(sum / period as f64)
}

/// Latest EMA value, seeded with the SMA of the first `period` values.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    ema_series(values, period).and_then(|s| s.last().copied())
}

/// Full EMA series, seeded with the SMA of the first `period` values.
///
/// Element `i` of the result corresponds to input index `period - 1 + i`.
pub fn ema_series(values: &[f64], period: usize) -> Option<Vec<f64>> {
    if period == 0 || values.len() < period {
        return None;
    }
    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;
    let mut series = Vec::with_capacity(values.len() - period + 1);
    series.push(seed);
    let mut prev = seed;
    for &value in &values[period..] {
        prev = ema_from_previous(value, prev, period);
        series.push(prev);
    }
    Some(series)
}

/// One EMA step: blend the new value into the previous EMA.
pub fn ema_from_previous(value: f64, prev_ema: f64, period: usize) -> f64 {
    let alpha = 2.0 / (period as f64 + 1.0);
    (value - prev_ema) * alpha + prev_ema
}

/// Population standard deviation over the trailing `period` values.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;
    let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
    Some(variance.sqrt())
}

/// True range of a bar given the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

/// Wilder-smoothed series: seed with the plain sum of the first `period`
/// values, then `s = s - s/period + value`.
///
/// Element `i` of the result corresponds to input index `period - 1 + i`.
pub fn wilder_smooth_sum(values: &[f64], period: usize) -> Option<Vec<f64>> {
    if period == 0 || values.len() < period {
        return None;
    }
    let mut smoothed = Vec::with_capacity(values.len() - period + 1);
    let mut current: f64 = values[..period].iter().sum();
    smoothed.push(current);
    for &value in &values[period..] {
        current = current - current / period as f64 + value;
        smoothed.push(current);
    }
    Some(smoothed)
}

/// Wilder-smoothed average series: seed with the mean of the first `period`
/// values, then `a = (a * (period - 1) + value) / period`.
///
/// Element `i` of the result corresponds to input index `period - 1 + i`.
pub fn wilder_smooth_mean(values: &[f64], period: usize) -> Option<Vec<f64>> {
    if period == 0 || values.len() < period {
        return None;
    }
    let mut smoothed = Vec::with_capacity(values.len() - period + 1);
    let mut current = values[..period].iter().sum::<f64>() / period as f64;
    smoothed.push(current);
    for &value in &values[period..] {
        current = (current * (period as f64 - 1.0) + value) / period as f64;
        smoothed.push(current);
    }
    Some(smoothed)
}
