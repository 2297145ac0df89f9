//! Volume spike: latest volume against its trailing rolling mean.

use crate::common::math;
use crate::models::indicators::{Candle, VolumeSpikeIndicator};

/// Latest volume as a percentage of the mean over the `window` candles
/// preceding it (the latest candle is excluded from the mean).
///
/// `None` when volume is absent anywhere in the series, the series is
/// shorter than `window + 1`, or the rolling mean is zero.
pub fn calculate_volume_spike(candles: &[Candle], window: usize) -> Option<VolumeSpikeIndicator> {
    if window == 0 || candles.len() < window + 1 {
        return None;
    }

    let volumes: Option<Vec<f64>> = candles.iter().map(|c| c.volume).collect();
    let volumes = volumes?;

    let latest = *volumes.last()?;
    let average = math::sma(&volumes[..volumes.len() - 1], window)?;
    if average <= 0.0 {
        return None;
    }

    Some(VolumeSpikeIndicator {
        ratio_pct: latest / average * 100.0,
        window,
    })
}
