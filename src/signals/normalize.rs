//! Subscore normalization: raw indicator values onto a common [0, 100]
//! bullishness scale.
//!
//! One fixed monotonic rule per indicator; `None` in means `None` out,
//! never zero.

use crate::models::indicators::{
    IndicatorSet, MacdCross, StochRsiCross, TrendPosition,
};
use crate::models::signal::ScoreBreakdown;

/// Lower RSI (oversold) scores higher: 70 -> 0, 30 -> 100, clamped.
pub fn score_rsi(rsi: f64) -> f64 {
    ((70.0 - rsi) * 2.5).clamp(0.0, 100.0)
}

/// Fresh bullish crossover is the only strong MACD reading.
pub fn score_macd(cross: MacdCross) -> f64 {
    match cross {
        MacdCross::Bullish => 100.0,
        MacdCross::Bearish | MacdCross::None => 30.0,
    }
}

pub fn score_ema_trend(position: TrendPosition) -> f64 {
    match position {
        TrendPosition::Above => 100.0,
        TrendPosition::Below => 30.0,
    }
}

pub fn score_stoch_rsi(cross: StochRsiCross) -> f64 {
    match cross {
        StochRsiCross::Bullish => 100.0,
        StochRsiCross::None => 30.0,
    }
}

/// Trend strength buckets: strong above 25, forming above 20.
pub fn score_adx(adx: f64) -> f64 {
    if adx > 25.0 {
        100.0
    } else if adx > 20.0 {
        60.0
    } else {
        30.0
    }
}

/// Continuous ratio rule: the spike percentage itself, capped at 100.
pub fn score_volume_spike(ratio_pct: f64) -> f64 {
    ratio_pct.clamp(0.0, 100.0)
}

/// Narrower bands score higher; anticipates a breakout from a squeeze.
pub fn score_bollinger_width(width: f64) -> f64 {
    (100.0 - width).clamp(0.0, 100.0)
}

pub fn score_vwap(position: TrendPosition) -> f64 {
    match position {
        TrendPosition::Above => 100.0,
        TrendPosition::Below => 0.0,
    }
}

/// Map every available raw indicator value to its subscore.
pub fn normalize(set: &IndicatorSet) -> ScoreBreakdown {
    ScoreBreakdown {
        rsi: set.rsi.as_ref().map(|r| score_rsi(r.value)),
        macd: set.macd.as_ref().map(|m| score_macd(m.cross)),
        ema_trend: set.ema_trend.as_ref().map(|e| score_ema_trend(e.position)),
        volume_spike: set
            .volume_spike
            .as_ref()
            .map(|v| score_volume_spike(v.ratio_pct)),
        stoch_rsi: set.stoch_rsi.as_ref().map(|s| score_stoch_rsi(s.cross)),
        adx: set.adx.as_ref().map(|a| score_adx(a.value)),
        bollinger_width: set
            .bollinger
            .as_ref()
            .map(|b| score_bollinger_width(b.width)),
        vwap: set.vwap.as_ref().map(|v| score_vwap(v.position)),
    }
}
