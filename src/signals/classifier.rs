//! Signal classification and rationale text.

use crate::config::EngineConfig;
use crate::models::indicators::{IndicatorKind, IndicatorSet};
use crate::models::signal::{ScoreBreakdown, SignalKind, WeightedScore};

/// Subscore level at which an indicator is cited in the rationale.
const NOTABLE_SUBSCORE: f64 = 70.0;

/// Most observations quoted in one rationale.
const MAX_OBSERVATIONS: usize = 4;

/// Map the aggregate score to a discrete signal with a rationale.
///
/// Thresholds partition the whole axis: value >= buy_threshold is BUY,
/// value >= watch_threshold is WATCH, everything below is NO TRADE. The
/// undetermined score maps to NO TRADE with an explicit no-data reason.
///
/// The cited observations are picked in the fixed indicator priority
/// order, so the text is deterministic for a given evaluation.
pub fn classify(
    score: &WeightedScore,
    breakdown: &ScoreBreakdown,
    indicators: &IndicatorSet,
    config: &EngineConfig,
) -> (SignalKind, String) {
    if score.undetermined {
        return (
            SignalKind::NoTrade,
            "Undetermined: no indicator produced a value".to_string(),
        );
    }

    let kind = if score.value >= config.buy_threshold {
        SignalKind::Buy
    } else if score.value >= config.watch_threshold {
        SignalKind::Watch
    } else {
        SignalKind::NoTrade
    };

    let base = match kind {
        SignalKind::Buy => "Strong bullish technicals",
        SignalKind::Watch => "Moderate technicals",
        SignalKind::NoTrade => "Weak technicals",
    };

    let observations = collect_observations(breakdown, indicators);
    let reason = if observations.is_empty() {
        base.to_string()
    } else {
        format!("{}: {}", base, observations.join(", "))
    };

    (kind, reason)
}

fn collect_observations(breakdown: &ScoreBreakdown, indicators: &IndicatorSet) -> Vec<String> {
    let mut observations = Vec::new();
    for (kind, subscore) in breakdown.entries() {
        if observations.len() == MAX_OBSERVATIONS {
            break;
        }
        let Some(subscore) = subscore else { continue };
        if subscore < NOTABLE_SUBSCORE {
            continue;
        }
        if let Some(text) = describe(kind, indicators) {
            observations.push(text);
        }
    }
    observations
}

fn describe(kind: IndicatorKind, indicators: &IndicatorSet) -> Option<String> {
    match kind {
        IndicatorKind::Rsi => indicators
            .rsi
            .as_ref()
            .map(|r| format!("RSI oversold at {:.1}", r.value)),
        IndicatorKind::Macd => Some("MACD bullish crossover".to_string()),
        IndicatorKind::EmaTrend => indicators
            .ema_trend
            .as_ref()
            .map(|e| format!("price above EMA{}", e.period)),
        IndicatorKind::VolumeSpike => indicators
            .volume_spike
            .as_ref()
            .map(|v| format!("volume surge at {:.0}% of average", v.ratio_pct)),
        IndicatorKind::StochRsi => Some("Stoch RSI bullish cross".to_string()),
        IndicatorKind::Adx => indicators
            .adx
            .as_ref()
            .map(|a| format!("strong trend (ADX {:.1})", a.value)),
        IndicatorKind::BollingerWidth => Some("tight Bollinger squeeze".to_string()),
        IndicatorKind::Vwap => Some("price above VWAP".to_string()),
    }
}
