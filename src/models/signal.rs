use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::indicators::IndicatorKind;

/// Discrete trading signal derived from the aggregate buy score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalKind {
    Buy,
    Watch,
    NoTrade,
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SignalKind::Buy => "BUY",
            SignalKind::Watch => "WATCH",
            SignalKind::NoTrade => "NO TRADE",
        };
        f.write_str(label)
    }
}

/// Per-indicator normalized subscores, each in [0, 100] or absent.
///
/// Absent means the indicator produced no value and is excluded from
/// aggregation; it is never treated as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub macd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ema_trend: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub volume_spike: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stoch_rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub adx: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bollinger_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vwap: Option<f64>,
}

impl ScoreBreakdown {
    pub fn get(&self, kind: IndicatorKind) -> Option<f64> {
        match kind {
            IndicatorKind::Rsi => self.rsi,
            IndicatorKind::Macd => self.macd,
            IndicatorKind::EmaTrend => self.ema_trend,
            IndicatorKind::VolumeSpike => self.volume_spike,
            IndicatorKind::StochRsi => self.stoch_rsi,
            IndicatorKind::Adx => self.adx,
            IndicatorKind::BollingerWidth => self.bollinger_width,
            IndicatorKind::Vwap => self.vwap,
        }
    }

    pub fn set(&mut self, kind: IndicatorKind, value: Option<f64>) {
        match kind {
            IndicatorKind::Rsi => self.rsi = value,
            IndicatorKind::Macd => self.macd = value,
            IndicatorKind::EmaTrend => self.ema_trend = value,
            IndicatorKind::VolumeSpike => self.volume_spike = value,
            IndicatorKind::StochRsi => self.stoch_rsi = value,
            IndicatorKind::Adx => self.adx = value,
            IndicatorKind::BollingerWidth => self.bollinger_width = value,
            IndicatorKind::Vwap => self.vwap = value,
        }
    }

    /// All entries in the fixed indicator order.
    pub fn entries(&self) -> impl Iterator<Item = (IndicatorKind, Option<f64>)> + '_ {
        IndicatorKind::ALL.iter().map(|&kind| (kind, self.get(kind)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().all(|(_, value)| value.is_none())
    }
}

/// Weight actually applied to one indicator after renormalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedWeight {
    pub kind: IndicatorKind,
    pub weight: f64,
}

/// The aggregate buy score over the available subscores.
///
/// `undetermined` marks the case where no indicator produced a subscore
/// with non-zero weight; the zero value then means "no signal", not
/// "0% bullish".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedScore {
    pub value: f64,
    pub undetermined: bool,
    pub contributors: Vec<IndicatorKind>,
    /// Weights renormalized to sum to 1.0 over the contributors.
    pub weights_used: Vec<AppliedWeight>,
}

impl WeightedScore {
    pub fn undetermined() -> Self {
        Self {
            value: 0.0,
            undetermined: true,
            contributors: Vec::new(),
            weights_used: Vec::new(),
        }
    }

    /// Two-decimal display value. Classification uses the full-precision
    /// `value`.
    pub fn rounded(&self) -> f64 {
        (self.value * 100.0).round() / 100.0
    }
}

/// Suggested entry window around the current price (±1.5%). A derived
/// display value, not an input to the scoring itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuyRange {
    pub low: f64,
    pub high: f64,
}

impl BuyRange {
    pub const SPREAD: f64 = 0.015;

    pub fn around(price: f64) -> Self {
        Self {
            low: price * (1.0 - Self::SPREAD),
            high: price * (1.0 + Self::SPREAD),
        }
    }
}

/// The classified signal handed to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalOutput {
    pub kind: SignalKind,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub symbol: Option<String>,
    pub price: f64,
    pub buy_range: BuyRange,
    pub timestamp: DateTime<Utc>,
}

/// Complete result of one pipeline run: score, signal, and the per-layer
/// breakdowns a front end can render as a debug view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalEvaluation {
    pub score: WeightedScore,
    pub signal: SignalOutput,
    pub breakdown: ScoreBreakdown,
    pub indicators: crate::models::indicators::IndicatorSet,
}
