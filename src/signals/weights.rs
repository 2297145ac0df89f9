//! Indicator weighting for score aggregation.

use serde::{Deserialize, Serialize};

use crate::models::indicators::IndicatorKind;

/// Per-indicator aggregation weights. Must be non-negative and sum to 1.0
/// over the weighted indicator set.
///
/// Bollinger width and VWAP carry no weight here; they are computed for
/// the breakdown view and participate only in equal weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorWeights {
    pub rsi: f64,
    pub macd: f64,
    pub ema_trend: f64,
    pub volume_spike: f64,
    pub stoch_rsi: f64,
    pub adx: f64,
}

impl Default for IndicatorWeights {
    fn default() -> Self {
        Self {
            rsi: 0.25,
            macd: 0.25,
            ema_trend: 0.20,
            volume_spike: 0.15,
            stoch_rsi: 0.10,
            adx: 0.05,
        }
    }
}

impl IndicatorWeights {
    pub fn new(
        rsi: f64,
        macd: f64,
        ema_trend: f64,
        volume_spike: f64,
        stoch_rsi: f64,
        adx: f64,
    ) -> Result<Self, String> {
        let weights = Self {
            rsi,
            macd,
            ema_trend,
            volume_spike,
            stoch_rsi,
            adx,
        };
        if [rsi, macd, ema_trend, volume_spike, stoch_rsi, adx]
            .iter()
            .any(|w| *w < 0.0)
        {
            return Err("all weights must be non-negative".to_string());
        }
        let total = weights.total();
        if (total - 1.0).abs() > 0.001 {
            return Err(format!("weights must sum to 1.0, got: {}", total));
        }
        Ok(weights)
    }

    pub fn weight(&self, kind: IndicatorKind) -> f64 {
        match kind {
            IndicatorKind::Rsi => self.rsi,
            IndicatorKind::Macd => self.macd,
            IndicatorKind::EmaTrend => self.ema_trend,
            IndicatorKind::VolumeSpike => self.volume_spike,
            IndicatorKind::StochRsi => self.stoch_rsi,
            IndicatorKind::Adx => self.adx,
            IndicatorKind::BollingerWidth | IndicatorKind::Vwap => 0.0,
        }
    }

    fn total(&self) -> f64 {
        self.rsi + self.macd + self.ema_trend + self.volume_spike + self.stoch_rsi + self.adx
    }

    /// Sanity check that the configured weights sum to 1.0.
    pub fn verify(&self) -> bool {
        (self.total() - 1.0).abs() < 0.001
    }
}

/// How subscores are combined: the weighted default, or every present
/// indicator counted equally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "weights")]
pub enum WeightScheme {
    Weighted(IndicatorWeights),
    Equal,
}

impl Default for WeightScheme {
    fn default() -> Self {
        WeightScheme::Weighted(IndicatorWeights::default())
    }
}

impl WeightScheme {
    pub fn weight_for(&self, kind: IndicatorKind) -> f64 {
        match self {
            WeightScheme::Weighted(weights) => weights.weight(kind),
            WeightScheme::Equal => 1.0,
        }
    }
}
