use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw price/volume tick as delivered by a market-data source.
///
/// Timestamps may be in seconds or milliseconds; the series preparator
/// normalizes them. Nothing else is validated at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawTick {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub volume: Option<f64>,
}

/// A cleaned OHLC-V bar. Produced by the series preparator; series are
/// strictly ascending by timestamp with all prices positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub volume: Option<f64>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: Option<f64>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// (high + low + close) / 3, the price VWAP weights by volume.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}

/// The indicators the engine knows about, in the fixed order used for
/// score breakdowns and reason-text priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Rsi,
    Macd,
    EmaTrend,
    VolumeSpike,
    StochRsi,
    Adx,
    BollingerWidth,
    Vwap,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 8] = [
        IndicatorKind::Rsi,
        IndicatorKind::Macd,
        IndicatorKind::EmaTrend,
        IndicatorKind::VolumeSpike,
        IndicatorKind::StochRsi,
        IndicatorKind::Adx,
        IndicatorKind::BollingerWidth,
        IndicatorKind::Vwap,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Rsi => "RSI",
            IndicatorKind::Macd => "MACD",
            IndicatorKind::EmaTrend => "EMA Trend",
            IndicatorKind::VolumeSpike => "Volume Spike",
            IndicatorKind::StochRsi => "Stoch RSI",
            IndicatorKind::Adx => "ADX",
            IndicatorKind::BollingerWidth => "Bollinger Width",
            IndicatorKind::Vwap => "VWAP",
        }
    }
}

/// MACD line vs signal line crossover between the two most recent points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MacdCross {
    Bullish,
    Bearish,
    None,
}

/// Latest close relative to a reference line (EMA or VWAP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TrendPosition {
    Above,
    Below,
}

/// Stochastic RSI %K against the 0.20 oversold line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum StochRsiCross {
    Bullish,
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub cross: MacdCross,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmaTrendIndicator {
    pub ema: f64,
    pub close: f64,
    pub period: usize,
    pub position: TrendPosition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StochRsiIndicator {
    pub k: f64,
    pub prev_k: f64,
    pub cross: StochRsiCross,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdxIndicator {
    pub value: f64,
    pub plus_di: f64,
    pub minus_di: f64,
    pub period: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeSpikeIndicator {
    /// Latest volume as a percentage of the trailing rolling mean.
    pub ratio_pct: f64,
    pub window: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub width: f64,
    pub period: usize,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VwapIndicator {
    pub vwap: f64,
    pub close: f64,
    pub position: TrendPosition,
}

/// All raw indicator outputs for one evaluation. A `None` field means the
/// indicator had insufficient data or hit an arithmetic degeneracy; it is
/// excluded downstream, never defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSet {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub symbol: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rsi: Option<RsiIndicator>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub macd: Option<MacdIndicator>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ema_trend: Option<EmaTrendIndicator>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub volume_spike: Option<VolumeSpikeIndicator>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stoch_rsi: Option<StochRsiIndicator>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub adx: Option<AdxIndicator>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bollinger: Option<BollingerIndicator>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vwap: Option<VwapIndicator>,
    pub timestamp: DateTime<Utc>,
}

impl IndicatorSet {
    pub fn new(price: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            symbol: None,
            price,
            rsi: None,
            macd: None,
            ema_trend: None,
            volume_spike: None,
            stoch_rsi: None,
            adx: None,
            bollinger: None,
            vwap: None,
            timestamp,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}
