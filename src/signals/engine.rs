//! The evaluation pipeline: indicators -> normalization -> aggregation ->
//! classification.

use chrono::Utc;

use crate::config::EngineConfig;
use crate::indicators::momentum::{calculate_macd, calculate_rsi, calculate_stoch_rsi};
use crate::indicators::trend::{calculate_adx, calculate_ema_trend};
use crate::indicators::volatility::calculate_bollinger;
use crate::indicators::volume::{calculate_volume_spike, calculate_vwap};
use crate::models::indicators::{Candle, IndicatorSet, RawTick};
use crate::models::signal::{BuyRange, SignalEvaluation, SignalOutput};
use crate::series::{self, PrepareError, MIN_RAW_POINTS};
use crate::signals::aggregation::Aggregator;
use crate::signals::classifier::classify;
use crate::signals::normalize::normalize;

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate a prepared candle series.
    ///
    /// Always returns a complete evaluation: indicators that cannot be
    /// computed are absent from the breakdown, and a series too short for
    /// every indicator yields an undetermined NO TRADE.
    pub fn evaluate(candles: &[Candle], config: &EngineConfig) -> SignalEvaluation {
        let indicators = Self::compute_indicators(candles, config);
        let breakdown = normalize(&indicators);
        let score = Aggregator::aggregate(&breakdown, &config.weighting);
        let (kind, reason) = classify(&score, &breakdown, &indicators, config);

        let signal = SignalOutput {
            kind,
            reason,
            symbol: None,
            price: indicators.price,
            buy_range: BuyRange::around(indicators.price),
            timestamp: indicators.timestamp,
        };

        SignalEvaluation {
            score,
            signal,
            breakdown,
            indicators,
        }
    }

    /// Prepare raw ticks, then evaluate.
    pub fn evaluate_ticks(
        raw: &[RawTick],
        config: &EngineConfig,
    ) -> Result<SignalEvaluation, PrepareError> {
        let candles = series::prepare(raw, MIN_RAW_POINTS)?;
        Ok(Self::evaluate(&candles, config))
    }

    fn compute_indicators(candles: &[Candle], config: &EngineConfig) -> IndicatorSet {
        let price = candles.last().map(|c| c.close).unwrap_or(0.0);
        let timestamp = candles
            .last()
            .map(|c| c.timestamp)
            .unwrap_or_else(Utc::now);

        let mut set = IndicatorSet::new(price, timestamp);
        set.rsi = calculate_rsi(candles, config.rsi_period);
        set.macd = calculate_macd(
            candles,
            config.macd_fast,
            config.macd_slow,
            config.macd_signal,
        );
        set.ema_trend = calculate_ema_trend(candles, config.ema_trend_period);
        set.stoch_rsi = calculate_stoch_rsi(
            candles,
            config.stoch_rsi_period,
            config.stoch_rsi_window,
            config.stoch_rsi_smooth,
        );
        set.adx = calculate_adx(candles, config.adx_period);
        set.volume_spike = calculate_volume_spike(candles, config.volume_window);
        set.bollinger = calculate_bollinger(
            candles,
            config.bollinger_period,
            config.bollinger_std_dev,
        );
        set.vwap = calculate_vwap(candles);
        set
    }
}
