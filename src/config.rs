//! Engine parameters and environment helpers.

use serde::{Deserialize, Serialize};

use crate::signals::weights::WeightScheme;

/// Indicator windows, weighting scheme, and classification thresholds.
///
/// Defaults match the canonical parameterization; callers may override any
/// field per evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub ema_trend_period: usize,
    pub stoch_rsi_period: usize,
    pub stoch_rsi_window: usize,
    pub stoch_rsi_smooth: usize,
    pub adx_period: usize,
    pub volume_window: usize,
    pub bollinger_period: usize,
    pub bollinger_std_dev: f64,
    pub weighting: WeightScheme,
    pub buy_threshold: f64,
    pub watch_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            ema_trend_period: 50,
            stoch_rsi_period: 14,
            stoch_rsi_window: 14,
            stoch_rsi_smooth: 3,
            adx_period: 14,
            volume_window: 20,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            weighting: WeightScheme::default(),
            buy_threshold: 70.0,
            watch_threshold: 50.0,
        }
    }
}

/// Deployment environment, used to pick the log formatter.
pub fn get_environment() -> String {
    std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}

/// HTTP server port (`PORT`, default 8080).
pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080)
}

/// CoinGecko pro API key, if configured.
pub fn coingecko_api_key() -> Option<String> {
    std::env::var("COINGECKO_API_KEY")
        .ok()
        .filter(|k| !k.is_empty())
}

/// Number of coins the scanner pulls from the ranked market list
/// (`SCAN_TOP_N`, default 25).
pub fn scan_top_n() -> usize {
    std::env::var("SCAN_TOP_N")
        .ok()
        .and_then(|n| n.parse().ok())
        .unwrap_or(25)
}

/// Days of OHLC history the scanner requests per coin
/// (`SCAN_DAYS`, default 14).
pub fn scan_days() -> u32 {
    std::env::var("SCAN_DAYS")
        .ok()
        .and_then(|n| n.parse().ok())
        .unwrap_or(14)
}
