//! Market data provider interface for the scanner and API layers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::indicators::RawTick;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected payload: {0}")]
    Payload(String),
}

/// One coin row from the ranked market listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinMarket {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub current_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub change_pct_1h: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub change_pct_24h: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
}

/// Price-change window used to rank gainers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangePeriod {
    H1,
    H24,
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Top coins by market cap, with price-change fields populated.
    async fn ranked_markets(&self, top_n: usize) -> Result<Vec<CoinMarket>, MarketDataError>;

    /// OHLC-V raw ticks for one coin over the trailing `days`.
    async fn fetch_series(&self, coin_id: &str, days: u32)
        -> Result<Vec<RawTick>, MarketDataError>;
}

/// Sort markets by price change over `period`, descending. Rows without
/// the requested change field rank last; ties break by id so the order is
/// stable across runs.
pub fn top_gainers(markets: &[CoinMarket], period: ChangePeriod, limit: usize) -> Vec<CoinMarket> {
    let mut ranked: Vec<CoinMarket> = markets.to_vec();
    ranked.sort_by(|a, b| {
        let change = |m: &CoinMarket| match period {
            ChangePeriod::H1 => m.change_pct_1h,
            ChangePeriod::H24 => m.change_pct_24h,
        };
        let av = change(a).unwrap_or(f64::NEG_INFINITY);
        let bv = change(b).unwrap_or(f64::NEG_INFINITY);
        bv.partial_cmp(&av)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    ranked.truncate(limit);
    ranked
}
