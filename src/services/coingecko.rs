//! CoinGecko market data provider.

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::models::indicators::RawTick;
use crate::services::market_data::{CoinMarket, MarketDataError, MarketDataProvider};

const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3/";
const API_KEY_HEADER: &str = "x-cg-pro-api-key";
const MAX_RETRIES: usize = 3;

pub struct CoinGeckoClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl CoinGeckoClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default CoinGecko base URL parses"),
            api_key,
        }
    }

    /// Point the client at a different base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, MarketDataError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| MarketDataError::Payload(format!("bad url {}: {}", path, e)))?;

        let fetch = || {
            let mut request = self.http.get(url.clone()).query(query);
            if let Some(key) = &self.api_key {
                request = request.header(API_KEY_HEADER, key);
            }
            async move { request.send().await?.error_for_status()?.json::<T>().await }
        };

        let value = fetch
            .retry(ExponentialBuilder::default().with_max_times(MAX_RETRIES))
            .notify(|err: &reqwest::Error, dur| {
                debug!(error = %err, backoff_ms = dur.as_millis(), "retrying CoinGecko request");
            })
            .await?;
        Ok(value)
    }
}

#[derive(Debug, Deserialize)]
struct MarketsRow {
    id: String,
    symbol: String,
    name: String,
    current_price: Option<f64>,
    #[serde(default)]
    price_change_percentage_1h_in_currency: Option<f64>,
    #[serde(default)]
    price_change_percentage_24h_in_currency: Option<f64>,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MarketChart {
    #[serde(default)]
    total_volumes: Vec<[f64; 2]>,
}

#[async_trait]
impl MarketDataProvider for CoinGeckoClient {
    async fn ranked_markets(&self, top_n: usize) -> Result<Vec<CoinMarket>, MarketDataError> {
        let rows: Vec<MarketsRow> = self
            .get_json(
                "coins/markets",
                &[
                    ("vs_currency", "usd".to_string()),
                    ("order", "market_cap_desc".to_string()),
                    ("per_page", top_n.to_string()),
                    ("page", "1".to_string()),
                    ("sparkline", "false".to_string()),
                    ("price_change_percentage", "1h,24h".to_string()),
                ],
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| CoinMarket {
                id: row.id,
                symbol: row.symbol,
                name: row.name,
                current_price: row.current_price,
                change_pct_1h: row.price_change_percentage_1h_in_currency,
                change_pct_24h: row.price_change_percentage_24h_in_currency,
                image: row.image,
            })
            .collect())
    }

    /// OHLC candles merged with market-chart volume. Each candle takes the
    /// latest volume bucket at or before its timestamp; candles before the
    /// first bucket stay without volume (the preparator then strips volume
    /// uniformly).
    async fn fetch_series(
        &self,
        coin_id: &str,
        days: u32,
    ) -> Result<Vec<RawTick>, MarketDataError> {
        let ohlc: Vec<[f64; 5]> = self
            .get_json(
                &format!("coins/{}/ohlc", coin_id),
                &[
                    ("vs_currency", "usd".to_string()),
                    ("days", days.to_string()),
                ],
            )
            .await?;

        let chart: MarketChart = self
            .get_json(
                &format!("coins/{}/market_chart", coin_id),
                &[
                    ("vs_currency", "usd".to_string()),
                    ("days", days.to_string()),
                ],
            )
            .await?;

        let mut volumes: Vec<(i64, f64)> = chart
            .total_volumes
            .iter()
            .map(|[ts, vol]| (*ts as i64, *vol))
            .collect();
        volumes.sort_by_key(|(ts, _)| *ts);

        let ticks = ohlc
            .iter()
            .map(|[ts, open, high, low, close]| {
                let ts = *ts as i64;
                let volume = match volumes.partition_point(|(vts, _)| *vts <= ts) {
                    0 => None,
                    idx => Some(volumes[idx - 1].1),
                };
                RawTick {
                    timestamp: ts,
                    open: *open,
                    high: *high,
                    low: *low,
                    close: *close,
                    volume,
                }
            })
            .collect();

        Ok(ticks)
    }
}
