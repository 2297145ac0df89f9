//! Batch scanner: evaluate the scoring engine across many coins and rank
//! the results by buy score.

use futures_util::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::models::signal::SignalEvaluation;
use crate::services::market_data::{CoinMarket, MarketDataError, MarketDataProvider};
use crate::signals::engine::SignalEngine;

/// Per-coin fetches evaluated concurrently.
const SCAN_CONCURRENCY: usize = 4;

/// One scanned coin with its evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinScore {
    pub market: CoinMarket,
    pub evaluation: SignalEvaluation,
}

/// Fetch the top `top_n` coins by market cap, evaluate each over `days`
/// of history, and return the results sorted by buy score descending
/// (ties break by coin id).
///
/// Per-coin fetch or preparation failures are logged and the coin is
/// skipped; only the market-listing fetch itself can fail the scan.
pub async fn scan(
    provider: &dyn MarketDataProvider,
    config: &EngineConfig,
    top_n: usize,
    days: u32,
) -> Result<Vec<CoinScore>, MarketDataError> {
    let markets = provider.ranked_markets(top_n).await?;
    info!(coins = markets.len(), days, "scanning markets");

    let mut scores: Vec<CoinScore> = stream::iter(markets)
        .map(|market| async move {
            let ticks = match provider.fetch_series(&market.id, days).await {
                Ok(ticks) => ticks,
                Err(e) => {
                    warn!(coin = %market.id, error = %e, "series fetch failed, skipping");
                    return None;
                }
            };
            match SignalEngine::evaluate_ticks(&ticks, config) {
                Ok(mut evaluation) => {
                    evaluation.signal.symbol = Some(market.symbol.clone());
                    evaluation.indicators.symbol = Some(market.symbol.clone());
                    Some(CoinScore { market, evaluation })
                }
                Err(e) => {
                    warn!(coin = %market.id, error = %e, "evaluation skipped");
                    None
                }
            }
        })
        .buffer_unordered(SCAN_CONCURRENCY)
        .filter_map(|result| async move { result })
        .collect()
        .await;

    scores.sort_by(|a, b| {
        b.evaluation
            .score
            .value
            .partial_cmp(&a.evaluation.score.value)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.market.id.cmp(&b.market.id))
    });

    Ok(scores)
}
