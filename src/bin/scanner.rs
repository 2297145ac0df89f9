//! Coinsight Scanner
//!
//! One-shot batch run: pull the ranked market list from CoinGecko,
//! evaluate every coin, and print the results ordered by buy score.

use coinsight::config::{self, EngineConfig};
use coinsight::logging;
use coinsight::services::coingecko::CoinGeckoClient;
use coinsight::services::scanner::scan;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let top_n = config::scan_top_n();
    let days = config::scan_days();
    info!(top_n, days, "Starting Coinsight scan");

    let client = CoinGeckoClient::new(config::coingecko_api_key());
    let engine_config = EngineConfig::default();

    let scores = scan(&client, &engine_config, top_n, days).await?;

    println!(
        "{:<4} {:<10} {:>8} {:<10} REASON",
        "#", "SYMBOL", "SCORE", "SIGNAL"
    );
    for (rank, score) in scores.iter().enumerate() {
        println!(
            "{:<4} {:<10} {:>8.2} {:<10} {}",
            rank + 1,
            score.market.symbol.to_uppercase(),
            score.evaluation.score.rounded(),
            score.evaluation.signal.kind.to_string(),
            score.evaluation.signal.reason,
        );
    }

    info!(evaluated = scores.len(), "Scan complete");
    Ok(())
}
