//! Coinsight API Server
//!
//! Stateless HTTP API over the scoring engine: health, ad-hoc evaluation,
//! and a market scan endpoint backed by CoinGecko.

use coinsight::config;
use coinsight::core::http::start_server;
use coinsight::logging;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let port = config::server_port();
    let env = config::get_environment();
    info!("Starting Coinsight API Server");
    info!(environment = %env, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
