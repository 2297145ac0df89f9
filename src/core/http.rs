//! HTTP endpoint server using Axum.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::{self, EngineConfig};
use crate::models::indicators::RawTick;
use crate::services::coingecko::CoinGeckoClient;
use crate::services::scanner;
use crate::signals::engine::SignalEngine;

#[derive(Clone)]
pub struct AppState {
    pub start_time: Arc<Instant>,
    pub engine_config: Arc<EngineConfig>,
    /// Absent when no market-data provider is configured; the scan
    /// endpoint then answers 503.
    pub provider: Option<Arc<CoinGeckoClient>>,
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": "coinsight-scoring-engine"
    }))
}

#[derive(Debug, Deserialize)]
struct EvaluateRequest {
    ticks: Vec<RawTick>,
    #[serde(default)]
    symbol: Option<String>,
}

/// Evaluate a raw tick series posted by the caller.
async fn evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<Value>, StatusCode> {
    match SignalEngine::evaluate_ticks(&request.ticks, &state.engine_config) {
        Ok(mut evaluation) => {
            evaluation.signal.symbol = request.symbol.clone();
            evaluation.indicators.symbol = request.symbol;
            Ok(Json(json!(evaluation)))
        }
        Err(e) => {
            warn!(error = %e, "evaluate request rejected");
            Err(StatusCode::UNPROCESSABLE_ENTITY)
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScanQuery {
    top: Option<usize>,
    days: Option<u32>,
}

/// Scan the ranked market list through the configured provider.
async fn scan(
    State(state): State<AppState>,
    Query(params): Query<ScanQuery>,
) -> Result<Json<Value>, StatusCode> {
    let provider = state
        .provider
        .as_ref()
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let top_n = params.top.unwrap_or_else(config::scan_top_n);
    let days = params.days.unwrap_or_else(config::scan_days);

    let scores = scanner::scan(provider.as_ref(), &state.engine_config, top_n, days)
        .await
        .map_err(|e| {
            error!(error = %e, "scan failed");
            StatusCode::BAD_GATEWAY
        })?;

    Ok(Json(json!(scores)))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/evaluate", post(evaluate))
        .route("/api/scan", get(scan))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let provider = Some(Arc::new(CoinGeckoClient::new(config::coingecko_api_key())));

    let state = AppState {
        start_time: Arc::new(Instant::now()),
        engine_config: Arc::new(EngineConfig::default()),
        provider,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
