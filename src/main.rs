use chrono::{DateTime, Duration, Utc};
use coinsight::config::EngineConfig;
use coinsight::models::indicators::Candle;
use coinsight::models::signal::SignalEvaluation;
use coinsight::signals::engine::SignalEngine;

fn main() {
    let config = EngineConfig::default();

    let uptrend = demo_candles(80, |i| 100.0 + i as f64 * 0.6, 1_000.0);
    let evaluation = SignalEngine::evaluate(&uptrend, &config);
    println!("Uptrend series:");
    print_evaluation(&evaluation);
    println!();

    let downtrend = demo_candles(80, |i| 150.0 - i as f64 * 0.5, 1_000.0);
    let evaluation = SignalEngine::evaluate(&downtrend, &config);
    println!("Downtrend series:");
    print_evaluation(&evaluation);
}

fn demo_candles(count: usize, close_at: impl Fn(usize) -> f64, volume: f64) -> Vec<Candle> {
    let start: DateTime<Utc> = Utc::now() - Duration::hours(count as i64);
    (0..count)
        .map(|i| {
            let close = close_at(i);
            Candle::new(
                close - 0.1,
                close + 0.3,
                close - 0.3,
                close,
                Some(volume),
                start + Duration::hours(i as i64),
            )
        })
        .collect()
}

fn print_evaluation(evaluation: &SignalEvaluation) {
    println!("  Buy score: {:.2}", evaluation.score.rounded());
    println!("  Signal: {}", evaluation.signal.kind);
    println!("  Reason: {}", evaluation.signal.reason);
    println!(
        "  Buy range: ${:.2} - ${:.2}",
        evaluation.signal.buy_range.low, evaluation.signal.buy_range.high
    );
    println!("  Subscores:");
    for (kind, value) in evaluation.breakdown.entries() {
        match value {
            Some(v) => println!("    {:<16} {:>6.1}", kind.name(), v),
            None => println!("    {:<16} {:>6}", kind.name(), "-"),
        }
    }
}
