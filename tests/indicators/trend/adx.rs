//! Unit tests for the ADX indicator

use chrono::Utc;
use coinsight::indicators::trend::calculate_adx;
use coinsight::models::indicators::Candle;

fn trending_candles(count: usize, step: f64) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let base = 100.0 + i as f64 * step;
            Candle::new(base, base + 0.4, base - 0.4, base + 0.1, None, Utc::now())
        })
        .collect()
}

#[test]
fn test_adx_insufficient_data() {
    // Needs 2 * period + 1 candles.
    assert!(calculate_adx(&trending_candles(28, 0.5), 14).is_none());
    assert!(calculate_adx(&trending_candles(29, 0.5), 14).is_some());
}

#[test]
fn test_strong_uptrend_is_directional() {
    let adx = calculate_adx(&trending_candles(80, 1.0), 14).unwrap();
    // All directional movement is upward.
    assert!(adx.plus_di > adx.minus_di);
    assert_eq!(adx.minus_di, 0.0);
    assert!(adx.value > 25.0);
    assert_eq!(adx.period, 14);
}

#[test]
fn test_strong_downtrend_is_directional() {
    let candles: Vec<Candle> = (0..80)
        .map(|i| {
            let base = 200.0 - i as f64;
            Candle::new(base, base + 0.4, base - 0.4, base - 0.1, None, Utc::now())
        })
        .collect();
    let adx = calculate_adx(&candles, 14).unwrap();
    assert!(adx.minus_di > adx.plus_di);
    assert!(adx.value > 25.0);
}

#[test]
fn test_adx_bounded() {
    let candles: Vec<Candle> = (0..80)
        .map(|i| {
            let base = 100.0 + ((i * 5) % 11) as f64;
            Candle::new(base, base + 1.0, base - 1.0, base, None, Utc::now())
        })
        .collect();
    let adx = calculate_adx(&candles, 14).unwrap();
    assert!((0.0..=100.0).contains(&adx.value));
    assert!(adx.plus_di >= 0.0);
    assert!(adx.minus_di >= 0.0);
}

#[test]
fn test_flat_series_has_no_trend_strength() {
    let candles: Vec<Candle> = (0..60)
        .map(|_| Candle::new(100.0, 100.5, 99.5, 100.0, None, Utc::now()))
        .collect();
    let adx = calculate_adx(&candles, 14).unwrap();
    assert_eq!(adx.value, 0.0);
}
