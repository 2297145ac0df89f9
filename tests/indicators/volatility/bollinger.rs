//! Unit tests for Bollinger Bands

use chrono::Utc;
use coinsight::indicators::volatility::calculate_bollinger;
use coinsight::models::indicators::Candle;

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .map(|&close| Candle::new(close, close + 0.1, close - 0.1, close, None, Utc::now()))
        .collect()
}

#[test]
fn test_bollinger_insufficient_data() {
    let candles = candles_from_closes(&[100.0; 19]);
    assert!(calculate_bollinger(&candles, 20, 2.0).is_none());
}

#[test]
fn test_constant_series_has_zero_width() {
    let bands = calculate_bollinger(&candles_from_closes(&[100.0; 25]), 20, 2.0).unwrap();
    assert_eq!(bands.middle, 100.0);
    assert_eq!(bands.width, 0.0);
    assert_eq!(bands.upper, bands.lower);
}

#[test]
fn test_known_arithmetic_series() {
    // Closes 100.0..=109.5 step 0.5: middle is the midpoint and the
    // population variance of the window is step^2 * (n^2 - 1) / 12.
    let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64 * 0.5).collect();
    let bands = calculate_bollinger(&candles_from_closes(&closes), 20, 2.0).unwrap();
    assert!((bands.middle - 104.75).abs() < 1e-12);
    let expected_sigma = (0.25_f64 * 399.0 / 12.0).sqrt();
    assert!((bands.upper - (104.75 + 2.0 * expected_sigma)).abs() < 1e-9);
    assert!((bands.lower - (104.75 - 2.0 * expected_sigma)).abs() < 1e-9);
    assert!((bands.width - 4.0 * expected_sigma).abs() < 1e-9);
}

#[test]
fn test_width_grows_with_volatility() {
    let calm: Vec<f64> = (0..25).map(|i| 100.0 + (i % 2) as f64 * 0.1).collect();
    let wild: Vec<f64> = (0..25).map(|i| 100.0 + (i % 2) as f64 * 5.0).collect();
    let calm_bands = calculate_bollinger(&candles_from_closes(&calm), 20, 2.0).unwrap();
    let wild_bands = calculate_bollinger(&candles_from_closes(&wild), 20, 2.0).unwrap();
    assert!(wild_bands.width > calm_bands.width);
}
