//! Unit tests for indicator weights

use coinsight::models::indicators::IndicatorKind;
use coinsight::signals::weights::{IndicatorWeights, WeightScheme};

#[test]
fn test_default_weights() {
    let weights = IndicatorWeights::default();
    assert_eq!(weights.rsi, 0.25);
    assert_eq!(weights.macd, 0.25);
    assert_eq!(weights.ema_trend, 0.20);
    assert_eq!(weights.volume_spike, 0.15);
    assert_eq!(weights.stoch_rsi, 0.10);
    assert_eq!(weights.adx, 0.05);
    assert!(weights.verify());
}

#[test]
fn test_weights_validation() {
    assert!(IndicatorWeights::new(0.25, 0.25, 0.20, 0.15, 0.10, 0.05).is_ok());
    assert!(IndicatorWeights::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0).is_ok());
}

#[test]
fn test_weights_invalid_sum() {
    assert!(IndicatorWeights::new(0.5, 0.25, 0.20, 0.15, 0.10, 0.05).is_err());
    assert!(IndicatorWeights::new(0.1, 0.1, 0.1, 0.1, 0.1, 0.1).is_err());
}

#[test]
fn test_weights_negative() {
    assert!(IndicatorWeights::new(-0.1, 0.4, 0.3, 0.2, 0.1, 0.1).is_err());
}

#[test]
fn test_display_only_indicators_carry_no_weight() {
    let weights = IndicatorWeights::default();
    assert_eq!(weights.weight(IndicatorKind::BollingerWidth), 0.0);
    assert_eq!(weights.weight(IndicatorKind::Vwap), 0.0);
}

#[test]
fn test_weighted_scheme_lookup() {
    let scheme = WeightScheme::default();
    assert_eq!(scheme.weight_for(IndicatorKind::Rsi), 0.25);
    assert_eq!(scheme.weight_for(IndicatorKind::Adx), 0.05);
    assert_eq!(scheme.weight_for(IndicatorKind::Vwap), 0.0);
}

#[test]
fn test_equal_scheme_counts_everything() {
    let scheme = WeightScheme::Equal;
    for kind in IndicatorKind::ALL {
        assert_eq!(scheme.weight_for(kind), 1.0);
    }
}
