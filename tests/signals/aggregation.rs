//! Unit tests for score aggregation

use coinsight::models::indicators::IndicatorKind;
use coinsight::models::signal::ScoreBreakdown;
use coinsight::signals::aggregation::Aggregator;
use coinsight::signals::weights::WeightScheme;

#[test]
fn test_weighted_average_over_present_subscores() {
    let breakdown = ScoreBreakdown {
        rsi: Some(80.0),
        macd: Some(20.0),
        ..Default::default()
    };
    let score = Aggregator::aggregate(&breakdown, &WeightScheme::default());
    // Equal weights (0.25 each) renormalize away: plain mean.
    assert!((score.value - 50.0).abs() < 1e-12);
    assert!(!score.undetermined);
    assert_eq!(
        score.contributors,
        vec![IndicatorKind::Rsi, IndicatorKind::Macd]
    );
}

#[test]
fn test_renormalized_weights_sum_to_one() {
    let breakdown = ScoreBreakdown {
        rsi: Some(100.0),
        ema_trend: Some(30.0),
        adx: Some(60.0),
        ..Default::default()
    };
    let score = Aggregator::aggregate(&breakdown, &WeightScheme::default());
    let total: f64 = score.weights_used.iter().map(|w| w.weight).sum();
    assert!((total - 1.0).abs() < 1e-12);
}

#[test]
fn test_adding_subscore_equal_to_mean_is_a_noop() {
    let without = ScoreBreakdown {
        rsi: Some(80.0),
        macd: Some(20.0),
        ..Default::default()
    };
    let base = Aggregator::aggregate(&without, &WeightScheme::default());

    let with = ScoreBreakdown {
        rsi: Some(80.0),
        macd: Some(20.0),
        ema_trend: Some(base.value),
        ..Default::default()
    };
    let extended = Aggregator::aggregate(&with, &WeightScheme::default());
    assert!((extended.value - base.value).abs() < 1e-12);
}

#[test]
fn test_empty_breakdown_is_undetermined() {
    let score = Aggregator::aggregate(&ScoreBreakdown::default(), &WeightScheme::default());
    assert_eq!(score.value, 0.0);
    assert!(score.undetermined);
    assert!(score.contributors.is_empty());
    assert!(score.weights_used.is_empty());
}

#[test]
fn test_zero_weight_indicators_do_not_determine() {
    // Bollinger and VWAP alone carry no weight in the weighted scheme.
    let breakdown = ScoreBreakdown {
        bollinger_width: Some(90.0),
        vwap: Some(100.0),
        ..Default::default()
    };
    let score = Aggregator::aggregate(&breakdown, &WeightScheme::default());
    assert!(score.undetermined);

    // The same breakdown determines a score under equal weighting.
    let score = Aggregator::aggregate(&breakdown, &WeightScheme::Equal);
    assert!(!score.undetermined);
    assert!((score.value - 95.0).abs() < 1e-12);
}

#[test]
fn test_equal_weighting_is_plain_mean() {
    let breakdown = ScoreBreakdown {
        rsi: Some(100.0),
        macd: Some(30.0),
        vwap: Some(0.0),
        ..Default::default()
    };
    let score = Aggregator::aggregate(&breakdown, &WeightScheme::Equal);
    assert!((score.value - 130.0 / 3.0).abs() < 1e-12);
    assert_eq!(score.contributors.len(), 3);
}

#[test]
fn test_missing_indicator_reweights_the_rest() {
    let full = ScoreBreakdown {
        rsi: Some(100.0),
        macd: Some(0.0),
        ..Default::default()
    };
    let score = Aggregator::aggregate(&full, &WeightScheme::default());
    // 0.25 / 0.5 each after renormalization.
    assert!((score.value - 50.0).abs() < 1e-12);

    let rsi_only = ScoreBreakdown {
        rsi: Some(100.0),
        ..Default::default()
    };
    let score = Aggregator::aggregate(&rsi_only, &WeightScheme::default());
    assert!((score.value - 100.0).abs() < 1e-12);
    assert_eq!(score.weights_used.len(), 1);
    assert!((score.weights_used[0].weight - 1.0).abs() < 1e-12);
}

#[test]
fn test_rounding_is_display_only() {
    let breakdown = ScoreBreakdown {
        rsi: Some(100.0),
        macd: Some(30.0),
        adx: Some(60.0),
        ..Default::default()
    };
    let score = Aggregator::aggregate(&breakdown, &WeightScheme::default());
    // (100*.25 + 30*.25 + 60*.05) / 0.55 = 64.5454...
    let expected = (25.0 + 7.5 + 3.0) / 0.55;
    assert!((score.value - expected).abs() < 1e-12);
    assert_eq!(score.rounded(), 64.55);
    assert!(score.value != score.rounded());
}
