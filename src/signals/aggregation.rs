//! Weighted aggregation of subscores into a single buy score.

use crate::models::signal::{AppliedWeight, ScoreBreakdown, WeightedScore};
use crate::signals::weights::WeightScheme;

pub struct Aggregator;

impl Aggregator {
    /// Combine the available subscores into one [0, 100] score.
    ///
    /// Only indicators that produced a subscore participate; their weights
    /// are renormalized to sum to 1.0. With no participating indicator the
    /// result is 0 flagged undetermined, which callers must not read as
    /// "0% bullish".
    pub fn aggregate(breakdown: &ScoreBreakdown, scheme: &WeightScheme) -> WeightedScore {
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        let mut contributors = Vec::new();
        let mut raw_weights = Vec::new();

        for (kind, subscore) in breakdown.entries() {
            let Some(subscore) = subscore else { continue };
            let weight = scheme.weight_for(kind);
            if weight <= 0.0 {
                continue;
            }
            weighted_sum += subscore * weight;
            total_weight += weight;
            contributors.push(kind);
            raw_weights.push((kind, weight));
        }

        if total_weight <= 0.0 {
            return WeightedScore::undetermined();
        }

        let weights_used = raw_weights
            .into_iter()
            .map(|(kind, weight)| AppliedWeight {
                kind,
                weight: weight / total_weight,
            })
            .collect();

        WeightedScore {
            value: weighted_sum / total_weight,
            undetermined: false,
            contributors,
            weights_used,
        }
    }
}
