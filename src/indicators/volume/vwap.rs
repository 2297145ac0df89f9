//! VWAP bias: latest close against the cumulative volume-weighted
//! average price over the full series.

use crate::models::indicators::{Candle, TrendPosition, VwapIndicator};

pub fn calculate_vwap(candles: &[Candle]) -> Option<VwapIndicator> {
    let mut weighted_sum = 0.0;
    let mut volume_sum = 0.0;
    for candle in candles {
        let volume = candle.volume?;
        weighted_sum += volume * candle.typical_price();
        volume_sum += volume;
    }
    if volume_sum <= 0.0 {
        return None;
    }

    let vwap = weighted_sum / volume_sum;
    let close = candles.last()?.close;
    let position = if close > vwap {
        TrendPosition::Above
    } else {
        TrendPosition::Below
    };

    Some(VwapIndicator {
        vwap,
        close,
        position,
    })
}
