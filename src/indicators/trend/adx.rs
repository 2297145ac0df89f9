//! ADX (Average Directional Index), Wilder's construction.

use crate::common::math;
use crate::models::indicators::{AdxIndicator, Candle};

/// Latest ADX with the directional indexes it was built from.
///
/// True range and directional movement are Wilder-smoothed over `period`,
/// DX is derived from the DI pair, and ADX is the Wilder-smoothed mean of
/// the DX series. Needs `2 * period + 1` candles for one smoothed step
/// past the seed.
pub fn calculate_adx(candles: &[Candle], period: usize) -> Option<AdxIndicator> {
    if period == 0 || candles.len() < 2 * period + 1 {
        return None;
    }

    let mut tr = Vec::with_capacity(candles.len() - 1);
    let mut plus_dm = Vec::with_capacity(candles.len() - 1);
    let mut minus_dm = Vec::with_capacity(candles.len() - 1);

    for pair in candles.windows(2) {
        let (prev, cur) = (&pair[0], &pair[1]);
        tr.push(math::true_range(cur.high, cur.low, prev.close));

        let up = cur.high - prev.high;
        let down = prev.low - cur.low;
        plus_dm.push(if up > down && up > 0.0 { up } else { 0.0 });
        minus_dm.push(if down > up && down > 0.0 { down } else { 0.0 });
    }

    let smoothed_tr = math::wilder_smooth_sum(&tr, period)?;
    let smoothed_plus = math::wilder_smooth_sum(&plus_dm, period)?;
    let smoothed_minus = math::wilder_smooth_sum(&minus_dm, period)?;

    let mut dx = Vec::with_capacity(smoothed_tr.len());
    let mut last_plus_di = 0.0;
    let mut last_minus_di = 0.0;
    for i in 0..smoothed_tr.len() {
        let range = smoothed_tr[i];
        let (plus_di, minus_di) = if range > 0.0 {
            (
                100.0 * smoothed_plus[i] / range,
                100.0 * smoothed_minus[i] / range,
            )
        } else {
            (0.0, 0.0)
        };
        last_plus_di = plus_di;
        last_minus_di = minus_di;

        let di_sum = plus_di + minus_di;
        dx.push(if di_sum > 0.0 {
            100.0 * (plus_di - minus_di).abs() / di_sum
        } else {
            0.0
        });
    }

    let adx = math::wilder_smooth_mean(&dx, period)?;
    let value = *adx.last()?;

    Some(AdxIndicator {
        value,
        plus_di: last_plus_di,
        minus_di: last_minus_di,
        period,
    })
}
