//! Technical indicator library.
//!
//! Each indicator is an independent free function over a candle slice:
//! `calculate_*(candles, params) -> Option<...>`. Insufficient data and
//! arithmetic degeneracies degrade to `None` for that indicator only; no
//! indicator can abort the pipeline for the others.

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;
