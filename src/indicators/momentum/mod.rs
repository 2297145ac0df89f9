pub mod macd;
pub mod rsi;
pub mod stoch_rsi;

pub use macd::calculate_macd;
pub use rsi::{calculate_rsi, rsi_series};
pub use stoch_rsi::calculate_stoch_rsi;
