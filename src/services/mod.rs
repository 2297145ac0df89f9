//! Market data acquisition and batch scanning.

pub mod coingecko;
pub mod market_data;
pub mod scanner;

pub use coingecko::CoinGeckoClient;
pub use market_data::{ChangePeriod, CoinMarket, MarketDataError, MarketDataProvider};
pub use scanner::{scan, CoinScore};
