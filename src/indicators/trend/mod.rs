pub mod adx;
pub mod ema;

pub use adx::calculate_adx;
pub use ema::calculate_ema_trend;
