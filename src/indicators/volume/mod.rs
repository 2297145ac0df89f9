pub mod spike;
pub mod vwap;

pub use spike::calculate_volume_spike;
pub use vwap::calculate_vwap;
