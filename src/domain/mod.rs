//! Core domain types and logic: seeded generators and the pagination policy.

pub mod sequence;
pub mod numeric;
pub mod prediction;
pub mod ohlcv;
pub mod indicator;
pub mod technical;
pub mod window;
pub mod series;
pub mod instrument;
pub mod config_validation;
pub mod error;
