//! Moving-average indicators over newest-first series.
//!
//! - `IndicatorType`: indicator identity + parameters
//! - `IndicatorSeries`: values aligned index-for-index with the input prefix

pub mod sma;

/// Periods exposed as `ma_5` .. `ma_250` in technical factors.
pub const MA_PERIODS: [usize; 7] = [5, 10, 20, 30, 60, 90, 250];

/// Longest period in [`MA_PERIODS`]; the default technical-factor lookback.
pub const LONGEST_MA_PERIOD: usize = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorType {
    Sma(usize),
}

#[derive(Debug, Clone)]
pub struct IndicatorSeries {
    pub indicator_type: IndicatorType,
    pub values: Vec<f64>,
}
