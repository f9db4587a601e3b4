//! Simple moving average looking into the past of a newest-first series.
//!
//! SMA(n)[i] = (P[i] + P[i+1] + ... + P[i+n-1]) / n
//! Near the oldest end fewer than n values may exist; the missing terms count
//! as zero and the divisor stays n.

use crate::domain::indicator::{IndicatorSeries, IndicatorType};

/// Average of `values[index..index + period]`, clipped to the slice, over `period`.
pub fn trailing_mean(values: &[f64], index: usize, period: usize) -> f64 {
    if period == 0 || index >= values.len() {
        return 0.0;
    }
    let end = (index + period).min(values.len());
    values[index..end].iter().sum::<f64>() / period as f64
}

/// SMA for the first `count` indices of a newest-first series.
pub fn calculate_sma(values: &[f64], period: usize, count: usize) -> IndicatorSeries {
    let count = count.min(values.len());
    let values = if period == 0 {
        Vec::new()
    } else {
        (0..count)
            .map(|i| trailing_mean(values, i, period))
            .collect()
    };

    IndicatorSeries {
        indicator_type: IndicatorType::Sma(period),
        values,
    }
}
