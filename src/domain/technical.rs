//! Daily technical factors: adjusted prices, turnover and moving averages.
//!
//! The base history is `days + lookback` OHLC bars from the same recurrence
//! as [`crate::domain::ohlcv`], so the first `days` bars match the daily
//! basics for the same seed and anchor. No corporate actions are modelled:
//! both adjustment factors are 1.0 and every `_qfq`/`_hfq` field equals the
//! raw price.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::indicator::sma::calculate_sma;
use crate::domain::indicator::{LONGEST_MA_PERIOD, MA_PERIODS};
use crate::domain::numeric::round2;
use crate::domain::ohlcv::{generate_bars, OhlcvBar};
use crate::domain::sequence::SeededSequence;

pub const HFQ_FACTOR: f64 = 1.0;
pub const QFQ_FACTOR: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalFactor {
    #[serde(rename = "trade_date")]
    pub date: NaiveDate,
    pub open_hfq: f64,
    pub open_qfq: f64,
    pub high_hfq: f64,
    pub high_qfq: f64,
    pub low_hfq: f64,
    pub low_qfq: f64,
    pub close_hfq: f64,
    pub close_qfq: f64,
    pub pre_close: f64,
    pub turnover_rate: f64,
    pub turnover_rate_f: f64,
    pub volume_ratio: f64,
    pub ma_5: f64,
    pub ma_10: f64,
    pub ma_20: f64,
    pub ma_30: f64,
    pub ma_60: f64,
    pub ma_90: f64,
    pub ma_250: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechnicalFactorModel {
    /// Bars generated beyond the public window to feed the moving averages.
    pub lookback: usize,
    /// Window sizes feeding `ma_5` .. `ma_250`, slot for slot.
    pub periods: [usize; MA_PERIODS.len()],
}

impl Default for TechnicalFactorModel {
    fn default() -> Self {
        Self::new(LONGEST_MA_PERIOD)
    }
}

impl TechnicalFactorModel {
    pub fn new(lookback: usize) -> Self {
        Self {
            lookback,
            periods: MA_PERIODS,
        }
    }

    pub fn with_periods(self, periods: [usize; MA_PERIODS.len()]) -> Self {
        Self { periods, ..self }
    }

    /// Generate `days` technical factor points ending at `anchor`, newest first.
    pub fn generate(
        &self,
        seq: &mut SeededSequence,
        days: usize,
        anchor: NaiveDate,
    ) -> Vec<TechnicalFactor> {
        let bars = generate_bars(seq, days.saturating_add(self.lookback), anchor);
        let closes_qfq: Vec<f64> = bars.iter().map(|b| b.close * QFQ_FACTOR).collect();

        let averages: Vec<Vec<f64>> = self
            .periods
            .iter()
            .map(|&period| calculate_sma(&closes_qfq, period, days).values)
            .collect();

        bars.iter()
            .take(days)
            .enumerate()
            .map(|(i, bar)| {
                let turnover_rate = round2(5.0 * seq.next_f64());
                let volume_ratio = round2(0.5 + 2.0 * seq.next_f64());
                // A zero period yields no values; report it as 0.0.
                let ma = std::array::from_fn(|slot| {
                    round2(averages[slot].get(i).copied().unwrap_or(0.0))
                });
                build_point(bar, turnover_rate, volume_ratio, ma)
            })
            .collect()
    }
}

fn build_point(
    bar: &OhlcvBar,
    turnover_rate: f64,
    volume_ratio: f64,
    ma: [f64; MA_PERIODS.len()],
) -> TechnicalFactor {
    let [ma_5, ma_10, ma_20, ma_30, ma_60, ma_90, ma_250] = ma;
    TechnicalFactor {
        date: bar.date,
        open_hfq: round2(bar.open * HFQ_FACTOR),
        open_qfq: round2(bar.open * QFQ_FACTOR),
        high_hfq: round2(bar.high * HFQ_FACTOR),
        high_qfq: round2(bar.high * QFQ_FACTOR),
        low_hfq: round2(bar.low * HFQ_FACTOR),
        low_qfq: round2(bar.low * QFQ_FACTOR),
        close_hfq: round2(bar.close * HFQ_FACTOR),
        close_qfq: round2(bar.close * QFQ_FACTOR),
        pre_close: round2(bar.pre_close),
        turnover_rate,
        turnover_rate_f: round2(0.8 * turnover_rate),
        volume_ratio,
        ma_5,
        ma_10,
        ma_20,
        ma_30,
        ma_60,
        ma_90,
        ma_250,
    }
}
