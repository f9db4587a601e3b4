//! Daily OHLC bars and the "daily basics" view built on them.
//!
//! Bars are generated newest first. Each bar opens within ±2% of the close
//! carried from the bar before it, and that carried close becomes its
//! `pre_close`. The first bar has no predecessor, so its `pre_close` is a
//! synthetic ±2% perturbation of its own close.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::numeric::round2;
use crate::domain::prediction::day_before;
use crate::domain::sequence::SeededSequence;

/// Unrounded bar as produced by the recurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct OhlcvBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub pre_close: f64,
    pub volume: u64,
}

impl OhlcvBar {
    /// `close - pre_close`
    pub fn change(&self) -> f64 {
        self.close - self.pre_close
    }

    /// `volume * close`
    pub fn amount(&self) -> f64 {
        self.volume as f64 * self.close
    }
}

/// Rounded daily basics as exposed by the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBasic {
    #[serde(rename = "trade_date")]
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub pre_close: f64,
    pub change: f64,
    pub pct_chg: f64,
    pub volume: u64,
    pub amount: f64,
}

impl From<&OhlcvBar> for DailyBasic {
    fn from(bar: &OhlcvBar) -> Self {
        let change = round2(bar.change());
        Self {
            date: bar.date,
            open: round2(bar.open),
            high: round2(bar.high),
            low: round2(bar.low),
            close: round2(bar.close),
            pre_close: round2(bar.pre_close),
            change,
            pct_chg: round2(100.0 * change / bar.pre_close),
            volume: bar.volume,
            amount: round2(bar.amount()),
        }
    }
}

/// Run the OHLC recurrence for `count` bars ending at `anchor`.
pub fn generate_bars(seq: &mut SeededSequence, count: usize, anchor: NaiveDate) -> Vec<OhlcvBar> {
    let mut bars = Vec::with_capacity(count);
    if count == 0 {
        return bars;
    }

    let mut last_close = 50.0 + 150.0 * seq.next_f64();

    for i in 0..count {
        let open = last_close * (1.0 + (0.04 * seq.next_f64() - 0.02));
        let high = open * (1.0 + 0.05 * seq.next_f64());
        let low = open * (1.0 - 0.05 * seq.next_f64());
        let close = low + seq.next_f64() * (high - low);

        let pre_close = if i == 0 {
            close * (1.0 + (0.04 * seq.next_f64() - 0.02))
        } else {
            last_close
        };
        last_close = close;

        let volume = (10_000.0 + 100_000.0 * seq.next_f64()).round() as u64;

        bars.push(OhlcvBar {
            date: day_before(anchor, i),
            open,
            high,
            low,
            close,
            pre_close,
            volume,
        });
    }

    bars
}

/// Generate `days` daily basics ending at `anchor`, newest first.
pub fn generate_daily_basics(
    seq: &mut SeededSequence,
    days: usize,
    anchor: NaiveDate,
) -> Vec<DailyBasic> {
    generate_bars(seq, days, anchor)
        .iter()
        .map(DailyBasic::from)
        .collect()
}
