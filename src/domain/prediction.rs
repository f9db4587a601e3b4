//! Price walk with an attached prediction signal.
//!
//! Two draws set the starting state, then every point, index 0 included, is
//! one step from the state before it. Index 0 is the anchor date and each
//! later index is one day further into the past. A step moves the price by at most
//! ±5% of the prior value (never below 1.0) and the prediction by at most
//! ±0.2 (clamped to [-1, 1]).

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::domain::numeric::{round2, round4};
use crate::domain::sequence::SeededSequence;

pub const MIN_PRICE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionPoint {
    #[serde(rename = "trade_date")]
    pub date: NaiveDate,
    pub prediction: f64,
    pub price: f64,
}

/// Generate `days` prediction points ending at `anchor`, newest first.
pub fn generate_predictions(
    seq: &mut SeededSequence,
    days: usize,
    anchor: NaiveDate,
) -> Vec<PredictionPoint> {
    let mut points = Vec::with_capacity(days);
    if days == 0 {
        return points;
    }

    let mut walk = Walk::start(seq);
    for i in 0..days {
        walk.step(seq);
        points.push(walk.point(day_before(anchor, i)));
    }

    points
}

/// The anchor-date point alone, without walking further back.
pub fn opening_prediction(seq: &mut SeededSequence, anchor: NaiveDate) -> PredictionPoint {
    let mut walk = Walk::start(seq);
    walk.step(seq);
    walk.point(anchor)
}

/// Unrounded walk state carried from one point to the next.
struct Walk {
    price: f64,
    prediction: f64,
}

impl Walk {
    /// Starting state; not itself an emitted point.
    fn start(seq: &mut SeededSequence) -> Self {
        let price = 50.0 + 150.0 * seq.next_f64();
        let prediction = 2.0 * seq.next_f64() - 1.0;
        Self { price, prediction }
    }

    fn step(&mut self, seq: &mut SeededSequence) {
        let price_change = (seq.next_f64() * 0.1 - 0.05) * self.price;
        self.price = (self.price + price_change).max(MIN_PRICE);

        let prediction_change = seq.next_f64() * 0.4 - 0.2;
        self.prediction = (self.prediction + prediction_change).clamp(-1.0, 1.0);
    }

    fn point(&self, date: NaiveDate) -> PredictionPoint {
        PredictionPoint {
            date,
            prediction: round4(self.prediction),
            price: round2(self.price),
        }
    }
}

/// `anchor - offset` days, saturating at the earliest representable date.
pub(crate) fn day_before(anchor: NaiveDate, offset: usize) -> NaiveDate {
    anchor
        .checked_sub_days(Days::new(offset as u64))
        .unwrap_or(NaiveDate::MIN)
}
