//! Request-level orchestration: symbol → seed → model → window.
//!
//! Every call builds its own [`SeededSequence`], so nothing is shared between
//! requests and the same symbol, length and anchor always give the same items.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::indicator::LONGEST_MA_PERIOD;
use crate::domain::instrument::{Instrument, InstrumentSummary};
use crate::domain::ohlcv::{generate_daily_basics, DailyBasic};
use crate::domain::prediction::{generate_predictions, opening_prediction, PredictionPoint};
use crate::domain::sequence::SeededSequence;
use crate::domain::technical::{TechnicalFactor, TechnicalFactorModel};
use crate::domain::window::{paginate, PageRequest, Window, WindowPolicy};

pub const DEFAULT_HORIZON_DAYS: usize = 50;
pub const DEFAULT_MAX_PAGE_SIZE: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Predictions,
    DailyBasics,
    TechnicalFactors,
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::Predictions => write!(f, "predictions"),
            SeriesKind::DailyBasics => write!(f, "daily-basics"),
            SeriesKind::TechnicalFactors => write!(f, "technical-factors"),
        }
    }
}

impl FromStr for SeriesKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "predictions" => Ok(SeriesKind::Predictions),
            "daily-basics" | "daily_basics" => Ok(SeriesKind::DailyBasics),
            "technical-factors" | "daily-technical-factors" | "technical_factors" => {
                Ok(SeriesKind::TechnicalFactors)
            }
            other => Err(format!("unknown series kind: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Public series length.
    pub horizon_days: usize,
    /// Page size ceiling for series windows.
    pub max_page_size: u64,
    pub lookback_days: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            lookback_days: LONGEST_MA_PERIOD,
        }
    }
}

pub fn predictions_for(symbol: &str, days: usize, anchor: NaiveDate) -> Vec<PredictionPoint> {
    generate_predictions(&mut SeededSequence::from_symbol(symbol), days, anchor)
}

pub fn daily_basics_for(symbol: &str, days: usize, anchor: NaiveDate) -> Vec<DailyBasic> {
    generate_daily_basics(&mut SeededSequence::from_symbol(symbol), days, anchor)
}

pub fn technical_factors_for(
    symbol: &str,
    days: usize,
    anchor: NaiveDate,
    model: TechnicalFactorModel,
) -> Vec<TechnicalFactor> {
    model.generate(&mut SeededSequence::from_symbol(symbol), days, anchor)
}

/// Listing row: the instrument with its prediction point for the anchor date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstrumentQuote {
    #[serde(flatten)]
    pub point: PredictionPoint,
    #[serde(flatten)]
    pub instrument: InstrumentSummary,
}

pub fn quote_for(instrument: &Instrument, anchor: NaiveDate) -> InstrumentQuote {
    InstrumentQuote {
        point: opening_prediction(&mut SeededSequence::from_symbol(&instrument.symbol), anchor),
        instrument: instrument.into(),
    }
}

/// Generates and windows series with fixed settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketDataEngine {
    settings: GeneratorSettings,
}

impl MarketDataEngine {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    fn policy(&self) -> WindowPolicy {
        WindowPolicy::with_max_size(self.settings.max_page_size)
    }

    pub fn predictions(
        &self,
        symbol: &str,
        anchor: NaiveDate,
        request: PageRequest,
    ) -> Window<PredictionPoint> {
        let items = predictions_for(symbol, self.settings.horizon_days, anchor);
        tracing::debug!(symbol, days = items.len(), "generated predictions");
        self.policy().apply(items, request)
    }

    pub fn daily_basics(
        &self,
        symbol: &str,
        anchor: NaiveDate,
        request: PageRequest,
    ) -> Window<DailyBasic> {
        let items = daily_basics_for(symbol, self.settings.horizon_days, anchor);
        tracing::debug!(symbol, days = items.len(), "generated daily basics");
        self.policy().apply(items, request)
    }

    /// Window the instrument list, quoting only the instruments on the page.
    pub fn quotes(
        &self,
        instruments: Vec<Instrument>,
        anchor: NaiveDate,
        request: PageRequest,
    ) -> Window<InstrumentQuote> {
        paginate(instruments, request).map(|i| quote_for(&i, anchor))
    }

    pub fn technical_factors(
        &self,
        symbol: &str,
        anchor: NaiveDate,
        request: PageRequest,
    ) -> Window<TechnicalFactor> {
        let model = TechnicalFactorModel::new(self.settings.lookback_days);
        let items = technical_factors_for(symbol, self.settings.horizon_days, anchor, model);
        tracing::debug!(
            symbol,
            days = items.len(),
            lookback = model.lookback,
            "generated technical factors"
        );
        self.policy().apply(items, request)
    }
}

/// Calendar date used to anchor series generated now.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
