#![allow(dead_code)]

use chrono::NaiveDate;
use std::collections::HashMap;
use synthmarket::domain::error::SynthError;
pub use synthmarket::domain::instrument::Instrument;
use synthmarket::ports::instrument_port::InstrumentPort;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn anchor() -> NaiveDate {
    date(2024, 6, 3)
}

pub struct MockRegistry {
    pub instruments: Vec<Instrument>,
    pub errors: HashMap<String, String>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            instruments: Vec::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_instrument(mut self, id: u32, symbol: &str, name: &str) -> Self {
        self.instruments.push(Instrument::new(id, symbol, name));
        self
    }

    pub fn with_error(mut self, key: &str, reason: &str) -> Self {
        self.errors.insert(key.to_string(), reason.to_string());
        self
    }

    /// Registry with `count` instruments named `SYM{n}`.
    pub fn with_generated(mut self, count: u32) -> Self {
        for id in 1..=count {
            self.instruments
                .push(Instrument::new(id, format!("SYM{id}"), format!("Instrument {id}")));
        }
        self
    }
}

impl InstrumentPort for MockRegistry {
    fn find_instrument(&self, id_or_symbol: &str) -> Result<Instrument, SynthError> {
        if let Some(reason) = self.errors.get(id_or_symbol) {
            return Err(SynthError::Registry {
                reason: reason.clone(),
            });
        }
        self.instruments
            .iter()
            .find(|i| i.matches(id_or_symbol))
            .cloned()
            .ok_or_else(|| SynthError::InstrumentNotFound {
                id: id_or_symbol.to_string(),
            })
    }

    fn list_instruments(&self) -> Result<Vec<Instrument>, SynthError> {
        Ok(self.instruments.clone())
    }
}

pub fn sample_registry() -> MockRegistry {
    MockRegistry::new()
        .with_instrument(1, "BABA", "阿里巴巴")
        .with_instrument(2, "600519", "贵州茅台")
        .with_instrument(3, "000858", "五粮液")
}
