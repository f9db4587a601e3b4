//! Instrument metadata as held by the registry.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub id: u32,
    pub symbol: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_date: Option<String>,
}

impl Instrument {
    pub fn new(id: u32, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            name: name.into(),
            area: None,
            industry: None,
            exchange: None,
            list_date: None,
        }
    }

    /// True when `key` is this instrument's id rendered as a string or its symbol.
    pub fn matches(&self, key: &str) -> bool {
        self.symbol == key || self.id.to_string() == key
    }
}

/// Row of the instrument listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstrumentSummary {
    pub stock_id: u32,
    pub symbol: String,
    pub name: String,
}

impl From<&Instrument> for InstrumentSummary {
    fn from(i: &Instrument) -> Self {
        Self {
            stock_id: i.id,
            symbol: i.symbol.clone(),
            name: i.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_id_or_symbol() {
        let i = Instrument::new(2, "600519", "贵州茅台");
        assert!(i.matches("2"));
        assert!(i.matches("600519"));
        assert!(!i.matches("02"));
        assert!(!i.matches("600036"));
    }

    #[test]
    fn optional_fields_skipped_when_absent() {
        let json = serde_json::to_value(Instrument::new(1, "BABA", "阿里巴巴")).unwrap();
        assert_eq!(json["symbol"], "BABA");
        assert!(json.get("area").is_none());
    }

    #[test]
    fn summary_from_instrument() {
        let s = InstrumentSummary::from(&Instrument::new(7, "600276", "恒瑞医药"));
        assert_eq!(s.stock_id, 7);
        assert_eq!(s.symbol, "600276");
    }
}
