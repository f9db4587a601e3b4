//! CSV instrument registry adapter.
//!
//! Expected columns: `id,symbol,name[,area,industry,exchange,list_date]`.
//! The file is read once at construction; lookups are served from memory.

use crate::domain::error::SynthError;
use crate::domain::instrument::Instrument;
use crate::ports::instrument_port::InstrumentPort;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub struct CsvRegistryAdapter {
    instruments: Vec<Instrument>,
}

impl CsvRegistryAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SynthError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| SynthError::Registry {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;
        let adapter = Self::from_csv(&content)?;
        tracing::info!(
            path = %path.display(),
            count = adapter.instruments.len(),
            "loaded instrument registry"
        );
        Ok(adapter)
    }

    pub fn from_csv(content: &str) -> Result<Self, SynthError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());
        let mut instruments = Vec::new();
        let mut seen = HashSet::new();

        for (line, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| SynthError::Registry {
                reason: format!("CSV parse error: {}", e),
            })?;
            // Header is line 1.
            let row = line + 2;

            let id: u32 = record
                .get(0)
                .ok_or_else(|| SynthError::Registry {
                    reason: format!("row {}: missing id column", row),
                })?
                .parse()
                .map_err(|e| SynthError::Registry {
                    reason: format!("row {}: invalid id: {}", row, e),
                })?;

            let symbol = required(&record, 1, "symbol", row)?;
            let name = required(&record, 2, "name", row)?;

            if !seen.insert(symbol.clone()) {
                return Err(SynthError::Registry {
                    reason: format!("row {}: duplicate symbol {}", row, symbol),
                });
            }

            instruments.push(Instrument {
                id,
                symbol,
                name,
                area: optional(&record, 3),
                industry: optional(&record, 4),
                exchange: optional(&record, 5),
                list_date: optional(&record, 6),
            });
        }

        Ok(Self { instruments })
    }
}

fn required(record: &csv::StringRecord, idx: usize, column: &str, row: usize) -> Result<String, SynthError> {
    match record.get(idx) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(SynthError::Registry {
            reason: format!("row {}: missing {} column", row, column),
        }),
    }
}

fn optional(record: &csv::StringRecord, idx: usize) -> Option<String> {
    record
        .get(idx)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl InstrumentPort for CsvRegistryAdapter {
    fn find_instrument(&self, id_or_symbol: &str) -> Result<Instrument, SynthError> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "id,symbol,name,area,industry,exchange,list_date\n\
        1,600519,贵州茅台,贵州,白酒,SSE,20010827\n\
        2,000858,五粮液,四川,白酒,SZSE,19980427\n\
        3,BABA,阿里巴巴,,,,\n";

    #[test]
    fn parses_all_rows() {
        let adapter = CsvRegistryAdapter::from_csv(SAMPLE).unwrap();
        let all = adapter.list_instruments().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].symbol, "600519");
        assert_eq!(all[0].industry.as_deref(), Some("白酒"));
        assert_eq!(all[2].area, None);
    }

    #[test]
    fn finds_by_id_and_symbol() {
        let adapter = CsvRegistryAdapter::from_csv(SAMPLE).unwrap();
        assert_eq!(adapter.find_instrument("2").unwrap().symbol, "000858");
        assert_eq!(adapter.find_instrument("BABA").unwrap().id, 3);
    }

    #[test]
    fn unknown_instrument_is_not_found() {
        let adapter = CsvRegistryAdapter::from_csv(SAMPLE).unwrap();
        let err = adapter.find_instrument("999999").unwrap_err();
        assert!(matches!(err, SynthError::InstrumentNotFound { id } if id == "999999"));
    }

    #[test]
    fn short_rows_leave_metadata_empty() {
        let adapter = CsvRegistryAdapter::from_csv("id,symbol,name\n5,NIO,蔚来汽车\n").unwrap();
        let nio = adapter.find_instrument("NIO").unwrap();
        assert_eq!(nio.exchange, None);
        assert_eq!(nio.list_date, None);
    }

    #[test]
    fn invalid_id_is_registry_error() {
        let err = CsvRegistryAdapter::from_csv("id,symbol,name\nx,NIO,蔚来汽车\n")
            .err()
            .unwrap();
        assert!(matches!(err, SynthError::Registry { .. }));
    }

    #[test]
    fn missing_name_is_registry_error() {
        let err = CsvRegistryAdapter::from_csv("id,symbol,name\n1,NIO\n").err().unwrap();
        assert!(err.to_string().contains("missing name"));
    }

    #[test]
    fn duplicate_symbol_rejected() {
        let err = CsvRegistryAdapter::from_csv("id,symbol,name\n1,NIO,a\n2,NIO,b\n")
            .err()
            .unwrap();
        assert!(err.to_string().contains("duplicate symbol NIO"));
    }

    #[test]
    fn from_file_reads_registry() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();
        let adapter = CsvRegistryAdapter::from_file(file.path()).unwrap();
        assert_eq!(adapter.list_instruments().unwrap().len(), 3);
    }

    #[test]
    fn from_file_missing_is_registry_error() {
        let err = CsvRegistryAdapter::from_file("/nonexistent/instruments.csv")
            .err()
            .unwrap();
        assert!(matches!(err, SynthError::Registry { .. }));
    }
}
