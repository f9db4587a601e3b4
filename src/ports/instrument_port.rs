//! Instrument registry port trait.

use crate::domain::error::SynthError;
use crate::domain::instrument::Instrument;

pub trait InstrumentPort {
    /// Resolve an instrument by id (as a string) or by symbol.
    fn find_instrument(&self, id_or_symbol: &str) -> Result<Instrument, SynthError>;

    fn list_instruments(&self) -> Result<Vec<Instrument>, SynthError>;
}
