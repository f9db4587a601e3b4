//! Seeded pseudo-random stream and per-instrument seed derivation.
//!
//! The stream is a fixed linear congruential generator:
//! state = (state * 9301 + 49297) mod 233280, value = state / 233280.
//! It exists for reproducibility only. Every generator in [`crate::domain`]
//! consumes draws from its own [`SeededSequence`] instance.

pub const MULTIPLIER: u64 = 9301;
pub const INCREMENT: u64 = 49297;
pub const MODULUS: u64 = 233_280;

/// Seed used for symbols that carry no digits.
pub const FALLBACK_SEED: u64 = 123_456;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededSequence {
    state: u64,
}

impl SeededSequence {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn from_symbol(symbol: &str) -> Self {
        Self::new(instrument_seed(symbol))
    }

    /// Current register value.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advance the register and return a value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        // Same transition as the unreduced state, mod MODULUS.
        self.state = ((self.state % MODULUS) * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }
}

/// Derive the seed for an instrument symbol: its digits read as a decimal
/// integer, or [`FALLBACK_SEED`] when the symbol has none.
///
/// Digit runs too long for a `u64` are folded modulo [`MODULUS`], which
/// produces the same draw stream as the exact integer would.
pub fn instrument_seed(symbol: &str) -> u64 {
    let digits: String = symbol.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return FALLBACK_SEED;
    }
    digits.parse::<u64>().unwrap_or_else(|_| {
        digits
            .bytes()
            .fold(0, |acc, b| (acc * 10 + u64::from(b - b'0')) % MODULUS)
    })
}
