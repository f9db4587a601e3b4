//! synthmarket: deterministic synthetic market data for demo APIs.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`], command-line entry in [`cli`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
