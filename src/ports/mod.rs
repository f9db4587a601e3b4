//! Port traits consumed by the domain and implemented in [`crate::adapters`].

pub mod config_port;
pub mod instrument_port;
