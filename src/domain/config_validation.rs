//! Configuration validation.
//!
//! Validates the `[generator]`, `[server]` and `[log]` sections before the
//! service starts.

use crate::domain::error::SynthError;
use crate::ports::config_port::ConfigPort;
use std::net::SocketAddr;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn validate_generator_config(config: &dyn ConfigPort) -> Result<(), SynthError> {
    validate_positive_int(config, "generator", "horizon_days")?;
    validate_positive_int(config, "generator", "max_page_size")?;
    validate_non_negative_int(config, "generator", "lookback_days")?;
    Ok(())
}

pub fn validate_service_config(config: &dyn ConfigPort) -> Result<(), SynthError> {
    validate_generator_config(config)?;
    validate_listen(config)?;
    validate_registry_path(config)?;
    validate_log_level(config)?;
    Ok(())
}

fn parse_int(config: &dyn ConfigPort, section: &str, key: &str) -> Result<Option<i64>, SynthError> {
    match config.get_string(section, key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| SynthError::ConfigInvalid {
                section: section.to_string(),
                key: key.to_string(),
                reason: format!("{} must be an integer", key),
            }),
    }
}

fn validate_positive_int(config: &dyn ConfigPort, section: &str, key: &str) -> Result<(), SynthError> {
    if let Some(value) = parse_int(config, section, key)? {
        if value < 1 {
            return Err(SynthError::ConfigInvalid {
                section: section.to_string(),
                key: key.to_string(),
                reason: format!("{} must be at least 1", key),
            });
        }
    }
    Ok(())
}

fn validate_non_negative_int(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<(), SynthError> {
    if let Some(value) = parse_int(config, section, key)? {
        if value < 0 {
            return Err(SynthError::ConfigInvalid {
                section: section.to_string(),
                key: key.to_string(),
                reason: format!("{} must be non-negative", key),
            });
        }
    }
    Ok(())
}

fn validate_listen(config: &dyn ConfigPort) -> Result<(), SynthError> {
    match config.get_string("server", "listen") {
        Some(addr) if addr.trim().parse::<SocketAddr>().is_err() => {
            Err(SynthError::ConfigInvalid {
                section: "server".to_string(),
                key: "listen".to_string(),
                reason: format!("'{}' is not a socket address", addr.trim()),
            })
        }
        _ => Ok(()),
    }
}

fn validate_registry_path(config: &dyn ConfigPort) -> Result<(), SynthError> {
    match config.get_string("registry", "path") {
        Some(p) if p.trim().is_empty() => Err(SynthError::ConfigInvalid {
            section: "registry".to_string(),
            key: "path".to_string(),
            reason: "path must not be empty".to_string(),
        }),
        _ => Ok(()),
    }
}

fn validate_log_level(config: &dyn ConfigPort) -> Result<(), SynthError> {
    match config.get_string("log", "level") {
        Some(level) if !LOG_LEVELS.contains(&level.trim().to_lowercase().as_str()) => {
            Err(SynthError::ConfigInvalid {
                section: "log".to_string(),
                key: "level".to_string(),
                reason: format!("unknown level '{}'", level.trim()),
            })
        }
        _ => Ok(()),
    }
}
