//! INI file configuration adapter.

use crate::domain::error::SynthError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

/// Values are trimmed on read; keys are case-insensitive.
pub struct FileConfigAdapter {
    ini: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SynthError> {
        let path = path.as_ref();
        let mut ini = Ini::new();
        ini.load(path).map_err(|reason| SynthError::ConfigParse {
            file: path.display().to_string(),
            reason,
        })?;
        Ok(Self { ini })
    }

    pub fn from_string(content: &str) -> Result<Self, SynthError> {
        let mut ini = Ini::new();
        ini.read(content.to_string())
            .map_err(|reason| SynthError::ConfigParse {
                file: "<inline>".to_string(),
                reason,
            })?;
        Ok(Self { ini })
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.ini.get(section, key).map(|v| v.trim().to_string())
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.get_string(section, key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.get_string(section, key)
            .and_then(|v| Self::parse_bool(&v))
            .unwrap_or(default)
    }
}
