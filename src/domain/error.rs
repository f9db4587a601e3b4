//! Domain error types.

/// Top-level error type for synthmarket.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("instrument not found: {id}")]
    InstrumentNotFound { id: String },

    #[error("registry error: {reason}")]
    Registry { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&SynthError> for std::process::ExitCode {
    fn from(err: &SynthError) -> Self {
        let code: u8 = match err {
            SynthError::Io(_) => 1,
            SynthError::ConfigParse { .. } | SynthError::ConfigInvalid { .. } => 2,
            SynthError::Registry { .. } => 3,
            SynthError::InstrumentNotFound { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
