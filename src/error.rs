//! Error types for session configuration

/// Error raised when a session cannot be built from its settings
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// A field holds a value the simulation cannot run with
    #[error("invalid configuration: {field} {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },

    /// Settings JSON could not be parsed
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Settings file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
