//! Error types for game configuration loading.

use thiserror::Error;

/// Errors that can occur when loading the game config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Failed to read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// RON parsing failed.
    #[error("Parse error in config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// A value is outside the range the scene can work with.
    #[error("Invalid config value '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}
