//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `FOODY_*` variable could not be merged or extracted.
    #[error("Failed to load foody configuration: {0}")]
    Figment(#[from] figment::Error),

    /// Merged settings that parse but cannot be used.
    #[error("Unusable value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
