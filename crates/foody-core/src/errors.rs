//! Cross-cutting error types.
//!
//! Validation and persistence errors live in `foody-schema` next to the
//! registry that classifies them. A unified error is deferred to `foody-cli`.

use thiserror::Error;

/// Errors that can be raised by any foody crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An entity kind name did not match any known kind.
    #[error("Unknown entity kind: {0}")]
    UnknownKind(String),

    /// The embedded or supplied fixture set could not be parsed.
    #[error("Fixture data is malformed: {0}")]
    Fixtures(#[from] serde_json::Error),

    /// A fixture file could not be read.
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),
}
