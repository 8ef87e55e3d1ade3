//! Validation, registry, and persistence error types.

use foody_core::enums::EntityKind;
use thiserror::Error;

/// A single rule violation, always paired with the dotted path of the
/// offending field (`address.coordinates.coordinates[1]`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is absent.
    #[error("Missing required field '{path}'")]
    MissingField { path: String },

    /// A present field has the wrong JSON type.
    #[error("Field '{path}' must be {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A numeric bound, string length, or item count was exceeded.
    #[error("Field '{path}' is out of range: {constraint}")]
    RangeViolation { path: String, constraint: String },

    /// A string did not match its declared pattern.
    #[error("Field '{path}' does not match pattern {pattern}")]
    PatternMismatch { path: String, pattern: String },

    /// A string is not one of the declared values.
    #[error("Field '{path}' must be one of {allowed:?}")]
    EnumViolation {
        path: String,
        allowed: &'static [&'static str],
    },

    /// A reference field is present but is not a usable identifier.
    #[error("Field '{path}' is not a well-formed identifier: {reason}")]
    ReferentialShape { path: String, reason: &'static str },

    /// Two fields of the same document disagree (amount breakup vs total).
    #[error("Field '{path}' is inconsistent: {reason}")]
    Inconsistent { path: String, reason: String },
}

impl ValidationError {
    /// Dotted path of the field that failed.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::MissingField { path }
            | Self::TypeMismatch { path, .. }
            | Self::RangeViolation { path, .. }
            | Self::PatternMismatch { path, .. }
            | Self::EnumViolation { path, .. }
            | Self::ReferentialShape { path, .. }
            | Self::Inconsistent { path, .. } => path,
        }
    }

    /// Stable machine-readable name of the violated rule.
    #[must_use]
    pub const fn rule(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::RangeViolation { .. } => "range_violation",
            Self::PatternMismatch { .. } => "pattern_mismatch",
            Self::EnumViolation { .. } => "enum_violation",
            Self::ReferentialShape { .. } => "referential_shape",
            Self::Inconsistent { .. } => "inconsistent",
        }
    }
}

/// Errors reported by a persistence collaborator.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// A unique field already holds this value (in storage or earlier in the batch).
    #[error("Duplicate value for unique field {kind}.{field}: {value}")]
    UniquenessViolation {
        kind: EntityKind,
        field: String,
        value: String,
    },

    /// The backend is unusable (poisoned lock, corrupt collection file).
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// The query needs an index the collection does not declare.
    #[error("Unsupported query: {0}")]
    Unsupported(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The rule table was set up incorrectly (duplicate registration,
    /// uniqueness lookup on a non-unique field).
    #[error("Schema configuration error: {0}")]
    Configuration(String),

    /// No rule set is registered for this kind.
    #[error("No schema registered for entity kind '{0}'")]
    NotRegistered(EntityKind),

    /// A single document failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// One document of a seed batch failed validation; nothing was persisted.
    #[error("{kind} batch rejected at document {index}: {source}")]
    BatchRejected {
        kind: EntityKind,
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// The persistence collaborator refused the batch.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// A document could not be converted to or from its typed record.
    #[error("Failed to convert {kind} document: {source}")]
    Serde {
        kind: EntityKind,
        #[source]
        source: serde_json::Error,
    },
}

impl SchemaError {
    /// The validation failure behind this error, if it is one.
    #[must_use]
    pub const fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(source) | Self::BatchRejected { source, .. } => Some(source),
            _ => None,
        }
    }
}
