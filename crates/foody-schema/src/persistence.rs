//! The storage capability the registry consumes.

use foody_core::enums::EntityKind;
use serde_json::Value;

use crate::error::PersistenceError;

/// Minimal persistence collaborator.
///
/// Implementations own their concurrency control and must enforce unique
/// indexes atomically inside `insert_many`: a batch containing any value that
/// collides with storage or with an earlier document of the same batch is
/// refused as a whole with [`PersistenceError::UniquenessViolation`].
pub trait Persistence {
    /// Whether a document of `kind` already holds `value` in `field`.
    fn exists(&self, kind: EntityKind, field: &str, value: &Value) -> Result<bool, PersistenceError>;

    /// Commit an already-validated batch. Returns the number of documents written.
    fn insert_many(&self, kind: EntityKind, documents: Vec<Value>) -> Result<usize, PersistenceError>;
}

impl<P: Persistence + ?Sized> Persistence for &P {
    fn exists(&self, kind: EntityKind, field: &str, value: &Value) -> Result<bool, PersistenceError> {
        (**self).exists(kind, field, value)
    }

    fn insert_many(&self, kind: EntityKind, documents: Vec<Value>) -> Result<usize, PersistenceError> {
        (**self).insert_many(kind, documents)
    }
}
