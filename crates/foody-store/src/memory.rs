//! In-memory persistence collaborator.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use foody_core::enums::EntityKind;
use foody_schema::{Persistence, PersistenceError, SchemaRegistry, indexes};
use serde_json::Value;

use crate::collection::Collection;
use crate::geo::Nearby;

/// Collections held in memory behind a single `RwLock`.
///
/// Unique fields are taken from the registry at construction, so the store
/// enforces exactly what the rule table declares.
#[derive(Debug)]
pub struct MemoryStore {
    unique: HashMap<EntityKind, Vec<&'static str>>,
    collections: RwLock<HashMap<EntityKind, Collection>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(registry: &SchemaRegistry) -> Self {
        let unique = registry
            .kinds()
            .into_iter()
            .filter_map(|kind| registry.unique_fields(kind).ok().map(|fields| (kind, fields)))
            .collect();
        Self {
            unique,
            collections: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<EntityKind, Collection>>, PersistenceError> {
        self.collections
            .read()
            .map_err(|_| PersistenceError::Backend("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<EntityKind, Collection>>, PersistenceError> {
        self.collections
            .write()
            .map_err(|_| PersistenceError::Backend("memory store lock poisoned".into()))
    }

    /// Check uniqueness, run `before_commit` on the accepted batch, then
    /// commit. The write lock is held throughout, so no other insert can slip
    /// between the check and the commit. If `before_commit` fails nothing is
    /// committed.
    pub(crate) fn insert_with<F>(
        &self,
        kind: EntityKind,
        batch: Vec<Value>,
        before_commit: F,
    ) -> Result<usize, PersistenceError>
    where
        F: FnOnce(&[Value]) -> Result<(), PersistenceError>,
    {
        let mut collections = self.write()?;
        let collection = collections.entry(kind).or_insert_with(|| {
            Collection::new(kind, self.unique.get(&kind).map_or(&[], Vec::as_slice))
        });

        collection.check_batch(&batch).inspect_err(|error| {
            tracing::warn!(%kind, %error, "batch refused by unique index");
        })?;
        before_commit(&batch)?;

        let written = batch.len();
        collection.commit(batch);
        tracing::debug!(%kind, written, total = collection.len(), "batch committed");
        Ok(written)
    }

    /// Number of stored documents of `kind`.
    pub fn count(&self, kind: EntityKind) -> Result<usize, PersistenceError> {
        Ok(self.read()?.get(&kind).map_or(0, Collection::len))
    }

    /// Every stored document of `kind`, in insertion order.
    pub fn all(&self, kind: EntityKind) -> Result<Vec<Value>, PersistenceError> {
        Ok(self
            .read()?
            .get(&kind)
            .map(|c| c.documents().to_vec())
            .unwrap_or_default())
    }

    /// Documents of `kind` whose `field` equals `value`.
    pub fn find_by(&self, kind: EntityKind, field: &str, value: &Value) -> Result<Vec<Value>, PersistenceError> {
        Ok(self
            .read()?
            .get(&kind)
            .map(|c| c.find_by(field, value).into_iter().cloned().collect())
            .unwrap_or_default())
    }

    /// Up to `limit` documents of `kind` nearest to `(longitude, latitude)`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Unsupported` if `kind` has no geo index.
    pub fn nearest(
        &self,
        kind: EntityKind,
        longitude: f64,
        latitude: f64,
        limit: usize,
    ) -> Result<Vec<Nearby>, PersistenceError> {
        let field = indexes::geo_field(kind)
            .ok_or_else(|| PersistenceError::Unsupported(format!("'{kind}' has no geo index")))?;
        Ok(self
            .read()?
            .get(&kind)
            .map(|c| c.nearest(field, [longitude, latitude], limit))
            .unwrap_or_default())
    }

    /// Drop every collection.
    pub fn reset(&self) -> Result<(), PersistenceError> {
        self.write()?.clear();
        tracing::info!("memory store reset");
        Ok(())
    }
}

impl Persistence for MemoryStore {
    fn exists(&self, kind: EntityKind, field: &str, value: &Value) -> Result<bool, PersistenceError> {
        Ok(self
            .read()?
            .get(&kind)
            .is_some_and(|c| c.contains(field, value)))
    }

    fn insert_many(&self, kind: EntityKind, documents: Vec<Value>) -> Result<usize, PersistenceError> {
        self.insert_with(kind, documents, |_| Ok(()))
    }
}
