//! JSONL-backed persistence collaborator.
//!
//! Each collection lives in `{data_dir}/{collection}.jsonl`. Files are loaded
//! into a [`MemoryStore`] on open; inserts append to the file before they are
//! committed in memory, so a refused batch never reaches disk.

use std::path::{Path, PathBuf};

use foody_core::enums::EntityKind;
use foody_schema::{Persistence, PersistenceError, SchemaRegistry};
use serde_json::Value;

use crate::geo::Nearby;
use crate::memory::MemoryStore;

#[derive(Debug)]
pub struct JsonlStore {
    dir: PathBuf,
    memory: MemoryStore,
}

impl JsonlStore {
    /// Open (or create) a store rooted at `dir`, loading every collection file
    /// that already exists.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the directory cannot be created, a file
    /// cannot be parsed, or a file holds duplicate unique values.
    pub fn open(dir: impl Into<PathBuf>, registry: &SchemaRegistry) -> Result<Self, PersistenceError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        let memory = MemoryStore::new(registry);

        for kind in EntityKind::ALL {
            let path = collection_path(&dir, kind);
            if !path.exists() {
                continue;
            }
            let documents: Vec<Value> = serde_jsonlines::json_lines(&path)?
                .collect::<std::io::Result<Vec<_>>>()
                .map_err(|e| PersistenceError::Backend(format!("{}: {e}", path.display())))?;
            let loaded = memory.insert_with(kind, documents, |_| Ok(()))?;
            tracing::debug!(%kind, loaded, path = %path.display(), "collection loaded");
        }

        Ok(Self { dir, memory })
    }

    /// Directory holding the collection files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn count(&self, kind: EntityKind) -> Result<usize, PersistenceError> {
        self.memory.count(kind)
    }

    pub fn all(&self, kind: EntityKind) -> Result<Vec<Value>, PersistenceError> {
        self.memory.all(kind)
    }

    pub fn find_by(&self, kind: EntityKind, field: &str, value: &Value) -> Result<Vec<Value>, PersistenceError> {
        self.memory.find_by(kind, field, value)
    }

    /// See [`MemoryStore::nearest`].
    pub fn nearest(
        &self,
        kind: EntityKind,
        longitude: f64,
        latitude: f64,
        limit: usize,
    ) -> Result<Vec<Nearby>, PersistenceError> {
        self.memory.nearest(kind, longitude, latitude, limit)
    }

    /// Delete every collection file and clear memory.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Io` if a file exists but cannot be removed.
    pub fn reset(&self) -> Result<(), PersistenceError> {
        for kind in EntityKind::ALL {
            let path = collection_path(&self.dir, kind);
            match std::fs::remove_file(&path) {
                Ok(()) => tracing::debug!(path = %path.display(), "collection file removed"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        self.memory.reset()
    }
}

impl Persistence for JsonlStore {
    fn exists(&self, kind: EntityKind, field: &str, value: &Value) -> Result<bool, PersistenceError> {
        self.memory.exists(kind, field, value)
    }

    fn insert_many(&self, kind: EntityKind, documents: Vec<Value>) -> Result<usize, PersistenceError> {
        let path = collection_path(&self.dir, kind);
        self.memory.insert_with(kind, documents, |batch| {
            serde_jsonlines::append_json_lines(&path, batch).map_err(PersistenceError::from)
        })
    }
}

fn collection_path(dir: &Path, kind: EntityKind) -> PathBuf {
    dir.join(format!("{}.jsonl", kind.collection()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn refused_batch_never_reaches_disk() {
        let dir = tempfile::tempdir().unwrap();
        let registry = SchemaRegistry::new();
        let store = JsonlStore::open(dir.path(), &registry).unwrap();

        store
            .insert_many(EntityKind::Item, vec![json!({"id": "item_001"})])
            .unwrap();
        store
            .insert_many(EntityKind::Item, vec![json!({"id": "item_001"})])
            .unwrap_err();

        let lines = std::fs::read_to_string(dir.path().join("items.jsonl")).unwrap();
        assert_eq!(lines.lines().count(), 1);
    }

    #[test]
    fn corrupt_file_is_a_backend_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("users.jsonl"), "{not json}\n").unwrap();
        let err = JsonlStore::open(dir.path(), &SchemaRegistry::new()).unwrap_err();
        assert!(matches!(err, PersistenceError::Backend(ref msg) if msg.contains("users.jsonl")));
    }

    #[test]
    fn reset_removes_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlStore::open(dir.path(), &SchemaRegistry::new()).unwrap();
        store
            .insert_many(EntityKind::Feedback, vec![json!({"id": "f1"})])
            .unwrap();
        assert!(dir.path().join("feedback.jsonl").exists());

        store.reset().unwrap();
        assert!(!dir.path().join("feedback.jsonl").exists());
        assert_eq!(store.count(EntityKind::Feedback).unwrap(), 0);
    }
}
