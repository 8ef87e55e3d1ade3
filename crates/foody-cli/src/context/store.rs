use anyhow::Context;
use foody_config::{StoreBackend, StoreConfig};
use foody_core::enums::EntityKind;
use foody_schema::{Persistence, PersistenceError, SchemaRegistry};
use foody_store::{JsonlStore, MemoryStore, Nearby};
use serde_json::Value;

/// The configured persistence backend.
#[derive(Debug)]
pub enum Store {
    Memory(MemoryStore),
    Jsonl(JsonlStore),
}

impl Store {
    pub fn open(config: &StoreConfig, registry: &SchemaRegistry) -> anyhow::Result<Self> {
        match config.backend {
            StoreBackend::Memory => Ok(Self::Memory(MemoryStore::new(registry))),
            StoreBackend::Jsonl => {
                let store = JsonlStore::open(&config.data_dir, registry).with_context(|| {
                    format!("failed to open collections in {}", config.data_dir.display())
                })?;
                Ok(Self::Jsonl(store))
            }
        }
    }

    pub fn count(&self, kind: EntityKind) -> Result<usize, PersistenceError> {
        match self {
            Self::Memory(store) => store.count(kind),
            Self::Jsonl(store) => store.count(kind),
        }
    }

    pub fn nearest(
        &self,
        kind: EntityKind,
        longitude: f64,
        latitude: f64,
        limit: usize,
    ) -> Result<Vec<Nearby>, PersistenceError> {
        match self {
            Self::Memory(store) => store.nearest(kind, longitude, latitude, limit),
            Self::Jsonl(store) => store.nearest(kind, longitude, latitude, limit),
        }
    }

    pub fn reset(&self) -> Result<(), PersistenceError> {
        match self {
            Self::Memory(store) => store.reset(),
            Self::Jsonl(store) => store.reset(),
        }
    }
}

impl Persistence for Store {
    fn exists(&self, kind: EntityKind, field: &str, value: &Value) -> Result<bool, PersistenceError> {
        match self {
            Self::Memory(store) => store.exists(kind, field, value),
            Self::Jsonl(store) => store.exists(kind, field, value),
        }
    }

    fn insert_many(&self, kind: EntityKind, documents: Vec<Value>) -> Result<usize, PersistenceError> {
        match self {
            Self::Memory(store) => store.insert_many(kind, documents),
            Self::Jsonl(store) => store.insert_many(kind, documents),
        }
    }
}
