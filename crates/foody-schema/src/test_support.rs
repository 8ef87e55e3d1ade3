//! In-crate persistence double for registry tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use foody_core::enums::EntityKind;
use serde_json::Value;

use crate::error::PersistenceError;
use crate::persistence::Persistence;
use crate::standard;

/// Keeps every committed document and counts `insert_many` calls.
/// Unique fields come from the standard rule sets.
#[derive(Debug, Default)]
pub struct RecordingStore {
    documents: Mutex<HashMap<EntityKind, Vec<Value>>>,
    insert_calls: AtomicUsize,
}

impl RecordingStore {
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.documents
            .lock()
            .unwrap()
            .get(&kind)
            .map_or(0, Vec::len)
    }
}

impl Persistence for RecordingStore {
    fn exists(&self, kind: EntityKind, field: &str, value: &Value) -> Result<bool, PersistenceError> {
        let documents = self.documents.lock().unwrap();
        Ok(documents
            .get(&kind)
            .is_some_and(|docs| docs.iter().any(|doc| doc.get(field) == Some(value))))
    }

    fn insert_many(&self, kind: EntityKind, batch: Vec<Value>) -> Result<usize, PersistenceError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        let mut documents = self.documents.lock().unwrap();
        let existing = documents.entry(kind).or_default();

        for field in standard::for_kind(kind).unique_fields() {
            for (i, doc) in batch.iter().enumerate() {
                let Some(value) = doc.get(field) else {
                    continue;
                };
                let clash = existing.iter().chain(&batch[..i]).any(|other| other.get(field) == Some(value));
                if clash {
                    return Err(PersistenceError::UniquenessViolation {
                        kind,
                        field: field.to_string(),
                        value: value.to_string(),
                    });
                }
            }
        }

        let written = batch.len();
        existing.extend(batch);
        Ok(written)
    }
}
