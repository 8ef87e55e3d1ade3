//! One collection: its documents plus hash indexes over unique and lookup fields.

use std::collections::{HashMap, HashSet};

use foody_core::enums::EntityKind;
use foody_schema::PersistenceError;
use foody_schema::indexes;
use serde_json::Value;

use crate::geo::{self, Nearby};

/// Index key for a field value: its canonical JSON text.
fn index_key(value: &Value) -> String {
    value.to_string()
}

/// Value as shown in error messages: strings unquoted, anything else as JSON.
fn display_value(value: &Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), str::to_string)
}

#[derive(Debug)]
pub(crate) struct Collection {
    kind: EntityKind,
    documents: Vec<Value>,
    /// Declaration order is kept so the first clashing field is reported deterministically.
    unique: Vec<(&'static str, HashMap<String, usize>)>,
    lookup: HashMap<&'static str, HashMap<String, Vec<usize>>>,
}

impl Collection {
    pub(crate) fn new(kind: EntityKind, unique_fields: &[&'static str]) -> Self {
        Self {
            kind,
            documents: Vec::new(),
            unique: unique_fields.iter().map(|f| (*f, HashMap::new())).collect(),
            lookup: indexes::lookup_fields(kind)
                .map(|f| (f, HashMap::new()))
                .collect(),
        }
    }

    fn unique_index(&self, field: &str) -> Option<&HashMap<String, usize>> {
        self.unique
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, index)| index)
    }

    pub(crate) fn len(&self) -> usize {
        self.documents.len()
    }

    pub(crate) fn documents(&self) -> &[Value] {
        &self.documents
    }

    /// Refuse the batch if any unique value is already stored or repeats
    /// inside the batch. Nothing is modified.
    pub(crate) fn check_batch(&self, batch: &[Value]) -> Result<(), PersistenceError> {
        for (field, index) in &self.unique {
            let mut seen = HashSet::new();
            for document in batch {
                let Some(value) = geo::value_at(document, field) else {
                    continue;
                };
                let key = index_key(value);
                if index.contains_key(&key) || !seen.insert(key) {
                    return Err(PersistenceError::UniquenessViolation {
                        kind: self.kind,
                        field: (*field).to_string(),
                        value: display_value(value),
                    });
                }
            }
        }
        Ok(())
    }

    /// Append a batch that already passed [`check_batch`](Self::check_batch).
    pub(crate) fn commit(&mut self, batch: Vec<Value>) {
        for document in batch {
            let position = self.documents.len();
            for (field, index) in &mut self.unique {
                if let Some(value) = geo::value_at(&document, field) {
                    index.insert(index_key(value), position);
                }
            }
            for (field, index) in &mut self.lookup {
                if let Some(value) = geo::value_at(&document, field) {
                    index.entry(index_key(value)).or_default().push(position);
                }
            }
            self.documents.push(document);
        }
    }

    pub(crate) fn contains(&self, field: &str, value: &Value) -> bool {
        if let Some(index) = self.unique_index(field) {
            return index.contains_key(&index_key(value));
        }
        !self.find_by(field, value).is_empty()
    }

    /// Documents whose `field` equals `value`, in insertion order. Indexed
    /// fields are answered from the index; anything else is scanned.
    pub(crate) fn find_by(&self, field: &str, value: &Value) -> Vec<&Value> {
        let key = index_key(value);
        if let Some(index) = self.unique_index(field) {
            return index
                .get(&key)
                .map(|&i| vec![&self.documents[i]])
                .unwrap_or_default();
        }
        if let Some(index) = self.lookup.get(field) {
            return index
                .get(&key)
                .map(|positions| positions.iter().map(|&i| &self.documents[i]).collect())
                .unwrap_or_default();
        }
        self.documents
            .iter()
            .filter(|document| geo::value_at(document, field) == Some(value))
            .collect()
    }

    /// Up to `limit` documents closest to `origin`, nearest first.
    pub(crate) fn nearest(&self, field: &str, origin: [f64; 2], limit: usize) -> Vec<Nearby> {
        let mut hits: Vec<Nearby> = self
            .documents
            .iter()
            .filter_map(|document| {
                let point = geo::value_at(document, field).and_then(geo::point_coordinates)?;
                Some(Nearby {
                    distance_km: geo::distance_km(origin, point),
                    document: document.clone(),
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        hits.truncate(limit);
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn items() -> Collection {
        let mut collection = Collection::new(EntityKind::Item, &["id"]);
        collection.commit(vec![
            json!({"id": "item_001", "restaurantId": "rest_001", "price": 320}),
            json!({"id": "item_002", "restaurantId": "rest_001", "price": 280}),
            json!({"id": "item_004", "restaurantId": "rest_002", "price": 450}),
        ]);
        collection
    }

    #[test]
    fn lookup_index_serves_find_by() {
        let collection = items();
        let found = collection.find_by("restaurantId", &json!("rest_001"));
        let ids: Vec<_> = found.iter().map(|d| d["id"].as_str().unwrap()).collect();
        assert_eq!(ids, ["item_001", "item_002"]);
    }

    #[test]
    fn unindexed_field_falls_back_to_scan() {
        let mut collection = Collection::new(EntityKind::Item, &["id"]);
        collection.commit(vec![json!({"id": "item_001", "image": "a.jpg"})]);
        assert_eq!(collection.find_by("image", &json!("a.jpg")).len(), 1);
        assert!(collection.contains("image", &json!("a.jpg")));
    }

    #[test]
    fn check_batch_sees_storage_and_batch_duplicates() {
        let collection = items();
        let stored_clash = collection.check_batch(&[json!({"id": "item_001"})]);
        assert!(matches!(
            stored_clash,
            Err(PersistenceError::UniquenessViolation { ref value, .. }) if value == "item_001"
        ));

        let batch_clash = collection.check_batch(&[json!({"id": "item_009"}), json!({"id": "item_009"})]);
        assert!(batch_clash.is_err());

        assert!(collection.check_batch(&[json!({"id": "item_009"})]).is_ok());
    }

    #[test]
    fn numeric_lookup_uses_canonical_json() {
        let collection = items();
        assert_eq!(collection.find_by("price", &json!(450)).len(), 1);
        assert!(collection.find_by("price", &json!("450")).is_empty());
    }
}
