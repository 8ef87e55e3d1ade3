//! Sample data set for initial population and golden tests.
//!
//! The fixture format is one JSON object keyed by collection name, each key
//! holding an ordered array of documents. Documents stay as raw
//! `serde_json::Value` so they flow through validation exactly as any other
//! inbound document would.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::EntityKind;
use crate::errors::CoreError;

const SAMPLE_JSON: &str = include_str!("../fixtures/sample.json");

/// Order in which collections are seeded so that every referenced id is
/// inserted before the documents that point at it.
pub const SEED_ORDER: [EntityKind; 6] = [
    EntityKind::Restaurant,
    EntityKind::Item,
    EntityKind::MenuEntry,
    EntityKind::User,
    EntityKind::Order,
    EntityKind::Feedback,
];

/// Documents per collection, as loaded from a fixture file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SampleData {
    #[serde(default)]
    pub users: Vec<Value>,
    #[serde(default)]
    pub restaurants: Vec<Value>,
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub menu: Vec<Value>,
    #[serde(default)]
    pub orders: Vec<Value>,
    #[serde(default)]
    pub feedback: Vec<Value>,
}

impl SampleData {
    /// The built-in sample set: 3 users, 2 restaurants, 5 items, 5 menu rows,
    /// 3 orders, 3 feedback entries.
    pub fn load() -> Result<Self, CoreError> {
        Self::from_json(SAMPLE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a fixture file from disk.
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    #[must_use]
    pub fn documents(&self, kind: EntityKind) -> &[Value] {
        match kind {
            EntityKind::User => &self.users,
            EntityKind::Restaurant => &self.restaurants,
            EntityKind::Item => &self.items,
            EntityKind::MenuEntry => &self.menu,
            EntityKind::Order => &self.orders,
            EntityKind::Feedback => &self.feedback,
        }
    }

    /// Total number of documents across all collections.
    #[must_use]
    pub fn len(&self) -> usize {
        EntityKind::ALL.iter().map(|k| self.documents(*k).len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
