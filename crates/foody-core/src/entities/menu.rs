use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::enums::EntityKind;

/// Availability row for one item. There is at most one row per item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub item_id: String,
    pub restaurant_id: String,
    pub available_quantity: f64,
}

impl Entity for MenuEntry {
    const KIND: EntityKind = EntityKind::MenuEntry;

    fn key(&self) -> &str {
        &self.item_id
    }
}
