use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Address, Entity};
use crate::enums::EntityKind;

/// A restaurant listing and the ids of everything attached to it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub menu_items: Vec<String>,
    #[serde(default)]
    pub received_orders: Vec<String>,
    #[serde(default)]
    pub received_feedback: Vec<String>,
}

impl Entity for Restaurant {
    const KIND: EntityKind = EntityKind::Restaurant;

    fn key(&self) -> &str {
        &self.id
    }
}
