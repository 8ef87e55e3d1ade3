use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Address, Entity};
use crate::enums::EntityKind;

/// A customer account.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    /// Order ids, oldest first.
    #[serde(default)]
    pub order_history: Vec<String>,
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    fn key(&self) -> &str {
        &self.id
    }
}
