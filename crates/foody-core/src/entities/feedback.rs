use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::enums::EntityKind;

/// A rating left for a restaurant. Ratings run from 1 to 5 and may be fractional.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub restaurant_id: String,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Entity for Feedback {
    const KIND: EntityKind = EntityKind::Feedback;

    fn key(&self) -> &str {
        &self.id
    }
}
