use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::enums::{EntityKind, OrderStatus, PaymentStatus};

/// One line of an order: an item and how many of it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub item_id: String,
    pub quantity: u32,
}

/// An order that may span several restaurants.
///
/// `items` and `amount_breakup` are both keyed by restaurant id and must
/// carry the same key set; the breakup values sum to `total_amount`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: BTreeMap<String, Vec<OrderLine>>,
    pub total_amount: f64,
    pub amount_breakup: BTreeMap<String, f64>,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
}

impl Order {
    /// Sum of the per-restaurant sub-totals.
    #[must_use]
    pub fn breakup_total(&self) -> f64 {
        self.amount_breakup.values().sum()
    }

    /// Restaurant ids this order touches.
    pub fn restaurant_ids(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }
}

impl Entity for Order {
    const KIND: EntityKind = EntityKind::Order;

    fn key(&self) -> &str {
        &self.id
    }
}
