//! Entity kinds and closed status enums.
//!
//! `EntityKind` uses `snake_case` serialization. The status enums keep the
//! exact strings stored in the collections (`"Delivered"`, `"Not Received"`),
//! so a document that deserializes into one of them is already known to hold
//! a permitted value.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// The six document kinds held by the data store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Restaurant,
    Item,
    MenuEntry,
    Order,
    Feedback,
}

impl EntityKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::User,
        Self::Restaurant,
        Self::Item,
        Self::MenuEntry,
        Self::Order,
        Self::Feedback,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Restaurant => "restaurant",
            Self::Item => "item",
            Self::MenuEntry => "menu_entry",
            Self::Order => "order",
            Self::Feedback => "feedback",
        }
    }

    /// Name of the collection that stores documents of this kind.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Restaurant => "restaurants",
            Self::Item => "items",
            Self::MenuEntry => "menu",
            Self::Order => "orders",
            Self::Feedback => "feedback",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts either the kind name (`menu_entry`) or its collection (`menu`).
impl FromStr for EntityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle || kind.collection() == needle)
            .ok_or_else(|| CoreError::UnknownKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// OrderStatus
// ---------------------------------------------------------------------------

/// Delivery status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum OrderStatus {
    Delivered,
    Pending,
}

impl OrderStatus {
    pub const VALUES: &'static [&'static str] = &["Delivered", "Pending"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Delivered => "Delivered",
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PaymentStatus
// ---------------------------------------------------------------------------

/// Payment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum PaymentStatus {
    Received,
    #[serde(rename = "Not Received")]
    NotReceived,
}

impl PaymentStatus {
    pub const VALUES: &'static [&'static str] = &["Received", "Not Received"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::NotReceived => "Not Received",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GeoKind
// ---------------------------------------------------------------------------

/// GeoJSON geometry tag. Only points are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum GeoKind {
    #[default]
    Point,
}

impl GeoKind {
    pub const VALUES: &'static [&'static str] = &["Point"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Point => "Point",
        }
    }
}

impl fmt::Display for GeoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(kind_menu_entry, EntityKind, EntityKind::MenuEntry, "menu_entry");
    test_serde_roundtrip!(order_pending, OrderStatus, OrderStatus::Pending, "Pending");
    test_serde_roundtrip!(
        payment_not_received,
        PaymentStatus,
        PaymentStatus::NotReceived,
        "Not Received"
    );
    test_serde_roundtrip!(geo_point, GeoKind, GeoKind::Point, "Point");

    #[test]
    fn display_matches_serde() {
        for status in [PaymentStatus::Received, PaymentStatus::NotReceived] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
        for status in [OrderStatus::Delivered, OrderStatus::Pending] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }

    #[test]
    fn values_tables_cover_every_variant() {
        assert_eq!(OrderStatus::VALUES, ["Delivered", "Pending"]);
        assert_eq!(PaymentStatus::VALUES, ["Received", "Not Received"]);
        assert!(OrderStatus::VALUES.contains(&OrderStatus::Delivered.as_str()));
        assert!(PaymentStatus::VALUES.contains(&PaymentStatus::NotReceived.as_str()));
    }

    #[test]
    fn kind_parses_from_name_or_collection() {
        assert_eq!("menu_entry".parse::<EntityKind>().unwrap(), EntityKind::MenuEntry);
        assert_eq!("menu".parse::<EntityKind>().unwrap(), EntityKind::MenuEntry);
        assert_eq!("Users".parse::<EntityKind>().unwrap(), EntityKind::User);
        assert_eq!("feedback".parse::<EntityKind>().unwrap(), EntityKind::Feedback);
    }

    #[test]
    fn kind_rejects_unknown_name() {
        let err = "carts".parse::<EntityKind>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownKind(name) if name == "carts"));
    }

    #[test]
    fn collections_are_distinct() {
        let mut names: Vec<_> = EntityKind::ALL.iter().map(|k| k.collection()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), EntityKind::ALL.len());
    }
}
