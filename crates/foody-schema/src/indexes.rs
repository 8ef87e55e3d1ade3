//! Index catalog.
//!
//! Declares the indexes a storage backend must maintain per collection.
//! Unique indexes are the enforcement point for the schema's unique fields;
//! the rest serve lookups (`find_by`) and geospatial queries (`nearest`).

use foody_core::enums::EntityKind;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexKind {
    /// One document per value.
    Unique,
    /// Ordinary lookup index.
    Ascending,
    /// Spherical geo index over a GeoJSON point.
    Geo2dSphere,
}

/// One declared index. `field` is a dotted path for nested fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexSpec {
    pub field: &'static str,
    pub kind: IndexKind,
}

impl IndexSpec {
    const fn unique(field: &'static str) -> Self {
        Self {
            field,
            kind: IndexKind::Unique,
        }
    }

    const fn ascending(field: &'static str) -> Self {
        Self {
            field,
            kind: IndexKind::Ascending,
        }
    }

    const fn geo(field: &'static str) -> Self {
        Self {
            field,
            kind: IndexKind::Geo2dSphere,
        }
    }
}

/// Field holding the geo point of users and restaurants.
pub const GEO_FIELD: &str = "address.coordinates";

const USER_INDEXES: &[IndexSpec] = &[
    IndexSpec::unique("id"),
    IndexSpec::unique("email"),
    IndexSpec::ascending("phone"),
    IndexSpec::geo(GEO_FIELD),
];

const RESTAURANT_INDEXES: &[IndexSpec] = &[
    IndexSpec::unique("id"),
    IndexSpec::unique("email"),
    IndexSpec::ascending("name"),
    IndexSpec::geo(GEO_FIELD),
];

const ITEM_INDEXES: &[IndexSpec] = &[
    IndexSpec::unique("id"),
    IndexSpec::ascending("restaurantId"),
    IndexSpec::ascending("name"),
    IndexSpec::ascending("price"),
];

const MENU_INDEXES: &[IndexSpec] = &[
    IndexSpec::unique("itemId"),
    IndexSpec::ascending("restaurantId"),
];

const ORDER_INDEXES: &[IndexSpec] = &[
    IndexSpec::unique("id"),
    IndexSpec::ascending("orderStatus"),
    IndexSpec::ascending("paymentStatus"),
];

const FEEDBACK_INDEXES: &[IndexSpec] = &[
    IndexSpec::unique("id"),
    IndexSpec::ascending("restaurantId"),
    IndexSpec::ascending("rating"),
];

#[must_use]
pub const fn indexes_for(kind: EntityKind) -> &'static [IndexSpec] {
    match kind {
        EntityKind::User => USER_INDEXES,
        EntityKind::Restaurant => RESTAURANT_INDEXES,
        EntityKind::Item => ITEM_INDEXES,
        EntityKind::MenuEntry => MENU_INDEXES,
        EntityKind::Order => ORDER_INDEXES,
        EntityKind::Feedback => FEEDBACK_INDEXES,
    }
}

/// Fields with a plain lookup index.
pub fn lookup_fields(kind: EntityKind) -> impl Iterator<Item = &'static str> {
    indexes_for(kind)
        .iter()
        .filter(|spec| spec.kind == IndexKind::Ascending)
        .map(|spec| spec.field)
}

/// The geo-indexed field of `kind`, if it has one.
#[must_use]
pub fn geo_field(kind: EntityKind) -> Option<&'static str> {
    indexes_for(kind)
        .iter()
        .find(|spec| spec.kind == IndexKind::Geo2dSphere)
        .map(|spec| spec.field)
}
