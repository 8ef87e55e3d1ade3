//! Rule sets for the six Foodylicious collections.
//!
//! The address/geo point sub-schemas are shared by users and restaurants so
//! coordinate range logic lives in one place.

use std::sync::LazyLock;

use foody_core::enums::{EntityKind, GeoKind, OrderStatus, PaymentStatus};
use regex::Regex;

use crate::rules::{DocumentCheck, FieldRule, Schema, ValueSpec};

/// Loose `local@domain.tld` check.
pub const EMAIL_PATTERN: &str = r"^.+@.+\..+$";

/// Upper bound on free-text descriptions, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Rule set for `kind`.
#[must_use]
pub fn for_kind(kind: EntityKind) -> Schema {
    match kind {
        EntityKind::User => user(),
        EntityKind::Restaurant => restaurant(),
        EntityKind::Item => item(),
        EntityKind::MenuEntry => menu_entry(),
        EntityKind::Order => order(),
        EntityKind::Feedback => feedback(),
    }
}

/// `{ type: "Point", coordinates: [longitude, latitude] }`
#[must_use]
pub fn geo_point() -> Schema {
    Schema::new()
        .field(FieldRule::required(
            "type",
            ValueSpec::string().one_of(GeoKind::VALUES),
        ))
        .field(FieldRule::required("coordinates", ValueSpec::position()))
}

#[must_use]
pub fn address() -> Schema {
    Schema::new()
        .field(FieldRule::required("addressText", ValueSpec::string()))
        .field(FieldRule::required(
            "coordinates",
            ValueSpec::object(geo_point()),
        ))
}

fn email() -> ValueSpec {
    ValueSpec::string().pattern(EMAIL.clone())
}

fn description() -> ValueSpec {
    ValueSpec::string().max_length(MAX_DESCRIPTION_LENGTH)
}

fn id_list() -> ValueSpec {
    ValueSpec::list_of(ValueSpec::reference())
}

#[must_use]
pub fn user() -> Schema {
    Schema::new()
        .field(FieldRule::required("id", ValueSpec::reference()).unique())
        .field(FieldRule::required("name", ValueSpec::string()))
        .field(FieldRule::required("email", email()).unique())
        .field(FieldRule::required("phone", ValueSpec::string()))
        .field(FieldRule::required("address", ValueSpec::object(address())))
        .field(FieldRule::optional("orderHistory", id_list()))
}

#[must_use]
pub fn restaurant() -> Schema {
    Schema::new()
        .field(FieldRule::required("id", ValueSpec::reference()).unique())
        .field(FieldRule::required("name", ValueSpec::string()))
        .field(FieldRule::required("ownerName", ValueSpec::string()))
        .field(FieldRule::required("email", email()).unique())
        .field(FieldRule::required("phone", ValueSpec::string()))
        .field(FieldRule::required("address", ValueSpec::object(address())))
        .field(FieldRule::optional("photo", ValueSpec::string()))
        .field(FieldRule::optional("description", description()))
        .field(FieldRule::optional("menuItems", id_list()))
        .field(FieldRule::optional("receivedOrders", id_list()))
        .field(FieldRule::optional("receivedFeedback", id_list()))
}

#[must_use]
pub fn item() -> Schema {
    Schema::new()
        .field(FieldRule::required("id", ValueSpec::reference()).unique())
        .field(FieldRule::required("restaurantId", ValueSpec::reference()))
        .field(FieldRule::required("name", ValueSpec::string()))
        .field(FieldRule::required("price", ValueSpec::number().minimum(0.0)))
        .field(FieldRule::optional("image", ValueSpec::string()))
        .field(FieldRule::optional("description", description()))
        .field(FieldRule::optional(
            "ingredients",
            ValueSpec::list_of(ValueSpec::string()),
        ))
}

#[must_use]
pub fn menu_entry() -> Schema {
    Schema::new()
        .field(FieldRule::required("itemId", ValueSpec::reference()).unique())
        .field(FieldRule::required("restaurantId", ValueSpec::reference()))
        .field(FieldRule::required(
            "availableQuantity",
            ValueSpec::number().minimum(0.0),
        ))
}

/// `{ itemId, quantity }` inside `Order.items`.
#[must_use]
pub fn order_line() -> Schema {
    Schema::new()
        .field(FieldRule::required("itemId", ValueSpec::reference()))
        .field(FieldRule::required(
            "quantity",
            ValueSpec::integer().minimum(1.0),
        ))
}

#[must_use]
pub fn order() -> Schema {
    Schema::new()
        .field(FieldRule::required("id", ValueSpec::reference()).unique())
        .field(FieldRule::required(
            "items",
            ValueSpec::map_of(ValueSpec::list_of(ValueSpec::object(order_line()))),
        ))
        .field(FieldRule::required(
            "totalAmount",
            ValueSpec::number().minimum(0.0),
        ))
        .field(FieldRule::required(
            "amountBreakup",
            ValueSpec::map_of(ValueSpec::number().minimum(0.0)),
        ))
        .field(FieldRule::required(
            "orderStatus",
            ValueSpec::string().one_of(OrderStatus::VALUES),
        ))
        .field(FieldRule::required(
            "paymentStatus",
            ValueSpec::string().one_of(PaymentStatus::VALUES),
        ))
        .check(DocumentCheck::KeysMatch {
            left: "amountBreakup",
            right: "items",
        })
        .check(DocumentCheck::SumEquals {
            parts: "amountBreakup",
            total: "totalAmount",
        })
}

#[must_use]
pub fn feedback() -> Schema {
    Schema::new()
        .field(FieldRule::required("id", ValueSpec::reference()).unique())
        .field(FieldRule::required("restaurantId", ValueSpec::reference()))
        .field(FieldRule::required(
            "rating",
            ValueSpec::number().range(1.0, 5.0),
        ))
        .field(FieldRule::optional("description", description()))
}
