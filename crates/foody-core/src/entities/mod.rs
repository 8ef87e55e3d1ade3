//! Entity records for the six Foodylicious collections.
//!
//! Each record maps to one collection (see [`EntityKind::collection`]). All
//! structs derive `Serialize`, `Deserialize`, and `JsonSchema` with camelCase
//! field names so they match the stored documents exactly.

mod feedback;
mod geo;
mod item;
mod menu;
mod order;
mod restaurant;
mod user;

pub use feedback::Feedback;
pub use geo::{Address, GeoPoint};
pub use item::Item;
pub use menu::MenuEntry;
pub use order::{Order, OrderLine};
pub use restaurant::Restaurant;
pub use user::User;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::enums::EntityKind;

/// A typed record stored in one of the collections.
pub trait Entity: Serialize + DeserializeOwned {
    /// Kind of the collection this record belongs to.
    const KIND: EntityKind;

    /// Value of the record's unique identifier field (`id`, or `itemId` for menu rows).
    fn key(&self) -> &str;
}
