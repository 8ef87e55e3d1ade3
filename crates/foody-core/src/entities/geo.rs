use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::GeoKind;

/// A GeoJSON point. `coordinates` is `[longitude, latitude]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub kind: GeoKind,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
    pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: GeoKind::Point,
            coordinates: [longitude, latitude],
        }
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Street address with its geolocation, embedded in users and restaurants.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_text: String,
    pub coordinates: GeoPoint,
}
