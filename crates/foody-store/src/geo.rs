//! Great-circle distance over GeoJSON points.

use serde::Serialize;
use serde_json::Value;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// A document returned by a nearest query, with its distance from the origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nearby {
    pub distance_km: f64,
    pub document: Value,
}

/// Haversine distance between two `[longitude, latitude]` pairs.
#[must_use]
pub fn distance_km(from: [f64; 2], to: [f64; 2]) -> f64 {
    let (lon1, lat1) = (from[0].to_radians(), from[1].to_radians());
    let (lon2, lat2) = (to[0].to_radians(), to[1].to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Read `[longitude, latitude]` out of a GeoJSON point value.
#[must_use]
pub fn point_coordinates(point: &Value) -> Option<[f64; 2]> {
    let pair = point.get("coordinates")?.as_array()?;
    match pair.as_slice() {
        [lon, lat] => Some([lon.as_f64()?, lat.as_f64()?]),
        _ => None,
    }
}

/// Follow a dotted path (`address.coordinates`) into a document.
#[must_use]
pub fn value_at<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(document, |current, segment| current.get(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zero_distance_to_self() {
        let pune = [73.8567, 18.5204];
        assert!(distance_km(pune, pune).abs() < 1e-9);
    }

    #[test]
    fn pune_to_new_delhi_is_about_1170_km() {
        let pune = [73.8567, 18.5204];
        let delhi = [77.2167, 28.6315];
        let d = distance_km(pune, delhi);
        assert!((1150.0..1190.0).contains(&d), "got {d}");
        assert!((distance_km(delhi, pune) - d).abs() < 1e-9);
    }

    #[test]
    fn reads_nested_point() {
        let doc = json!({"address": {"coordinates": {"type": "Point", "coordinates": [1.5, -2.0]}}});
        let point = value_at(&doc, "address.coordinates").unwrap();
        assert_eq!(point_coordinates(point), Some([1.5, -2.0]));
        assert!(value_at(&doc, "address.missing").is_none());
    }

    #[test]
    fn rejects_malformed_point() {
        assert_eq!(point_coordinates(&json!({"coordinates": [1.0]})), None);
        assert_eq!(point_coordinates(&json!({"coordinates": ["a", 1.0]})), None);
    }
}
