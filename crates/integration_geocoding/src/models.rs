//! Geocoding response models
//!
//! Types for the JSON body of the Google Maps Geocoding API. Every field
//! defaults when absent so sparse bodies still decode. Fields not modelled
//! here land in the `extra` map of the enclosing object, and defaulted fields
//! are skipped on serialization, so a decoded body serializes back to the
//! fields it was sent with.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status value signalling success
pub const STATUS_OK: &str = "OK";

/// Decoded geocoding response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    /// Status code (`OK`, `ZERO_RESULTS`, `REQUEST_DENIED`, ...)
    pub status: String,

    /// Matching results, best match first
    #[serde(default)]
    pub results: Vec<GeocodeResult>,

    /// Error details, only present when `status` is not `OK`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Plus code of the queried location (reverse geocoding)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plus_code: Option<PlusCode>,

    /// Landmarks and areas around the location (reverse geocoding)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_descriptor: Option<AddressDescriptor>,

    /// Raw document when the response was requested as XML
    #[serde(skip)]
    pub xml: Option<String>,

    /// Any top-level field not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GeocodeResponse {
    /// Check whether the service reported success
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Coordinates of the best match
    #[must_use]
    pub fn first_location(&self) -> Option<LatLng> {
        self.results.first().map(|r| r.geometry.location)
    }

    /// Formatted address of the best match
    #[must_use]
    pub fn first_formatted_address(&self) -> Option<&str> {
        self.results.first().map(|r| r.formatted_address.as_str())
    }
}

/// A single geocoding match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    /// Human-readable address
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub formatted_address: String,

    /// Separate address parts
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address_components: Vec<AddressComponent>,

    /// Location and viewport
    #[serde(default)]
    pub geometry: Geometry,

    /// Stable place identifier
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub place_id: String,

    /// Plus code of this result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plus_code: Option<PlusCode>,

    /// Feature types of this result (e.g. "street_address")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,

    /// Set when the match does not cover the whole request
    #[serde(default, skip_serializing_if = "is_false")]
    pub partial_match: bool,

    /// Localities contained in a postal code result
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub postcode_localities: Vec<String>,

    /// Fields not modelled above (e.g. `navigation_points`)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// the service only sends `partial_match` when it is true
#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

/// Part of an address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponent {
    /// Full text (e.g. "Paris")
    #[serde(default)]
    pub long_name: String,
    /// Abbreviated text (e.g. "FR")
    #[serde(default)]
    pub short_name: String,
    /// Component types (e.g. "locality", "political")
    #[serde(default)]
    pub types: Vec<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Geometry of a result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Geocoded position
    #[serde(default)]
    pub location: LatLng,
    /// Precision of `location` (e.g. "ROOFTOP")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location_type: String,
    /// Recommended viewport
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Bounds>,
    /// Bounding box of the whole feature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A point in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

/// A rectangle given by two corners
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// North-east corner
    pub northeast: LatLng,
    /// South-west corner
    pub southwest: LatLng,
}

/// Open Location Code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlusCode {
    /// Local code with locality (e.g. "V75V+8Q Paris, France")
    #[serde(default)]
    pub compound_code: String,
    /// Global code (e.g. "8FW4V75V+8Q")
    #[serde(default)]
    pub global_code: String,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Relational description of a location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressDescriptor {
    /// Areas containing or near the location
    #[serde(default)]
    pub areas: Vec<Area>,
    /// Nearby landmarks
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An area in an address descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    /// `WITHIN`, `OUTSKIRTS` or `NEAR`
    #[serde(default)]
    pub containment: String,
    /// Display name
    #[serde(default)]
    pub display_name: LocalizedText,
    /// Place id of the area
    #[serde(default)]
    pub place_id: String,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A landmark in an address descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Display name
    #[serde(default)]
    pub display_name: LocalizedText,
    /// Place id of the landmark
    #[serde(default)]
    pub place_id: String,
    /// Direct distance in meters
    #[serde(default)]
    pub straight_line_distance_meters: f64,
    /// Road distance in meters
    #[serde(default)]
    pub travel_distance_meters: f64,
    /// e.g. `AROUND_THE_CORNER`, `ACROSS_THE_ROAD`
    #[serde(default)]
    pub spatial_relationship: String,
    /// Place types of the landmark
    #[serde(default)]
    pub types: Vec<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Text with its language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    /// Language code (e.g. "en")
    #[serde(default)]
    pub language_code: String,
    /// The text
    #[serde(default)]
    pub text: String,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_ok() {
        let json = r#"{
            "status": "OK",
            "results": [{
                "formatted_address": "Paris, France",
                "geometry": { "location": { "lat": 48.8566, "lng": 2.3522 } }
            }]
        }"#;

        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_ok());
        assert_eq!(response.first_formatted_address(), Some("Paris, France"));
        let location = response.first_location().unwrap();
        assert!((location.lat - 48.8566).abs() < f64::EPSILON);
        assert!((location.lng - 2.3522).abs() < f64::EPSILON);
        assert!(response.extra.is_empty());
    }

    #[test]
    fn test_parse_full_result() {
        let json = r#"{
            "status": "OK",
            "plus_code": { "compound_code": "V75V+8Q Paris, France", "global_code": "8FW4V75V+8Q" },
            "results": [{
                "address_components": [
                    { "long_name": "Paris", "short_name": "Paris", "types": ["locality", "political"] },
                    { "long_name": "France", "short_name": "FR", "types": ["country", "political"] }
                ],
                "formatted_address": "Champ de Mars, 5 Av. Anatole France, 75007 Paris, France",
                "geometry": {
                    "location": { "lat": 48.8583701, "lng": 2.2944813 },
                    "location_type": "ROOFTOP",
                    "viewport": {
                        "northeast": { "lat": 48.8597, "lng": 2.2958 },
                        "southwest": { "lat": 48.8570, "lng": 2.2931 }
                    }
                },
                "place_id": "ChIJLU7jZClu5kcR4PcOOO6p3I0",
                "types": ["establishment", "point_of_interest", "tourist_attraction"]
            }],
            "address_descriptor": {
                "areas": [{
                    "containment": "WITHIN",
                    "display_name": { "language_code": "en", "text": "Champ de Mars" },
                    "place_id": "ChIJ1"
                }],
                "landmarks": [{
                    "display_name": { "language_code": "en", "text": "Eiffel Tower" },
                    "place_id": "ChIJ2",
                    "spatial_relationship": "AROUND_THE_CORNER",
                    "straight_line_distance_meters": 12.5,
                    "travel_distance_meters": 40.0,
                    "types": ["tourist_attraction"]
                }]
            }
        }"#;

        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        let result = &response.results[0];
        assert_eq!(result.address_components.len(), 2);
        assert_eq!(result.address_components[1].short_name, "FR");
        assert_eq!(result.geometry.location_type, "ROOFTOP");
        assert!(result.geometry.viewport.is_some());
        assert!(result.geometry.bounds.is_none());
        assert_eq!(
            response.plus_code.as_ref().unwrap().global_code,
            "8FW4V75V+8Q"
        );

        let descriptor = response.address_descriptor.unwrap();
        assert_eq!(descriptor.areas[0].containment, "WITHIN");
        assert_eq!(descriptor.landmarks[0].display_name.text, "Eiffel Tower");
        assert_eq!(descriptor.landmarks[0].spatial_relationship, "AROUND_THE_CORNER");
    }

    #[test]
    fn test_parse_error_body() {
        let json = r#"{ "status": "ZERO_RESULTS", "error_message": "no match", "results": [] }"#;
        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_ok());
        assert_eq!(response.error_message.as_deref(), Some("no match"));
        assert!(response.first_location().is_none());
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let json = r#"{ "status": "OK", "results": [], "info_messages": ["hint"] }"#;
        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.extra.get("info_messages"),
            Some(&serde_json::json!(["hint"]))
        );

        let round_trip = serde_json::to_value(&response).unwrap();
        assert_eq!(round_trip["info_messages"], serde_json::json!(["hint"]));
    }

    #[test]
    fn test_nested_unknown_fields_are_kept() {
        let json = r#"{
            "status": "OK",
            "results": [{
                "formatted_address": "Paris, France",
                "geometry": {
                    "location": { "lat": 48.8566, "lng": 2.3522 },
                    "location_type": "APPROXIMATE",
                    "viewport_source": "legacy"
                },
                "place_id": "ChIJD7fiBh9u5kcRYJSMaMOCCwQ",
                "types": ["locality", "political"],
                "navigation_points": [{ "location": { "latitude": 48.8567, "longitude": 2.3508 } }]
            }]
        }"#;

        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        let result = &response.results[0];
        assert!(result.extra.contains_key("navigation_points"));
        assert_eq!(
            result.geometry.extra.get("viewport_source"),
            Some(&serde_json::json!("legacy"))
        );

        let raw: Value = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_value(&response).unwrap(), raw);
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let json = r#"{ "status": "OK", "results": [{ "formatted_address": "Paris" }] }"#;
        let response: GeocodeResponse = serde_json::from_str(json).unwrap();
        assert!(!response.results[0].partial_match);

        let value = serde_json::to_value(&response).unwrap();
        let result = value["results"][0].as_object().unwrap();
        for key in ["place_id", "types", "partial_match", "address_components"] {
            assert!(!result.contains_key(key), "{key} should be skipped");
        }
        assert!(result["geometry"].get("location_type").is_none());
    }
}
