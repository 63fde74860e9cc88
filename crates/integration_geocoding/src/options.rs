//! Request options and discriminators
//!
//! [`GeocodeOptions`] is a partial record: every field is optional so the same
//! type serves as the stored defaults, as per-call overrides and as the input
//! of [`Geocoder::set_defaults`](crate::Geocoder::set_defaults).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeocodingError;

/// Which query parameter carries the caller's location value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// Forward geocoding of a free-form address
    Address,
    /// Reverse geocoding of a `"lat,lng"` pair
    #[serde(rename = "latlng")]
    LatLng,
    /// Lookup of a Google place id
    PlaceId,
}

impl RequestType {
    /// Query key used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::LatLng => "latlng",
            Self::PlaceId => "place_id",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = GeocodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "address" => Ok(Self::Address),
            "latlng" => Ok(Self::LatLng),
            "place_id" => Ok(Self::PlaceId),
            "" => Err(GeocodingError::InvalidArgument(
                "request type is required".to_string(),
            )),
            other => Err(GeocodingError::InvalidArgument(format!(
                "unknown request type '{other}' (expected address, latlng or place_id)"
            ))),
        }
    }
}

/// Response encoding; selects the endpoint path segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `/xml`
    Xml,
    /// `/json`
    #[default]
    Json,
}

impl OutputFormat {
    /// Path segment for this format
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional request parameters
///
/// Field names match the query keys of the Geocoding API.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodeOptions {
    /// API key
    #[serde(default)]
    pub key: Option<String>,

    /// Response language (e.g. "en", "de")
    #[serde(default)]
    pub language: Option<String>,

    /// Region bias as a ccTLD code (e.g. "es")
    #[serde(default)]
    pub region: Option<String>,

    /// Component filter, e.g. `"country:FR|postal_code:75007"`
    #[serde(default)]
    pub components: Option<String>,

    /// Viewport bias, `"south,west|north,east"`
    #[serde(default)]
    pub bounds: Option<String>,

    /// Pipe-separated address types, e.g. `"street_address|route"`
    #[serde(default)]
    pub result_type: Option<String>,

    /// Pipe-separated location types: `ROOFTOP`, `RANGE_INTERPOLATED`,
    /// `GEOMETRIC_CENTER`, `APPROXIMATE`
    #[serde(default)]
    pub location_type: Option<String>,

    /// Response encoding; not sent as a query key
    #[serde(default)]
    pub output_format: Option<OutputFormat>,

    /// Ask for an address descriptor in reverse geocoding responses
    #[serde(default)]
    pub enable_address_descriptor: Option<bool>,
}

impl GeocodeOptions {
    /// The starting point of every default record: JSON output, no address descriptor
    #[must_use]
    pub fn baseline() -> Self {
        Self {
            output_format: Some(OutputFormat::Json),
            enable_address_descriptor: Some(false),
            ..Self::default()
        }
    }

    /// Shallow merge: every field set in `overrides` replaces the one in `self`
    #[must_use]
    pub fn merged_with(&self, overrides: &Self) -> Self {
        Self {
            key: overrides.key.clone().or_else(|| self.key.clone()),
            language: overrides.language.clone().or_else(|| self.language.clone()),
            region: overrides.region.clone().or_else(|| self.region.clone()),
            components: overrides
                .components
                .clone()
                .or_else(|| self.components.clone()),
            bounds: overrides.bounds.clone().or_else(|| self.bounds.clone()),
            result_type: overrides
                .result_type
                .clone()
                .or_else(|| self.result_type.clone()),
            location_type: overrides
                .location_type
                .clone()
                .or_else(|| self.location_type.clone()),
            output_format: overrides.output_format.or(self.output_format),
            enable_address_descriptor: overrides
                .enable_address_descriptor
                .or(self.enable_address_descriptor),
        }
    }

    /// Effective output format (JSON when unset)
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Set the API key
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the response language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the region bias
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the component filter
    #[must_use]
    pub fn with_components(mut self, components: impl Into<String>) -> Self {
        self.components = Some(components.into());
        self
    }

    /// Set the bounding box
    #[must_use]
    pub fn with_bounds(mut self, bounds: impl Into<String>) -> Self {
        self.bounds = Some(bounds.into());
        self
    }

    /// Set the result type filter
    #[must_use]
    pub fn with_result_type(mut self, result_type: impl Into<String>) -> Self {
        self.result_type = Some(result_type.into());
        self
    }

    /// Set the location type filter
    #[must_use]
    pub fn with_location_type(mut self, location_type: impl Into<String>) -> Self {
        self.location_type = Some(location_type.into());
        self
    }

    /// Set the output format
    #[must_use]
    pub const fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = Some(output_format);
        self
    }

    /// Toggle the address descriptor
    #[must_use]
    pub const fn with_address_descriptor(mut self, enabled: bool) -> Self {
        self.enable_address_descriptor = Some(enabled);
        self
    }
}

impl fmt::Debug for GeocodeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocodeOptions")
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .field("language", &self.language)
            .field("region", &self.region)
            .field("components", &self.components)
            .field("bounds", &self.bounds)
            .field("result_type", &self.result_type)
            .field("location_type", &self.location_type)
            .field("output_format", &self.output_format)
            .field("enable_address_descriptor", &self.enable_address_descriptor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_type_wire_keys() {
        assert_eq!(RequestType::Address.as_str(), "address");
        assert_eq!(RequestType::LatLng.as_str(), "latlng");
        assert_eq!(RequestType::PlaceId.to_string(), "place_id");
    }

    #[test]
    fn test_request_type_from_str() {
        assert_eq!("latlng".parse::<RequestType>().unwrap(), RequestType::LatLng);
        assert_eq!(
            "place_id".parse::<RequestType>().unwrap(),
            RequestType::PlaceId
        );
        assert!(matches!(
            "".parse::<RequestType>(),
            Err(GeocodingError::InvalidArgument(_))
        ));
        assert!(matches!(
            "zipcode".parse::<RequestType>(),
            Err(GeocodingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_request_type_serde_matches_wire_key() {
        let json = serde_json::to_string(&RequestType::LatLng).unwrap();
        assert_eq!(json, "\"latlng\"");
        let json = serde_json::to_string(&RequestType::PlaceId).unwrap();
        assert_eq!(json, "\"place_id\"");
    }

    #[test]
    fn test_baseline() {
        let options = GeocodeOptions::baseline();
        assert_eq!(options.output_format, Some(OutputFormat::Json));
        assert_eq!(options.enable_address_descriptor, Some(false));
        assert!(options.key.is_none());
        assert!(options.language.is_none());
    }

    #[test]
    fn test_merge_overrides_win() {
        let defaults = GeocodeOptions::baseline()
            .with_language("en")
            .with_region("es");
        let overrides = GeocodeOptions::default()
            .with_language("fr")
            .with_address_descriptor(true);

        let merged = defaults.merged_with(&overrides);
        assert_eq!(merged.language.as_deref(), Some("fr"));
        assert_eq!(merged.region.as_deref(), Some("es"));
        assert_eq!(merged.enable_address_descriptor, Some(true));
        assert_eq!(merged.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let defaults = GeocodeOptions::baseline().with_key("k").with_bounds("1,2|3,4");
        assert_eq!(defaults.merged_with(&GeocodeOptions::default()), defaults);
    }

    #[test]
    fn test_format_defaults_to_json() {
        assert_eq!(GeocodeOptions::default().format(), OutputFormat::Json);
        assert_eq!(
            GeocodeOptions::default()
                .with_output_format(OutputFormat::Xml)
                .format(),
            OutputFormat::Xml
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let options = GeocodeOptions::default().with_key("super-secret");
        let debug = format!("{options:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_deserialize_partial() {
        let options: GeocodeOptions =
            serde_json::from_str(r#"{"language":"en","output_format":"xml"}"#).unwrap();
        assert_eq!(options.language.as_deref(), Some("en"));
        assert_eq!(options.output_format, Some(OutputFormat::Xml));
        assert!(options.enable_address_descriptor.is_none());
    }
}
