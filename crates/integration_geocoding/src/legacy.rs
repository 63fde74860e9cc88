//! Positional-argument entry points kept for older callers
//!
//! Each shim packs its optional arguments into a [`GeocodeOptions`] override
//! and delegates to [`Geocoder::geocode`] or [`Geocoder::reverse_geocode`].
//! An omitted argument leaves the stored default for that field in effect.
//! All shims force JSON output with the address descriptor turned off.

use std::fmt;

use tracing::warn;

use crate::client::Geocoder;
use crate::error::GeocodingError;
use crate::models::GeocodeResponse;
use crate::options::{GeocodeOptions, OutputFormat, RequestType};

fn positional_options(
    key: Option<&str>,
    language: Option<&str>,
    region: Option<&str>,
    location_type: Option<&str>,
) -> GeocodeOptions {
    // empty strings count as omitted
    let given = |v: Option<&str>| v.filter(|s| !s.is_empty()).map(str::to_string);
    GeocodeOptions {
        key: given(key),
        language: given(language),
        region: given(region),
        location_type: given(location_type),
        output_format: Some(OutputFormat::Json),
        enable_address_descriptor: Some(false),
        ..GeocodeOptions::default()
    }
}

impl Geocoder {
    /// Geocode an address with positional options
    #[deprecated(note = "use `geocode(RequestType::Address, address, options)` instead")]
    pub async fn from_address(
        &self,
        address: &str,
        key: Option<&str>,
        language: Option<&str>,
        region: Option<&str>,
    ) -> Result<GeocodeResponse, GeocodingError> {
        warn!("from_address is deprecated, use geocode(RequestType::Address, ..) instead");
        let options = positional_options(key, language, region, None);
        self.geocode(RequestType::Address, address, Some(&options))
            .await
    }

    /// Look up a place id with positional options
    #[deprecated(note = "use `geocode(RequestType::PlaceId, place_id, options)` instead")]
    pub async fn from_place_id(
        &self,
        place_id: &str,
        key: Option<&str>,
        language: Option<&str>,
        region: Option<&str>,
    ) -> Result<GeocodeResponse, GeocodingError> {
        warn!("from_place_id is deprecated, use geocode(RequestType::PlaceId, ..) instead");
        let options = positional_options(key, language, region, None);
        self.geocode(RequestType::PlaceId, place_id, Some(&options))
            .await
    }

    /// Reverse geocode a coordinate pair with positional options
    #[deprecated(note = "use `reverse_geocode(lat, lng, options)` instead")]
    pub async fn from_lat_lng(
        &self,
        lat: impl fmt::Display + Send,
        lng: impl fmt::Display + Send,
        key: Option<&str>,
        language: Option<&str>,
        region: Option<&str>,
        location_type: Option<&str>,
    ) -> Result<GeocodeResponse, GeocodingError> {
        warn!("from_lat_lng is deprecated, use reverse_geocode(..) instead");
        let options = positional_options(key, language, region, location_type);
        self.reverse_geocode(lat, lng, Some(&options)).await
    }
}
