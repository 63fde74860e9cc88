//! Google Maps Geocoding integration
//!
//! Thin async client for the [Geocoding API](https://developers.google.com/maps/documentation/geocoding).
//! Converts addresses, coordinate pairs and place ids to geocoding results.
//!
//! # Architecture
//!
//! [`Geocoder`] holds the default options (API key, language, region, filters,
//! output format) and funnels every call through one request path:
//! [`QueryParams`] merges defaults, per-call [`GeocodeOptions`] and the
//! [`RequestType`] discriminator; the dispatcher sends a single GET through an
//! [`HttpTransport`] and classifies the body by its `status`. There is no
//! caching and no retry.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodeOptions, Geocoder, GeocodingConfig, RequestType};
//!
//! let geocoder = Geocoder::new(GeocodingConfig::default())?;
//! geocoder.set_key("YOUR_API_KEY");
//! geocoder.set_language("en");
//!
//! let response = geocoder.geocode(RequestType::Address, "Eiffel Tower", None).await?;
//! if let Some(location) = response.first_location() {
//!     println!("{}, {}", location.lat, location.lng);
//! }
//!
//! let french = GeocodeOptions::default().with_language("fr");
//! let response = geocoder.reverse_geocode(48.8583701, 2.2922926, Some(&french)).await?;
//! ```

mod client;
mod config;
mod error;
mod legacy;
mod models;
mod options;
mod query;
mod transport;
mod xml;

pub use client::Geocoder;
pub use config::GeocodingConfig;
pub use error::{GeocodingError, TransportError};
pub use models::{
    AddressComponent, AddressDescriptor, Area, Bounds, GeocodeResponse, GeocodeResult, Geometry,
    LatLng, Landmark, LocalizedText, PlusCode, STATUS_OK,
};
pub use options::{GeocodeOptions, OutputFormat, RequestType};
pub use query::QueryParams;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
