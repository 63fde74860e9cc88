//! Google Maps geocoding client
//!
//! [`Geocoder`] owns the default options and the transport. Every call takes
//! a snapshot of the defaults, merges the per-call options over it, issues one
//! GET and classifies the body by its `status` field.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{debug, instrument, warn};

use crate::config::GeocodingConfig;
use crate::error::{GeocodingError, TransportError};
use crate::models::GeocodeResponse;
use crate::options::{GeocodeOptions, OutputFormat, RequestType};
use crate::query::QueryParams;
use crate::transport::{HttpResponse, HttpTransport, ReqwestTransport};
use crate::xml;

/// Characters of an unparseable body kept in error messages
const BODY_PREVIEW_CHARS: usize = 200;

/// Client for the Google Maps Geocoding API
///
/// Setters take `&self`; the defaults are swapped atomically, so a `Geocoder`
/// can sit behind an `Arc` and be shared between tasks. Ordering between a
/// setter in one task and a call in another is up to the caller.
pub struct Geocoder {
    config: GeocodingConfig,
    defaults: ArcSwap<GeocodeOptions>,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for Geocoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Geocoder")
            .field("base_url", &self.config.base_url)
            .field("defaults", &self.defaults.load_full())
            .finish_non_exhaustive()
    }
}

impl Geocoder {
    /// Create a client backed by reqwest
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocodingError> {
        config.validate().map_err(GeocodingError::Configuration)?;
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client from [`GeocodingConfig::default`]
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn from_default_config() -> Result<Self, GeocodingError> {
        Self::new(GeocodingConfig::default())
    }

    /// Create a client on top of a custom transport
    #[must_use]
    pub fn with_transport(config: GeocodingConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let defaults = ArcSwap::from_pointee(config.initial_defaults());
        Self {
            config,
            defaults,
            transport,
        }
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &GeocodingConfig {
        &self.config
    }

    /// Snapshot of the current default options
    #[must_use]
    pub fn defaults(&self) -> Arc<GeocodeOptions> {
        self.defaults.load_full()
    }

    fn update_defaults(&self, field: &'static str, apply: impl Fn(&mut GeocodeOptions)) {
        self.defaults.rcu(|current| {
            let mut next = GeocodeOptions::clone(current);
            apply(&mut next);
            next
        });
        debug!(field, "Updated default geocoding option");
    }

    /// Merge `options` into the defaults; fields set in `options` win
    pub fn set_defaults(&self, options: &GeocodeOptions) {
        self.update_defaults("*", |current| *current = current.merged_with(options));
    }

    /// Set the default API key
    pub fn set_key(&self, key: impl Into<String>) {
        let key = key.into();
        self.update_defaults("key", |o| o.key = Some(key.clone()));
    }

    /// Set the default response language
    pub fn set_language(&self, language: impl Into<String>) {
        let language = language.into();
        self.update_defaults("language", |o| o.language = Some(language.clone()));
    }

    /// Set the default region bias
    pub fn set_region(&self, region: impl Into<String>) {
        let region = region.into();
        self.update_defaults("region", |o| o.region = Some(region.clone()));
    }

    /// Set the default component filter
    pub fn set_components(&self, components: impl Into<String>) {
        let components = components.into();
        self.update_defaults("components", |o| o.components = Some(components.clone()));
    }

    /// Set the default bounding box
    pub fn set_bounds(&self, bounds: impl Into<String>) {
        let bounds = bounds.into();
        self.update_defaults("bounds", |o| o.bounds = Some(bounds.clone()));
    }

    /// Set the default result type filter
    ///
    /// One or more address types separated by `|`, e.g. `"street_address|route"`.
    pub fn set_result_type(&self, result_type: impl Into<String>) {
        let result_type = result_type.into();
        self.update_defaults("result_type", |o| {
            o.result_type = Some(result_type.clone());
        });
    }

    /// Set the default location type filter
    ///
    /// Accepted by the service: `ROOFTOP`, `RANGE_INTERPOLATED`,
    /// `GEOMETRIC_CENTER`, `APPROXIMATE`.
    pub fn set_location_type(&self, location_type: impl Into<String>) {
        let location_type = location_type.into();
        self.update_defaults("location_type", |o| {
            o.location_type = Some(location_type.clone());
        });
    }

    /// Set the default output format
    pub fn set_output_format(&self, output_format: OutputFormat) {
        self.update_defaults("output_format", |o| o.output_format = Some(output_format));
    }

    /// Toggle the address descriptor in reverse geocoding responses
    pub fn enable_address_descriptor(&self, enabled: bool) {
        self.update_defaults("enable_address_descriptor", |o| {
            o.enable_address_descriptor = Some(enabled);
        });
    }

    /// Geocode `value`, interpreted according to `request_type`
    ///
    /// # Errors
    ///
    /// [`GeocodingError::InvalidArgument`] for a blank value (no request is
    /// sent), [`GeocodingError::Transport`] when the exchange fails and
    /// [`GeocodingError::Remote`] when the service answers with a status other
    /// than `OK`.
    #[instrument(skip(self, options))]
    pub async fn geocode(
        &self,
        request_type: RequestType,
        value: &str,
        options: Option<&GeocodeOptions>,
    ) -> Result<GeocodeResponse, GeocodingError> {
        let defaults = self.defaults.load_full();
        let params = QueryParams::build(&defaults, request_type, value, options)?;
        self.dispatch(&params).await
    }

    /// Like [`geocode`](Self::geocode) with the discriminator given as its
    /// wire key (`"address"`, `"latlng"` or `"place_id"`)
    pub async fn geocode_str(
        &self,
        request_type: &str,
        value: &str,
        options: Option<&GeocodeOptions>,
    ) -> Result<GeocodeResponse, GeocodingError> {
        let request_type: RequestType = request_type.parse()?;
        self.geocode(request_type, value, options).await
    }

    /// Reverse geocode a coordinate pair
    ///
    /// `lat` and `lng` may be numbers or pre-formatted strings; they are sent
    /// as `"lat,lng"`.
    pub async fn reverse_geocode(
        &self,
        lat: impl fmt::Display + Send,
        lng: impl fmt::Display + Send,
        options: Option<&GeocodeOptions>,
    ) -> Result<GeocodeResponse, GeocodingError> {
        let latlng = format_latlng(&lat, &lng)?;
        self.geocode(RequestType::LatLng, &latlng, options).await
    }

    /// Send one GET for `params` and classify the response
    async fn dispatch(&self, params: &QueryParams) -> Result<GeocodeResponse, GeocodingError> {
        let format = params.output_format();
        let endpoint = format!("{}/{format}", self.config.base_url.trim_end_matches('/'));
        let url = format!("{endpoint}?{}", params.to_query_string());

        debug!(
            %endpoint,
            query = %params.redacted_query_string(),
            "Sending geocoding request"
        );

        let response = self.transport.get(&url).await.map_err(|e| {
            warn!(error = %e, "Geocoding transport failure");
            GeocodingError::from(e)
        })?;

        let result = classify(format, response);
        match &result {
            Ok(body) => debug!(results = body.results.len(), "Geocoding succeeded"),
            Err(e) => warn!(error = %e, "Geocoding failed"),
        }
        result
    }
}

/// Join a coordinate pair; each part must be a finite number
fn format_latlng(
    lat: &impl fmt::Display,
    lng: &impl fmt::Display,
) -> Result<String, GeocodingError> {
    let lat = lat.to_string();
    let lng = lng.to_string();
    let (lat, lng) = (lat.trim(), lng.trim());
    if !is_coordinate(lat) || !is_coordinate(lng) {
        return Err(GeocodingError::InvalidArgument(
            "Provided coordinates are invalid".to_string(),
        ));
    }
    Ok(format!("{lat},{lng}"))
}

fn is_coordinate(part: &str) -> bool {
    part.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Map a raw HTTP response onto the error taxonomy
fn classify(format: OutputFormat, response: HttpResponse) -> Result<GeocodeResponse, GeocodingError> {
    let success = response.is_success();
    let HttpResponse { status, body } = response;

    let parsed = match format {
        OutputFormat::Json => serde_json::from_str::<GeocodeResponse>(&body)
            .map_err(|e| TransportError::Parse(e.to_string())),
        OutputFormat::Xml => xml::parse_status(&body).map(|s| GeocodeResponse {
            status: s.status,
            error_message: s.error_message,
            ..GeocodeResponse::default()
        }),
    };

    let mut decoded = match parsed {
        Ok(decoded) => decoded,
        Err(_) if !success => {
            return Err(TransportError::HttpStatus {
                status,
                body_preview: body.chars().take(BODY_PREVIEW_CHARS).collect(),
            }
            .into());
        },
        Err(e) => return Err(e.into()),
    };

    if !decoded.is_ok() {
        return Err(GeocodingError::Remote {
            status: decoded.status,
            error_message: decoded.error_message,
        });
    }

    if matches!(format, OutputFormat::Xml) {
        decoded.xml = Some(body);
    }
    Ok(decoded)
}
