//! Request configuration
//!
//! Turns defaults, per-call overrides and a discriminator/value pair into the
//! flat parameter set sent to the Geocoding API. Nothing here touches the
//! network.

use url::form_urlencoded;

use crate::error::GeocodingError;
use crate::options::{GeocodeOptions, OutputFormat, RequestType};

/// Fully merged parameters for one geocoding call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    options: GeocodeOptions,
    request_type: RequestType,
    value: String,
}

impl QueryParams {
    /// Validate the input and merge defaults, overrides and discriminator
    ///
    /// # Errors
    ///
    /// Returns [`GeocodingError::InvalidArgument`] if `value` is empty or blank.
    pub fn build(
        defaults: &GeocodeOptions,
        request_type: RequestType,
        value: &str,
        overrides: Option<&GeocodeOptions>,
    ) -> Result<Self, GeocodingError> {
        if value.trim().is_empty() {
            return Err(GeocodingError::InvalidArgument(format!(
                "a non-empty {request_type} value is required"
            )));
        }

        let options = match overrides {
            Some(overrides) => defaults.merged_with(overrides),
            None => defaults.clone(),
        };

        Ok(Self {
            options,
            request_type,
            value: value.to_string(),
        })
    }

    /// The discriminator of this request
    #[must_use]
    pub const fn request_type(&self) -> RequestType {
        self.request_type
    }

    /// The caller's location value, unencoded
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The merged options
    #[must_use]
    pub const fn options(&self) -> &GeocodeOptions {
        &self.options
    }

    /// Endpoint path segment
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.options.format()
    }

    /// Query pairs in wire order; absent fields are skipped and the
    /// discriminator comes last
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let o = &self.options;
        let optional = [
            ("key", o.key.clone()),
            ("language", o.language.clone()),
            ("region", o.region.clone()),
            ("components", o.components.clone()),
            ("bounds", o.bounds.clone()),
            ("result_type", o.result_type.clone()),
            ("location_type", o.location_type.clone()),
            (
                "enable_address_descriptor",
                o.enable_address_descriptor.map(|b| b.to_string()),
            ),
        ];

        let mut pairs: Vec<(&'static str, String)> = optional
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect();
        pairs.push((self.request_type.as_str(), self.value.clone()));
        pairs
    }

    /// `application/x-www-form-urlencoded` query string
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }

    /// Query string with the API key masked, for logging
    #[must_use]
    pub fn redacted_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            if key == "key" {
                serializer.append_pair(key, "REDACTED");
            } else {
                serializer.append_pair(key, &value);
            }
        }
        serializer.finish()
    }
}
