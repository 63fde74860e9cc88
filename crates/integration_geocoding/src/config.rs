//! Geocoding client configuration

use serde::{Deserialize, Serialize};

use crate::options::GeocodeOptions;

/// Configuration for the Google Maps Geocoding client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Endpoint without the output format segment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Default options, laid over the JSON / no-descriptor baseline
    #[serde(default)]
    pub defaults: GeocodeOptions,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api/geocode".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            defaults: GeocodeOptions::default(),
        }
    }
}

impl GeocodingConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Point the client at another endpoint (e.g. a mock server)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load configuration from an optional `geocoding` file and the environment
    ///
    /// Environment variables use the `GEOCODING` prefix and `__` as the
    /// nesting separator, e.g. `GEOCODING__TIMEOUT_SECS=5` or
    /// `GEOCODING__DEFAULTS__KEY=...`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with_env(None)
    }

    /// Same as [`load`](Self::load), reading variables from `env` instead of
    /// the process environment when given
    fn load_with_env(
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("base_url", default_base_url())?
            .set_default("timeout_secs", default_timeout_secs())?
            .set_default("user_agent", default_user_agent())?
            .add_source(config::File::with_name("geocoding").required(false))
            .add_source(
                config::Environment::with_prefix("GEOCODING")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if url::Url::parse(&self.base_url).is_err() {
            return Err(format!("base_url is not a valid URL: {}", self.base_url));
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Baseline options overlaid with the configured defaults
    #[must_use]
    pub fn initial_defaults(&self) -> GeocodeOptions {
        GeocodeOptions::baseline().merged_with(&self.defaults)
    }
}
