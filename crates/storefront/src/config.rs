//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_RATE_LIMIT` - Per-IP rate limiting on lookup routes (default: true)
//! - `STOREFRONT_STATIC_DIR` - Static files directory (default: crates/storefront/static)
//! - `STOREFRONT_LOG_FORMAT` - `text` or `json` (default: json on Fly.io, text elsewhere)
//! - `INVENTORY_API_BASE_URL` - Inventory API base URL (default: <https://trackinventory.ddns.net>)
//! - `INVENTORY_API_TIMEOUT_SECS` - Inventory API request timeout (default: 10)
//! - `INVENTORY_FALLBACK_WEBSITE` - Website name used when none is given (default: Amrittest)
//! - `INVENTORY_PAGE_SIZE` - Items per page for freshly resolved businesses (default: 20)
//! - `INVENTORY_BADGE_SCHEME` - Status badge colours, `vivid` or `muted` (default: vivid)
//! - `INVENTORY_SHOW_CONDITION` - Show the new/used badge on cards (default: false)
//! - `CAROUSEL_INTERVAL_MS` - Carousel auto-advance period (default: 3000, min 500)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry performance sample rate, 0.0-1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::num::NonZeroU32;
use std::str::FromStr;
use std::time::Duration;

use qr_inventory_core::BadgeScheme;
use qr_inventory_core::view::DEFAULT_INTERVAL_MS;
use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "https://trackinventory.ddns.net";
const DEFAULT_FALLBACK_WEBSITE: &str = "Amrittest";
const DEFAULT_STATIC_DIR: &str = "crates/storefront/static";
const MIN_CAROUSEL_INTERVAL_MS: u64 = 500;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Whether lookup-backed routes are rate limited per client IP
    pub rate_limit: bool,
    /// Emit JSON logs instead of human-readable text
    pub log_json: bool,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Inventory API configuration
    pub inventory: InventoryApiConfig,
    /// Cosmetic display options
    pub display: DisplayConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<SecretString>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Sentry performance sample rate
    pub sentry_traces_sample_rate: f32,
}

/// Inventory API configuration.
#[derive(Debug, Clone)]
pub struct InventoryApiConfig {
    /// Base URL, always ending in `/`
    pub base_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
    /// Website name used when the entry URL carries none
    pub fallback_website: String,
    /// `take` for the first page after a successful lookup
    pub page_size: NonZeroU32,
}

impl InventoryApiConfig {
    /// Configuration for `base_url` with default settings.
    #[must_use]
    pub fn new(mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            base_url,
            timeout: Duration::from_secs(10),
            fallback_website: DEFAULT_FALLBACK_WEBSITE.to_string(),
            page_size: qr_inventory_core::DEFAULT_TAKE,
        }
    }
}

/// Cosmetic options that used to be separate copies of the inventory screen.
#[derive(Debug, Clone, Copy)]
pub struct DisplayConfig {
    pub badge_scheme: BadgeScheme,
    pub show_condition_badge: bool,
    pub carousel_interval_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            badge_scheme: BadgeScheme::default(),
            show_condition_badge: false,
            carousel_interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key-value source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Env(lookup);

        let base_url = env.parse_or("INVENTORY_API_BASE_URL", || {
            Url::parse(DEFAULT_API_BASE_URL).map_err(|e| e.to_string())
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvVar(
                "INVENTORY_API_BASE_URL".to_string(),
                format!("unsupported scheme {}", base_url.scheme()),
            ));
        }

        let mut inventory = InventoryApiConfig::new(base_url);
        inventory.timeout =
            Duration::from_secs(env.parse_or("INVENTORY_API_TIMEOUT_SECS", || Ok(10))?);
        inventory.page_size = env.parse_or("INVENTORY_PAGE_SIZE", || {
            Ok(qr_inventory_core::DEFAULT_TAKE)
        })?;
        if let Some(website) = env.optional("INVENTORY_FALLBACK_WEBSITE") {
            inventory.fallback_website = website;
        }

        let carousel_interval_ms =
            env.parse_or("CAROUSEL_INTERVAL_MS", || Ok(DEFAULT_INTERVAL_MS))?;
        if carousel_interval_ms < MIN_CAROUSEL_INTERVAL_MS {
            return Err(ConfigError::InvalidEnvVar(
                "CAROUSEL_INTERVAL_MS".to_string(),
                format!("must be at least {MIN_CAROUSEL_INTERVAL_MS}"),
            ));
        }

        let display = DisplayConfig {
            badge_scheme: env.parse_or("INVENTORY_BADGE_SCHEME", || Ok(BadgeScheme::Vivid))?,
            show_condition_badge: env.parse_or("INVENTORY_SHOW_CONDITION", || Ok(false))?,
            carousel_interval_ms,
        };

        let sentry_traces_sample_rate: f32 =
            env.parse_or("SENTRY_TRACES_SAMPLE_RATE", || Ok(0.0))?;
        if !(0.0..=1.0).contains(&sentry_traces_sample_rate) {
            return Err(ConfigError::InvalidEnvVar(
                "SENTRY_TRACES_SAMPLE_RATE".to_string(),
                "must be between 0.0 and 1.0".to_string(),
            ));
        }

        let log_json = match env.optional("STOREFRONT_LOG_FORMAT").as_deref() {
            Some("json") => true,
            Some("text") => false,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    "STOREFRONT_LOG_FORMAT".to_string(),
                    format!("expected `text` or `json`, got `{other}`"),
                ));
            }
            // Fly.io log shipping expects structured lines
            None => env.optional("FLY_APP_NAME").is_some(),
        };

        Ok(Self {
            host: env.parse_or("STOREFRONT_HOST", || Ok(IpAddr::from([127, 0, 0, 1])))?,
            port: env.parse_or("STOREFRONT_PORT", || Ok(3000))?,
            rate_limit: env.parse_or("STOREFRONT_RATE_LIMIT", || Ok(true))?,
            log_json,
            static_dir: env
                .optional("STOREFRONT_STATIC_DIR")
                .map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from),
            inventory,
            display,
            sentry_dsn: env.optional("SENTRY_DSN").map(SecretString::from),
            sentry_environment: env.optional("SENTRY_ENVIRONMENT"),
            sentry_traces_sample_rate,
        })
    }

    /// Configuration for tests and local tooling: defaults everywhere, the
    /// given API base URL, and no rate limiting.
    #[must_use]
    pub fn for_api(base_url: Url) -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            rate_limit: false,
            log_json: false,
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
            inventory: InventoryApiConfig::new(base_url),
            display: DisplayConfig::default(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_traces_sample_rate: 0.0,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Key-value source with the parsing helpers used above.
struct Env<F>(F);

impl<F: Fn(&str) -> Option<String>> Env<F> {
    /// Get an optional, non-blank variable.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    /// Parse a variable, or compute the default when it is unset.
    fn parse_or<T>(
        &self,
        key: &str,
        default: impl FnOnce() -> Result<T, String>,
    ) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.optional(key) {
            Some(value) => value
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
            None => default().map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e)),
        }
    }
}
