//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and fall back to local defaults:
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront
//!   (default: `http://localhost:3000`)
//! - `STOREFRONT_CONTENT_PATH` - Path to the store content JSON file
//!   (default: crates/storefront/content/store.json)
//! - `ORDER_WHATSAPP_PHONE` - WhatsApp number orders are handed off to, in
//!   international digits-only form (default: 972555567714)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

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
    /// Public base URL for the storefront
    pub base_url: String,
    /// Path to the store content JSON file (catalog + site info)
    pub content_path: PathBuf,
    /// WhatsApp number the order deep link targets
    pub order_phone: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but fails to parse or
    /// validate.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:3000");
        let content_path = PathBuf::from(get_env_or_default(
            "STOREFRONT_CONTENT_PATH",
            "crates/storefront/content/store.json",
        ));
        let order_phone = get_env_or_default("ORDER_WHATSAPP_PHONE", "972555567714");
        validate_order_phone(&order_phone)?;

        Ok(Self {
            host,
            port,
            base_url,
            content_path,
            order_phone,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that the order phone is a digits-only international number, as
/// `wa.me` links require.
fn validate_order_phone(phone: &str) -> Result<(), ConfigError> {
    if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar(
            "ORDER_WHATSAPP_PHONE".to_string(),
            "must be international digits only, e.g. 972555567714".to_string(),
        ));
    }
    Ok(())
}
