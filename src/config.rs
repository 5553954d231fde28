//! Shop configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOP_CHANNEL_BUFFER_SIZE` - Mailbox capacity of each actor (default: 32)
//! - `SHOP_DEFAULT_PAYMENT_OPTION` - Payment option given to new carts
//!   (default: `PAYMENT_OPTION_DEFAULT`)

use crate::model::DEFAULT_PAYMENT_OPTION;
use thiserror::Error;

const DEFAULT_CHANNEL_BUFFER_SIZE: usize = 32;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Runtime configuration for the [`ShopSystem`](crate::lifecycle::ShopSystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    /// Capacity of each actor's request channel
    pub channel_buffer_size: usize,
    /// Payment option stored on newly created carts
    pub default_payment_option: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            channel_buffer_size: DEFAULT_CHANNEL_BUFFER_SIZE,
            default_payment_option: DEFAULT_PAYMENT_OPTION.to_string(),
        }
    }
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let channel_buffer_size = match get_optional_env("SHOP_CHANNEL_BUFFER_SIZE") {
            Some(raw) => parse_buffer_size("SHOP_CHANNEL_BUFFER_SIZE", &raw)?,
            None => DEFAULT_CHANNEL_BUFFER_SIZE,
        };

        let default_payment_option = match get_optional_env("SHOP_DEFAULT_PAYMENT_OPTION") {
            Some(raw) => parse_payment_option("SHOP_DEFAULT_PAYMENT_OPTION", &raw)?,
            None => DEFAULT_PAYMENT_OPTION.to_string(),
        };

        Ok(Self {
            channel_buffer_size,
            default_payment_option,
        })
    }
}

fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Tokio channels panic on a zero capacity, so zero is rejected here.
fn parse_buffer_size(key: &str, raw: &str) -> Result<usize, ConfigError> {
    let size = raw
        .trim()
        .parse::<usize>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if size == 0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(size)
}

fn parse_payment_option(key: &str, raw: &str) -> Result<String, ConfigError> {
    let option = raw.trim();
    if option.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        ));
    }
    Ok(option.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShopConfig::default();
        assert_eq!(config.channel_buffer_size, 32);
        assert_eq!(config.default_payment_option, "PAYMENT_OPTION_DEFAULT");
    }

    #[test]
    fn test_parse_buffer_size() {
        assert_eq!(parse_buffer_size("K", " 64 ").unwrap(), 64);
        assert!(matches!(
            parse_buffer_size("K", "0"),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "K"
        ));
        assert!(parse_buffer_size("K", "lots").is_err());
    }

    #[test]
    fn test_parse_payment_option() {
        assert_eq!(parse_payment_option("K", "COD").unwrap(), "COD");
        assert!(parse_payment_option("K", "   ").is_err());
    }
}
