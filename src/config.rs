//! Configuration management
//!
//! Loads configuration from:
//! 1. Default values
//! 2. Configuration file (config/default.toml, config/local.toml)
//! 3. Environment variables (override)

use serde::Deserialize;

use crate::error::{AppError, Result};

/// Number of entries a news feed returns unless configured otherwise
pub const DEFAULT_FEED_MAX_ITEMS: usize = 10;

/// Largest accepted feed size
pub const MAX_FEED_MAX_ITEMS: usize = 1_000;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub feed: FeedConfig,
    pub logging: LoggingConfig,
}

/// Feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Maximum tweets per news feed, also the per-followee candidate pool (default: 10)
    #[serde(default = "default_feed_max_items")]
    pub max_items: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            max_items: default_feed_max_items(),
        }
    }
}

fn default_feed_max_items() -> usize {
    DEFAULT_FEED_MAX_ITEMS
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Loading Order
    /// 1. Default values
    /// 2. config/default.toml (if exists)
    /// 3. config/local.toml (if exists)
    /// 4. Environment variables (FEEDKATA__*)
    ///
    /// # Errors
    /// Returns error if configuration is invalid
    pub fn load() -> Result<Self> {
        use config::{Config, Environment, File};

        let config = Config::builder()
            .set_default("feed.max_items", DEFAULT_FEED_MAX_ITEMS as i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("FEEDKATA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.feed.max_items == 0 {
            return Err(AppError::Config(
                "feed.max_items must be greater than 0".to_string(),
            ));
        }

        if self.feed.max_items > MAX_FEED_MAX_ITEMS {
            return Err(AppError::Config(format!(
                "feed.max_items must be at most {}, got {}",
                MAX_FEED_MAX_ITEMS, self.feed.max_items
            )));
        }

        let format = self.logging.format.to_ascii_lowercase();
        if format != "pretty" && format != "json" {
            return Err(AppError::Config(format!(
                "logging.format must be \"pretty\" or \"json\", got {:?}",
                self.logging.format
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_feed_cap() {
        let config = AppConfig::default();
        assert_eq!(config.feed.max_items, 10);
        assert!(config.validate().is_ok());
        assert!(!config.logging.is_json());
    }

    #[test]
    fn validate_rejects_zero_feed_size() {
        let mut config = AppConfig::default();
        config.feed.max_items = 0;

        let error = config
            .validate()
            .expect_err("an empty feed cap must fail");
        assert!(matches!(
            error,
            crate::error::AppError::Config(message)
                if message.contains("feed.max_items")
        ));
    }

    #[test]
    fn validate_bounds_feed_size() {
        let mut config = AppConfig::default();
        config.feed.max_items = MAX_FEED_MAX_ITEMS;
        assert!(config.validate().is_ok());

        config.feed.max_items = MAX_FEED_MAX_ITEMS + 1;
        assert!(matches!(
            config.validate(),
            Err(AppError::Config(message)) if message.contains("at most")
        ));

        config.feed.max_items = usize::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unknown_log_format() {
        let mut config = AppConfig::default();
        config.logging.format = "xml".to_string();

        assert!(matches!(
            config.validate(),
            Err(crate::error::AppError::Config(message)) if message.contains("logging.format")
        ));
    }

    #[test]
    fn json_format_is_case_insensitive() {
        let mut config = AppConfig::default();
        config.logging.format = "JSON".to_string();

        assert!(config.validate().is_ok());
        assert!(config.logging.is_json());
    }
}
