// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Resolves data/state directories, locale, default venue, and cache tuning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! Environment-based configuration
//!
//! Every value has a default. Invalid values are logged and replaced by the
//! default instead of aborting start-up.

use crate::cache::{CacheConfig, CacheTtlConfig};
use crate::constants::cache::{
    DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CLEANUP_INTERVAL_SECS, TTL_AVAILABILITY_SECS,
    TTL_CATEGORIES_SECS, TTL_CURATED_SECS, TTL_RECIPES_SECS,
};
use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult, ErrorCode};
use barkeep_core::models::VenueId;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Runtime configuration for the catalog
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Directory holding catalog JSON files
    pub data_dir: PathBuf,
    /// Directory for durable client state (favorites)
    pub state_dir: PathBuf,
    /// Locale used for localized catalog loads
    pub locale: String,
    /// Venue selected when none is given explicitly
    pub default_venue: Option<VenueId>,
    /// Cache tuning
    pub cache: CacheConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            data_dir: PathBuf::from(defaults::DATA_DIR),
            state_dir: default_state_dir(),
            locale: defaults::LOCALE.to_owned(),
            default_venue: None,
            cache: CacheConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        info!("Loading configuration from environment variables");

        let locale = env::var(env_config::LOCALE)
            .ok()
            .filter(|locale| {
                let valid = is_valid_locale(locale);
                if !valid {
                    warn!(%locale, "Invalid {} value, using default", env_config::LOCALE);
                }
                valid
            })
            .unwrap_or_else(|| defaults::LOCALE.to_owned());

        Self {
            environment: Environment::from_str_or_default(
                &env::var(env_config::ENVIRONMENT).unwrap_or_default(),
            ),
            data_dir: env::var(env_config::DATA_DIR)
                .map_or_else(|_| PathBuf::from(defaults::DATA_DIR), PathBuf::from),
            state_dir: env::var(env_config::STATE_DIR)
                .map_or_else(|_| default_state_dir(), PathBuf::from),
            locale,
            default_venue: env::var(env_config::VENUE)
                .ok()
                .filter(|venue| !venue.trim().is_empty())
                .map(|venue| VenueId::new(venue.trim())),
            cache: CacheConfig {
                max_entries: parse_or(env_config::CACHE_MAX_ENTRIES, DEFAULT_CACHE_MAX_ENTRIES),
                cleanup_interval: Duration::from_secs(parse_or(
                    env_config::CACHE_CLEANUP_INTERVAL_SECS,
                    DEFAULT_CLEANUP_INTERVAL_SECS,
                )),
                enable_background_cleanup: true,
                ttl: CacheTtlConfig {
                    recipes_secs: parse_or(env_config::CACHE_TTL_RECIPES_SECS, TTL_RECIPES_SECS),
                    categories_secs: parse_or(
                        env_config::CACHE_TTL_CATEGORIES_SECS,
                        TTL_CATEGORIES_SECS,
                    ),
                    availability_secs: parse_or(
                        env_config::CACHE_TTL_AVAILABILITY_SECS,
                        TTL_AVAILABILITY_SECS,
                    ),
                    curated_secs: parse_or(env_config::CACHE_TTL_CURATED_SECS, TTL_CURATED_SECS),
                },
            },
        }
    }

    /// Check values that overrides may have set after loading
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the locale could escape the data directory
    /// or the cache capacity is zero
    pub fn validate(&self) -> AppResult<()> {
        if !is_valid_locale(&self.locale) {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Locale '{}' must be alphanumeric with '-' or '_'", self.locale),
            ));
        }
        if self.cache.max_entries == 0 {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                "Cache capacity must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Print a one-line configuration summary to the log
    pub fn log_summary(&self) {
        info!(
            environment = %self.environment,
            data_dir = %self.data_dir.display(),
            state_dir = %self.state_dir.display(),
            locale = %self.locale,
            default_venue = ?self.default_venue,
            cache.max_entries = self.cache.max_entries,
            "Configuration loaded"
        );
    }
}

/// Locales become part of data file names
fn is_valid_locale(locale: &str) -> bool {
    !locale.is_empty()
        && locale
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn default_state_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(defaults::STATE_DIR_FALLBACK),
        |dir| dir.join(defaults::APP_DIR_NAME),
    )
}

/// Parse an environment variable, warning and falling back on invalid input
fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value '{raw}': {e}, using default {default}");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_validation_rejects_path_segments() {
        assert!(is_valid_locale("pt-BR"));
        assert!(!is_valid_locale("../etc"));
        assert!(!is_valid_locale(""));
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("unknown"), Environment::Development);
    }
}
