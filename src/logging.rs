// ABOUTME: Logging configuration and structured logging setup for the catalog
// ABOUTME: Configures log levels, formatters, and output destinations via tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! Structured logging configuration

use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Where log lines are written
    pub target: LogTarget,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl LogFormat {
    /// Parse from the `LOG_FORMAT` value, falling back to `fallback`
    #[must_use]
    pub fn from_str_or(value: Option<&str>, fallback: Self) -> Self {
        match value {
            Some("json") => Self::Json,
            Some("compact") => Self::Compact,
            Some("pretty") => Self::Pretty,
            _ => fallback,
        }
    }
}

/// Log output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard output
    Stdout,
    /// Standard error, keeps stdout clean for command output
    Stderr,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            target: LogTarget::Stdout,
            service_name: service_names::BARKEEP.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = LogFormat::from_str_or(env::var("LOG_FORMAT").ok().as_deref(), LogFormat::Pretty);
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            target: LogTarget::Stdout,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::BARKEEP.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Configuration for the command-line front end
    ///
    /// Logs go to stderr in compact form; `verbose` lowers the level to debug.
    #[must_use]
    pub fn for_cli(verbose: bool) -> Self {
        let base = Self::from_env();
        Self {
            level: if verbose {
                "debug".into()
            } else {
                env::var("RUST_LOG").unwrap_or_else(|_| "warn".into())
            },
            format: LogFormat::from_str_or(env::var("LOG_FORMAT").ok().as_deref(), LogFormat::Compact),
            target: LogTarget::Stderr,
            service_name: service_names::BARKEEP_CLI.into(),
            ..base
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.level)
            .add_directive(
                "tokio=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                format!("barkeep={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::INFO.into()),
            )
            .add_directive(
                format!("barkeep_engine={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::INFO.into()),
            )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let result = match (self.format, self.target) {
            (LogFormat::Json, LogTarget::Stdout) => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_writer(io::stdout),
                )
                .try_init(),
            (LogFormat::Json, LogTarget::Stderr) => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_writer(io::stderr),
                )
                .try_init(),
            (LogFormat::Pretty, LogTarget::Stdout) => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stdout),
                )
                .try_init(),
            (LogFormat::Pretty, LogTarget::Stderr) => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            (LogFormat::Compact, LogTarget::Stdout) => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stdout),
                )
                .try_init(),
            (LogFormat::Compact, LogTarget::Stderr) => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };

        result.map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );

        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> AppResult<()> {
    LoggingConfig::from_env().init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_falls_back_on_unknown_values() {
        assert_eq!(LogFormat::from_str_or(Some("json"), LogFormat::Pretty), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or(Some("JSON"), LogFormat::Compact), LogFormat::Compact);
        assert_eq!(LogFormat::from_str_or(None, LogFormat::Pretty), LogFormat::Pretty);
    }

    #[test]
    fn test_default_config_targets_stdout() {
        let config = LoggingConfig::default();
        assert_eq!(config.target, LogTarget::Stdout);
        assert_eq!(config.service_name, service_names::BARKEEP);
        assert!(!config.include_location);
    }
}
