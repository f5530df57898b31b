// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses listen address, database URL, map token, CORS origins, and sync interval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Epic Run Contributors

//! Environment-based configuration

use anyhow::{Context, Result};
use epic_run_core::constants::{env_config, health_sync, ports};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational
    #[default]
    Info,
    /// Debugging detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment environment
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
    /// Parse from string with fallback to `Development`
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
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CORS settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*` for any
    pub allowed_origins: String,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address
    pub host: String,
    /// Listen port
    pub http_port: u16,
    /// sqlx connection string
    pub database_url: String,
    /// Public map token served by `/api/map-token`
    pub mapbox_public_token: Option<String>,
    /// CORS settings
    pub cors: CorsConfig,
    /// Background health sync period
    pub health_sync_interval: Duration,
    /// Deployment environment
    pub environment: Environment,
    /// Default log level
    pub log_level: LogLevel,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            http_port: ports::DEFAULT_HTTP_PORT,
            database_url: "sqlite:./data/epic_run.db".into(),
            mapbox_public_token: None,
            cors: CorsConfig {
                allowed_origins: "*".into(),
            },
            health_sync_interval: Duration::from_secs(health_sync::DEFAULT_SYNC_INTERVAL_SECS),
            environment: Environment::Development,
            log_level: LogLevel::Info,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed or validation fails
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        let defaults = Self::default();

        let http_port = match env::var(env_config::HTTP_PORT) {
            Ok(value) => value
                .parse()
                .with_context(|| format!("Invalid {} value '{value}'", env_config::HTTP_PORT))?,
            Err(_) => defaults.http_port,
        };

        let health_sync_interval = match env::var(env_config::HEALTH_SYNC_INTERVAL_SECS) {
            Ok(value) => Duration::from_secs(value.parse().with_context(|| {
                format!(
                    "Invalid {} value '{value}'",
                    env_config::HEALTH_SYNC_INTERVAL_SECS
                )
            })?),
            Err(_) => defaults.health_sync_interval,
        };

        let config = Self {
            host: env_var_or(env_config::HOST, &defaults.host),
            http_port,
            database_url: env_var_or(env_config::DATABASE_URL, &defaults.database_url),
            mapbox_public_token: env::var(env_config::MAPBOX_PUBLIC_TOKEN)
                .ok()
                .filter(|token| !token.trim().is_empty()),
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    env_config::CORS_ALLOWED_ORIGINS,
                    &defaults.cors.allowed_origins,
                ),
            },
            health_sync_interval,
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                defaults.environment.as_str(),
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a zero sync interval or an empty database URL
    pub fn validate(&self) -> Result<()> {
        if self.health_sync_interval.is_zero() {
            anyhow::bail!(
                "{} must be greater than zero",
                env_config::HEALTH_SYNC_INTERVAL_SECS
            );
        }
        if self.database_url.trim().is_empty() {
            anyhow::bail!("{} must not be empty", env_config::DATABASE_URL);
        }
        Ok(())
    }

    /// `host:port` to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Epic Run Server Configuration:\n\
             - Address: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - Map Token: {}\n\
             - CORS Origins: {}\n\
             - Health Sync Interval: {}s",
            self.bind_address(),
            self.environment,
            self.log_level,
            if self.database_url.contains(":memory:") {
                "SQLite (in-memory)"
            } else {
                "SQLite"
            },
            if self.mapbox_public_token.is_some() {
                "Configured"
            } else {
                "Not configured"
            },
            self.cors.allowed_origins,
            self.health_sync_interval.as_secs(),
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
        assert_eq!(LogLevel::Warn.to_tracing_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str_or_default("prod"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default(""), Environment::Development);
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let config = ServerConfig {
            health_sync_interval: Duration::ZERO,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_summary_hides_token() {
        let config = ServerConfig {
            mapbox_public_token: Some("pk.secret".into()),
            ..ServerConfig::default()
        };
        let summary = config.summary();
        assert!(summary.contains("Map Token: Configured"));
        assert!(!summary.contains("pk.secret"));
    }
}
