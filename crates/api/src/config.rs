// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Server configuration module
//!
//! This module provides configuration structures and logic for the Pokémon
//! Finder server, supporting different environments and validation of
//! configuration parameters.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    time::Duration,
};

use anyhow::{Result, anyhow, ensure};
use config::{Config, ConfigError, Environment as ConfigEnv, File};
use external_apis::{DEFAULT_POKEAPI_BASE_URL, PokeApiConfig};
use serde::{Deserialize, Deserializer, Serialize, de};
use utoipa::ToSchema;

use crate::error::{ServerError, ServerResult};

/// Default directory served under `/static`
pub const DEFAULT_STATIC_DIR: &str = "static";

/// A validated server port that ensures the value is appropriate for the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServerPort {
    port: u16,
    environment: Environment,
}

impl ServerPort {
    /// Create a new `ServerPort`, ensuring it's valid for the given environment
    ///
    /// # Errors
    ///
    /// Returns an error if the port is 0 in non-testing environments
    pub fn new(port: u16, environment: Environment) -> Result<Self> {
        if port == 0 && environment != Environment::Testing {
            return Err(anyhow!("port cannot be 0 in non-testing environments"));
        }
        Ok(Self { port, environment })
    }

    /// Default port for development
    pub const fn default_development() -> Self {
        Self {
            port: 3000,
            environment: Environment::Development,
        }
    }

    /// Port 0, letting the OS pick
    pub const fn testing() -> Self {
        Self {
            port: 0,
            environment: Environment::Testing,
        }
    }

    /// Get the port value
    pub fn value(&self) -> u16 {
        self.port
    }
}

impl<'de> Deserialize<'de> for ServerPort {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let port = u16::deserialize(deserializer)?;
        // environment is only known once the whole config is loaded, see `ServerConfig::load`
        Ok(Self {
            port,
            environment: Environment::Development,
        })
    }
}

/// A validated timeout duration in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeoutSeconds(Duration);

impl TimeoutSeconds {
    /// Create a new `TimeoutSeconds`, ensuring the value is within valid bounds
    ///
    /// # Errors
    ///
    /// Returns an error if timeout is 0 or greater than 300 seconds
    pub fn new(seconds: u64) -> Result<Self> {
        ensure!(seconds != 0, "timeout must be greater than 0");
        ensure!(seconds <= 300, "timeout cannot exceed 300");
        Ok(Self(Duration::from_secs(seconds)))
    }

    /// Default timeout (30 seconds)
    pub const fn default_value() -> Self {
        Self(Duration::from_secs(30))
    }

    /// Default inbound request timeout (60 seconds), above the upstream default
    pub const fn default_request() -> Self {
        Self(Duration::from_secs(60))
    }

    /// Short upstream timeout for tests (2 seconds), below [`Self::testing`]
    pub const fn testing_upstream() -> Self {
        Self(Duration::from_secs(2))
    }

    /// Short timeout for tests (5 seconds)
    pub const fn testing() -> Self {
        Self(Duration::from_secs(5))
    }

    /// Get the timeout value
    pub fn value(&self) -> Duration {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeoutSeconds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = u64::deserialize(deserializer)?;
        Self::new(seconds).map_err(|e| de::Error::custom(e.to_string()))
    }
}

impl Default for TimeoutSeconds {
    fn default() -> Self {
        Self::default_value()
    }
}

/// Environment types for configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Production environment
    Production,
    /// Development environment
    Development,
    /// Testing environment
    Testing,
}

/// Upstream PokeAPI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokeApiSettings {
    /// Base URL, without the `/pokemon` suffix
    pub base_url: String,
    /// Lookup request timeout
    pub timeout_seconds: TimeoutSeconds,
    /// Health check request timeout
    pub health_check_timeout_seconds: TimeoutSeconds,
}

impl Default for PokeApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
            timeout_seconds: TimeoutSeconds::default(),
            health_check_timeout_seconds: TimeoutSeconds::testing(),
        }
    }
}

impl From<&PokeApiSettings> for PokeApiConfig {
    fn from(settings: &PokeApiSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            timeout_seconds: settings.timeout_seconds.value().as_secs(),
            health_check_timeout_seconds: settings.health_check_timeout_seconds.value().as_secs(),
        }
    }
}

/// Server configuration for different environments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: IpAddr,
    /// Server port (validated for environment compatibility)
    pub port: ServerPort,
    /// Request timeout in seconds (validated range: 1-300)
    pub timeout_seconds: TimeoutSeconds,
    /// Environment type
    pub environment: Environment,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Upstream API settings
    pub pokeapi: PokeApiSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: ServerPort::default_development(),
            timeout_seconds: TimeoutSeconds::default_request(),
            environment: Environment::Development,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            pokeapi: PokeApiSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Create configuration from environment variables and optional configuration files
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Config` if configuration is invalid or cannot be loaded.
    pub fn from_env() -> ServerResult<Self> {
        Self::load().map_err(|e| ServerError::Config {
            message: format!("failed to load configuration: {e}"),
        })
    }

    /// Load configuration using the config crate with hierarchical sources
    ///
    /// Configuration is loaded in the following order (later sources override earlier ones):
    /// 1. Default values
    /// 2. Configuration file (config.json)
    /// 3. Environment-specific files (config.{env}.json)
    /// 4. Environment variables with `SERVER_` prefix, nested keys split on `__`
    ///    (`SERVER_POKEAPI__BASE_URL`)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let env_var = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let mut config_builder = Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 3000)?
            .set_default("timeout_seconds", 60)?
            .set_default("environment", "development")?
            .set_default("static_dir", DEFAULT_STATIC_DIR)?
            .set_default("pokeapi.base_url", DEFAULT_POKEAPI_BASE_URL)?
            .set_default("pokeapi.timeout_seconds", 30)?
            .set_default("pokeapi.health_check_timeout_seconds", 5)?
            .add_source(File::with_name("config.json").required(false))
            .add_source(
                File::with_name(&format!("config.{}.json", env_var.to_lowercase())).required(false),
            )
            .add_source(
                ConfigEnv::with_prefix("SERVER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        if std::env::var("ENVIRONMENT").is_ok() {
            config_builder = config_builder.set_override("environment", env_var.to_lowercase())?;
        }

        let config = config_builder.build()?;
        let mut server_config: Self = config.try_deserialize()?;

        server_config.port = ServerPort::new(server_config.port.value(), server_config.environment)
            .map_err(|e| ConfigError::Message(format!("invalid port configuration: {e}")))?;

        server_config
            .validate()
            .map_err(|e| ConfigError::Message(format!("invalid timeout configuration: {e}")))?;

        Ok(server_config)
    }

    /// Check settings that depend on each other
    ///
    /// The inbound request timeout must outlast the upstream lookup timeout,
    /// otherwise a slow upstream surfaces as a bare 408 instead of the error
    /// page.
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout_seconds` is not greater than
    /// `pokeapi.timeout_seconds`.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.timeout_seconds.value() > self.pokeapi.timeout_seconds.value(),
            "timeout_seconds ({}s) must be greater than pokeapi.timeout_seconds ({}s)",
            self.timeout_seconds.value().as_secs(),
            self.pokeapi.timeout_seconds.value().as_secs(),
        );
        Ok(())
    }

    /// Create configuration optimized for testing
    pub fn for_testing() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: ServerPort::testing(),
            timeout_seconds: TimeoutSeconds::testing(),
            environment: Environment::Testing,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            pokeapi: PokeApiSettings {
                timeout_seconds: TimeoutSeconds::testing_upstream(),
                ..PokeApiSettings::default()
            },
        }
    }

    /// Testing configuration pointed at a different upstream
    #[must_use]
    pub fn with_pokeapi_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.pokeapi.base_url = base_url.into();
        self
    }

    /// Testing configuration serving a different static directory
    #[must_use]
    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = static_dir.into();
        self
    }

    /// Get socket address for binding
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port.value())
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Development => write!(f, "development"),
            Environment::Testing => write!(f, "testing"),
        }
    }
}
