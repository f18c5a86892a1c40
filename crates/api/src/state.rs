// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Server state management module
//!
//! This module provides shared application state for the Pokémon Finder
//! server: configuration, the upstream client and coordinated cancellation.

use std::{collections::HashMap, sync::Arc};

use api_client::PokemonSource;
use external_apis::PokeApiClient;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::warn;
use utoipa::ToSchema;

use crate::{
    config::{Environment, ServerConfig},
    error::{ServerError, ServerResult},
};

/// Shared application state with cancellation token support
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Server configuration
    config: ServerConfig,
    /// Upstream client, shared so every request reuses its connection pool
    source: Arc<PokeApiClient>,
    /// Cancellation token for coordinated shutdown
    pub cancellation_token: CancellationToken,
}

impl ServerState {
    /// Create new server state
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `source` - Upstream client used for lookups
    /// * `cancellation_token` - Token for coordinated cancellation
    pub fn new(
        config: ServerConfig,
        source: Arc<PokeApiClient>,
        cancellation_token: CancellationToken,
    ) -> Self {
        Self {
            config,
            source,
            cancellation_token,
        }
    }

    /// Server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Upstream client
    pub fn source(&self) -> &Arc<PokeApiClient> {
        &self.source
    }

    /// Perform health check operations
    pub async fn health_check(&self) -> ServerResult<HealthCheck> {
        let upstream_status = self
            .source
            .health_check()
            .await
            .map_err(|e| ServerError::Dependency {
                message: format!("{} health check failed: {e}", self.source.name()),
            })?;

        if !upstream_status.is_available() {
            warn!(
                source = self.source.name(),
                reason = upstream_status.description(),
                "upstream unavailable, lookups will render the error page"
            );
        }

        let status = Self::overall_status(self.source.name(), &upstream_status);

        let upstream = HashMap::from([(
            self.source.name().to_string(),
            Self::convert_health_status(upstream_status),
        )]);

        Ok(HealthCheck {
            status,
            version: Box::from(env!("CARGO_PKG_VERSION")),
            environment: self.config.environment,
            timestamp: chrono::Utc::now().to_rfc3339(),
            upstream,
        })
    }

    /// Service status derived from the upstream status
    ///
    /// The service itself keeps answering when the upstream fails, so it is
    /// never reported `Down`.
    fn overall_status(source_name: &str, upstream: &api_client::HealthStatus) -> HealthStatus {
        let reason = if upstream.is_down() {
            format!("{source_name} upstream unreachable: {}", upstream.description())
        } else if *upstream == api_client::HealthStatus::Up {
            return HealthStatus::Up;
        } else {
            format!("{source_name} upstream degraded: {}", upstream.description())
        };

        HealthStatus::Degraded {
            reason: reason.into_boxed_str(),
        }
    }

    /// Convert upstream health status to the reported status
    fn convert_health_status(external_status: api_client::HealthStatus) -> HealthStatus {
        match external_status {
            api_client::HealthStatus::Up => HealthStatus::Up,
            api_client::HealthStatus::Degraded { reason } => HealthStatus::Degraded {
                reason: reason.into_boxed_str(),
            },
            api_client::HealthStatus::Down { reason } => HealthStatus::Down {
                reason: reason.into_boxed_str(),
            },
        }
    }
}

/// Health status of a service or dependency
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum HealthStatus {
    /// Service is fully operational and responding normally
    Up,

    /// Service is not operational
    Down {
        /// Human-readable explanation of why the service is down
        reason: Box<str>,
    },

    /// Service is operational but a dependency is unhealthy
    Degraded {
        /// Human-readable explanation of the degradation condition
        reason: Box<str>,
    },
}

/// Health check report
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheck {
    /// Service status
    pub status: HealthStatus,
    /// Service version
    #[schema(value_type = String)]
    pub version: Box<str>,
    /// Environment
    pub environment: Environment,
    /// Timestamp
    pub timestamp: String,
    /// Status of the upstream API, keyed by source name
    #[schema(value_type = Object)]
    pub upstream: HashMap<String, HealthStatus>,
}
