// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Upstream client abstraction for Pokémon lookups
//!
//! This crate defines the seam between the HTTP server and whatever provides
//! Pokémon data. The running server holds a concrete PokeAPI client, which
//! end-to-end tests point at a mock upstream. The lookup step itself is
//! generic over [`PokemonSource`], so unit tests can run it against their
//! own in-memory implementation.
//!
//! # Core Abstractions
//!
//! - **`PokemonSource` Trait**: async lookup plus health reporting
//! - **Health Check System**: `Up`, `Degraded` and `Down` statuses
//! - **Error Handling**: [`ApiError`] classifies upstream failures for logging

use shared_types::{Pokemon, PokemonName};
use thiserror::Error;

pub mod health;

pub use health::*;

/// Provider of Pokémon records
pub trait PokemonSource: Send + Sync {
    /// Check the health of the upstream service
    ///
    /// # Errors
    ///
    /// Returns an error if the health check itself could not be performed
    fn health_check(&self) -> impl Future<Output = Result<HealthStatus, ApiError>> + Send;

    /// Fetch the record for a normalized name
    ///
    /// Exactly one upstream request is issued; there are no retries.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the upstream has no such entity and
    /// another variant for any other failure.
    fn fetch_pokemon(
        &self,
        name: &PokemonName,
    ) -> impl Future<Output = Result<Pokemon, ApiError>> + Send;

    /// Get the name/identifier of this source
    fn name(&self) -> &'static str;
}

/// Errors that can occur when talking to an upstream source
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    /// Upstream reported the entity does not exist
    #[error("{name} not found upstream")]
    NotFound { name: String },

    /// Upstream answered with a non-success status other than 404
    #[error("upstream returned status {status}")]
    UpstreamStatus { status: u16 },

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    /// Response body could not be mapped to a record
    #[error("Invalid response format: {message}")]
    InvalidResponse { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Network timeout
    #[error("Request timeout after {timeout_seconds} seconds")]
    Timeout { timeout_seconds: u64 },
}

impl ApiError {
    /// Short label used for metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::UpstreamStatus { .. } => "upstream_status",
            Self::Http { .. } => "http",
            Self::InvalidResponse { .. } => "invalid_response",
            Self::Configuration { .. } => "configuration",
            Self::Timeout { .. } => "timeout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds_are_distinct() {
        let errors = [
            ApiError::NotFound {
                name: "missingno".to_string(),
            },
            ApiError::UpstreamStatus { status: 500 },
            ApiError::Http {
                message: "connection refused".to_string(),
            },
            ApiError::InvalidResponse {
                message: "missing field".to_string(),
            },
            ApiError::Configuration {
                message: "bad url".to_string(),
            },
            ApiError::Timeout { timeout_seconds: 5 },
        ];

        let mut kinds: Vec<_> = errors.iter().map(ApiError::kind).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), errors.len());
    }

    #[test]
    fn error_messages() {
        let err = ApiError::NotFound {
            name: "missingno".to_string(),
        };
        assert_eq!(err.to_string(), "missingno not found upstream");

        let err = ApiError::UpstreamStatus { status: 503 };
        assert_eq!(err.to_string(), "upstream returned status 503");
    }
}
