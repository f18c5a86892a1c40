// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error handling module
//!
//! Server lifecycle errors and their HTTP mapping. Lookup failures never show
//! up here: they are rendered as an error page by the lookup handler.

use std::net::SocketAddr;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Error types for server operations
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration validation errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Network binding errors
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        /// Socket address that failed to bind
        address: SocketAddr,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Server startup errors
    #[error("Server startup failed: {source}")]
    Startup {
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Server shutdown errors
    #[error("Server shutdown failed: {source}")]
    Shutdown {
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Upstream dependency could not be queried
    #[error("Dependency error: {message}")]
    Dependency {
        /// Error message
        message: String,
    },

    /// Task join errors for async operations
    #[error("Task join error: {source}")]
    TaskJoin {
        /// Underlying tokio join error
        #[source]
        source: tokio::task::JoinError,
    },
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Dependency { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::Config { .. }
            | ServerError::Bind { .. }
            | ServerError::Startup { .. }
            | ServerError::Shutdown { .. }
            | ServerError::TaskJoin { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16()
        }));
        (status, body).into_response()
    }
}

impl From<tokio::task::JoinError> for ServerError {
    fn from(source: tokio::task::JoinError) -> Self {
        Self::TaskJoin { source }
    }
}
