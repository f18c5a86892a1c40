// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Pokémon Finder Server Implementation
//!
//! This crate provides the HTTP server for the Pokémon Finder service, built
//! with Axum. It proxies lookups to PokeAPI and answers with FastUI page
//! descriptions.
//!
//! # Module Structure
//!
//! - [`config`]: Server configuration and environment management with hierarchical loading
//! - [`error`]: Server error types and their HTTP mapping
//! - [`state`]: Shared application state and health reporting
//! - [`server`]: Server lifecycle and coordinated shutdown
//! - [`routes`]: Route configuration and HTTP request handlers
//! - [`metrics`]: Prometheus counters and the `/metrics` endpoint
//! - [`openapi`]: `OpenAPI` document endpoint

pub mod config;
pub mod error;
pub mod metrics;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{Environment, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use server::{Server, ShutdownConfig};
pub use state::{HealthCheck, ServerState};
