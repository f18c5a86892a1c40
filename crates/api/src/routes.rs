// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Routes module
//!
//! This module provides route configuration and handlers for the Pokémon
//! Finder server.

pub mod handlers;

use std::path::Path;

use axum::{Router, routing::get};
use handlers::{health_handler, landing_handler, pokemon_handler};
use tower_http::services::ServeDir;

use crate::{metrics::metrics_handler, openapi::openapi_spec, state::ServerState};

/// Create application routes
///
/// Any GET that matches no other route gets the HTML shell, so client-side
/// paths like `/pokemon/ditto` load the front end.
pub fn create_routes(static_dir: &Path) -> Router<ServerState> {
    let ops_routes = Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/api-doc/openapi.json", get(openapi_spec));

    let api_routes = Router::new().route("/pokemon/{name}", get(pokemon_handler));

    Router::new()
        .merge(ops_routes)
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(get(landing_handler))
}
