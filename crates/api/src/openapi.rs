// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! `OpenAPI` documentation module

use axum::Json;
use utoipa::OpenApi;

use crate::{
    config::Environment,
    routes::handlers,
    state::{HealthCheck, HealthStatus},
};

/// `OpenAPI` document for the HTTP surface
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Pokémon Finder",
        description = "Looks Pokémon up on PokeAPI and returns FastUI page descriptions"
    ),
    paths(handlers::health_handler, handlers::pokemon_handler),
    components(schemas(HealthCheck, HealthStatus, Environment, shared_types::Pokemon)),
    tags(
        (name = "health", description = "Service health"),
        (name = "pokemon", description = "Pokémon pages")
    )
)]
pub struct ApiDoc;

/// `OpenAPI` specification endpoint
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
