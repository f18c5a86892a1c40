// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP request handlers module
//!
//! Handlers for the Pokémon lookup endpoint, the HTML shell and health checks.

use std::time::Instant;

use api_client::PokemonSource;
use axum::{
    Json,
    extract::{Path, State},
    response::{Html, IntoResponse},
};
use shared_types::{NotFound, Pokemon, PokemonName};
use tracing::{info, warn};
use view::{APP_TITLE, Component};

use crate::{
    error::ServerError,
    metrics,
    state::{HealthCheck, ServerState},
};

/// Health check endpoint handler
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check endpoint",
    description = "Returns the current health status of the service including version, environment information, and the status of the upstream PokeAPI.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthCheck),
        (status = 503, description = "Service unavailable", body = String)
    )
)]
pub async fn health_handler(
    State(state): State<ServerState>,
) -> Result<impl IntoResponse, ServerError> {
    let health = state.health_check().await?;
    Ok(Json(health))
}

/// Pokémon page
///
/// Looks the name up upstream and returns the page to render. Failed lookups
/// still answer 200 with the error page.
#[utoipa::path(
    get,
    path = "/api/pokemon/{name}",
    tag = "pokemon",
    summary = "Pokémon page description",
    description = "Fetches the named Pokémon from PokeAPI and returns a FastUI component list: a card with sprite and type badges, or an error page when the lookup fails.",
    params(
        ("name" = String, Path, description = "Pokémon name, case-insensitive", example = "ditto")
    ),
    responses(
        (status = 200, description = "FastUI component list", content_type = "application/json")
    )
)]
pub async fn pokemon_handler(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Json<Vec<Component>> {
    let lookup = lookup_pokemon(state.source().as_ref(), &name).await;
    Json(view::render(lookup.as_ref()))
}

/// HTML shell for every other path
pub async fn landing_handler() -> Html<String> {
    Html(view::prebuilt_html(APP_TITLE))
}

/// Look `raw_name` up and collapse every failure into [`NotFound`]
///
/// The failure cause is logged and counted but never shown to the user.
pub async fn lookup_pokemon<S: PokemonSource>(
    source: &S,
    raw_name: &str,
) -> Result<Pokemon, NotFound> {
    let name = match PokemonName::new(raw_name) {
        Ok(name) => name,
        Err(e) => {
            info!(raw_name, error = %e, "rejecting lookup");
            metrics::inc_lookups("invalid_name");
            return Err(NotFound::default());
        }
    };

    let start = Instant::now();
    let result = source.fetch_pokemon(&name).await;
    let elapsed = start.elapsed().as_secs_f64();

    match result {
        Ok(pokemon) => {
            metrics::observe_upstream_duration(source.name(), "success", elapsed);
            metrics::inc_lookups("found");
            info!(name = %name, types = ?pokemon.types, "pokemon found");
            Ok(pokemon)
        }
        Err(e) => {
            metrics::observe_upstream_duration(source.name(), e.kind(), elapsed);
            metrics::inc_lookups(e.kind());
            warn!(name = %name, error = %e, kind = e.kind(), "lookup failed");
            Err(NotFound::default())
        }
    }
}
