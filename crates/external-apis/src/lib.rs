// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! External API integrations for Pokémon data
//!
//! This crate provides the [`PokemonSource`](api_client::PokemonSource)
//! implementation backed by the public PokeAPI service.
//!
//! # Features
//!
//! - **Single Request per Lookup**: no retries, no caching
//! - **Escaped URLs**: identifiers are pushed as path segments with the `url` crate
//! - **Robust Error Handling**: client-specific errors convert into `ApiError`
//! - **Testing Support**: integration tests simulate the upstream with wiremock

pub mod pokeapi;

pub use pokeapi::*;
