// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared types for the Pokémon Finder service
//!
//! This crate provides common types that are shared across multiple crates
//! in the workspace, avoiding circular dependencies.

pub mod pokemon;

pub use pokemon::{NOT_FOUND_MESSAGE, NotFound, Pokemon, PokemonName, PokemonNameError, capitalize};
