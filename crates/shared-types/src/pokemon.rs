// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Pokémon record and lookup identifier types
//!
//! [`Pokemon`] is the minimal per-entity data pulled out of an upstream
//! response. [`PokemonName`] is the normalized identifier used to look one up,
//! and [`NotFound`] is the single failure shown to users.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// User-facing message for every failed lookup
pub const NOT_FOUND_MESSAGE: &str = "Pokémon not found";

/// Data extracted from the upstream API for a single Pokémon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pokemon {
    /// Upstream name, lowercase as returned by the API
    #[schema(example = "ditto")]
    pub name: String,
    /// URL of the sprite image
    #[schema(example = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/132.png")]
    pub sprite: String,
    /// Type names in upstream slot order
    #[schema(example = json!(["normal"]))]
    pub types: Vec<String>,
}

impl Pokemon {
    /// Name with the first character uppercased and the rest lowercased
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }
}

/// Uppercase the first character and lowercase the rest
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Errors produced when building a [`PokemonName`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokemonNameError {
    /// The identifier was empty or whitespace only
    #[error("pokemon name cannot be empty")]
    Empty,
}

/// Normalized lookup identifier
///
/// Surrounding whitespace is trimmed and the value is lowercased, so lookups
/// are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PokemonName(Box<str>);

impl PokemonName {
    /// Normalize a raw identifier
    pub fn new(raw: impl AsRef<str>) -> Result<Self, PokemonNameError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PokemonNameError::Empty);
        }
        Ok(Self(trimmed.to_lowercase().into_boxed_str()))
    }

    /// Normalized identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PokemonName {
    type Err = PokemonNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for PokemonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PokemonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Failed lookup as presented to the user
///
/// Every upstream failure (missing entity, bad status, transport error,
/// malformed body) collapses into this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NotFound {
    /// Message shown on the error page
    pub detail: String,
}

impl Default for NotFound {
    fn default() -> Self {
        Self {
            detail: NOT_FOUND_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.detail)
    }
}

impl std::error::Error for NotFound {}
