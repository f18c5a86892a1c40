// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! PokeAPI integration
//!
//! This module provides an implementation of the `PokemonSource` trait for the
//! public PokeAPI REST service. Each lookup issues a single
//! `GET {base_url}/pokemon/{name}` and maps the response into a [`Pokemon`].

use std::time::Duration;

use api_client::{ApiError, HealthStatus, PokemonSource};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use shared_types::{Pokemon, PokemonName};
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use url::Url;

/// Default PokeAPI base URL
pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

const USER_AGENT: &str = concat!("pokemon-finder/", env!("CARGO_PKG_VERSION"));

/// Configuration for the PokeAPI client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokeApiConfig {
    /// Base URL for the API, without the `/pokemon` suffix
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Health check timeout in seconds
    pub health_check_timeout_seconds: u64,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
            timeout_seconds: 30,
            health_check_timeout_seconds: 5,
        }
    }
}

/// PokeAPI client implementation
#[derive(Debug)]
pub struct PokeApiClient {
    client: Client,
    base_url: Url,
    config: PokeApiConfig,
}

/// Errors specific to the PokeAPI client
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum PokeApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Upstream answered 404
    #[error("pokemon {name} not found")]
    NotFound { name: String },

    /// Upstream answered with another non-success status
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Response carried no usable image URL
    #[error("no sprite available for {name}")]
    MissingSprite { name: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Timeout error
    #[error("Request timeout")]
    Timeout { seconds: u64 },
}

impl From<PokeApiError> for ApiError {
    fn from(value: PokeApiError) -> Self {
        match value {
            PokeApiError::Http(error) => ApiError::Http {
                message: error.to_string(),
            },
            PokeApiError::Json(error) => ApiError::InvalidResponse {
                message: error.to_string(),
            },
            PokeApiError::NotFound { name } => ApiError::NotFound { name },
            PokeApiError::Status { status, .. } => ApiError::UpstreamStatus { status },
            PokeApiError::MissingSprite { .. } => ApiError::InvalidResponse {
                message: value.to_string(),
            },
            PokeApiError::Config(message) => ApiError::Configuration { message },
            PokeApiError::Timeout { seconds } => ApiError::Timeout {
                timeout_seconds: seconds,
            },
        }
    }
}

/// Response body of `GET /pokemon/{name}`
///
/// Only the fields this service reads are modelled; everything else in the
/// (large) upstream document is ignored.
#[derive(Debug, Deserialize)]
pub struct PokeApiPokemon {
    /// Lowercase Pokémon name
    pub name: String,
    /// Sprite URLs
    pub sprites: PokeApiSprites,
    /// Type slots in upstream order
    pub types: Vec<PokeApiTypeSlot>,
}

/// Sprite block of a Pokémon response
#[derive(Debug, Default, Deserialize)]
pub struct PokeApiSprites {
    /// Default front sprite
    pub front_default: Option<String>,
    /// Shiny front sprite
    pub front_shiny: Option<String>,
    /// Alternative artwork sets
    #[serde(default)]
    pub other: Option<PokeApiOtherSprites>,
}

/// Alternative artwork sets under `sprites.other`
#[derive(Debug, Default, Deserialize)]
pub struct PokeApiOtherSprites {
    /// Official artwork
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<PokeApiArtwork>,
}

/// A single artwork set
#[derive(Debug, Default, Deserialize)]
pub struct PokeApiArtwork {
    /// Front image
    pub front_default: Option<String>,
}

/// Entry of the `types` array
///
/// Entries arrive in slot order, so the slot index itself is not kept.
#[derive(Debug, Deserialize)]
pub struct PokeApiTypeSlot {
    /// Referenced type
    #[serde(rename = "type")]
    pub kind: PokeApiNamedResource,
}

/// Named reference to another PokeAPI resource
#[derive(Debug, Deserialize)]
pub struct PokeApiNamedResource {
    /// Resource name
    pub name: String,
}

impl PokeApiSprites {
    /// First available image URL
    ///
    /// Order: `front_default`, official artwork, `front_shiny`.
    pub fn first_available(&self) -> Option<&str> {
        let artwork = self
            .other
            .as_ref()
            .and_then(|other| other.official_artwork.as_ref())
            .and_then(|artwork| artwork.front_default.as_deref());

        [self.front_default.as_deref(), artwork, self.front_shiny.as_deref()]
            .into_iter()
            .flatten()
            .find(|url| !url.trim().is_empty())
    }
}

impl TryFrom<PokeApiPokemon> for Pokemon {
    type Error = PokeApiError;

    fn try_from(value: PokeApiPokemon) -> Result<Self, Self::Error> {
        let sprite = value.sprites.first_available().map(ToString::to_string);
        let Some(sprite) = sprite else {
            return Err(PokeApiError::MissingSprite { name: value.name });
        };

        Ok(Pokemon {
            name: value.name,
            sprite,
            types: value.types.into_iter().map(|slot| slot.kind.name).collect(),
        })
    }
}

impl PokeApiClient {
    /// Create a new PokeAPI client
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL, a
    /// timeout is zero, or the HTTP client cannot be built
    pub fn new(config: PokeApiConfig) -> Result<Self, PokeApiError> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| PokeApiError::Config(format!("invalid base URL: {e}")))?;

        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(PokeApiError::Config(format!(
                "base URL must be an absolute http(s) URL, got {base_url}"
            )));
        }

        if config.timeout_seconds == 0 || config.health_check_timeout_seconds == 0 {
            return Err(PokeApiError::Config(
                "timeouts must be greater than 0".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(USER_AGENT)
            .build()
            .map_err(PokeApiError::Http)?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// Client configuration
    pub fn config(&self) -> &PokeApiConfig {
        &self.config
    }

    /// Build `{base_url}/{segments...}` with each segment escaped
    fn endpoint(&self, segments: &[&str]) -> Result<Url, PokeApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| PokeApiError::Config("base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// URL of the Pokémon resource for `name`
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry path segments
    pub fn pokemon_url(&self, name: &PokemonName) -> Result<Url, PokeApiError> {
        self.endpoint(&["pokemon", name.as_str()])
    }

    /// Fetch the raw PokeAPI document for `name`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, answers with a
    /// non-success status or the body cannot be parsed
    pub async fn get_pokemon(&self, name: &PokemonName) -> Result<PokeApiPokemon, PokeApiError> {
        let url = self.pokemon_url(name)?;

        debug!(%url, "fetching pokemon from PokeAPI");

        let request = self
            .client
            .get(url)
            .header("accept", "application/json");

        let response = timeout(
            Duration::from_secs(self.config.timeout_seconds),
            request.send(),
        )
        .await
        .map_err(|_| PokeApiError::Timeout {
            seconds: self.config.timeout_seconds,
        })?
        .map_err(|e| {
            if e.is_timeout() {
                PokeApiError::Timeout {
                    seconds: self.config.timeout_seconds,
                }
            } else {
                PokeApiError::Http(e)
            }
        })?;

        match response.status() {
            status if status.is_success() => {
                let body = response.bytes().await.map_err(PokeApiError::Http)?;
                Ok(serde_json::from_slice(&body)?)
            }
            StatusCode::NOT_FOUND => {
                debug!(name = %name, "pokemon not found on PokeAPI");
                Err(PokeApiError::NotFound {
                    name: name.to_string(),
                })
            }
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                warn!("PokeAPI error: {} - {}", status.as_u16(), error_text);
                Err(PokeApiError::Status {
                    status: status.as_u16(),
                    message: error_text,
                })
            }
        }
    }
}

impl PokemonSource for PokeApiClient {
    async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        let mut url = self.endpoint(&["pokemon"])?;
        url.query_pairs_mut().append_pair("limit", "1");

        debug!(%url, "performing health check on PokeAPI");

        let request = self
            .client
            .get(url)
            .header("accept", "application/json");

        let start_time = std::time::Instant::now();
        let response = match timeout(
            Duration::from_secs(self.config.health_check_timeout_seconds),
            request.send(),
        )
        .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                warn!(error = %e, "PokeAPI health check failed: request error");
                return Ok(HealthStatus::Down {
                    reason: format!("request failed: {e}"),
                });
            }
            Err(_) => {
                warn!("PokeAPI health check timed out");
                return Ok(HealthStatus::Down {
                    reason: format!(
                        "timed out after {} seconds",
                        self.config.health_check_timeout_seconds
                    ),
                });
            }
        };

        let response_time = start_time.elapsed();

        match response.status() {
            StatusCode::OK => {
                info!("PokeAPI health check passed in {:?}", response_time);
                Ok(HealthStatus::Up)
            }
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("PokeAPI health check failed: rate limited");
                Ok(HealthStatus::Degraded {
                    reason: "Rate limited".to_string(),
                })
            }
            status => {
                warn!("PokeAPI health check failed with status: {}", status);
                Ok(HealthStatus::Degraded {
                    reason: format!("API returned status {}", status.as_u16()),
                })
            }
        }
    }

    async fn fetch_pokemon(&self, name: &PokemonName) -> Result<Pokemon, ApiError> {
        info!(name = %name, "fetching pokemon");

        let raw = self.get_pokemon(name).await?;
        let pokemon = Pokemon::try_from(raw)?;

        debug!(
            name = %pokemon.name,
            types = pokemon.types.len(),
            "mapped PokeAPI response"
        );
        Ok(pokemon)
    }

    fn name(&self) -> &'static str {
        "pokeapi"
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_document() -> serde_json::Value {
        json!({
            "id": 6,
            "name": "charizard",
            "sprites": {
                "front_default": "https://img.example/6.png",
                "front_shiny": "https://img.example/shiny/6.png",
                "other": {
                    "official-artwork": { "front_default": "https://img.example/art/6.png" }
                }
            },
            "types": [
                { "slot": 1, "type": { "name": "fire", "url": "https://pokeapi.co/api/v2/type/10/" } },
                { "slot": 2, "type": { "name": "flying", "url": "https://pokeapi.co/api/v2/type/3/" } }
            ]
        })
    }

    #[test]
    fn minimal_document_maps_to_pokemon() {
        let raw: PokeApiPokemon = serde_json::from_value(json!({
            "name": "ditto",
            "sprites": { "front_default": "https://img.example/132.png" },
            "types": [{ "type": { "name": "normal" } }]
        }))
        .unwrap();

        let pokemon = Pokemon::try_from(raw).unwrap();
        assert_eq!(pokemon.sprite, "https://img.example/132.png");
        assert_eq!(pokemon.types, vec!["normal"]);
    }

    #[test]
    fn client_creation_success() {
        let client = PokeApiClient::new(PokeApiConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn client_creation_invalid_base_url() {
        let config = PokeApiConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            PokeApiClient::new(config).unwrap_err(),
            PokeApiError::Config(_)
        ));

        let config = PokeApiConfig {
            base_url: "ftp://pokeapi.co/api/v2".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            PokeApiClient::new(config).unwrap_err(),
            PokeApiError::Config(_)
        ));
    }

    #[test]
    fn client_creation_zero_timeout() {
        let config = PokeApiConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(matches!(
            PokeApiClient::new(config).unwrap_err(),
            PokeApiError::Config(_)
        ));
    }

    #[test]
    fn pokemon_url_escapes_and_normalizes() {
        let client = PokeApiClient::new(PokeApiConfig::default()).unwrap();

        let url = client
            .pokemon_url(&PokemonName::new("Mr. Mime").unwrap())
            .unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/mr.%20mime");

        let url = client
            .pokemon_url(&PokemonName::new("a/b").unwrap())
            .unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/a%2Fb");
    }

    #[test]
    fn pokemon_url_tolerates_trailing_slash() {
        let config = PokeApiConfig {
            base_url: "http://localhost:8080/api/v2/".to_string(),
            ..Default::default()
        };
        let client = PokeApiClient::new(config).unwrap();
        let url = client
            .pokemon_url(&PokemonName::new("ditto").unwrap())
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v2/pokemon/ditto");
    }

    #[test]
    fn convert_document_to_pokemon() {
        let raw: PokeApiPokemon = serde_json::from_value(sample_document()).unwrap();
        let pokemon = Pokemon::try_from(raw).unwrap();

        assert_eq!(pokemon.name, "charizard");
        assert_eq!(pokemon.sprite, "https://img.example/6.png");
        assert_eq!(pokemon.types, vec!["fire", "flying"]);
    }

    #[test]
    fn sprite_falls_back_to_artwork_then_shiny() {
        let mut document = sample_document();
        document["sprites"]["front_default"] = serde_json::Value::Null;
        let raw: PokeApiPokemon = serde_json::from_value(document.clone()).unwrap();
        assert_eq!(
            raw.sprites.first_available(),
            Some("https://img.example/art/6.png")
        );

        document["sprites"]["other"] = serde_json::Value::Null;
        let raw: PokeApiPokemon = serde_json::from_value(document).unwrap();
        assert_eq!(
            raw.sprites.first_available(),
            Some("https://img.example/shiny/6.png")
        );
    }

    #[test]
    fn missing_sprite_is_an_error() {
        let document = json!({
            "name": "missingno",
            "sprites": { "front_default": null, "front_shiny": null },
            "types": []
        });
        let raw: PokeApiPokemon = serde_json::from_value(document).unwrap();
        let err = Pokemon::try_from(raw).unwrap_err();
        assert!(matches!(err, PokeApiError::MissingSprite { ref name } if name == "missingno"));

        let api_error = ApiError::from(err);
        assert!(matches!(api_error, ApiError::InvalidResponse { .. }));
    }

    #[test]
    fn error_conversion() {
        let err = ApiError::from(PokeApiError::NotFound {
            name: "notarealmon".to_string(),
        });
        assert!(matches!(err, ApiError::NotFound { ref name } if name == "notarealmon"));

        let err = ApiError::from(PokeApiError::Status {
            status: 502,
            message: "Bad Gateway".to_string(),
        });
        assert!(matches!(err, ApiError::UpstreamStatus { status: 502 }));

        let err = ApiError::from(PokeApiError::Timeout { seconds: 3 });
        assert!(matches!(err, ApiError::Timeout { timeout_seconds: 3 }));
    }
}
