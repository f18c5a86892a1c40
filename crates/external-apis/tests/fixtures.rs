// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0
#![allow(missing_docs, dead_code)]

//! PokeAPI test fixtures
//!
//! Provides trimmed-down upstream documents and mock mounting helpers for
//! PokeAPI client tests.

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const DITTO_SPRITE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/132.png";
pub const PIKACHU_SPRITE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png";
pub const CHARIZARD_SPRITE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/6.png";

/// Build a PokeAPI `pokemon` document with the fields this service reads
pub fn pokemon_document(id: u32, name: &str, sprite: Option<&str>, types: &[&str]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(index, type_name)| {
            json!({
                "slot": index + 1,
                "type": {
                    "name": type_name,
                    "url": format!("https://pokeapi.co/api/v2/type/{type_name}/")
                }
            })
        })
        .collect();

    json!({
        "id": id,
        "name": name,
        "base_experience": 101,
        "height": 3,
        "weight": 40,
        "sprites": {
            "front_default": sprite,
            "front_shiny": null,
            "back_default": null,
            "other": {
                "official-artwork": { "front_default": null }
            }
        },
        "types": types
    })
}

pub fn ditto() -> Value {
    pokemon_document(132, "ditto", Some(DITTO_SPRITE), &["normal"])
}

pub fn pikachu() -> Value {
    pokemon_document(25, "pikachu", Some(PIKACHU_SPRITE), &["electric"])
}

pub fn charizard() -> Value {
    pokemon_document(6, "charizard", Some(CHARIZARD_SPRITE), &["fire", "flying"])
}

/// Mount a 200 response for `GET /pokemon/{name}`
pub async fn mount_pokemon(mock_server: &MockServer, name: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/pokemon/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

/// Mount a bare status response for `GET /pokemon/{name}`
pub async fn mount_status(mock_server: &MockServer, name: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/pokemon/{name}")))
        .respond_with(ResponseTemplate::new(status).set_body_string("Not Found"))
        .mount(mock_server)
        .await;
}

/// Mount the health check endpoint answering with `status`
pub async fn mount_health(mock_server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "count": 1302,
            "results": [{ "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" }]
        })))
        .mount(mock_server)
        .await;
}
