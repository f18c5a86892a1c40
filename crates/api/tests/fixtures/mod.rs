// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0
#![allow(dead_code)]

//! Test fixtures for end-to-end server tests
//!
//! Starts the server on an ephemeral port with its upstream pointed at a
//! wiremock server standing in for PokeAPI.

use std::{net::SocketAddr, path::Path};

use api::{Server, ServerConfig, ShutdownConfig};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const DITTO_SPRITE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/132.png";
pub const CHARIZARD_SPRITE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/6.png";

/// Running server plus its mock upstream
#[derive(Debug)]
pub struct TestApp {
    pub addr: SocketAddr,
    pub upstream: MockServer,
    pub client: reqwest::Client,
    token: CancellationToken,
}

impl TestApp {
    /// Start a server using the default static directory
    pub async fn spawn() -> Self {
        Self::spawn_with(|config| config).await
    }

    /// Start a server serving `static_dir` under `/static`
    pub async fn spawn_with_static_dir(static_dir: &Path) -> Self {
        let static_dir = static_dir.to_path_buf();
        Self::spawn_with(move |config| config.with_static_dir(static_dir)).await
    }

    async fn spawn_with(customize: impl FnOnce(ServerConfig) -> ServerConfig) -> Self {
        let upstream = MockServer::start().await;
        let config = customize(ServerConfig::for_testing().with_pokeapi_base_url(upstream.uri()));

        let (addr, token) = Server::new(config, ShutdownConfig::default())
            .expect("Failed to create server")
            .run_for_testing()
            .await
            .expect("Failed to start test server");

        Self {
            addr,
            upstream,
            client: reqwest::Client::new(),
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send request")
    }

    /// Fetch a page description and decode it
    pub async fn page(&self, name: &str) -> Value {
        let response = self.get(&format!("/api/pokemon/{name}")).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.expect("page is not JSON")
    }

    /// Answer `GET /pokemon/{name}` with `body`
    pub async fn mount_pokemon(&self, name: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/pokemon/{name}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.upstream)
            .await;
    }

    /// Answer `GET /pokemon/{name}` with a bare status
    pub async fn mount_status(&self, name: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/pokemon/{name}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.upstream)
            .await;
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// PokeAPI document with the fields the service reads
pub fn pokemon_document(name: &str, sprite: &str, types: &[&str]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(index, type_name)| {
            json!({ "slot": index + 1, "type": { "name": type_name, "url": "" } })
        })
        .collect();

    json!({
        "name": name,
        "sprites": { "front_default": sprite, "front_shiny": null },
        "types": types
    })
}

pub fn ditto() -> Value {
    pokemon_document("ditto", DITTO_SPRITE, &["normal"])
}

pub fn charizard() -> Value {
    pokemon_document("charizard", CHARIZARD_SPRITE, &["fire", "flying"])
}

/// Children of the container `Div`
pub fn container_children(page: &Value) -> &Vec<Value> {
    page[2]["components"]
        .as_array()
        .expect("container has no components")
}
