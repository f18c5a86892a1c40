// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Pokémon Finder Server
//!
//! Looks Pokémon up on PokeAPI and serves FastUI page descriptions.

use anyhow::Result;
use api::{Server, ServerConfig, ShutdownConfig};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pokémon Finder server");

    let config = ServerConfig::from_env()?;

    let server = Server::new(config, ShutdownConfig::default())?;

    // NOTE: the `#[tokio::main]` task does not run a worker future, we must spawn
    tokio::spawn(async move { server.run().await }).await??;

    Ok(())
}
