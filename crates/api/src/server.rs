// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Server implementation module
//!
//! This module provides the main server struct for the Pokémon Finder service,
//! including server lifecycle management, router configuration, and coordinated
//! graceful shutdown using `CancellationToken`.

use std::{future::IntoFuture, net::SocketAddr, sync::Arc, time::Duration};

use axum::{Router, http::HeaderName};
use external_apis::{PokeApiClient, PokeApiConfig};
use hyper::Request;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, warn};

use crate::{
    config::ServerConfig,
    error::{ServerError, ServerResult},
    routes::create_routes,
    state::ServerState,
};

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");
const DEFAULT_GRACEFUL_SHUTDOWN_TIMEOUT_SECONDS: u64 = 30;

/// Configuration for server shutdown behavior
#[derive(Debug, Clone)]
pub struct ShutdownConfig {
    /// Maximum time to wait for in-flight requests once shutdown starts
    pub graceful_timeout: Duration,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            graceful_timeout: Duration::from_secs(DEFAULT_GRACEFUL_SHUTDOWN_TIMEOUT_SECONDS),
        }
    }
}

/// Main server struct
#[derive(Debug)]
pub struct Server {
    /// Server configuration
    config: ServerConfig,
    /// Application router
    router: Router,
    /// Server state
    state: ServerState,
    /// Cancellation token for coordinated shutdown
    cancellation_token: CancellationToken,
    /// Configuration for coordinated shutdown
    shutdown_config: ShutdownConfig,
}

impl Server {
    /// Create new server instance
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Config` if the timeouts are inconsistent or the
    /// upstream client cannot be built from the configuration.
    pub fn new(config: ServerConfig, shutdown_config: ShutdownConfig) -> ServerResult<Self> {
        config.validate().map_err(|e| ServerError::Config {
            message: format!("invalid timeout configuration: {e}"),
        })?;
        let client = PokeApiClient::new(PokeApiConfig::from(&config.pokeapi)).map_err(|e| {
            ServerError::Config {
                message: format!("failed to create PokeAPI client: {e}"),
            }
        })?;
        Ok(Self::with_source(config, shutdown_config, Arc::new(client)))
    }

    /// Create server with a prebuilt PokeAPI client
    ///
    /// The client may point at any base URL, such as a mock upstream.
    pub fn with_source(
        config: ServerConfig,
        shutdown_config: ShutdownConfig,
        source: Arc<PokeApiClient>,
    ) -> Self {
        let cancellation_token = CancellationToken::new();
        let state = ServerState::new(config.clone(), source, cancellation_token.child_token());
        let router = Self::create_router(state.clone());

        Self {
            config,
            router,
            state,
            cancellation_token,
            shutdown_config,
        }
    }

    /// Create application router with middleware
    fn create_router(state: ServerState) -> Router {
        let timeout_duration = state.config().timeout_seconds.value();

        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http().make_span_with(|req: &Request<_>| {
                    if let Some(request_id) = req.headers().get(REQUEST_ID_HEADER) {
                        info_span!("http_request", ?request_id, method = %req.method(), uri = %req.uri())
                    } else {
                        error!("failed to extract id from request");
                        info_span!("http_request", request_id = "unknown", method = %req.method(), uri = %req.uri())
                    }
                }),
            )
            .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
            .layer(CorsLayer::permissive())
            .layer(TimeoutLayer::new(timeout_duration));

        create_routes(&state.config().static_dir)
            .layer(middleware)
            .with_state(state)
    }

    /// Bind the configured address
    async fn bind(&self) -> ServerResult<(TcpListener, SocketAddr)> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                address: addr,
                source,
            })?;

        let actual_addr = listener
            .local_addr()
            .map_err(|source| ServerError::Startup { source })?;

        Ok((listener, actual_addr))
    }

    /// Run the server with coordinated graceful shutdown
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Bind` if unable to bind to the configured address,
    /// or `ServerError::Shutdown` if the server fails while serving.
    pub async fn run(self) -> ServerResult<()> {
        let (listener, actual_addr) = self.bind().await?;

        info!(
            address = %actual_addr,
            environment = %self.config.environment,
            upstream = %self.config.pokeapi.base_url,
            "Pokémon Finder server starting",
        );

        let shutdown_token = self.cancellation_token.clone();
        tokio::spawn(async move {
            info!("spawning the graceful shutdown task");
            Self::shutdown_signal_handler(shutdown_token).await;
        });

        let graceful_token = self.cancellation_token.clone();
        let serve = axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                graceful_token.cancelled().await;
                info!("no longer accepting connections");
            })
            .into_future();

        let deadline_token = self.cancellation_token.clone();
        let graceful_timeout = self.shutdown_config.graceful_timeout;
        let deadline = async move {
            deadline_token.cancelled().await;
            tokio::time::sleep(graceful_timeout).await;
        };

        tokio::select! {
            result = serve => match result {
                Ok(()) => {
                    info!("Pokémon Finder server shut down gracefully");
                    Ok(())
                }
                Err(e) => {
                    error!(error = ?e, "Server error during shutdown");
                    Err(ServerError::Shutdown { source: e })
                }
            },
            () = deadline => {
                warn!(
                    timeout_seconds = graceful_timeout.as_secs(),
                    "graceful shutdown timed out, dropping in-flight requests"
                );
                Ok(())
            }
        }
    }

    /// Wait for SIGINT/SIGTERM (or Ctrl+C off unix) and cancel `cancellation_token`
    async fn shutdown_signal_handler(cancellation_token: CancellationToken) {
        tokio::select! {
            signal_name = wait_for_signal() => {
                warn!("Shutdown signal {} received, cancelling all operations...", signal_name);
                cancellation_token.cancel();
            },
            () = cancellation_token.cancelled() => {
                warn!("Cancellation token already cancelled, shutdown signal handler exiting");
            }
        }
    }

    /// Returns a clone of the cancellation token for coordinated shutdown
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation_token.clone()
    }

    /// Initiates graceful shutdown by cancelling the server's cancellation token
    pub fn shutdown(&self) {
        info!("programmatic shutdown requested");
        self.cancellation_token.cancel();
    }

    /// Run server for testing, returns the bound address
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Bind` if unable to bind to the configured address.
    pub async fn run_for_testing(self) -> ServerResult<(SocketAddr, CancellationToken)> {
        let (listener, actual_addr) = self.bind().await?;

        let token = self.cancellation_token.child_token();
        let task = token.child_token();
        tokio::spawn(async move {
            let _ = axum::serve(listener, self.router)
                .with_graceful_shutdown(async move { task.cancelled().await })
                .await;
        });

        Ok((actual_addr, token))
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get server state for testing
    pub fn state(&self) -> &ServerState {
        &self.state
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> &'static str {
    use tokio::signal::unix::{SignalKind, signal};

    match (
        signal(SignalKind::terminate()),
        signal(SignalKind::interrupt()),
    ) {
        (Ok(mut sigterm), Ok(mut sigint)) => tokio::select! {
            _ = sigterm.recv() => "SIGTERM",
            _ = sigint.recv() => "SIGINT",
        },
        (Err(e), _) | (_, Err(e)) => {
            error!(error = %e, "failed to register unix signal handlers, falling back to ctrl-c");
            ctrl_c().await
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> &'static str {
    ctrl_c().await
}

async fn ctrl_c() -> &'static str {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to install CTRL+C handler, only programmatic shutdown is available");
        std::future::pending::<()>().await;
    }
    "CTRL+C"
}
