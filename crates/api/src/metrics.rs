// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Prometheus metrics module
//!
//! Provides global metrics using the default Prometheus registry via macros and
//! an Axum-compatible metrics handler.

use std::sync::LazyLock;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use prometheus::{
    Encoder, HistogramVec, IntCounterVec, TextEncoder, register_histogram_vec,
    register_int_counter_vec,
};
use tracing::error;

/// Total number of Pokémon lookups, labeled by outcome
pub static LOOKUPS: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!(
        "pokemon_finder_lookups_total",
        "Total number of Pokémon lookups, labeled by outcome",
        &["outcome"]
    )
    .expect("Failed to create pokemon_finder_lookups_total counter vec")
});

/// Histogram for upstream API request durations in seconds
pub static UPSTREAM_REQUEST_DURATION: LazyLock<HistogramVec> = LazyLock::new(|| {
    register_histogram_vec!(
        "pokemon_finder_upstream_request_duration",
        "Upstream API request durations in seconds",
        &["api_name", "result"],
        vec![0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]
    )
    .expect("Failed to create upstream request duration histogram")
});

/// Increment the lookup counter
///
/// # Arguments
/// * `outcome` - `found`, `invalid_name` or the upstream error kind
pub fn inc_lookups(outcome: &str) {
    LOOKUPS.with_label_values(&[outcome]).inc();
}

/// Observe the duration of an upstream request
///
/// # Arguments
/// * `api_name` - The name of the upstream source
/// * `result` - `success` or the upstream error kind
/// * `duration_secs` - The duration of the request in seconds
pub fn observe_upstream_duration(api_name: &str, result: &str, duration_secs: f64) {
    UPSTREAM_REQUEST_DURATION
        .with_label_values(&[api_name, result])
        .observe(duration_secs);
}

/// Axum handler that exports metrics in Prometheus text format
pub async fn metrics_handler() -> Response {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = vec![];

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        error!(error = %e, "failed to encode metrics");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, encoder.format_type().to_string())],
        buffer,
    )
        .into_response()
}
