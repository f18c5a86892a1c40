// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Health check types for upstream sources

use serde::{Deserialize, Serialize};

/// Health status of an upstream source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum HealthStatus {
    /// Upstream is answering normally
    Up,
    /// Upstream answers but not as expected
    Degraded { reason: String },
    /// Upstream is unreachable
    Down { reason: String },
}

impl HealthStatus {
    /// Whether lookups can be expected to reach the upstream
    pub fn is_available(&self) -> bool {
        matches!(self, HealthStatus::Up | HealthStatus::Degraded { .. })
    }

    /// Whether the upstream is unreachable
    pub fn is_down(&self) -> bool {
        matches!(self, HealthStatus::Down { .. })
    }

    /// Human-readable description of the status
    pub fn description(&self) -> &str {
        match self {
            HealthStatus::Up => "upstream is healthy",
            HealthStatus::Degraded { reason } | HealthStatus::Down { reason } => reason,
        }
    }
}
