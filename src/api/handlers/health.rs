// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{http::StatusCode, response::IntoResponse};

/// Body returned by the health endpoint
pub const HEALTH_OK: &str = "OK";

/// GET /health
///
/// Liveness probe. Answering at all means the process is up, so there is
/// nothing to check.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, HEALTH_OK)
}
