// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{http::StatusCode, response::IntoResponse};

/// Body returned by the root endpoint
pub const GREETING: &str = "Hello from Test Skyline App!";

/// GET /
///
/// Fixed plaintext greeting.
pub async fn hello() -> impl IntoResponse {
    (StatusCode::OK, GREETING)
}
