// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Per-request logging layer

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Emits one debug event per request once the response is ready
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started_at = Instant::now();

    let response = next.run(request).await;

    tracing::debug!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_us = u64::try_from(started_at.elapsed().as_micros()).unwrap_or(u64::MAX),
        "request handled"
    );

    response
}
