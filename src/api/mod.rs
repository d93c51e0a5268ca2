// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP API module for the Skyline test app
//!
//! Both endpoints are stateless and answer with fixed plaintext bodies.
//!
//! # Endpoints
//! - `GET /` — greeting
//! - `GET /health` — health check
//!
//! Unknown paths get 404, other methods on these paths get 405.

pub mod handlers;
mod logging;

use axum::{Router, middleware, routing::get};

/// Creates the main Axum router with all endpoints
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(handlers::hello))
        .route("/health", get(handlers::health_check))
        .layer(middleware::from_fn(logging::request_logging))
}
