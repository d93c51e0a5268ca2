// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Skyline Test App
//!
//! Smoke-test HTTP fixture with two plaintext endpoints: a greeting on `/`
//! and a liveness probe on `/health`.
//!
//! ## Main modules
//! - `api`: HTTP router and handlers
//! - `config`: configuration management
//! - `error`: error types
//! - `server`: binding, serving and graceful shutdown
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod error;
pub mod prelude;
pub mod server;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, defaults, env_vars};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and response bodies
pub use api::create_router;
pub use api::handlers::{GREETING, HEALTH_OK};
