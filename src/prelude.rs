// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use skyline_test_app::prelude::*;
//! ```

pub use crate::api::create_router;
pub use crate::api::handlers::{GREETING, HEALTH_OK};
pub use crate::config::Config;
pub use crate::error::{AppError, Result};
pub use crate::server::{bind, serve, spawn_signal_listener, wait_for_shutdown};
