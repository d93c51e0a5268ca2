// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod health;
mod hello;

pub use health::{HEALTH_OK, health_check};
pub use hello::{GREETING, hello};
