// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the Skyline test app
//!
//! Loads the listen address from environment variables. Nothing here is
//! required: with an empty environment the server listens on `0.0.0.0:8080`.

use std::net::SocketAddr;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:8080";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const SERVER_PORT: &str = "SERVER_PORT";
}

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup
    ///
    /// `SERVER_ADDR` replaces the whole address, `SERVER_PORT` then replaces
    /// only its port. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let server_addr =
            get(env_vars::SERVER_ADDR).unwrap_or_else(|| defaults::SERVER_ADDR.to_string());

        let mut config = Config { server_addr };

        if let Some(raw) = get(env_vars::SERVER_PORT) {
            let port = raw.parse::<u16>().map_err(|e| {
                AppError::Config(format!(
                    "Invalid {} '{}': {}",
                    env_vars::SERVER_PORT,
                    raw,
                    e
                ))
            })?;
            let mut addr = config.socket_addr()?;
            addr.set_port(port);
            config.server_addr = addr.to_string();
        }

        config.socket_addr()?;
        Ok(config)
    }

    /// Parses the configured listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(self.server_addr.parse::<SocketAddr>()?)
    }
}
