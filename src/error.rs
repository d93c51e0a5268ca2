// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for the Skyline test app

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bind, accept or serve failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Address parsing error
    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
