// ABOUTME: Unified error type and error codes shared by every fitplan crate
// ABOUTME: AppError carries a stable code, a human message, and an optional source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Unified Error Handling
//!
//! The plan engine itself never fails on profile or catalog content: bad
//! numbers are defaulted and short buckets produce short plans. Errors only
//! appear at the edges of the system, namely parsing caller-supplied labels,
//! loading catalogs, and loading configuration. They all funnel into
//! [`AppError`] so the excluded HTTP layer can map them to a status code.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Caller input could not be interpreted
    InvalidInput = 3000,
    /// Numeric input lies outside the accepted range
    ValueOutOfRange = 3003,

    // Resources (4000-4999)
    /// A referenced file or catalog entry does not exist
    ResourceNotFound = 4000,

    // Configuration (6000-6999)
    /// Engine configuration failed to parse or validate
    ConfigInvalid = 6002,

    // Internal (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
    /// JSON (de)serialization failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// HTTP status code the serving layer should use for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::ValueOutOfRange | Self::SerializationError => 400,
            Self::ResourceNotFound => 404,
            Self::ConfigInvalid | Self::InternalError => 500,
        }
    }

    /// User-facing description of this error class
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigInvalid => "Engine configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the engine and its facade
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error class
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Underlying cause, if any
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result alias used across fitplan crates
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach an underlying cause
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid caller input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside its accepted range
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Missing file or catalog entry
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid engine configuration
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization failure
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Unexpected internal failure
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {err}")).with_source(err)
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        let code = if err.kind() == io::ErrorKind::NotFound {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::InternalError
        };
        Self::new(code, format!("I/O error: {err}")).with_source(err)
    }
}
