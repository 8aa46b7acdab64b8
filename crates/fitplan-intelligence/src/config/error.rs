// ABOUTME: Configuration error type for engine config loading and validation
// ABOUTME: Converts into AppError so callers see a single error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::errors::AppError;
use thiserror::Error;

/// Errors raised while loading or validating [`super::EngineConfig`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Two related values are out of order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),
    /// A value lies outside its accepted bounds
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
    /// An environment override could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string()).with_source(err)
    }
}
