// ABOUTME: Diet composer configuration for the macro normalizer
// ABOUTME: Holds the relative deviation tolerated before meals are rescaled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::constants::diet;
use serde::{Deserialize, Serialize};

/// Diet composition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietConfig {
    /// Relative deviation from target (0.02 = 2%) tolerated without rescaling
    pub normalizer_tolerance: f64,
}

impl Default for DietConfig {
    fn default() -> Self {
        Self {
            normalizer_tolerance: diet::NORMALIZER_TOLERANCE,
        }
    }
}
