// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for confidence value construction.

use std::fmt;

/// Errors that can occur when constructing a confidence score or threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfidenceError {
    /// The value falls outside the valid `[0.0, 1.0]` range
    OutOfRange {
        /// The rejected raw value
        value: f64,
    },
    /// The value is NaN or infinite and cannot be ordered
    NotANumber,
}

impl fmt::Display for ConfidenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceError::OutOfRange { value } => {
                write!(
                    f,
                    "Confidence value {} is outside the valid range [0.0, 1.0]",
                    value
                )
            }
            ConfidenceError::NotANumber => {
                write!(f, "Confidence value must be a finite number")
            }
        }
    }
}

impl std::error::Error for ConfidenceError {}
