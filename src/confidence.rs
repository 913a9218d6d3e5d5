// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Confidence scores and threshold checks.
//!
//! Providers self-report how trustworthy a produced result is as a value in
//! `[0.0, 1.0]`; the fallback executor compares that score against the
//! caller's minimum. Keeping the score in a validated newtype means the
//! comparison site never has to re-check the range.

use std::fmt;

use crate::errors::ConfidenceError;

/// A normalized trust score in `[0.0, 1.0]`.
///
/// Construction goes through [`Confidence::new`], which rejects NaN,
/// infinities, and out-of-range values. Once built, a `Confidence` is a plain
/// `Copy` value with a total comparison against thresholds of the same type.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Confidence(f64);

impl Confidence {
    /// The lowest valid confidence (complete distrust).
    pub const MIN: Confidence = Confidence(0.0);

    /// The highest valid confidence (full trust).
    pub const MAX: Confidence = Confidence(1.0);

    /// The threshold used when a caller does not supply one.
    pub const DEFAULT_THRESHOLD: Confidence = Confidence(0.5);

    /// Validate and wrap a raw score.
    ///
    /// # Errors
    /// Returns [`ConfidenceError`] when `value` is NaN, infinite, or outside
    /// `[0.0, 1.0]`.
    pub fn new(value: f64) -> Result<Self, ConfidenceError> {
        if !value.is_finite() {
            return Err(ConfidenceError::NotANumber);
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfidenceError::OutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Wrap a compile-time literal known to be in range.
    ///
    /// Only for in-crate provider implementations whose scores are fixed
    /// constants; everything arriving from configuration or callers goes
    /// through [`Confidence::new`].
    pub(crate) const fn from_literal(value: f64) -> Self {
        Self(value)
    }

    /// The raw score.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether this score clears `threshold` (inclusive).
    pub fn meets(&self, threshold: Confidence) -> bool {
        self.0 >= threshold.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
