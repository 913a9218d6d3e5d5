// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Failure values produced during fallback resolution.
//!
//! Per-candidate outcomes are always captured as data rather than thrown:
//! `resolve` returns a [`ResolutionError`] describing exactly what happened,
//! and the caller decides whether "no provider could help" is fatal.

use std::fmt;

use crate::confidence::Confidence;

/// Why a candidate provider was rejected during one resolution pass
#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    /// The provider succeeded but its self-reported confidence fell short
    BelowConfidenceThreshold {
        /// The confidence the provider reported
        confidence: Confidence,
        /// The threshold in force for this resolution
        threshold: Confidence,
    },
    /// The provider explicitly reported it could not produce a result
    ProviderDeclaredFailure {
        /// The provider's own description of the failure
        detail: String,
    },
    /// The provider implementation panicked; caught at the executor boundary
    ProviderRaised {
        /// The captured panic payload text
        detail: String,
    },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::BelowConfidenceThreshold {
                confidence,
                threshold,
            } => {
                write!(
                    f,
                    "succeeded below the confidence threshold ({} < {})",
                    confidence, threshold
                )
            }
            RejectReason::ProviderDeclaredFailure { detail } => {
                write!(f, "reported failure: {}", detail)
            }
            RejectReason::ProviderRaised { detail } => {
                write!(f, "panicked: {}", detail)
            }
        }
    }
}

/// One executed candidate and the reason it was rejected
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    /// Name of the provider that was tried
    pub provider: String,
    /// Why its answer was not accepted
    pub reason: RejectReason,
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "provider '{}' {}", self.provider, self.reason)
    }
}

/// Terminal failure of a resolution pass
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionError {
    /// No registered provider declared support for the input descriptor;
    /// nothing was executed
    NoProviderSupports {
        /// Names of the registered providers, all skipped as unsupported
        skipped: Vec<String>,
    },
    /// Every candidate was tried exactly once and none produced an
    /// acceptable result
    AllProvidersExhausted {
        /// Executed candidates with their rejection reasons, in try order
        attempts: Vec<Attempt>,
        /// Providers that never ran because they did not support the input
        skipped: Vec<String>,
    },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionError::NoProviderSupports { skipped } => {
                write!(
                    f,
                    "No registered provider supports the input (skipped: {})",
                    skipped.join(", ")
                )
            }
            ResolutionError::AllProvidersExhausted { attempts, skipped } => {
                write!(f, "All {} candidate providers exhausted: ", attempts.len())?;
                for (i, attempt) in attempts.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", attempt)?;
                }
                if !skipped.is_empty() {
                    write!(f, " (skipped as unsupported: {})", skipped.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ResolutionError {}
