// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The accepted result of a resolution pass.

use crate::confidence::Confidence;
use crate::errors::Attempt;

/// An accepted provider result plus the trail that led to it.
///
/// `rejected` preserves the attempt order of every earlier candidate that
/// was executed and turned down before this one was accepted; it is empty
/// when the first candidate won.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<T> {
    /// Name of the winning provider
    pub provider: String,
    /// The accepted payload
    pub payload: T,
    /// The winning provider's self-reported confidence
    pub confidence: Confidence,
    /// Earlier candidates that were executed and rejected, in try order
    pub rejected: Vec<Attempt>,
}
