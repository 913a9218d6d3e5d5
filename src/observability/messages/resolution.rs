// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for fallback resolution lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Resolution start and candidate selection
//! * Per-candidate rejection (soft failures)
//! * Panic capture at the executor boundary
//! * Acceptance and exhaustion

use std::fmt::{Display, Formatter};

use crate::confidence::Confidence;
use crate::errors::RejectReason;

/// A resolution pass started with a non-empty candidate list.
///
/// # Log Level
/// `debug!` - Routine operational event
pub struct ResolutionStarted {
    pub candidates: usize,
    pub threshold: Confidence,
}

impl Display for ResolutionStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resolution started: candidates={}, min_confidence={}",
            self.candidates, self.threshold
        )
    }
}

/// No registered provider supports the input descriptor.
///
/// # Log Level
/// `warn!` - The caller receives a structured failure
pub struct NoSupportingProvider {
    pub registered: usize,
}

impl Display for NoSupportingProvider {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No supporting provider among {} registered; nothing executed",
            self.registered
        )
    }
}

/// A candidate was executed and rejected; the scan continues.
///
/// # Log Level
/// `debug!` - Expected during fallback
pub struct CandidateRejected<'a> {
    pub provider: &'a str,
    pub reason: &'a RejectReason,
}

impl Display for CandidateRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Candidate '{}' rejected: {}", self.provider, self.reason)
    }
}

/// A provider implementation panicked during execute.
///
/// # Log Level
/// `error!` - Implementation fault requiring attention; resolution continues
pub struct ProviderPanicked<'a> {
    pub provider: &'a str,
    pub detail: &'a str,
}

impl Display for ProviderPanicked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Provider '{}' panicked during execute: {}",
            self.provider, self.detail
        )
    }
}

/// A candidate's success cleared the threshold and was accepted.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ProviderAccepted<'a> {
    pub provider: &'a str,
    pub confidence: Confidence,
    pub rejected: usize,
}

impl Display for ProviderAccepted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Provider '{}' accepted: confidence={}, earlier_rejections={}",
            self.provider, self.confidence, self.rejected
        )
    }
}

/// Every candidate was tried and none was accepted.
///
/// # Log Level
/// `warn!` - The caller receives the full attempt log
pub struct ResolutionExhausted {
    pub attempts: usize,
    pub skipped: usize,
}

impl Display for ResolutionExhausted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resolution exhausted: attempts={}, skipped={}",
            self.attempts, self.skipped
        )
    }
}
