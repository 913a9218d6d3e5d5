// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The provider capability contract.
//!
//! A provider is one pluggable strategy that may be able to handle a given
//! input: a specific file-format parser, a specific geocoding backend, and
//! so on. Providers declare what they support up front via [`Provider::supports`]
//! so the registry can pick candidates without executing anything.

use async_trait::async_trait;

use crate::confidence::Confidence;

/// A pluggable, priority-ordered strategy for producing a result.
///
/// Implementations are immutable once registered; the registry owns no
/// provider state beyond the `Arc` it holds. `Input` is `Clone` because the
/// executor hands each attempt its own owned copy, which is what lets a
/// panicking provider be isolated without poisoning the resolution loop.
#[async_trait]
pub trait Provider: Send + Sync + 'static {
    /// The minimal data needed to decide whether this provider applies
    /// (e.g. a file extension, a geocoding direction).
    type Descriptor: Send + Sync + 'static;

    /// The full input handed to [`Provider::execute`].
    type Input: Clone + Send + Sync + 'static;

    /// The payload of a successful outcome.
    type Output: Send + 'static;

    /// Stable identifier, unique within a registry.
    fn name(&self) -> &str;

    /// Ordering rank; lower priorities are tried first. Ties fall back to
    /// registration order.
    fn priority(&self) -> i32;

    /// Capability check. A provider that returns `false` here is never
    /// executed for that input.
    fn supports(&self, descriptor: &Self::Descriptor) -> bool;

    /// Attempt to produce a result. Declared failures belong in
    /// [`Outcome::Failure`]; the executor treats a panic the same way but
    /// tags it separately for diagnostics.
    async fn execute(&self, input: Self::Input) -> Outcome<Self::Output>;
}

/// The discriminated result of one provider execution
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The provider produced a result, scored by its own confidence
    Success {
        /// The produced result
        payload: T,
        /// The provider's self-reported trust in it
        confidence: Confidence,
    },
    /// The provider could not produce a result
    Failure {
        /// The provider's description of why
        reason: String,
    },
}

impl<T> Outcome<T> {
    /// Build a success outcome.
    pub fn success(payload: T, confidence: Confidence) -> Self {
        Outcome::Success {
            payload,
            confidence,
        }
    }

    /// Build a declared failure outcome.
    pub fn failure(reason: impl Into<String>) -> Self {
        Outcome::Failure {
            reason: reason.into(),
        }
    }
}
