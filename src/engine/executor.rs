// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The fallback executor: a linear scan over priority-ordered candidates
//! with early termination at the first acceptable success.
//!
//! Each candidate is executed exactly once per `resolve` call; the executor
//! never retries, never fans out to multiple providers concurrently, and
//! defines no timeout of its own. Those are deliberate choices: trying
//! providers one at a time is what keeps side effects (e.g. billable
//! geocoding calls) down to at most one per attempt, and deadlines belong to
//! the providers that know their own transports.

use std::any::Any;
use std::sync::Arc;

use crate::confidence::Confidence;
use crate::engine::Resolution;
use crate::errors::{Attempt, RejectReason, ResolutionError};
use crate::observability::messages::resolution::{
    CandidateRejected, NoSupportingProvider, ProviderAccepted, ProviderPanicked,
    ResolutionExhausted, ResolutionStarted,
};
use crate::registry::ProviderRegistry;
use crate::traits::{Outcome, Provider};

/// Resolves inputs against a shared, immutable provider registry.
pub struct FallbackExecutor<P: ?Sized> {
    registry: Arc<ProviderRegistry<P>>,
    min_confidence: Confidence,
}

impl<P: Provider + ?Sized> FallbackExecutor<P> {
    /// Create an executor with the default minimum confidence (0.5).
    pub fn new(registry: Arc<ProviderRegistry<P>>) -> Self {
        Self::with_min_confidence(registry, Confidence::DEFAULT_THRESHOLD)
    }

    /// Create an executor with an explicit default minimum confidence.
    pub fn with_min_confidence(
        registry: Arc<ProviderRegistry<P>>,
        min_confidence: Confidence,
    ) -> Self {
        Self {
            registry,
            min_confidence,
        }
    }

    /// The registry this executor resolves against.
    pub fn registry(&self) -> &Arc<ProviderRegistry<P>> {
        &self.registry
    }

    /// The default minimum confidence for [`FallbackExecutor::resolve`].
    pub fn min_confidence(&self) -> Confidence {
        self.min_confidence
    }

    /// Resolve with the executor's default minimum confidence.
    ///
    /// # Errors
    /// See [`FallbackExecutor::resolve_with_threshold`].
    pub async fn resolve(
        &self,
        descriptor: &P::Descriptor,
        input: &P::Input,
    ) -> Result<Resolution<P::Output>, ResolutionError> {
        self.resolve_with_threshold(descriptor, input, self.min_confidence)
            .await
    }

    /// Try candidates in priority order, accepting the first success whose
    /// confidence clears `threshold`.
    ///
    /// # Errors
    /// * [`ResolutionError::NoProviderSupports`] when no registered provider
    ///   supports `descriptor`; nothing is executed.
    /// * [`ResolutionError::AllProvidersExhausted`] when every candidate was
    ///   executed once and rejected; carries the ordered attempt log.
    pub async fn resolve_with_threshold(
        &self,
        descriptor: &P::Descriptor,
        input: &P::Input,
        threshold: Confidence,
    ) -> Result<Resolution<P::Output>, ResolutionError> {
        let candidates = self.registry.candidates_for(descriptor);
        let skipped = self.registry.skipped_for(descriptor);

        if candidates.is_empty() {
            tracing::warn!(
                "{}",
                NoSupportingProvider {
                    registered: self.registry.len(),
                }
            );
            return Err(ResolutionError::NoProviderSupports { skipped });
        }

        tracing::debug!(
            "{}",
            ResolutionStarted {
                candidates: candidates.len(),
                threshold,
            }
        );

        let mut attempts: Vec<Attempt> = Vec::new();
        for candidate in candidates {
            let name = candidate.name().to_string();
            let reason = match Self::execute_isolated(&candidate, input.clone()).await {
                Ok(Outcome::Success {
                    payload,
                    confidence,
                }) if confidence.meets(threshold) => {
                    tracing::info!(
                        "{}",
                        ProviderAccepted {
                            provider: &name,
                            confidence,
                            rejected: attempts.len(),
                        }
                    );
                    return Ok(Resolution {
                        provider: name,
                        payload,
                        confidence,
                        rejected: attempts,
                    });
                }
                Ok(Outcome::Success { confidence, .. }) => {
                    RejectReason::BelowConfidenceThreshold {
                        confidence,
                        threshold,
                    }
                }
                Ok(Outcome::Failure { reason }) => {
                    RejectReason::ProviderDeclaredFailure { detail: reason }
                }
                Err(detail) => {
                    tracing::error!(
                        "{}",
                        ProviderPanicked {
                            provider: &name,
                            detail: &detail,
                        }
                    );
                    RejectReason::ProviderRaised { detail }
                }
            };

            tracing::debug!(
                "{}",
                CandidateRejected {
                    provider: &name,
                    reason: &reason,
                }
            );
            attempts.push(Attempt {
                provider: name,
                reason,
            });
        }

        tracing::warn!(
            "{}",
            ResolutionExhausted {
                attempts: attempts.len(),
                skipped: skipped.len(),
            }
        );
        Err(ResolutionError::AllProvidersExhausted { attempts, skipped })
    }

    /// Run one provider execution on its own task so that a panicking
    /// implementation is converted into an `Err(detail)` instead of
    /// unwinding through the resolution loop.
    async fn execute_isolated(
        provider: &Arc<P>,
        input: P::Input,
    ) -> Result<Outcome<P::Output>, String> {
        let provider = Arc::clone(provider);
        let handle = tokio::spawn(async move { provider.execute(input).await });
        handle.await.map_err(|err| {
            if err.is_panic() {
                panic_detail(err.into_panic())
            } else {
                "provider task was cancelled".to_string()
            }
        })
    }
}

/// Extract a readable message from a captured panic payload.
fn panic_detail(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "opaque panic payload".to_string()
    }
}
