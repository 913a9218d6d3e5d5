// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The provider registry: an ordered, name-unique collection of providers.
//!
//! A registry is populated once during wiring and is read-only afterwards;
//! concurrent resolutions share it behind an `Arc` without locking. Candidate
//! selection never mutates the registry and is deterministic: ascending
//! priority, ties broken by registration order.

use std::sync::Arc;

use crate::errors::RegistryError;
use crate::observability::messages::registry::ProviderRegistered;
use crate::traits::Provider;

/// Holds the fixed set of providers for one resolution domain.
///
/// `P` is normally a trait object type, e.g.
/// `ProviderRegistry<dyn Provider<Descriptor = ParseDescriptor, ...>>`;
/// concrete provider types work too in tests.
pub struct ProviderRegistry<P: ?Sized> {
    providers: Vec<Arc<P>>,
}

impl<P: Provider + ?Sized> ProviderRegistry<P> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Append a provider.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateProviderName`] if a provider with
    /// the same name is already registered; the registry is unchanged in
    /// that case.
    pub fn register(&mut self, provider: Arc<P>) -> Result<(), RegistryError> {
        if self.providers.iter().any(|p| p.name() == provider.name()) {
            return Err(RegistryError::DuplicateProviderName {
                name: provider.name().to_string(),
            });
        }

        tracing::debug!(
            "{}",
            ProviderRegistered {
                name: provider.name(),
                priority: provider.priority(),
            }
        );
        self.providers.push(provider);
        Ok(())
    }

    /// Providers that support `descriptor`, sorted ascending by priority.
    ///
    /// The sort is stable, so providers with equal priority keep their
    /// registration order. Returns an empty vec (not an error) when nothing
    /// matches.
    pub fn candidates_for(&self, descriptor: &P::Descriptor) -> Vec<Arc<P>> {
        let mut candidates: Vec<Arc<P>> = self
            .providers
            .iter()
            .filter(|p| p.supports(descriptor))
            .cloned()
            .collect();
        candidates.sort_by_key(|p| p.priority());
        candidates
    }

    /// Names of registered providers that do not support `descriptor`.
    ///
    /// These providers are never executed for that input; the executor
    /// records them as "skipped: unsupported" in failure values.
    pub fn skipped_for(&self, descriptor: &P::Descriptor) -> Vec<String> {
        self.providers
            .iter()
            .filter(|p| !p.supports(descriptor))
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Direct lookup by name, for diagnostics and tests.
    pub fn by_name(&self, name: &str) -> Option<&Arc<P>> {
        self.providers.iter().find(|p| p.name() == name)
    }

    /// All registered provider names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(|p| p.name())
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl<P: Provider + ?Sized> Default for ProviderRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized> std::fmt::Debug for ProviderRegistry<P>
where
    P: Provider,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("provider_count", &self.providers.len())
            .field("provider_names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::providers::stub::{StaticProvider, StubRegistry};
    use crate::confidence::Confidence;

    fn static_provider(name: &'static str, priority: i32) -> Arc<StaticProvider> {
        Arc::new(StaticProvider::new(name, priority, Confidence::MAX))
    }

    #[test]
    fn duplicate_name_is_rejected_and_registry_unchanged() {
        let mut registry = StubRegistry::new();
        registry.register(static_provider("alpha", 1)).unwrap();

        let err = registry
            .register(static_provider("alpha", 2))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateProviderName {
                name: "alpha".to_string()
            }
        );

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.by_name("alpha").unwrap().priority(), 1);
    }

    #[test]
    fn candidates_are_sorted_by_priority() {
        let mut registry = StubRegistry::new();
        registry.register(static_provider("low_rank", 30)).unwrap();
        registry.register(static_provider("high_rank", 10)).unwrap();
        registry.register(static_provider("mid_rank", 20)).unwrap();

        let names: Vec<_> = registry
            .candidates_for(&"any")
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["high_rank", "mid_rank", "low_rank"]);
    }

    #[test]
    fn priority_ties_keep_registration_order() {
        let mut registry = StubRegistry::new();
        registry.register(static_provider("first", 5)).unwrap();
        registry.register(static_provider("second", 5)).unwrap();
        registry.register(static_provider("third", 5)).unwrap();

        let names: Vec<_> = registry
            .candidates_for(&"any")
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn unsupported_providers_are_filtered_and_reported_as_skipped() {
        let mut registry = StubRegistry::new();
        registry
            .register(Arc::new(
                StaticProvider::new("json_only", 1, Confidence::MAX)
                    .supporting(&["json"]),
            ))
            .unwrap();
        registry.register(static_provider("catch_all", 2)).unwrap();

        let candidates = registry.candidates_for(&"yaml");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name(), "catch_all");
        assert_eq!(registry.skipped_for(&"yaml"), vec!["json_only".to_string()]);
    }

    #[test]
    fn candidates_for_is_idempotent() {
        let mut registry = StubRegistry::new();
        registry.register(static_provider("a", 2)).unwrap();
        registry.register(static_provider("b", 1)).unwrap();

        let first: Vec<_> = registry
            .candidates_for(&"any")
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        let second: Vec<_> = registry
            .candidates_for(&"any")
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(first, second);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn empty_match_returns_empty_vec_not_error() {
        let mut registry = StubRegistry::new();
        registry
            .register(Arc::new(
                StaticProvider::new("json_only", 1, Confidence::MAX)
                    .supporting(&["json"]),
            ))
            .unwrap();

        assert!(registry.candidates_for(&"csv").is_empty());
    }

    #[test]
    fn by_name_finds_registered_providers() {
        let mut registry = StubRegistry::new();
        registry.register(static_provider("alpha", 1)).unwrap();

        assert!(registry.by_name("alpha").is_some());
        assert!(registry.by_name("missing").is_none());
    }
}
