// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::confidence::Confidence;
use crate::config::ResolverConfig;
use crate::engine::FallbackExecutor;
use crate::providers::geocode::{DynGeocodeProvider, GeocodeProviderFactory, GeocodeRegistry};
use crate::providers::parser::{DynParserProvider, ParserProviderFactory, ParserRegistry};

/// Resolution runtime builder - assembles a registry and executor from
/// configuration.
///
/// The builder is the one place where configuration turns into live wiring:
/// each listed provider is constructed by its family factory and registered
/// in order, which is also how priority ties get their deterministic
/// registration-order tiebreak.
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build a parser-domain executor from configuration.
    ///
    /// # Errors
    /// Fails on unknown provider kinds, duplicate provider names, or an
    /// out-of-range `min_confidence`.
    pub fn parser_runtime(
        cfg: &ResolverConfig,
    ) -> Result<FallbackExecutor<DynParserProvider>, Box<dyn std::error::Error>> {
        let mut registry = ParserRegistry::new();
        for spec in &cfg.providers {
            registry.register(ParserProviderFactory::create_provider(spec)?)?;
        }
        Ok(FallbackExecutor::with_min_confidence(
            Arc::new(registry),
            Self::threshold(cfg)?,
        ))
    }

    /// Build a geocode-domain executor from configuration.
    ///
    /// # Errors
    /// Fails on unknown provider kinds, duplicate provider names, or an
    /// out-of-range `min_confidence`.
    pub fn geocode_runtime(
        cfg: &ResolverConfig,
    ) -> Result<FallbackExecutor<DynGeocodeProvider>, Box<dyn std::error::Error>> {
        let mut registry = GeocodeRegistry::new();
        for spec in &cfg.providers {
            registry.register(GeocodeProviderFactory::create_provider(spec)?)?;
        }
        Ok(FallbackExecutor::with_min_confidence(
            Arc::new(registry),
            Self::threshold(cfg)?,
        ))
    }

    fn threshold(cfg: &ResolverConfig) -> Result<Confidence, Box<dyn std::error::Error>> {
        match cfg.min_confidence {
            Some(value) => Ok(Confidence::new(value)?),
            None => Ok(Confidence::DEFAULT_THRESHOLD),
        }
    }
}
