// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation: catch wiring mistakes before any provider is
//! constructed. All problems are collected and reported together rather
//! than failing on the first one.

use std::fmt;

use crate::config::{Domain, ResolverConfig};
use crate::providers::geocode::GeocodeProviderFactory;
use crate::providers::parser::ParserProviderFactory;

/// Errors that can occur during resolver configuration validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The provider list is empty; nothing could ever resolve
    EmptyProviderList,
    /// The same provider kind appears more than once
    DuplicateProviderKind {
        /// The repeated kind
        kind: String,
    },
    /// A provider kind is not known to the configured domain's factory
    UnknownProviderKind {
        /// The domain being assembled
        domain: Domain,
        /// The unrecognized kind
        kind: String,
    },
    /// `min_confidence` falls outside `[0.0, 1.0]`
    InvalidMinConfidence {
        /// The rejected value
        value: f64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyProviderList => {
                write!(f, "Provider list is empty")
            }
            ValidationError::DuplicateProviderKind { kind } => {
                write!(f, "Provider kind '{}' is listed more than once", kind)
            }
            ValidationError::UnknownProviderKind { domain, kind } => {
                write!(
                    f,
                    "Provider kind '{}' is not known to the {:?} domain",
                    kind, domain
                )
            }
            ValidationError::InvalidMinConfidence { value } => {
                write!(
                    f,
                    "min_confidence {} is outside the valid range [0.0, 1.0]",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a resolver configuration, collecting every problem found.
///
/// # Errors
/// Returns the full list of [`ValidationError`]s when the config is invalid.
pub fn validate_config(cfg: &ResolverConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if cfg.providers.is_empty() {
        errors.push(ValidationError::EmptyProviderList);
    }

    let known: &[&str] = match cfg.domain {
        Domain::Parser => ParserProviderFactory::known_kinds(),
        Domain::Geocode => GeocodeProviderFactory::known_kinds(),
    };

    let mut seen: Vec<&str> = Vec::new();
    for spec in &cfg.providers {
        if seen.contains(&spec.kind.as_str()) {
            errors.push(ValidationError::DuplicateProviderKind {
                kind: spec.kind.clone(),
            });
        } else {
            seen.push(spec.kind.as_str());
        }

        if !known.contains(&spec.kind.as_str()) {
            errors.push(ValidationError::UnknownProviderKind {
                domain: cfg.domain,
                kind: spec.kind.clone(),
            });
        }
    }

    if let Some(value) = cfg.min_confidence {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            errors.push(ValidationError::InvalidMinConfidence { value });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderSpec;

    fn config(domain: Domain, kinds: &[&str], min_confidence: Option<f64>) -> ResolverConfig {
        ResolverConfig {
            domain,
            min_confidence,
            providers: kinds
                .iter()
                .map(|kind| ProviderSpec {
                    kind: kind.to_string(),
                    priority: None,
                })
                .collect(),
        }
    }

    #[test]
    fn valid_parser_config_passes() {
        let cfg = config(Domain::Parser, &["json", "yaml", "lines"], Some(0.5));
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn empty_provider_list_is_flagged() {
        let cfg = config(Domain::Parser, &[], None);
        assert_eq!(
            validate_config(&cfg).unwrap_err(),
            vec![ValidationError::EmptyProviderList]
        );
    }

    #[test]
    fn duplicate_kind_is_flagged() {
        let cfg = config(Domain::Parser, &["json", "json"], None);
        assert_eq!(
            validate_config(&cfg).unwrap_err(),
            vec![ValidationError::DuplicateProviderKind {
                kind: "json".to_string()
            }]
        );
    }

    #[test]
    fn unknown_kind_is_flagged_per_domain() {
        // "gazetteer" is a geocode kind; the parser domain must reject it.
        let cfg = config(Domain::Parser, &["gazetteer"], None);
        assert_eq!(
            validate_config(&cfg).unwrap_err(),
            vec![ValidationError::UnknownProviderKind {
                domain: Domain::Parser,
                kind: "gazetteer".to_string()
            }]
        );
    }

    #[test]
    fn out_of_range_min_confidence_is_flagged() {
        let cfg = config(Domain::Geocode, &["gazetteer"], Some(1.5));
        assert_eq!(
            validate_config(&cfg).unwrap_err(),
            vec![ValidationError::InvalidMinConfidence { value: 1.5 }]
        );
    }

    #[test]
    fn multiple_problems_are_all_reported() {
        let cfg = config(Domain::Parser, &["json", "json", "xml"], Some(-0.1));
        let errors = validate_config(&cfg).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
