// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration for one resolution domain.
///
/// Typically loaded from a YAML file. It names the provider family, the
/// minimum confidence a result must carry to be accepted, and the providers
/// to register (with optional per-provider priority overrides).
///
/// # Example
/// ```yaml
/// domain: parser
/// min_confidence: 0.5
/// providers:
///   - kind: json
///   - kind: yaml
///   - kind: lines
///     priority: 99
/// ```
#[derive(Debug, Deserialize)]
pub struct ResolverConfig {
    pub domain: Domain,
    /// Minimum accepted confidence; defaults to 0.5 when omitted
    #[serde(default)]
    pub min_confidence: Option<f64>,
    pub providers: Vec<ProviderSpec>,
}

/// The provider family a config assembles.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Parser,
    Geocode,
}

/// One provider to register.
///
/// # Fields
/// * `kind` - Which provider implementation to build (family-specific)
/// * `priority` - Optional override; lower is tried first. Omitted means the
///   family default for that kind.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProviderSpec {
    pub kind: String,
    #[serde(default)]
    pub priority: Option<i32>,
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ResolverConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let cfg: ResolverConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
///
/// This function loads the configuration and validates the provider list
/// (known kinds, no duplicates, threshold in range) before anything is
/// constructed from it.
pub fn load_and_validate_config<P: AsRef<Path>>(
    path: P,
) -> Result<ResolverConfig, Box<dyn std::error::Error>> {
    let cfg = load_config(path)?;

    if let Err(validation_errors) = crate::config::validate_config(&cfg) {
        let error_messages: Vec<String> =
            validation_errors.iter().map(|e| e.to_string()).collect();
        let combined_error = format!(
            "Configuration validation failed:\n{}",
            error_messages.join("\n")
        );
        return Err(combined_error.into());
    }

    Ok(cfg)
}
