// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in provider families.
//!
//! This module provides the pluggable provider implementations that ship
//! with the crate. Each family pins down the `Provider` associated types for
//! one resolution domain and exposes a factory that builds providers from
//! configuration entries.
//!
//! # Available Families
//!
//! ## Parser Family
//! File-format record parsers selected by file extension:
//! - **JSON**: whole-document or JSON-lines input
//! - **YAML**: single-document input, sequences flattened to records
//! - **Lines**: last-resort plain-text splitter that self-scores low on
//!   binary-looking content
//!
//! ## Geocode Family
//! Offline geocoding lookups selected by direction (forward/reverse):
//! - **Gazetteer**: exact or prefix place-name matches
//! - **Centroid**: country-centroid fallback for unknown places
//! - **Reverse grid**: nearest gazetteer entry for coordinate queries
//!
//! ## Stub Family (Test-Only)
//! Instrumented providers for registry and executor tests; not available in
//! production builds.
//!
//! # Architecture
//!
//! All families follow a consistent factory pattern:
//! ```text
//! Configuration → Factory → Provider Instance → Registry → Executor
//! ```

pub mod geocode;
pub mod parser;
#[cfg(test)]
pub mod stub;
