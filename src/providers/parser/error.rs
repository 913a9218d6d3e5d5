// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for parser provider construction.
//!
//! Parse failures at execute time are not errors at this level; providers
//! report those as declared `Outcome::Failure` values so the fallback scan
//! can continue. This enum covers factory-time problems only.

use thiserror::Error;

/// Errors raised while building parser providers from configuration.
#[derive(Error, Debug, PartialEq)]
pub enum ParserError {
    /// The configured provider kind does not name a known parser.
    #[error("Unknown parser provider kind: '{0}'")]
    UnknownProviderKind(String),
}
