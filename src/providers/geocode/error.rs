// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for geocode provider construction.

use thiserror::Error;

/// Errors raised while building geocode providers from configuration.
#[derive(Error, Debug, PartialEq)]
pub enum GeocodeError {
    /// The configured provider kind does not name a known geocoder.
    #[error("Unknown geocode provider kind: '{0}'")]
    UnknownProviderKind(String),
}
