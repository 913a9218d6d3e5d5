// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for provider registration.

use std::fmt;

/// Errors that can occur while building a provider registry
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// A provider with this name is already registered
    DuplicateProviderName {
        /// The conflicting provider name
        name: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateProviderName { name } => {
                write!(f, "Duplicate provider name: '{}'", name)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
