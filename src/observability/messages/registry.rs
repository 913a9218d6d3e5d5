// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for provider registration events.

use std::fmt::{Display, Formatter};

/// A provider was added to a registry.
///
/// # Log Level
/// `debug!` - Wiring detail, useful when diagnosing candidate ordering
pub struct ProviderRegistered<'a> {
    pub name: &'a str,
    pub priority: i32,
}

impl Display for ProviderRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Provider '{}' registered: priority={}",
            self.name, self.priority
        )
    }
}
