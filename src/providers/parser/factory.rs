// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::{DynParserProvider, JsonParserProvider, LineParserProvider, ParserError, YamlParserProvider};
use crate::config::ProviderSpec;

/// Factory for creating parser providers from configuration entries.
pub struct ParserProviderFactory;

impl ParserProviderFactory {
    /// Create a parser provider for the given spec.
    ///
    /// When the spec carries no explicit priority, the family defaults
    /// apply: structured formats first, the line splitter last.
    ///
    /// # Errors
    /// Returns [`ParserError::UnknownProviderKind`] for kinds this family
    /// does not know.
    pub fn create_provider(spec: &ProviderSpec) -> Result<Arc<DynParserProvider>, ParserError> {
        let provider: Arc<DynParserProvider> = match spec.kind.as_str() {
            "json" => Arc::new(JsonParserProvider::new(spec.priority.unwrap_or(10))),
            "yaml" => Arc::new(YamlParserProvider::new(spec.priority.unwrap_or(20))),
            "lines" => Arc::new(LineParserProvider::new(spec.priority.unwrap_or(90))),
            other => return Err(ParserError::UnknownProviderKind(other.to_string())),
        };
        Ok(provider)
    }

    /// The provider kinds this factory understands.
    pub fn known_kinds() -> &'static [&'static str] {
        &["json", "yaml", "lines"]
    }
}
