// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Parser provider family: pick a record parser by file extension.

use std::path::Path;

use crate::registry::ProviderRegistry;
use crate::traits::Provider;

mod error;
mod factory;
mod json;
mod lines;
mod yaml;

pub use error::ParserError;
pub use factory::ParserProviderFactory;
pub use json::JsonParserProvider;
pub use lines::LineParserProvider;
pub use yaml::YamlParserProvider;

/// Trait object type for parser providers.
pub type DynParserProvider =
    dyn Provider<Descriptor = ParseDescriptor, Input = ParseSource, Output = RecordSet>;

impl std::fmt::Debug for DynParserProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynParserProvider")
            .field("name", &self.name())
            .field("priority", &self.priority())
            .finish()
    }
}

/// A registry over the parser family.
pub type ParserRegistry = ProviderRegistry<DynParserProvider>;

/// The selection key for parser providers: a lowercased file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDescriptor {
    pub extension: String,
}

impl ParseDescriptor {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into().to_lowercase(),
        }
    }

    /// Derive a descriptor from a file path; `None` when the path has no
    /// extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::new)
    }
}

/// The content handed to a parser provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseSource {
    pub content: String,
}

impl ParseSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Parsed output: a flat list of records in a common JSON representation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    /// Short tag naming the format that produced the records
    pub format: &'static str,
    pub records: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_lowercases_the_extension() {
        assert_eq!(ParseDescriptor::new("JSON").extension, "json");
    }

    #[test]
    fn descriptor_from_path_uses_the_final_extension() {
        let descriptor = ParseDescriptor::from_path(Path::new("data/export.v2.YAML")).unwrap();
        assert_eq!(descriptor.extension, "yaml");
        assert!(ParseDescriptor::from_path(Path::new("Makefile")).is_none());
    }
}
