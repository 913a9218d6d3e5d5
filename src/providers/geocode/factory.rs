// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::{
    CentroidProvider, DynGeocodeProvider, GazetteerProvider, GeocodeError, ReverseGridProvider,
};
use crate::config::ProviderSpec;

/// Factory for creating geocode providers from configuration entries.
pub struct GeocodeProviderFactory;

impl GeocodeProviderFactory {
    /// Create a geocode provider for the given spec.
    ///
    /// # Errors
    /// Returns [`GeocodeError::UnknownProviderKind`] for kinds this family
    /// does not know.
    pub fn create_provider(spec: &ProviderSpec) -> Result<Arc<DynGeocodeProvider>, GeocodeError> {
        let provider: Arc<DynGeocodeProvider> = match spec.kind.as_str() {
            "gazetteer" => Arc::new(GazetteerProvider::new(spec.priority.unwrap_or(10))),
            "centroid" => Arc::new(CentroidProvider::new(spec.priority.unwrap_or(50))),
            "reverse_grid" => Arc::new(ReverseGridProvider::new(spec.priority.unwrap_or(10))),
            other => return Err(GeocodeError::UnknownProviderKind(other.to_string())),
        };
        Ok(provider)
    }

    /// The provider kinds this factory understands.
    pub fn known_kinds() -> &'static [&'static str] {
        &["gazetteer", "centroid", "reverse_grid"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: &str, priority: Option<i32>) -> ProviderSpec {
        ProviderSpec {
            kind: kind.to_string(),
            priority,
        }
    }

    #[test]
    fn creates_every_known_kind() {
        for kind in GeocodeProviderFactory::known_kinds() {
            let provider = GeocodeProviderFactory::create_provider(&spec(kind, None)).unwrap();
            assert_eq!(provider.name(), *kind);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = GeocodeProviderFactory::create_provider(&spec("satellite", None)).unwrap_err();
        assert_eq!(
            err,
            GeocodeError::UnknownProviderKind("satellite".to_string())
        );
    }
}
