// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use super::{Direction, GeoPoint, GeocodeQuery, COUNTRY_CENTROIDS};
use crate::confidence::Confidence;
use crate::traits::{Outcome, Provider};

/// Forward geocoding fallback: match the trailing component of an address
/// against the country-centroid table.
///
/// A centroid is a real answer but a coarse one, so this provider scores a
/// flat 0.55 and belongs at a higher priority number than the gazetteer.
pub struct CentroidProvider {
    priority: i32,
}

impl CentroidProvider {
    pub fn new(priority: i32) -> Self {
        Self { priority }
    }
}

const CENTROID_CONFIDENCE: Confidence = Confidence::from_literal(0.55);

#[async_trait]
impl Provider for CentroidProvider {
    type Descriptor = Direction;
    type Input = GeocodeQuery;
    type Output = GeoPoint;

    fn name(&self) -> &str {
        "centroid"
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn supports(&self, descriptor: &Self::Descriptor) -> bool {
        *descriptor == Direction::Forward
    }

    async fn execute(&self, input: Self::Input) -> Outcome<Self::Output> {
        let address = match input {
            GeocodeQuery::Address(address) => address,
            GeocodeQuery::Coordinates { .. } => {
                return Outcome::failure("centroid lookup expects a free-text address");
            }
        };

        // "Somewhere Street 7, Lisbon, Portugal" -> "portugal"
        let country = address
            .rsplit(',')
            .next()
            .map(|part| part.trim().to_lowercase())
            .unwrap_or_default();
        if country.is_empty() {
            return Outcome::failure("empty address");
        }

        match COUNTRY_CENTROIDS
            .iter()
            .find(|(name, _, _)| *name == country)
        {
            Some((name, lat, lon)) => Outcome::success(
                GeoPoint {
                    latitude: *lat,
                    longitude: *lon,
                    label: format!("country centroid: {}", name),
                },
                CENTROID_CONFIDENCE,
            ),
            None => Outcome::failure(format!(
                "no country centroid for trailing component '{}'",
                country
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn execute(address: &str) -> Outcome<GeoPoint> {
        CentroidProvider::new(50)
            .execute(GeocodeQuery::Address(address.to_string()))
            .await
    }

    #[tokio::test]
    async fn trailing_country_component_matches() {
        match execute("Rua Augusta 12, Lisbon, Portugal").await {
            Outcome::Success {
                payload,
                confidence,
            } => {
                assert_eq!(payload.label, "country centroid: portugal");
                assert_eq!(confidence, CENTROID_CONFIDENCE);
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn bare_country_name_matches() {
        match execute("kenya").await {
            Outcome::Success { payload, .. } => {
                assert_eq!(payload.label, "country centroid: kenya");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unknown_country_is_a_declared_failure() {
        match execute("Main Street 1, Gondor").await {
            Outcome::Failure { reason } => assert!(reason.contains("gondor")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn forward_only() {
        let provider = CentroidProvider::new(50);
        assert!(provider.supports(&Direction::Forward));
        assert!(!provider.supports(&Direction::Reverse));
    }
}
