// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use super::{Direction, GeoPoint, GeocodeQuery, GAZETTEER};
use crate::confidence::Confidence;
use crate::traits::{Outcome, Provider};

/// Reverse geocoding against the embedded place-name table: nearest entry
/// by squared degree distance.
///
/// Confidence decays with distance (`0.9 / (1 + d²)`), so coordinates in
/// the middle of an ocean produce a technically-nearest answer that the
/// default threshold will reject.
pub struct ReverseGridProvider {
    priority: i32,
}

impl ReverseGridProvider {
    pub fn new(priority: i32) -> Self {
        Self { priority }
    }
}

const MAX_REVERSE_CONFIDENCE: f64 = 0.9;

#[async_trait]
impl Provider for ReverseGridProvider {
    type Descriptor = Direction;
    type Input = GeocodeQuery;
    type Output = GeoPoint;

    fn name(&self) -> &str {
        "reverse_grid"
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn supports(&self, descriptor: &Self::Descriptor) -> bool {
        *descriptor == Direction::Reverse
    }

    async fn execute(&self, input: Self::Input) -> Outcome<Self::Output> {
        let (latitude, longitude) = match input {
            GeocodeQuery::Coordinates {
                latitude,
                longitude,
            } => (latitude, longitude),
            GeocodeQuery::Address(_) => {
                return Outcome::failure("reverse lookup expects coordinates");
            }
        };

        if !latitude.is_finite() || !longitude.is_finite() {
            return Outcome::failure("coordinates must be finite");
        }

        let nearest = GAZETTEER
            .iter()
            .map(|(place, lat, lon)| {
                let d_lat = lat - latitude;
                let d_lon = lon - longitude;
                (place, lat, lon, d_lat * d_lat + d_lon * d_lon)
            })
            .min_by(|a, b| a.3.total_cmp(&b.3));

        match nearest {
            Some((place, lat, lon, distance_sq)) => {
                let score = MAX_REVERSE_CONFIDENCE / (1.0 + distance_sq);
                // The formula is bounded to (0, 0.9], so this cannot fail.
                let confidence = Confidence::new(score).unwrap_or(Confidence::MIN);
                Outcome::success(
                    GeoPoint {
                        latitude: *lat,
                        longitude: *lon,
                        label: format!("near {}", place),
                    },
                    confidence,
                )
            }
            None => Outcome::failure("place table is empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn execute(latitude: f64, longitude: f64) -> Outcome<GeoPoint> {
        ReverseGridProvider::new(10)
            .execute(GeocodeQuery::Coordinates {
                latitude,
                longitude,
            })
            .await
    }

    #[tokio::test]
    async fn coordinates_near_a_city_resolve_with_high_confidence() {
        match execute(52.51, 13.41).await {
            Outcome::Success {
                payload,
                confidence,
            } => {
                assert_eq!(payload.label, "near berlin");
                assert!(confidence.meets(Confidence::DEFAULT_THRESHOLD));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn remote_coordinates_score_below_the_default_threshold() {
        // South Atlantic, far from every table entry.
        match execute(-45.0, -30.0).await {
            Outcome::Success { confidence, .. } => {
                assert!(!confidence.meets(Confidence::DEFAULT_THRESHOLD));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn address_queries_are_a_declared_failure() {
        let outcome = ReverseGridProvider::new(10)
            .execute(GeocodeQuery::Address("berlin".to_string()))
            .await;
        assert!(matches!(outcome, Outcome::Failure { .. }));
    }

    #[tokio::test]
    async fn non_finite_coordinates_are_a_declared_failure() {
        let outcome = execute(f64::NAN, 0.0).await;
        assert!(matches!(outcome, Outcome::Failure { .. }));
    }

    #[tokio::test]
    async fn reverse_only() {
        let provider = ReverseGridProvider::new(10);
        assert!(provider.supports(&Direction::Reverse));
        assert!(!provider.supports(&Direction::Forward));
    }
}
