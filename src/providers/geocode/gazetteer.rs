// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use super::{Direction, GeoPoint, GeocodeQuery, GAZETTEER};
use crate::confidence::Confidence;
use crate::traits::{Outcome, Provider};

/// Forward geocoding against the embedded place-name table.
///
/// Exact matches score 0.95; case-insensitive prefix matches score 0.7,
/// leaving the caller's threshold to decide whether "lis" is close enough
/// to "lisbon".
pub struct GazetteerProvider {
    priority: i32,
}

impl GazetteerProvider {
    pub fn new(priority: i32) -> Self {
        Self { priority }
    }
}

const EXACT_MATCH_CONFIDENCE: Confidence = Confidence::from_literal(0.95);
const PREFIX_MATCH_CONFIDENCE: Confidence = Confidence::from_literal(0.7);

/// Minimum query length for prefix matching; shorter fragments match too
/// many entries to be meaningful.
const MIN_PREFIX_LEN: usize = 3;

#[async_trait]
impl Provider for GazetteerProvider {
    type Descriptor = Direction;
    type Input = GeocodeQuery;
    type Output = GeoPoint;

    fn name(&self) -> &str {
        "gazetteer"
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
                return Outcome::failure("gazetteer lookup expects a free-text address");
            }
        };

        let needle = address.trim().to_lowercase();
        if needle.is_empty() {
            return Outcome::failure("empty address");
        }

        if let Some((place, lat, lon)) = GAZETTEER.iter().find(|(place, _, _)| *place == needle)
        {
            return Outcome::success(
                GeoPoint {
                    latitude: *lat,
                    longitude: *lon,
                    label: (*place).to_string(),
                },
                EXACT_MATCH_CONFIDENCE,
            );
        }

        if needle.len() >= MIN_PREFIX_LEN {
            if let Some((place, lat, lon)) = GAZETTEER
                .iter()
                .find(|(place, _, _)| place.starts_with(&needle))
            {
                return Outcome::success(
                    GeoPoint {
                        latitude: *lat,
                        longitude: *lon,
                        label: (*place).to_string(),
                    },
                    PREFIX_MATCH_CONFIDENCE,
                );
            }
        }

        Outcome::failure(format!("address '{}' not found in gazetteer", address))
    }
}
