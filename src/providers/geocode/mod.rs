// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Geocode provider family: offline forward and reverse geocoding.
//!
//! All built-in providers resolve against small embedded tables; wiring a
//! networked geocoding backend in is a host concern and happens by
//! implementing [`crate::traits::Provider`] with this family's types.

use crate::registry::ProviderRegistry;
use crate::traits::Provider;

mod centroid;
mod error;
mod factory;
mod gazetteer;
mod reverse;

pub use centroid::CentroidProvider;
pub use error::GeocodeError;
pub use factory::GeocodeProviderFactory;
pub use gazetteer::GazetteerProvider;
pub use reverse::ReverseGridProvider;

/// Trait object type for geocode providers.
pub type DynGeocodeProvider =
    dyn Provider<Descriptor = Direction, Input = GeocodeQuery, Output = GeoPoint>;

impl std::fmt::Debug for DynGeocodeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynGeocodeProvider")
            .field("name", &self.name())
            .field("priority", &self.priority())
            .finish()
    }
}

/// A registry over the geocode family.
pub type GeocodeRegistry = ProviderRegistry<DynGeocodeProvider>;

/// The selection key for geocode providers: which way the lookup goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Free-text address to coordinates
    Forward,
    /// Coordinates to a place label
    Reverse,
}

/// The query handed to a geocode provider.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeQuery {
    Address(String),
    Coordinates { latitude: f64, longitude: f64 },
}

/// A resolved location.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable name of what was matched
    pub label: String,
}

/// Embedded place-name table shared by the gazetteer and reverse providers:
/// `(place, latitude, longitude)` with lowercased keys.
pub(crate) const GAZETTEER: &[(&str, f64, f64)] = &[
    ("berlin", 52.52, 13.40),
    ("denver", 39.74, -104.99),
    ("lisbon", 38.72, -9.14),
    ("nairobi", -1.29, 36.82),
    ("oslo", 59.91, 10.75),
    ("sydney", -33.87, 151.21),
    ("tokyo", 35.68, 139.69),
];

/// Embedded country-centroid table: `(country, latitude, longitude)`.
pub(crate) const COUNTRY_CENTROIDS: &[(&str, f64, f64)] = &[
    ("australia", -25.27, 133.78),
    ("germany", 51.17, 10.45),
    ("japan", 36.20, 138.25),
    ("kenya", -0.02, 37.91),
    ("norway", 64.58, 17.85),
    ("portugal", 39.56, -7.84),
    ("united states", 39.78, -100.45),
];
