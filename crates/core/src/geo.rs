//! Geographic coordinates and great-circle distance
//!
//! Distances are computed with the Haversine formula on a spherical Earth of
//! radius [`EARTH_RADIUS_KM`]. Coordinates are not range-checked: values
//! outside [-90, 90] / [-180, 180] produce a number, not an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Earth radius used for all distance computations, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Create a coordinate from degrees
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometers
    pub fn distance_to(&self, other: &GeoCoordinate) -> f64 {
        haversine_km(self, other)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

/// Great-circle distance between two coordinates in kilometers
///
/// Pure and total: identical inputs always give identical output, and the
/// distance from a point to itself is exactly zero.
pub fn haversine_km(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
