//! Great-circle distance and travel time estimates.

use haversine::{Location, Units};
use serde::Serialize;

use crate::domain::{DomainError, GeoPoint};

/// Mean Earth radius in kilometres used by the haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Assumed walking speed.
pub const WALKING_SPEED_KMH: f64 = 4.0;

/// Assumed city driving speed.
pub const DRIVING_SPEED_KMH: f64 = 40.0;

/// Haversine distance between two raw degree pairs.
///
/// No range validation is done here; NaN in gives NaN out.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine::distance(
        Location {
            latitude: lat1,
            longitude: lon1,
        },
        Location {
            latitude: lat2,
            longitude: lon2,
        },
        Units::Kilometers,
    )
}

/// Great-circle distance between two points in kilometres.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    haversine_km(a.latitude(), a.longitude(), b.latitude(), b.longitude())
}

/// Minutes needed to cover `distance_km` at `speed_kmh`.
///
/// Speed must be positive and finite; distance must be finite and non-negative.
pub fn travel_minutes(distance_km: f64, speed_kmh: f64) -> Result<f64, DomainError> {
    if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
        return Err(DomainError::invalid(
            "speed_kmh",
            format!("must be positive and finite, got {speed_kmh}"),
        ));
    }
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(DomainError::invalid(
            "distance_km",
            format!("must be non-negative and finite, got {distance_km}"),
        ));
    }
    Ok(distance_km / speed_kmh * 60.0)
}

/// Walking and driving times derived from one distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TravelEstimate {
    pub walking_minutes: u32,
    pub driving_minutes: u32,
}

impl TravelEstimate {
    /// Estimate both travel modes for a distance in kilometres.
    pub fn from_distance(distance_km: f64) -> Result<Self, DomainError> {
        Ok(Self {
            walking_minutes: whole_minutes(travel_minutes(distance_km, WALKING_SPEED_KMH)?),
            driving_minutes: whole_minutes(travel_minutes(distance_km, DRIVING_SPEED_KMH)?),
        })
    }

    /// Estimate both travel modes between two points.
    pub fn between(a: GeoPoint, b: GeoPoint) -> Self {
        // A haversine distance is always finite and non-negative.
        Self::from_distance(distance_km(a, b)).unwrap_or(Self {
            walking_minutes: 0,
            driving_minutes: 0,
        })
    }
}

fn whole_minutes(minutes: f64) -> u32 {
    minutes.round().clamp(0.0, u32::MAX as f64) as u32
}
