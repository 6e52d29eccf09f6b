//! Geographic coordinate types.

use std::fmt;

use serde::Serialize;

use super::DomainError;

/// A validated latitude/longitude pair in degrees.
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180].
/// Any `GeoPoint` value is valid by construction.
///
/// # Examples
///
/// ```
/// use corkage_server::domain::GeoPoint;
///
/// let seoul = GeoPoint::new(37.5665, 126.978).unwrap();
/// assert_eq!(seoul.latitude(), 37.5665);
///
/// // Out of range is rejected
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// assert!(GeoPoint::new(0.0, -180.5).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Create a point, rejecting non-finite or out-of-range degrees.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::invalid(
                "latitude",
                format!("must be within [-90, 90], got {latitude}"),
            ));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::invalid(
                "longitude",
                format!("must be within [-180, 180], got {longitude}"),
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Debug for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPoint({}, {})", self.latitude, self.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Axis-aligned bounding box that grows to include points.
///
/// Mirrors what a map SDK needs to fit all search results on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoBounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl GeoBounds {
    /// Bounds containing a single point.
    pub fn around(point: GeoPoint) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Grow the bounds so they contain `point`.
    pub fn extend(&mut self, point: GeoPoint) {
        self.south_west = GeoPoint {
            latitude: self.south_west.latitude.min(point.latitude),
            longitude: self.south_west.longitude.min(point.longitude),
        };
        self.north_east = GeoPoint {
            latitude: self.north_east.latitude.max(point.latitude),
            longitude: self.north_east.longitude.max(point.longitude),
        };
    }

    /// Bounds of all points, or `None` if the iterator is empty.
    pub fn from_points(points: impl IntoIterator<Item = GeoPoint>) -> Option<Self> {
        let mut iter = points.into_iter();
        let mut bounds = Self::around(iter.next()?);
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.south_west.latitude..=self.north_east.latitude).contains(&point.latitude)
            && (self.south_west.longitude..=self.north_east.longitude).contains(&point.longitude)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every in-range pair is accepted and round-trips through the accessors
        #[test]
        fn valid_always_constructs(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let point = GeoPoint::new(lat, lon).unwrap();
            prop_assert_eq!(point.latitude(), lat);
            prop_assert_eq!(point.longitude(), lon);
        }

        /// Latitudes past the poles are always rejected
        #[test]
        fn latitude_out_of_range_rejected(lat in 90.000001f64..1.0e6, lon in -180.0f64..=180.0) {
            prop_assert!(GeoPoint::new(lat, lon).is_err());
            prop_assert!(GeoPoint::new(-lat, lon).is_err());
        }

        /// Bounds built from points contain every one of them
        #[test]
        fn bounds_contain_inputs(points in prop::collection::vec((-90.0f64..=90.0, -180.0f64..=180.0), 1..20)) {
            let points: Vec<GeoPoint> = points
                .into_iter()
                .map(|(lat, lon)| GeoPoint::new(lat, lon).unwrap())
                .collect();
            let bounds = GeoBounds::from_points(points.iter().copied()).unwrap();
            for p in points {
                prop_assert!(bounds.contains(p));
            }
        }
    }
}
