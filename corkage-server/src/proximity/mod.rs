//! Geo-proximity calculations.
//!
//! Pure functions that turn coordinates into distances, distances into
//! travel times, and zoom levels into marker sizes. Nothing here holds
//! state, so every function may be called concurrently.

mod distance;
mod duration;
mod marker;

pub use distance::{
    DRIVING_SPEED_KMH, EARTH_RADIUS_KM, TravelEstimate, WALKING_SPEED_KMH, distance_km,
    haversine_km, travel_minutes,
};
pub use duration::{DurationLocale, format_duration};
pub use marker::{
    MAX_MARKER_SCALE, MAX_ZOOM_LEVEL, MIN_MARKER_WIDTH, MIN_ZOOM_LEVEL, MarkerSize, marker_size,
};
