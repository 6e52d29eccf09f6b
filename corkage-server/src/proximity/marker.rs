//! Map marker sizing.
//!
//! Markers grow as the map zooms in. The size is a linear interpolation
//! between 24px and 48px keyed on the map level.

use serde::Serialize;

/// Closest zoom level supported by the map.
pub const MIN_ZOOM_LEVEL: i32 = 1;

/// Farthest zoom level supported by the map.
pub const MAX_ZOOM_LEVEL: i32 = 14;

const BASE_WIDTH: f64 = 24.0;
const MAX_WIDTH: f64 = 48.0;
const ASPECT: f64 = 1.2;

/// Largest scale applied to a marker.
pub const MAX_MARKER_SCALE: f64 = 10.0;

/// Narrowest marker ever drawn, in pixels.
pub const MIN_MARKER_WIDTH: f64 = 1.0;

/// Pixel size of a marker image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerSize {
    pub width: f64,
    pub height: f64,
}

impl MarkerSize {
    /// Offset that pins the image's bottom-centre to the marker position.
    pub fn anchor(&self) -> (f64, f64) {
        (self.width / 2.0, self.height)
    }
}

/// Marker size for a map zoom level, scaled by `scale`.
///
/// The zoom level is clamped to the map's range and the scale to
/// `[0, MAX_MARKER_SCALE]`; a non-finite scale counts as 0. Past level 10 the
/// scaled term shrinks the marker, so the width is floored at
/// [`MIN_MARKER_WIDTH`].
pub fn marker_size(zoom_level: i32, scale: f64) -> MarkerSize {
    let level = zoom_level.clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL);
    let scale = if scale.is_finite() {
        scale.clamp(0.0, MAX_MARKER_SCALE)
    } else {
        0.0
    };
    let width = (BASE_WIDTH + ((MAX_WIDTH - BASE_WIDTH) * f64::from(10 - level) / 9.0) * scale)
        .max(MIN_MARKER_WIDTH);
    MarkerSize {
        width,
        height: width * ASPECT,
    }
}
