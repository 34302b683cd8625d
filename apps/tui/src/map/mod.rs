// Map projection: marker validation, curved trace connectors, viewport fitting.

pub mod bounds;
pub mod markers;
pub mod paths;

pub use bounds::{fit_bounds, BoundingBox, Viewport};
pub use markers::{project, validate, Marker};
pub use paths::{
    arrow_anchors, arrow_frequency, curved_path, haversine_km, heading_glyph, trace_paths,
    TracePath,
};

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}
