use crate::domain::TraceItem;
use crate::map::LatLng;

/// Segments in a curved connector; the path has one more point than this.
pub const CURVE_SEGMENTS: usize = 16;

/// Perpendicular offset of the Bézier control point, relative to the chord.
const CURVE_BEND: f64 = 0.15;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Quadratic Bézier between `start` and `end` sampled at
/// [`CURVE_SEGMENTS`] + 1 points.
///
/// The control point sits on the chord midpoint shifted along the chord's
/// left-hand normal, so two opposite trips between the same places bend to
/// different sides instead of overlapping.
#[allow(clippy::cast_precision_loss)]
pub fn curved_path(start: LatLng, end: LatLng) -> Vec<LatLng> {
    let d_lat = end.lat - start.lat;
    let d_lng = end.lng - start.lng;
    let control = LatLng::new(
        d_lng.mul_add(-CURVE_BEND, (start.lat + end.lat) / 2.0),
        d_lat.mul_add(CURVE_BEND, (start.lng + end.lng) / 2.0),
    );

    let mut points: Vec<LatLng> = (0..=CURVE_SEGMENTS)
        .map(|step| {
            let t = step as f64 / CURVE_SEGMENTS as f64;
            let u = 1.0 - t;
            LatLng::new(
                (t * t).mul_add(end.lat, (u * u).mul_add(start.lat, 2.0 * u * t * control.lat)),
                (t * t).mul_add(end.lng, (u * u).mul_add(start.lng, 2.0 * u * t * control.lng)),
            )
        })
        .collect();

    // Pin the ends so rounding never detaches the curve from its markers.
    points[0] = start;
    points[CURVE_SEGMENTS] = end;
    points
}

/// Great-circle distance in kilometres.
pub fn haversine_km(start: LatLng, end: LatLng) -> f64 {
    let lat1 = start.lat.to_radians();
    let lat2 = end.lat.to_radians();
    let d_lat = (end.lat - start.lat).to_radians();
    let d_lng = (end.lng - start.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Number of direction arrows drawn along a connector.
pub fn arrow_frequency(start: LatLng, end: LatLng) -> u8 {
    match haversine_km(start, end) {
        d if d < 100.0 => 2,
        d if d < 300.0 => 3,
        d if d < 2000.0 => 6,
        _ => 8,
    }
}

/// A trace edge expanded for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct TracePath {
    pub points: Vec<LatLng>,
    pub arrows: u8,
}

/// Expand every trace edge whose endpoints are finite.
pub fn trace_paths(items: &[TraceItem]) -> Vec<TracePath> {
    items
        .iter()
        .filter_map(|item| {
            let start = LatLng::new(item.start_lat, item.start_lng);
            let end = LatLng::new(item.end_lat, item.end_lng);
            if !(start.is_finite() && end.is_finite()) {
                tracing::warn!(?item, "dropping trace edge with invalid coordinates");
                return None;
            }
            Some(TracePath {
                points: curved_path(start, end),
                arrows: arrow_frequency(start, end),
            })
        })
        .collect()
}

/// Evenly spaced arrow anchors along `points`: `(position, heading)` pairs
/// where the heading is the segment direction as `(d_lat, d_lng)`.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn arrow_anchors(points: &[LatLng], arrows: u8) -> Vec<(LatLng, (f64, f64))> {
    if points.len() < 2 || arrows == 0 {
        return Vec::new();
    }

    let segments = points.len() - 1;
    (1..=usize::from(arrows))
        .map(|n| {
            let along = n as f64 / (f64::from(arrows) + 1.0) * segments as f64;
            let index = (along.floor() as usize).min(segments - 1);
            let from = points[index];
            let to = points[index + 1];
            (from, (to.lat - from.lat, to.lng - from.lng))
        })
        .collect()
}

/// Arrow character closest to a `(d_lat, d_lng)` heading, for text renderers.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn heading_glyph(heading: (f64, f64)) -> char {
    const GLYPHS: [char; 8] = ['→', '↗', '↑', '↖', '←', '↙', '↓', '↘'];
    let (d_lat, d_lng) = heading;
    let angle = d_lat.atan2(d_lng).rem_euclid(std::f64::consts::TAU);
    let octant = (angle / std::f64::consts::FRAC_PI_4).round() as usize % GLYPHS.len();
    GLYPHS[octant]
}
