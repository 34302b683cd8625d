use crate::map::{LatLng, Marker};

/// Share of a fitted box's extent added on every side.
const FIT_PADDING_RATIO: f64 = 0.1;
/// Smallest padding, in degrees, so markers on one meridian or parallel
/// still get a visible span.
const FIT_MIN_PADDING_DEGREES: f64 = 1.0;

/// A geographic bounding box in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// Grow each side by `ratio` of the box's extent, with `min_degrees`
    /// as a floor so thin boxes stay visible.
    pub fn padded(&self, ratio: f64, min_degrees: f64) -> Self {
        let pad_lng = ((self.east - self.west) * ratio).max(min_degrees);
        let pad_lat = ((self.north - self.south) * ratio).max(min_degrees);
        Self::new(
            (self.west - pad_lng).max(-180.0),
            (self.south - pad_lat).max(-90.0),
            (self.east + pad_lng).min(180.0),
            (self.north + pad_lat).min(90.0),
        )
    }
}

/// What the map should show for a set of markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Viewport {
    Bounds(BoundingBox),
    Centered { center: LatLng, zoom: u8 },
}

impl Viewport {
    /// Visible box for a renderer without zoom levels. Fitted bounds are
    /// padded so edge markers stay inside. A centered viewport spans 360
    /// degrees of longitude at zoom 0, halving per level.
    pub fn visible_box(&self) -> BoundingBox {
        match *self {
            Self::Bounds(bounds) => bounds.padded(FIT_PADDING_RATIO, FIT_MIN_PADDING_DEGREES),
            Self::Centered { center, zoom } => {
                let half_lng = 180.0 / 2_f64.powi(i32::from(zoom));
                let half_lat = half_lng / 2.0;
                BoundingBox::new(
                    (center.lng - half_lng).max(-180.0),
                    (center.lat - half_lat).max(-90.0),
                    (center.lng + half_lng).min(180.0),
                    (center.lat + half_lat).min(90.0),
                )
            }
        }
    }
}

/// Smallest box covering every marker. A single marker, or several at the
/// same spot, is centered at `default_zoom` instead. No markers, no viewport.
pub fn fit_bounds(markers: &[Marker<'_>], default_zoom: u8) -> Option<Viewport> {
    let (first, rest) = markers.split_first()?;
    if rest.is_empty() {
        return Some(Viewport::Centered {
            center: first.position,
            zoom: default_zoom,
        });
    }

    let start = BoundingBox::new(
        first.position.lng,
        first.position.lat,
        first.position.lng,
        first.position.lat,
    );
    let bounds = rest.iter().fold(start, |acc, marker| {
        BoundingBox::new(
            acc.west.min(marker.position.lng),
            acc.south.min(marker.position.lat),
            acc.east.max(marker.position.lng),
            acc.north.max(marker.position.lat),
        )
    });

    #[allow(clippy::float_cmp)]
    let single_spot = bounds.west == bounds.east && bounds.south == bounds.north;
    if single_spot {
        return Some(Viewport::Centered {
            center: bounds.center(),
            zoom: default_zoom,
        });
    }
    Some(Viewport::Bounds(bounds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;
    use crate::map::project;

    const WORLD: BoundingBox = BoundingBox::new(-180.0, -90.0, 180.0, 90.0);

    fn records(points: &[(f64, f64)]) -> Vec<Record> {
        points
            .iter()
            .enumerate()
            .map(|(index, (lat, lng))| Record {
                id: index.to_string(),
                name: None,
                record_type: "Port".to_string(),
                country: None,
                action_count: None,
                coordinates: Some(vec![*lat, *lng]),
            })
            .collect()
    }

    #[test]
    fn no_markers_no_viewport() {
        assert_eq!(fit_bounds(&[], 6), None);
    }

    #[test]
    fn single_marker_is_centered_at_default_zoom() {
        let data = records(&[(1.3, 103.8)]);
        let viewport = fit_bounds(&project(&data), 6);
        assert_eq!(
            viewport,
            Some(Viewport::Centered {
                center: LatLng::new(1.3, 103.8),
                zoom: 6
            })
        );
    }

    #[test]
    fn many_markers_get_the_minimal_box() {
        let data = records(&[(10.0, 20.0), (-5.0, 40.0), (3.0, -7.5)]);
        let viewport = fit_bounds(&project(&data), 6);
        assert_eq!(
            viewport,
            Some(Viewport::Bounds(BoundingBox::new(-7.5, -5.0, 40.0, 10.0)))
        );
    }

    #[test]
    fn markers_on_one_spot_are_centered() {
        let data = records(&[(1.3, 103.8), (1.3, 103.8)]);
        let viewport = fit_bounds(&project(&data), 6);
        assert_eq!(
            viewport,
            Some(Viewport::Centered {
                center: LatLng::new(1.3, 103.8),
                zoom: 6
            })
        );
        let visible = viewport.map(|v| v.visible_box());
        assert!(visible.is_some_and(|b| b.east > b.west && b.north > b.south));
    }

    #[test]
    fn markers_on_one_meridian_still_get_a_visible_span() {
        let data = records(&[(10.0, 20.0), (-5.0, 20.0)]);
        let viewport = fit_bounds(&project(&data), 6);
        assert_eq!(
            viewport,
            Some(Viewport::Bounds(BoundingBox::new(20.0, -5.0, 20.0, 10.0)))
        );
        let visible = viewport.map_or(WORLD, |v| v.visible_box());
        assert!((visible.west - 19.0).abs() < 1e-9);
        assert!((visible.east - 21.0).abs() < 1e-9);
        assert!((visible.south + 6.5).abs() < 1e-9);
        assert!((visible.north - 11.5).abs() < 1e-9);
    }

    #[test]
    fn fitted_bounds_are_padded_for_display() {
        let visible = Viewport::Bounds(BoundingBox::new(-7.5, -5.0, 40.0, 10.0)).visible_box();
        assert!(visible.west < -7.5 && visible.east > 40.0);
        assert!(visible.south < -5.0 && visible.north > 10.0);
    }

    #[test]
    fn centered_viewport_shrinks_with_zoom() {
        let center = LatLng::new(0.0, 0.0);
        let wide = Viewport::Centered { center, zoom: 1 }.visible_box();
        let narrow = Viewport::Centered { center, zoom: 4 }.visible_box();
        assert_eq!(wide, BoundingBox::new(-90.0, -45.0, 90.0, 45.0));
        assert!(narrow.east - narrow.west < wide.east - wide.west);
    }

    #[test]
    fn padding_is_clamped_to_the_globe() {
        let padded = BoundingBox::new(-179.0, -10.0, 10.0, 89.0).padded(0.1, 1.0);
        assert_eq!(padded.west, -180.0);
        assert_eq!(padded.north, 90.0);
        assert_eq!(BoundingBox::new(0.0, 0.0, 2.0, 4.0).center(), LatLng::new(2.0, 1.0));
    }
}
