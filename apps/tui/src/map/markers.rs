use crate::domain::Record;
use crate::map::LatLng;

/// A record that passed coordinate validation, ready for the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker<'a> {
    pub record: &'a Record,
    pub position: LatLng,
}

/// A location is renderable when it has exactly two finite coordinates.
pub fn validate(record: &Record) -> bool {
    position(record).is_some()
}

fn position(record: &Record) -> Option<LatLng> {
    match record.coordinates.as_deref()? {
        [lat, lng] if lat.is_finite() && lng.is_finite() => Some(LatLng::new(*lat, *lng)),
        _ => None,
    }
}

/// Drop records that cannot be placed on the map, logging each one.
pub fn project<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<Marker<'a>> {
    records
        .into_iter()
        .filter_map(|record| {
            let marker = position(record).map(|position| Marker { record, position });
            if marker.is_none() {
                tracing::warn!(
                    id = %record.id,
                    coordinates = ?record.coordinates,
                    "dropping location with invalid coordinates"
                );
            }
            marker
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn located(id: &str, coordinates: Option<Vec<f64>>) -> Record {
        Record {
            id: id.to_string(),
            name: None,
            record_type: "Port".to_string(),
            country: None,
            action_count: None,
            coordinates,
        }
    }

    #[test]
    fn validates_pairs_of_finite_numbers() {
        assert!(validate(&located("1", Some(vec![12.3, 45.6]))));
        assert!(!validate(&located("2", Some(vec![12.3, f64::NAN]))));
        assert!(!validate(&located("3", Some(vec![f64::INFINITY, 1.0]))));
        assert!(!validate(&located("4", Some(vec![12.3]))));
        assert!(!validate(&located("5", Some(vec![1.0, 2.0, 3.0]))));
        assert!(!validate(&located("6", None)));
    }

    #[test]
    fn project_keeps_only_valid_records_in_order() {
        let records = vec![
            located("a", Some(vec![1.0, 2.0])),
            located("b", Some(vec![f64::NAN, 2.0])),
            located("c", Some(vec![-33.9, 18.4])),
        ];
        let markers = project(&records);
        let ids: Vec<&str> = markers.iter().map(|m| m.record.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(markers[1].position, LatLng::new(-33.9, 18.4));
    }
}
