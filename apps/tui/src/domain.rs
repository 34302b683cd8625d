use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Category filter applied to partner tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PartnerType {
    #[default]
    SeeAll,
    Port,
    Recycler,
    Manufacturer,
    Vessel,
}

impl PartnerType {
    pub const ALL: [Self; 5] = [
        Self::SeeAll,
        Self::Port,
        Self::Recycler,
        Self::Manufacturer,
        Self::Vessel,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::SeeAll => "See all",
            Self::Port => "Port",
            Self::Recycler => "Recycler",
            Self::Manufacturer => "Manufacturer",
            Self::Vessel => "Vessel",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::SeeAll),
            1 => Some(Self::Port),
            2 => Some(Self::Recycler),
            3 => Some(Self::Manufacturer),
            4 => Some(Self::Vessel),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|candidate| *candidate == self)
            .unwrap_or(0)
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.label().eq_ignore_ascii_case(value.trim()))
    }

    /// `See all` matches every record; other variants compare the label exactly.
    pub fn matches(self, record_type: &str) -> bool {
        self == Self::SeeAll || record_type == self.label()
    }
}

/// Window of chart data requested from the impact endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    #[default]
    AllTime,
    Last12Months,
    Last6Months,
}

impl TimeRange {
    pub const ALL: [Self; 3] = [Self::AllTime, Self::Last12Months, Self::Last6Months];

    pub const fn label(self) -> &'static str {
        match self {
            Self::AllTime => "All time",
            Self::Last12Months => "Last 12 months",
            Self::Last6Months => "Last 6 months",
        }
    }

    pub const fn query_value(self) -> &'static str {
        match self {
            Self::AllTime => "all",
            Self::Last12Months => "12m",
            Self::Last6Months => "6m",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|candidate| {
            candidate.label().eq_ignore_ascii_case(value)
                || candidate.query_value().eq_ignore_ascii_case(value)
        })
    }

    pub const fn next(self) -> Self {
        match self {
            Self::AllTime => Self::Last12Months,
            Self::Last12Months => Self::Last6Months,
            Self::Last6Months => Self::AllTime,
        }
    }
}

/// A partner row (location or vessel) as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub action_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient_coordinates")]
    pub coordinates: Option<Vec<f64>>,
}

impl Record {
    pub fn country_or_default(&self) -> &str {
        self.country.as_deref().unwrap_or("")
    }

    pub fn action_count_or_default(&self) -> i64 {
        self.action_count.unwrap_or(0)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Ids arrive as strings from some endpoints and as integers from others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => Ok(value),
        serde_json::Value::Number(value) => Ok(value.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, found {other}"
        ))),
    }
}

/// Non-numeric coordinate elements become NaN so the marker validator can
/// drop the record instead of failing the whole response.
fn lenient_coordinates<'de, D>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(raw.map(|values| {
        values
            .iter()
            .map(|value| value.as_f64().unwrap_or(f64::NAN))
            .collect()
    }))
}

/// Blockchain attestation of a logged action. Everything but the id and
/// submitter is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attestation {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub submitter: String,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// One point of the impact time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    pub date: String,
    #[serde(flatten, deserialize_with = "numeric_series")]
    pub series: BTreeMap<String, f64>,
}

/// Series values that are null or not numbers are left out so the point
/// keeps its date on the axis.
fn numeric_series<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(name, value)| value.as_f64().map(|number| (name, number)))
        .collect())
}

/// Directed edge between two geocoordinates in a product trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceItem {
    pub start_lat: f64,
    pub start_lng: f64,
    pub end_lat: f64,
    pub end_lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn see_all_matches_any_type() {
        assert!(PartnerType::SeeAll.matches("Port"));
        assert!(PartnerType::SeeAll.matches(""));
        assert!(PartnerType::Port.matches("Port"));
        assert!(!PartnerType::Port.matches("port"));
        assert!(!PartnerType::Port.matches("Vessel"));
    }

    #[test]
    fn partner_type_parse_is_case_insensitive() {
        assert_eq!(PartnerType::parse("see all"), Some(PartnerType::SeeAll));
        assert_eq!(PartnerType::parse(" Recycler "), Some(PartnerType::Recycler));
        assert_eq!(PartnerType::parse("dock"), None);
        assert_eq!(PartnerType::from_index(PartnerType::Vessel.index()), Some(PartnerType::Vessel));
    }

    #[test]
    fn time_range_cycles_through_every_value() {
        let mut range = TimeRange::AllTime;
        for _ in 0..TimeRange::ALL.len() {
            range = range.next();
        }
        assert_eq!(range, TimeRange::AllTime);
        assert_eq!(TimeRange::parse("12m"), Some(TimeRange::Last12Months));
        assert_eq!(TimeRange::parse("Last 6 months"), Some(TimeRange::Last6Months));
    }

    #[test]
    fn record_defaults_missing_fields() {
        let record: Record = serde_json::from_str(r#"{"id":7,"type":"Port"}"#).unwrap();
        assert_eq!(record.country_or_default(), "");
        assert_eq!(record.action_count_or_default(), 0);
        assert_eq!(record.display_name(), "7");
        assert_eq!(record.id, "7");
        assert!(record.coordinates.is_none());
    }

    #[test]
    fn malformed_coordinates_decode_as_nan() {
        let record: Record =
            serde_json::from_str(r#"{"id":"1","type":"Port","coordinates":[12.5,"north"]}"#)
                .unwrap();
        let coordinates = record.coordinates.unwrap();
        assert_eq!(coordinates[0], 12.5);
        assert!(coordinates[1].is_nan());
    }

    #[test]
    fn chart_record_collects_numeric_series() {
        let record: ChartRecord =
            serde_json::from_str(r#"{"date":"2024-03-01","plastic_kg":12.5,"actions":3}"#)
                .unwrap();
        assert_eq!(record.date, "2024-03-01");
        assert_eq!(record.series.get("plastic_kg"), Some(&12.5));
        assert_eq!(record.series.get("actions"), Some(&3.0));
    }

    #[test]
    fn chart_record_skips_null_and_text_series() {
        let record: ChartRecord =
            serde_json::from_str(r#"{"date":"2022-01-01","kg":null,"note":"late","actions":2}"#)
                .unwrap();
        assert_eq!(record.date, "2022-01-01");
        assert_eq!(record.series.len(), 1);
        assert_eq!(record.series.get("actions"), Some(&2.0));
    }

    #[test]
    fn trace_item_uses_camel_case_keys() {
        let item: TraceItem = serde_json::from_str(
            r#"{"startLat":1.0,"startLng":2.0,"endLat":3.0,"endLng":4.0}"#,
        )
        .unwrap();
        assert_eq!(item.end_lng, 4.0);
    }
}
