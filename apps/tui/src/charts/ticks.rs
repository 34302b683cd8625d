use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{ChartRecord, TimeRange};

/// How axis tick values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFormatter {
    /// Value is shown unchanged.
    Identity,
    /// `2024`
    Year,
    /// `Mar 2024`, read in UTC.
    MonthYear,
}

impl TickFormatter {
    pub fn format(self, value: &str) -> String {
        match self {
            Self::Identity => value.to_string(),
            Self::Year => year_prefix(value).unwrap_or(value).to_string(),
            Self::MonthYear => parse_utc_date(value).map_or_else(
                || {
                    tracing::debug!(value, "unparsable chart date, rendering as-is");
                    value.to_string()
                },
                |date| date.format("%b %Y").to_string(),
            ),
        }
    }
}

/// Tick positions (chart record dates) plus the formatter for their labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSet {
    pub ticks: Vec<String>,
    pub formatter: TickFormatter,
}

impl TickSet {
    pub fn labels(&self) -> Vec<String> {
        self.ticks
            .iter()
            .map(|tick| self.formatter.format(tick))
            .collect()
    }
}

/// Derive x-axis ticks for `records`, which must already be in ascending
/// date order.
pub fn derive_ticks(records: &[ChartRecord], time_range: TimeRange) -> TickSet {
    if records.is_empty() {
        return TickSet {
            ticks: Vec::new(),
            formatter: TickFormatter::Identity,
        };
    }

    match time_range {
        TimeRange::AllTime => {
            let mut first_per_year: BTreeMap<&str, &str> = BTreeMap::new();
            for record in records {
                let Some(year) = year_prefix(&record.date) else {
                    tracing::warn!(date = %record.date, "chart record without a year, skipping tick");
                    continue;
                };
                first_per_year.entry(year).or_insert(&record.date);
            }

            TickSet {
                ticks: first_per_year.into_values().map(str::to_string).collect(),
                formatter: TickFormatter::Year,
            }
        }
        TimeRange::Last12Months | TimeRange::Last6Months => TickSet {
            ticks: records.iter().map(|record| record.date.clone()).collect(),
            formatter: TickFormatter::MonthYear,
        },
    }
}

fn year_prefix(date: &str) -> Option<&str> {
    let year = date.get(..4)?;
    year.bytes().all(|b| b.is_ascii_digit()).then_some(year)
}

/// Accepts full RFC 3339 timestamps and bare `YYYY-MM-DD` dates. Timestamps
/// are converted to UTC so an offset never moves the month.
fn parse_utc_date(value: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }
    if let Ok(timestamp) = value.parse::<DateTime<Utc>>() {
        return Some(timestamp.date_naive());
    }
    NaiveDate::parse_from_str(value.get(..10)?, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(dates: &[&str]) -> Vec<ChartRecord> {
        dates
            .iter()
            .map(|date| ChartRecord {
                date: (*date).to_string(),
                series: BTreeMap::from([("actions".to_string(), 1.0)]),
            })
            .collect()
    }

    #[test]
    fn empty_records_give_no_ticks_and_identity_labels() {
        let ticks = derive_ticks(&[], TimeRange::AllTime);
        assert!(ticks.ticks.is_empty());
        assert_eq!(ticks.formatter, TickFormatter::Identity);
        assert_eq!(ticks.formatter.format("2024-01-01"), "2024-01-01");
    }

    #[test]
    fn all_time_keeps_first_date_per_year() {
        let records = chart(&[
            "2022-03-01",
            "2022-09-01",
            "2023-01-01",
            "2023-06-01",
            "2024-02-01",
            "2024-12-01",
        ]);
        let ticks = derive_ticks(&records, TimeRange::AllTime);
        assert_eq!(ticks.ticks, ["2022-03-01", "2023-01-01", "2024-02-01"]);
        assert_eq!(ticks.labels(), ["2022", "2023", "2024"]);
    }

    #[test]
    fn all_time_skips_dates_without_year() {
        let records = chart(&["n/a", "2021-05-01"]);
        let ticks = derive_ticks(&records, TimeRange::AllTime);
        assert_eq!(ticks.ticks, ["2021-05-01"]);
    }

    #[test]
    fn bounded_ranges_tick_every_record() {
        let records = chart(&["2024-01-01", "2024-02-01", "2024-03-01"]);
        let ticks = derive_ticks(&records, TimeRange::Last6Months);
        assert_eq!(ticks.ticks.len(), 3);
        assert_eq!(ticks.labels(), ["Jan 2024", "Feb 2024", "Mar 2024"]);
        assert_eq!(derive_ticks(&records, TimeRange::Last12Months), ticks);
    }

    #[test]
    fn month_labels_are_read_in_utc() {
        let format = TickFormatter::MonthYear;
        assert_eq!(format.format("2024-03-01T00:00:00Z"), "Mar 2024");
        assert_eq!(format.format("2024-03-01T00:30:00+02:00"), "Feb 2024");
        assert_eq!(format.format("2024-03-01T23:30:00-05:00"), "Mar 2024");
        assert_eq!(format.format("2024-03-01"), "Mar 2024");
        assert_eq!(format.format("soon"), "soon");
    }

    #[test]
    fn derivation_is_deterministic() {
        let records = chart(&["2020-01-01", "2021-01-01"]);
        assert_eq!(
            derive_ticks(&records, TimeRange::AllTime),
            derive_ticks(&records, TimeRange::AllTime)
        );
    }
}
