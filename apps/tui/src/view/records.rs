use std::cmp::Ordering;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::domain::{PartnerType, Record};
use crate::view::sort::{SortCriteria, SortState};

/// Filter by partner type, then order by the active sort state.
///
/// The input slice is never reordered; the result borrows from it.
pub fn process<'a>(
    records: &'a [Record],
    partner_type: PartnerType,
    sort: SortState,
) -> Vec<&'a Record> {
    process_indices(records, partner_type, "", sort)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}

/// Full pipeline (type filter, name search, sort) expressed as positions
/// into `records`, so the result can be cached alongside the owned data.
pub fn process_indices(
    records: &[Record],
    partner_type: PartnerType,
    query: &str,
    sort: SortState,
) -> Vec<usize> {
    let search = NameSearch::new(query);
    let mut order: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| partner_type.matches(&record.record_type))
        .filter(|(_, record)| search.matches(record))
        .map(|(index, _)| index)
        .collect();

    // slice::sort_by is a stable merge sort; equal keys keep input order.
    order.sort_by(|&a, &b| compare(&records[a], &records[b], sort));
    order
}

pub fn filter_by_type(records: &[Record], partner_type: PartnerType) -> Vec<&Record> {
    records
        .iter()
        .filter(|record| partner_type.matches(&record.record_type))
        .collect()
}

/// Fuzzy match on the partner name; an empty query matches everything.
struct NameSearch<'q> {
    query: &'q str,
    matcher: SkimMatcherV2,
}

impl<'q> NameSearch<'q> {
    fn new(query: &'q str) -> Self {
        Self {
            query: query.trim(),
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    fn matches(&self, record: &Record) -> bool {
        self.query.is_empty()
            || self
                .matcher
                .fuzzy_match(record.display_name(), self.query)
                .is_some()
    }
}

fn compare(a: &Record, b: &Record, sort: SortState) -> Ordering {
    let ordering = match sort.criteria {
        SortCriteria::ActionCount => a
            .action_count_or_default()
            .cmp(&b.action_count_or_default()),
        SortCriteria::Country => compare_text(a.country_or_default(), b.country_or_default()),
    };

    if sort.ascending() {
        ordering
    } else {
        ordering.reverse()
    }
}

/// Case-insensitive ordering with the exact text as tie-breaker, so
/// "chile" sorts next to "Chile" rather than after every capitalised name.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
