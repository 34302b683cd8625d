use serde::Serialize;

use crate::charts::{derive_ticks, TickSet};
use crate::config::DashboardConfig;
use crate::domain::{Attestation, ChartRecord, PartnerType, Record, TimeRange, TraceItem};
use crate::map::{fit_bounds, project, trace_paths, Marker, TracePath, Viewport};
use crate::view::{filter_by_type, Dataset, Paginator, SortCriteria, SortState, ViewMemo};

/// The current page of the partner table.
#[derive(Debug, Clone, PartialEq)]
pub struct PartnerPage<'a> {
    pub rows: Vec<&'a Record>,
    pub current_page: usize,
    pub max_page: usize,
    pub needs_pagination: bool,
    pub has_previous: bool,
    pub has_next: bool,
    pub matching: usize,
}

/// Owner of every piece of view state; frontends hold one of these and feed
/// it fetched data and user actions.
#[derive(Debug)]
pub struct DashboardState {
    partners: Dataset,
    pub attestations: Vec<Attestation>,
    pub chart: Vec<ChartRecord>,
    pub traces: Vec<TraceItem>,
    partner_type: PartnerType,
    sort: SortState,
    time_range: TimeRange,
    search_query: String,
    paginator: Paginator,
    memo: ViewMemo,
    default_zoom: u8,
}

impl DashboardState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            partners: Dataset::new(),
            attestations: Vec::new(),
            chart: Vec::new(),
            traces: Vec::new(),
            partner_type: PartnerType::SeeAll,
            sort: SortState::new(),
            time_range: TimeRange::AllTime,
            search_query: String::new(),
            paginator: Paginator::new(config.items_per_page),
            memo: ViewMemo::new(),
            default_zoom: config.default_zoom,
        }
    }

    pub fn partners(&self) -> &[Record] {
        self.partners.records()
    }

    pub fn set_partners(&mut self, records: Vec<Record>) {
        self.partners.replace(records);
    }

    pub const fn partner_type(&self) -> PartnerType {
        self.partner_type
    }

    pub fn set_partner_type(&mut self, partner_type: PartnerType) {
        self.partner_type = partner_type;
    }

    pub fn cycle_partner_type(&mut self) {
        let next = (self.partner_type.index() + 1) % PartnerType::ALL.len();
        self.partner_type = PartnerType::from_index(next).unwrap_or_default();
    }

    pub const fn sort(&self) -> SortState {
        self.sort
    }

    pub const fn toggle_sort(&mut self, criteria: SortCriteria) {
        self.sort.toggle(criteria);
    }

    pub const fn time_range(&self) -> TimeRange {
        self.time_range
    }

    /// Switch ranges; the caller refetches chart data for the new range.
    pub fn set_time_range(&mut self, time_range: TimeRange) {
        self.time_range = time_range;
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Filter, search, sort (cached) and window the partner table.
    pub fn page(&mut self) -> PartnerPage<'_> {
        let order = self.memo.view(
            &self.partners,
            self.partner_type,
            self.sort,
            &self.search_query,
        );
        let page = self.paginator.paginate(order);
        let records = self.partners.records();

        PartnerPage {
            rows: page.items.iter().map(|&index| &records[index]).collect(),
            current_page: page.current_page,
            max_page: page.max_page,
            needs_pagination: page.needs_pagination,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            matching: order.len(),
        }
    }

    pub fn next_page(&mut self) -> bool {
        self.sync_paginator();
        self.paginator.next_page()
    }

    pub fn previous_page(&mut self) -> bool {
        self.sync_paginator();
        self.paginator.previous_page()
    }

    pub fn load_page(&mut self, page: usize) -> bool {
        self.sync_paginator();
        self.paginator.load_page(page)
    }

    pub fn first_page(&mut self) -> bool {
        self.sync_paginator();
        self.paginator.first_page()
    }

    pub fn last_page(&mut self) -> bool {
        self.sync_paginator();
        self.paginator.last_page()
    }

    /// Bring the paginator's item count up to date before navigating, so a
    /// filter change since the last render is taken into account.
    fn sync_paginator(&mut self) {
        let order = self.memo.view(
            &self.partners,
            self.partner_type,
            self.sort,
            &self.search_query,
        );
        self.paginator.paginate(order);
    }

    pub fn ticks(&self) -> TickSet {
        derive_ticks(&self.chart, self.time_range)
    }

    /// Map markers for partners of the selected type.
    pub fn markers(&self) -> Vec<Marker<'_>> {
        project(filter_by_type(self.partners.records(), self.partner_type))
    }

    pub fn viewport(&self) -> Option<Viewport> {
        fit_bounds(&self.markers(), self.default_zoom)
    }

    pub fn trace_paths(&self) -> Vec<TracePath> {
        trace_paths(&self.traces)
    }

    pub fn summary(&mut self, top: usize) -> DashboardSummary {
        let by_type = PartnerType::ALL
            .into_iter()
            .filter(|partner_type| *partner_type != PartnerType::SeeAll)
            .map(|partner_type| {
                (
                    partner_type.label().to_string(),
                    filter_by_type(self.partners.records(), partner_type).len(),
                )
            })
            .collect();

        let ticks = self.ticks().labels();
        let markers = self.markers().len();
        let trace_edges = self.trace_paths().len();
        let attestations = self.attestations.len();
        let total_partners = self.partners.records().len();
        let filter = self.partner_type.label().to_string();
        let sort = self.sort.describe();
        let chart_points = self.chart.len();
        let time_range = self.time_range.label().to_string();

        let page = self.page();
        let top_partners = page
            .rows
            .iter()
            .take(top)
            .map(|record| SummaryPartner {
                id: record.id.clone(),
                name: record.display_name().to_string(),
                partner_type: record.record_type.clone(),
                country: record.country_or_default().to_string(),
                action_count: record.action_count_or_default(),
            })
            .collect();

        DashboardSummary {
            total_partners,
            by_type,
            filter,
            sort,
            matching_partners: page.matching,
            pages: page.max_page,
            top_partners,
            attestations,
            chart_points,
            time_range,
            ticks,
            markers,
            trace_edges,
        }
    }
}

/// Plain snapshot of the dashboard used for headless output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_partners: usize,
    pub by_type: Vec<(String, usize)>,
    pub filter: String,
    pub sort: String,
    pub matching_partners: usize,
    pub pages: usize,
    pub top_partners: Vec<SummaryPartner>,
    pub attestations: usize,
    pub chart_points: usize,
    pub time_range: String,
    pub ticks: Vec<String>,
    pub markers: usize,
    pub trace_edges: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryPartner {
    pub id: String,
    pub name: String,
    pub partner_type: String,
    pub country: String,
    pub action_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::num::NonZeroUsize;

    fn config(per_page: usize) -> DashboardConfig {
        DashboardConfig {
            items_per_page: NonZeroUsize::new(per_page).unwrap(),
            ..DashboardConfig::default()
        }
    }

    fn partner(id: usize, record_type: &str, count: i64) -> Record {
        Record {
            id: id.to_string(),
            name: Some(format!("{record_type} {id}")),
            record_type: record_type.to_string(),
            country: Some("Philippines".to_string()),
            action_count: Some(count),
            coordinates: Some(vec![14.0 + f64::from(u32::try_from(id).unwrap()), 121.0]),
        }
    }

    fn partners() -> Vec<Record> {
        (0..12)
            .map(|id| {
                let record_type = if id % 3 == 0 { "Vessel" } else { "Port" };
                partner(id, record_type, i64::try_from(id).unwrap())
            })
            .collect()
    }

    #[test]
    fn page_applies_filter_sort_and_window() {
        let mut state = DashboardState::new(&config(5));
        state.set_partners(partners());

        let page = state.page();
        assert_eq!(page.matching, 12);
        assert_eq!(page.max_page, 3);
        assert_eq!(page.rows[0].id, "11");

        state.set_partner_type(PartnerType::Vessel);
        let page = state.page();
        let ids: Vec<&str> = page.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["9", "6", "3", "0"]);
        assert!(!page.needs_pagination);
    }

    #[test]
    fn filter_change_pulls_cursor_back_into_range() {
        let mut state = DashboardState::new(&config(5));
        state.set_partners(partners());
        state.page();
        assert!(state.load_page(3));
        assert_eq!(state.page().current_page, 3);

        state.set_partner_type(PartnerType::Vessel);
        assert!(!state.next_page());
        assert_eq!(state.page().current_page, 1);
    }

    #[test]
    fn jumps_to_either_end_and_reports_neighbours() {
        let mut state = DashboardState::new(&config(5));
        state.set_partners(partners());
        let page = state.page();
        assert!(!page.has_previous);
        assert!(page.has_next);

        assert!(state.last_page());
        let page = state.page();
        assert_eq!(page.current_page, 3);
        assert!(page.has_previous);
        assert!(!page.has_next);
        assert!(!state.last_page());

        assert!(state.first_page());
        assert_eq!(state.page().current_page, 1);
    }

    #[test]
    fn navigation_respects_the_current_filter() {
        let mut state = DashboardState::new(&config(5));
        state.set_partners(partners());
        state.set_partner_type(PartnerType::Vessel);
        assert!(!state.load_page(2));
        state.set_partner_type(PartnerType::SeeAll);
        assert!(state.load_page(2));
    }

    #[test]
    fn cycling_partner_type_wraps_around() {
        let mut state = DashboardState::new(&config(5));
        for _ in 0..PartnerType::ALL.len() {
            state.cycle_partner_type();
        }
        assert_eq!(state.partner_type(), PartnerType::SeeAll);
    }

    #[test]
    fn search_narrows_the_table() {
        let mut state = DashboardState::new(&config(5));
        state.set_partners(partners());
        state.set_search_query("Vessel 9");
        let page = state.page();
        assert!(page.rows.iter().any(|record| record.id == "9"));
        assert!(page.matching < 12);
    }

    #[test]
    fn map_views_follow_the_partner_filter() {
        let mut state = DashboardState::new(&config(5));
        let mut records = partners();
        records[1].coordinates = Some(vec![f64::NAN, 0.0]);
        state.set_partners(records);

        assert_eq!(state.markers().len(), 11);
        state.set_partner_type(PartnerType::Vessel);
        assert_eq!(state.markers().len(), 4);
        assert!(matches!(state.viewport(), Some(Viewport::Bounds(_))));

        state.set_partners(vec![partner(3, "Vessel", 1)]);
        assert!(matches!(
            state.viewport(),
            Some(Viewport::Centered { zoom: 6, .. })
        ));
    }

    #[test]
    fn summary_reports_every_panel() {
        let mut state = DashboardState::new(&config(5));
        state.set_partners(partners());
        state.chart = ["2023-01-01", "2023-06-01", "2024-01-01"]
            .iter()
            .map(|date| ChartRecord {
                date: (*date).to_string(),
                series: BTreeMap::from([("actions".to_string(), 2.0)]),
            })
            .collect();
        state.traces = vec![TraceItem {
            start_lat: 0.0,
            start_lng: 0.0,
            end_lat: 1.0,
            end_lng: 1.0,
        }];

        let summary = state.summary(3);
        assert_eq!(summary.total_partners, 12);
        assert_eq!(
            summary.by_type,
            vec![
                ("Port".to_string(), 8),
                ("Recycler".to_string(), 0),
                ("Manufacturer".to_string(), 0),
                ("Vessel".to_string(), 4),
            ]
        );
        assert_eq!(summary.top_partners.len(), 3);
        assert_eq!(summary.top_partners[0].action_count, 11);
        assert_eq!(summary.ticks, ["2023", "2024"]);
        assert_eq!(summary.markers, 12);
        assert_eq!(summary.trace_edges, 1);
        assert_eq!(summary.pages, 3);
    }
}
