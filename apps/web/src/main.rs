mod fetch;
mod keys;
mod render;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use impact_dashboard::{DashboardConfig, DashboardState, TimeRange};
use keys::{action_for, WebAction, SCREENS};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen_futures::spawn_local;

/// Everything the page draws, shared between key handlers, fetches and the
/// render loop.
pub struct WebModel {
    pub dashboard: DashboardState,
    pub base_url: String,
    pub product_id: Option<String>,
    pub screen: usize,
    pub status: String,
    refresh_generation: u64,
    chart_generation: u64,
}

/// Identifies one in-flight chart fetch and the range it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartRequest {
    generation: u64,
    pub range: TimeRange,
}

impl WebModel {
    fn new(config: &DashboardConfig, product_id: Option<String>) -> Self {
        Self {
            dashboard: DashboardState::new(config),
            base_url: config.api_base_url.clone(),
            product_id,
            screen: 0,
            status: String::new(),
            refresh_generation: 0,
            chart_generation: 0,
        }
    }

    /// Start a full refresh, superseding any refresh still in flight.
    pub fn begin_refresh(&mut self) -> u64 {
        self.refresh_generation = self.refresh_generation.wrapping_add(1);
        self.refresh_generation
    }

    pub const fn is_current_refresh(&self, generation: u64) -> bool {
        generation == self.refresh_generation
    }

    /// Start a chart fetch for the selected range, superseding older ones.
    pub fn begin_chart_request(&mut self) -> ChartRequest {
        self.chart_generation = self.chart_generation.wrapping_add(1);
        ChartRequest {
            generation: self.chart_generation,
            range: self.dashboard.time_range(),
        }
    }

    /// Only the newest request, for the range still selected, may land.
    pub fn accepts_chart(&self, request: ChartRequest) -> bool {
        request.generation == self.chart_generation && request.range == self.dashboard.time_range()
    }

    /// Apply a key action. Returns true when the chart needs refetching.
    fn apply(&mut self, action: WebAction) -> bool {
        match action {
            WebAction::Screen(index) => self.screen = index.min(SCREENS.len() - 1),
            WebAction::NextScreen => self.screen = (self.screen + 1) % SCREENS.len(),
            WebAction::PreviousPage => {
                self.dashboard.previous_page();
            }
            WebAction::NextPage => {
                self.dashboard.next_page();
            }
            WebAction::Sort(criteria) => self.dashboard.toggle_sort(criteria),
            WebAction::CycleFilter => self.dashboard.cycle_partner_type(),
            WebAction::CycleTimeRange => {
                let next = self.dashboard.time_range().next();
                self.dashboard.set_time_range(next);
                return true;
            }
            WebAction::Refresh => {}
        }
        false
    }
}

/// `?api=...&product=...` from the page URL.
fn query_params() -> (Option<String>, Option<String>) {
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search) else {
        return (None, None);
    };
    (params.get("api"), params.get("product"))
}

fn main() -> io::Result<()> {
    let (api_url, product_id) = query_params();
    let mut config = DashboardConfig::default();
    if let Some(api_url) = api_url {
        config.api_base_url = api_url;
    }

    let model = Rc::new(RefCell::new(WebModel::new(&config, product_id)));
    spawn_local(fetch::load_all(model.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let model = model.clone();
        move |event| {
            let Some(action) = action_for(&event.code) else {
                return;
            };
            let Ok(mut state) = model.try_borrow_mut() else {
                return;
            };
            let refetch_chart = state.apply(action);
            drop(state);

            if action == WebAction::Refresh {
                spawn_local(fetch::load_all(model.clone()));
            } else if refetch_chart {
                spawn_local(fetch::load_chart(model.clone()));
            }
        }
    });

    terminal.draw_web(move |f| {
        if let Ok(mut state) = model.try_borrow_mut() {
            render::render_dashboard(&mut state, f);
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> WebModel {
        WebModel::new(&DashboardConfig::default(), None)
    }

    #[test]
    fn time_range_change_requests_chart_reload() {
        let mut model = model();
        assert!(model.apply(WebAction::CycleTimeRange));
        assert_eq!(model.dashboard.time_range(), TimeRange::Last12Months);
        assert!(!model.apply(WebAction::NextPage));
    }

    #[test]
    fn only_the_newest_chart_request_lands() {
        let mut model = model();
        let twelve_months = {
            model.apply(WebAction::CycleTimeRange);
            model.begin_chart_request()
        };
        model.apply(WebAction::CycleTimeRange);
        model.apply(WebAction::CycleTimeRange);
        let all_time = model.begin_chart_request();

        assert_eq!(twelve_months.range, TimeRange::Last12Months);
        assert_eq!(all_time.range, TimeRange::AllTime);
        assert!(!model.accepts_chart(twelve_months));
        assert!(model.accepts_chart(all_time));
    }

    #[test]
    fn chart_for_a_range_no_longer_selected_is_dropped() {
        let mut model = model();
        let request = model.begin_chart_request();
        model.apply(WebAction::CycleTimeRange);
        assert!(!model.accepts_chart(request));
    }

    #[test]
    fn a_new_refresh_supersedes_the_old_one() {
        let mut model = model();
        let first = model.begin_refresh();
        let second = model.begin_refresh();
        assert!(!model.is_current_refresh(first));
        assert!(model.is_current_refresh(second));
    }

    #[test]
    fn screens_wrap_around() {
        let mut model = model();
        model.apply(WebAction::Screen(2));
        model.apply(WebAction::NextScreen);
        assert_eq!(model.screen, 0);
    }
}
