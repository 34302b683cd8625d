use impact_dashboard::{DashboardConfig, DashboardState};

use crate::app::actions::AppActions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Partners,
    Impact,
    Map,
}

impl AppScreen {
    pub const ALL: [Self; 3] = [Self::Partners, Self::Impact, Self::Map];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Partners => "Partners",
            Self::Impact => "Impact",
            Self::Map => "Map",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Partners => 0,
            Self::Impact => 1,
            Self::Map => 2,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Partners),
            1 => Some(Self::Impact),
            2 => Some(Self::Map),
            _ => None,
        }
    }
}

/// Which datasets the next fetch should refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRequest {
    Everything,
    Chart,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub dashboard: DashboardState,
    pub actions: AppActions,
    pub status_message: String,
    pub show_help: bool,
    pub search_active: bool,
    pub search_input: String,
    pub pending_fetch: Option<FetchRequest>,
    pub product_id: Option<String>,
    pub partner_id: Option<String>,
    pub selected_row: usize,
    pub show_traces: bool,
}

impl App {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            running: true,
            screen: AppScreen::Partners,
            dashboard: DashboardState::new(&config),
            actions: AppActions::new(config),
            status_message: String::new(),
            show_help: false,
            search_active: false,
            search_input: String::new(),
            pending_fetch: None,
            product_id: None,
            partner_id: None,
            selected_row: 0,
            show_traces: true,
        }
    }

    pub fn request_fetch(&mut self, request: FetchRequest) {
        // A full refresh already covers the chart.
        if self.pending_fetch != Some(FetchRequest::Everything) {
            self.pending_fetch = Some(request);
        }
    }

    /// Run the queued fetch, if any, and fold the result into the dashboard.
    pub async fn perform_fetch(&mut self) -> color_eyre::Result<()> {
        let Some(request) = self.pending_fetch.take() else {
            return Ok(());
        };

        match request {
            FetchRequest::Everything => {
                self.actions
                    .load_all(
                        &mut self.dashboard,
                        self.product_id.as_deref(),
                        self.partner_id.as_deref(),
                    )
                    .await?;
            }
            FetchRequest::Chart => {
                self.actions
                    .load_chart(&mut self.dashboard, self.partner_id.as_deref())
                    .await?;
            }
        }

        self.selected_row = 0;
        Ok(())
    }

    pub fn start_search(&mut self) {
        self.search_active = true;
        self.search_input = self.dashboard.search_query().to_string();
    }

    pub fn update_search(&mut self) {
        self.dashboard.set_search_query(self.search_input.clone());
        self.selected_row = 0;
    }

    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_input.clear();
        self.dashboard.set_search_query("");
        self.selected_row = 0;
    }
}
