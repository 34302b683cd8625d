use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::convert::TryFrom;
use std::fmt;
use std::io::Stdout;

use crate::app::{handle_input, App, FetchRequest};
use crate::ui;

/// Rows listed under "Top partners" in headless output.
const HEADLESS_TOP_PARTNERS: usize = 5;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum FetchState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl fmt::Display for FetchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Loading => write!(f, "Loading"),
            Self::Loaded => write!(f, "Loaded"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

#[derive(Clone, Debug)]
enum FetchEvent {
    Start,
    Loaded,
    Failed(String),
    Reset,
}

impl fmt::Display for FetchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::Loaded => write!(f, "Loaded"),
            Self::Failed(msg) => write!(f, "Failed({msg})"),
            Self::Reset => write!(f, "Reset"),
        }
    }
}

#[derive(Debug)]
struct StateTransitionError {
    from: FetchState,
    event: FetchEvent,
}

impl fmt::Display for StateTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid transition from {} with event {}",
            self.from, self.event
        )
    }
}

impl std::error::Error for StateTransitionError {}

struct FetchMachine {
    state: FetchState,
}

impl FetchMachine {
    const fn new() -> Self {
        Self {
            state: FetchState::Idle,
        }
    }

    const fn state(&self) -> FetchState {
        self.state
    }

    fn process_event(
        &mut self,
        event: &FetchEvent,
        app: &mut App,
    ) -> std::result::Result<(), StateTransitionError> {
        let next_state = NextState::try_from((self.state, event, app))?;
        self.state = next_state.0;
        Ok(())
    }

    /// Apply `event`, logging a rejected transition instead of aborting the loop.
    fn advance(&mut self, event: &FetchEvent, app: &mut App) {
        if let Err(error) = self.process_event(event, app) {
            tracing::warn!(%error, "fetch state machine rejected event");
        }
    }
}

struct NextState(FetchState);

impl TryFrom<(FetchState, &FetchEvent, &mut App)> for NextState {
    type Error = StateTransitionError;

    fn try_from(
        value: (FetchState, &FetchEvent, &mut App),
    ) -> std::result::Result<Self, Self::Error> {
        let (current_state, event, app) = value;

        match (current_state, event) {
            (FetchState::Idle, FetchEvent::Start) => {
                app.status_message = "Loading impact data...".to_string();
                Ok(Self(FetchState::Loading))
            }
            (FetchState::Loading, FetchEvent::Loaded) => {
                app.status_message = format!(
                    "Loaded {} partners, {} chart points",
                    app.dashboard.partners().len(),
                    app.dashboard.chart.len()
                );
                Ok(Self(FetchState::Loaded))
            }
            (FetchState::Loading, FetchEvent::Failed(error)) => {
                app.status_message = format!("Error: {error}");
                Ok(Self(FetchState::Failed))
            }
            (FetchState::Loaded | FetchState::Failed, FetchEvent::Reset) => {
                Ok(Self(FetchState::Idle))
            }
            _ => Err(StateTransitionError {
                from: current_state,
                event: event.clone(),
            }),
        }
    }
}

/// Fetch everything once and print a summary instead of drawing the UI.
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    app.actions.initialize()?;
    app.request_fetch(FetchRequest::Everything);
    app.perform_fetch().await?;

    if json {
        render_headless_json(app)?;
    } else {
        render_headless_stats(app);
    }

    Ok(())
}

fn render_headless_stats(app: &mut App) {
    let summary = app.dashboard.summary(HEADLESS_TOP_PARTNERS);

    println!("\nImpact Dashboard");
    println!("================");
    println!("Total partners: {}", summary.total_partners);
    println!(
        "Showing: {} ({} matching, {} pages)",
        summary.filter, summary.matching_partners, summary.pages
    );
    println!("Sorted by: {}", summary.sort);

    println!("\nPartners by type:");
    for (partner_type, count) in &summary.by_type {
        println!("- {partner_type}: {count}");
    }

    println!("\nTop partners:");
    for partner in &summary.top_partners {
        println!(
            "- {} | {} | {} | {}",
            partner.name, partner.partner_type, partner.country, partner.action_count
        );
    }

    println!("\nImpact ({}):", summary.time_range);
    println!("Chart points: {}", summary.chart_points);
    if !summary.ticks.is_empty() {
        println!("Ticks: {}", summary.ticks.join(", "));
    }

    println!("\nAttestations: {}", summary.attestations);
    println!("Map markers: {}", summary.markers);
    println!("Trace edges: {}", summary.trace_edges);
}

fn render_headless_json(app: &mut App) -> Result<()> {
    let summary = app.dashboard.summary(HEADLESS_TOP_PARTNERS);
    let json = serde_json::to_string_pretty(&summary)?;
    println!("{json}");
    Ok(())
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let mut fetch_machine = FetchMachine::new();

    match app.actions.initialize() {
        Ok(()) => app.request_fetch(FetchRequest::Everything),
        Err(e) => {
            tracing::error!(error = %e, "could not build API client");
            app.status_message = format!("Error: {e}");
        }
    }

    loop {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(_) | Err(_) => {}
            }
        }

        if app.pending_fetch.is_some() && fetch_machine.state() == FetchState::Idle {
            fetch_machine.advance(&FetchEvent::Start, app);

            // Show the loading message before blocking on the request
            if terminal.draw(|f| ui::ui(app, f)).is_err() {
                // Non-fatal redraw error
            }

            match app.perform_fetch().await {
                Ok(()) => fetch_machine.advance(&FetchEvent::Loaded, app),
                Err(e) => {
                    tracing::error!(error = %e, "fetch failed");
                    fetch_machine.advance(&FetchEvent::Failed(e.to_string()), app);
                }
            }

            fetch_machine.advance(&FetchEvent::Reset, app);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact_dashboard::DashboardConfig;

    fn app() -> App {
        App::new(DashboardConfig::default())
    }

    #[test]
    fn successful_fetch_walks_back_to_idle() {
        let mut app = app();
        let mut machine = FetchMachine::new();
        assert!(machine.process_event(&FetchEvent::Start, &mut app).is_ok());
        assert_eq!(machine.state(), FetchState::Loading);
        assert!(machine.process_event(&FetchEvent::Loaded, &mut app).is_ok());
        assert!(app.status_message.starts_with("Loaded 0 partners"));
        assert!(machine.process_event(&FetchEvent::Reset, &mut app).is_ok());
        assert_eq!(machine.state(), FetchState::Idle);
    }

    #[test]
    fn failure_is_reported_in_status() {
        let mut app = app();
        let mut machine = FetchMachine::new();
        machine.advance(&FetchEvent::Start, &mut app);
        machine.advance(&FetchEvent::Failed("timeout".to_string()), &mut app);
        assert_eq!(machine.state(), FetchState::Failed);
        assert_eq!(app.status_message, "Error: timeout");
    }

    #[test]
    fn rejects_out_of_order_events() {
        let mut app = app();
        let mut machine = FetchMachine::new();
        let error = machine
            .process_event(&FetchEvent::Loaded, &mut app)
            .err()
            .map(|e| e.to_string());
        assert_eq!(
            error.as_deref(),
            Some("Invalid transition from Idle with event Loaded")
        );
        assert_eq!(machine.state(), FetchState::Idle);
    }
}
