use crate::app::state::{App, FetchRequest};
use crossterm::event::KeyCode;

pub fn handle_impact_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Char('t') {
        let next = app.dashboard.time_range().next();
        app.dashboard.set_time_range(next);
        app.status_message = format!("Impact over {}", next.label());
        app.request_fetch(FetchRequest::Chart);
    }
}
