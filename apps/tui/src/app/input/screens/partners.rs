use crate::app::input::helpers::clamp_selection;
use crate::app::state::App;
use crossterm::event::KeyCode;
use impact_dashboard::view::SortCriteria;

pub fn handle_partners_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up => {
            app.selected_row = app.selected_row.saturating_sub(1);
        }
        KeyCode::Down => {
            let rows = app.dashboard.page().rows.len();
            app.selected_row = clamp_selection(app.selected_row + 1, rows);
        }
        KeyCode::Left | KeyCode::PageUp => {
            if app.dashboard.previous_page() {
                app.selected_row = 0;
            }
        }
        KeyCode::Right | KeyCode::PageDown => {
            if app.dashboard.next_page() {
                app.selected_row = 0;
            }
        }
        KeyCode::Home => {
            if app.dashboard.first_page() {
                app.selected_row = 0;
            }
        }
        KeyCode::End => {
            if app.dashboard.last_page() {
                app.selected_row = 0;
            }
        }
        KeyCode::Char('s') => toggle_sort(app, SortCriteria::ActionCount),
        KeyCode::Char('c') => toggle_sort(app, SortCriteria::Country),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Esc => app.clear_search(),
        _ => {}
    }
}

fn toggle_sort(app: &mut App, criteria: SortCriteria) {
    app.dashboard.toggle_sort(criteria);
    app.status_message = format!("Sorted by {}", app.dashboard.sort().describe());
}
