use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_map_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Char('p') {
        app.show_traces = !app.show_traces;
    }
}
