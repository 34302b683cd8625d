use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => {
            app.search_active = false;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.update_search();
        }
        KeyCode::Char(ch) => {
            app.search_input.push(ch);
            app.update_search();
        }
        _ => {}
    }
}
