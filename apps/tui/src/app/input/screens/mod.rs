use crate::app::state::{App, AppScreen, FetchRequest};
use crossterm::event::KeyCode;

use crate::app::input::helpers::{wrap_decrement, wrap_increment};

mod help;
mod impact;
mod map;
mod partners;
mod search;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if app.search_active {
        search::handle_search_input(app, key);
        return;
    }

    if handle_global_input(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Partners => partners::handle_partners_input(app, key),
        AppScreen::Impact => impact::handle_impact_input(app, key),
        AppScreen::Map => map::handle_map_input(app, key),
    }
}

/// Keys that behave the same on every screen. Returns true when consumed.
fn handle_global_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Tab => {
            let next = wrap_increment(app.screen.index(), AppScreen::ALL.len());
            app.screen = AppScreen::from_index(next).unwrap_or(AppScreen::Partners);
        }
        KeyCode::BackTab => {
            let previous = wrap_decrement(app.screen.index(), AppScreen::ALL.len());
            app.screen = AppScreen::from_index(previous).unwrap_or(AppScreen::Partners);
        }
        KeyCode::Char(digit @ '1'..='3') => {
            let index = (digit as usize) - ('1' as usize);
            if let Some(screen) = AppScreen::from_index(index) {
                app.screen = screen;
            }
        }
        KeyCode::Char('f') => {
            app.dashboard.cycle_partner_type();
            app.selected_row = 0;
            app.status_message = format!("Showing {}", app.dashboard.partner_type().label());
        }
        KeyCode::Char('r') => {
            app.request_fetch(FetchRequest::Everything);
        }
        _ => return false,
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use impact_dashboard::{DashboardConfig, PartnerType};

    fn app() -> App {
        App::new(DashboardConfig::default())
    }

    #[test]
    fn tab_cycles_through_screens() {
        let mut app = app();
        dispatch_input(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, AppScreen::Impact);
        dispatch_input(&mut app, KeyCode::Tab);
        dispatch_input(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, AppScreen::Partners);
        dispatch_input(&mut app, KeyCode::BackTab);
        assert_eq!(app.screen, AppScreen::Map);
    }

    #[test]
    fn digits_jump_to_screens() {
        let mut app = app();
        dispatch_input(&mut app, KeyCode::Char('3'));
        assert_eq!(app.screen, AppScreen::Map);
        dispatch_input(&mut app, KeyCode::Char('1'));
        assert_eq!(app.screen, AppScreen::Partners);
    }

    #[test]
    fn filter_key_cycles_partner_type() {
        let mut app = app();
        dispatch_input(&mut app, KeyCode::Char('f'));
        assert_eq!(app.dashboard.partner_type(), PartnerType::Port);
    }

    #[test]
    fn quit_stops_the_app() {
        let mut app = app();
        dispatch_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn help_swallows_other_keys() {
        let mut app = app();
        dispatch_input(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        dispatch_input(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        dispatch_input(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn typing_during_search_does_not_trigger_shortcuts() {
        let mut app = app();
        dispatch_input(&mut app, KeyCode::Char('/'));
        dispatch_input(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.dashboard.search_query(), "q");
    }
}
