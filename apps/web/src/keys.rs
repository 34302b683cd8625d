use impact_dashboard::view::SortCriteria;
use ratzilla::event::KeyCode;

pub const SCREENS: [&str; 3] = ["Partners", "Impact", "Map"];

/// What a key press asks the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebAction {
    Screen(usize),
    NextScreen,
    PreviousPage,
    NextPage,
    Sort(SortCriteria),
    CycleFilter,
    CycleTimeRange,
    Refresh,
}

pub fn action_for(code: &KeyCode) -> Option<WebAction> {
    let action = match code {
        KeyCode::Tab => WebAction::NextScreen,
        KeyCode::Left => WebAction::PreviousPage,
        KeyCode::Right => WebAction::NextPage,
        KeyCode::Char(digit @ '1'..='3') => {
            WebAction::Screen(digit.to_digit(10).map_or(0, |n| n as usize - 1))
        }
        KeyCode::Char('s') => WebAction::Sort(SortCriteria::ActionCount),
        KeyCode::Char('c') => WebAction::Sort(SortCriteria::Country),
        KeyCode::Char('f') => WebAction::CycleFilter,
        KeyCode::Char('t') => WebAction::CycleTimeRange,
        KeyCode::Char('r') => WebAction::Refresh,
        _ => return None,
    };
    Some(action)
}
