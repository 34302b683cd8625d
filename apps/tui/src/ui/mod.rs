// UI module for the impact dashboard
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_tabs(app, f, chunks[0]);

    match app.screen {
        AppScreen::Partners => screens::partners::render_partners(app, f, chunks[1]),
        AppScreen::Impact => screens::impact::render_impact(app, f, chunks[1]),
        AppScreen::Map => screens::map::render_map(app, f, chunks[1]),
    }

    render_status(app, f, chunks[2]);

    if app.show_help {
        widgets::popup::render_help_popup(f);
    }
}

fn render_tabs(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let titles = AppScreen::ALL
        .iter()
        .enumerate()
        .map(|(i, screen)| TextLine::from(format!("{} {}", i + 1, screen.label())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.screen.index())
        .block(
            Block::default()
                .title(format!(
                    "Impact Dashboard | {}",
                    app.dashboard.partner_type().label()
                ))
                .borders(Borders::ALL),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let line = if app.search_active {
        TextLine::from(vec![
            Span::styled(
                "Search: ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{}_", app.search_input)),
        ])
    } else {
        TextLine::from(vec![
            Span::raw(app.status_message.clone()),
            Span::styled("   F1: Help   q: Quit", Style::default().fg(Color::DarkGray)),
        ])
    };

    f.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::TOP)),
        area,
    );
}
