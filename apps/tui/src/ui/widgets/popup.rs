use ratatui::layout::Rect;
use ratatui::prelude::Buffer;
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use ratatui::Frame;

use crate::ui::widgets::tables::key_hints;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
            ratatui::layout::Constraint::Percentage(percent_y),
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
            ratatui::layout::Constraint::Percentage(percent_x),
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    horizontal_layout[1]
}

pub struct ClearWidget;

impl Widget for ClearWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ratatui::widgets::Clear.render(area, buf);
    }
}

const HELP_SECTIONS: [(&str, &[(&str, &str)]); 4] = [
    (
        "Everywhere",
        &[
            ("Tab/1-3", "Switch screen"),
            ("f", "Cycle partner type"),
            ("r", "Refresh"),
            ("q", "Quit"),
        ],
    ),
    (
        "Partners",
        &[
            ("←/→", "Page"),
            ("Home/End", "First/Last page"),
            ("s", "Sort by activity"),
            ("c", "Sort by country"),
            ("/", "Search names"),
        ],
    ),
    ("Impact", &[("t", "Cycle time range")]),
    ("Map", &[("p", "Toggle product trace")]),
];

pub fn render_help_popup(f: &mut Frame<'_>) {
    let area = centered_rect(70, 80, f.area());
    f.render_widget(ClearWidget, area);

    let mut lines = Vec::new();
    for (title, hints) in HELP_SECTIONS {
        lines.push(TextLine::styled(title, Style::default().fg(Color::Cyan)));
        lines.push(key_hints(hints));
        lines.push(TextLine::default());
    }
    lines.push(TextLine::styled(
        "Command line",
        Style::default().fg(Color::Cyan),
    ));
    lines.extend(
        crate::cli::CliArgs::help_text()
            .lines()
            .map(|line| TextLine::from(line.to_string())),
    );
    lines.push(TextLine::default());
    lines.push(TextLine::styled(
        "F1/Esc: Close",
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
