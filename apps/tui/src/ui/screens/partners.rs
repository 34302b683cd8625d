use crate::app::App;
use crate::ui::widgets::palette::partner_type_color;
use crate::ui::widgets::tables::{key_hints, page_label};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_partners(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(area);

    let selected_row = app.selected_row;
    let sort = app.dashboard.sort().describe();
    let search = app.dashboard.search_query().to_string();
    let page = app.dashboard.page();

    let mut title = format!("Partners ({} matching) | {sort}", page.matching);
    if !search.is_empty() {
        title.push_str(&format!(" | \"{search}\""));
    }
    if let Some(label) = page_label(&page) {
        title.push_str(&format!(" | {label}"));
    }

    if page.rows.is_empty() {
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new("No partners found.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, chunks[0]);
    } else {
        let header = Row::new(vec![
            Cell::from("Name"),
            Cell::from("Type"),
            Cell::from("Country"),
            Cell::from("Actions"),
        ])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let rows = page.rows.iter().enumerate().map(|(i, record)| {
            let style = if i == selected_row {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(partner_type_color(&record.record_type))
            };

            Row::new(vec![
                Cell::from(record.display_name().to_string()),
                Cell::from(record.record_type.clone()),
                Cell::from(record.country_or_default().to_string()),
                Cell::from(record.action_count_or_default().to_string()),
            ])
            .style(style)
        });

        let widths = [
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(16),
            Constraint::Length(8),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().title(title).borders(Borders::ALL))
            .column_spacing(1);

        f.render_widget(table, chunks[0]);
    }

    let help = key_hints(&[
        ("←/→", "Page"),
        ("s", "Sort activity"),
        ("c", "Sort country"),
        ("f", "Type filter"),
        ("/", "Search"),
    ]);
    f.render_widget(
        Paragraph::new(help).alignment(Alignment::Center),
        chunks[1],
    );
}
