use crate::app::App;
use crate::ui::widgets::charts::render_impact_chart;
use crate::ui::widgets::tables::key_hints;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_impact(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(65),
            Constraint::Min(4),
            Constraint::Length(2),
        ])
        .split(area);

    render_impact_chart(&app.dashboard, f, chunks[0]);
    render_attestations(app, f, chunks[1]);

    let help = key_hints(&[("t", "Time range"), ("r", "Refresh")]);
    f.render_widget(
        Paragraph::new(help).alignment(Alignment::Center),
        chunks[2],
    );
}

fn render_attestations(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = format!("Attestations ({})", app.dashboard.attestations.len());

    if app.dashboard.attestations.is_empty() {
        let paragraph = Paragraph::new("No attestations recorded.")
            .block(Block::default().title(title).borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![Cell::from("ID"), Cell::from("Submitter"), Cell::from("Details")])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let visible = usize::from(area.height.saturating_sub(3));
    let rows = app
        .dashboard
        .attestations
        .iter()
        .take(visible)
        .map(|attestation| {
            let details = attestation
                .fields
                .iter()
                .map(|(key, value)| match value {
                    serde_json::Value::String(text) => format!("{key}: {text}"),
                    other => format!("{key}: {other}"),
                })
                .collect::<Vec<_>>()
                .join(", ");
            Row::new(vec![
                Cell::from(attestation.id.clone()),
                Cell::from(attestation.submitter.clone()),
                Cell::from(details),
            ])
        });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(20),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(Block::default().title(title).borders(Borders::ALL))
    .column_spacing(1);

    f.render_widget(table, area);
}
