use crate::app::App;
use crate::ui::widgets::map::{render_world_map, WORLD};
use crate::ui::widgets::tables::key_hints;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render_map(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(area);

    let markers = app.dashboard.markers();
    let bounds = app
        .dashboard
        .viewport()
        .map_or(WORLD, |viewport| viewport.visible_box());
    let traces = if app.show_traces {
        app.dashboard.trace_paths()
    } else {
        Vec::new()
    };

    let mut title = format!(
        "Map | {} ({} located)",
        app.dashboard.partner_type().label(),
        markers.len()
    );
    if let Some(product_id) = &app.product_id {
        title.push_str(&format!(" | trace {product_id}: {} legs", traces.len()));
    }

    render_world_map(f, chunks[0], title, bounds, &markers, &traces);

    let help = key_hints(&[("f", "Type filter"), ("p", "Toggle trace")]);
    f.render_widget(
        Paragraph::new(help).alignment(Alignment::Center),
        chunks[1],
    );
}
