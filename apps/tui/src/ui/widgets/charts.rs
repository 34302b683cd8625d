use impact_dashboard::charts::{
    axis_labels, series_names, series_points, tick_positions, value_bounds, x_bound,
};
use impact_dashboard::DashboardState;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::ui::widgets::palette::series_color;

/// Columns reserved per x-axis label, wide enough for `Mar 2024`.
const AXIS_LABEL_WIDTH: u16 = 10;

pub fn render_impact_chart(dashboard: &DashboardState, f: &mut Frame<'_>, area: Rect) {
    let title = format!("Impact | {}", dashboard.time_range().label());
    let records = &dashboard.chart;

    if records.is_empty() {
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let paragraph = Paragraph::new("No impact data for this range")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let names = series_names(records);
    let series = names
        .iter()
        .map(|name| series_points(records, name))
        .collect::<Vec<_>>();

    let tick_set = dashboard.ticks();
    let tick_marks = tick_positions(records, &tick_set.ticks)
        .into_iter()
        .map(|x| (x, 0.0))
        .collect::<Vec<_>>();

    let all_points = series.iter().flatten().copied().collect::<Vec<_>>();
    let y_bounds = value_bounds(&all_points);
    let x_max = x_bound(records);

    let mut datasets = names
        .iter()
        .zip(&series)
        .enumerate()
        .map(|(i, (name, points))| {
            Dataset::default()
                .name(name.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series_color(i)))
                .data(points)
        })
        .collect::<Vec<_>>();
    datasets.push(
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::DarkGray))
            .data(&tick_marks),
    );

    let chart = Chart::new(datasets)
        .block(Block::default().title(title).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(axis_labels(
                    records,
                    &tick_set,
                    usize::from(area.width / AXIS_LABEL_WIDTH),
                )),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels([
                    format!("{:.0}", y_bounds[0]),
                    format!("{:.0}", y_bounds[1] / 2.0),
                    format!("{:.0}", y_bounds[1]),
                ]),
        );

    f.render_widget(chart, area);
}
