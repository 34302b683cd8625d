use impact_dashboard::charts::{
    axis_labels, series_names, series_points, tick_positions, value_bounds, x_bound,
};
use impact_dashboard::map::{arrow_anchors, heading_glyph, BoundingBox};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line as TextLine, Span, Text},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Map, MapResolution},
        Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table, Tabs,
    },
    Frame,
};

use crate::keys::SCREENS;
use crate::WebModel;

const WORLD: BoundingBox = BoundingBox::new(-180.0, -90.0, 180.0, 90.0);
const SERIES_COLORS: [Color; 4] = [Color::Cyan, Color::Green, Color::Yellow, Color::Magenta];
const AXIS_LABEL_WIDTH: u16 = 10;

fn partner_type_color(partner_type: &str) -> Color {
    match partner_type {
        "Port" => Color::Rgb(0, 0, 238),
        "Recycler" => Color::Green,
        "Manufacturer" => Color::Yellow,
        "Vessel" => Color::Cyan,
        _ => Color::Gray,
    }
}

pub fn render_dashboard(model: &mut WebModel, f: &mut Frame<'_>) {
    let area = f.area();
    let block = Block::default()
        .title("Impact Dashboard")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area).inner(Margin::new(1, 1));
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(inner);

    render_tabs(model, f, layout[0]);
    render_info(model, f, layout[1]);

    match model.screen {
        0 => render_partners(model, f, layout[2]),
        1 => render_impact(model, f, layout[2]),
        _ => render_map(model, f, layout[2]),
    }

    let status = Paragraph::new(model.status.clone())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, layout[3]);
}

fn render_tabs(model: &WebModel, f: &mut Frame<'_>, area: Rect) {
    let titles = SCREENS
        .iter()
        .enumerate()
        .map(|(i, title)| TextLine::from(format!("{} {title}", i + 1)))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(model.screen)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

fn render_info(model: &WebModel, f: &mut Frame<'_>, area: Rect) {
    let info = TextLine::from(vec![
        Span::raw(format!(
            "{} • {} • {}",
            model.dashboard.partner_type().label(),
            model.dashboard.sort().describe(),
            model.dashboard.time_range().label()
        )),
        Span::raw("  "),
        Span::styled(
            "Tab/1-3  ←/→ page  s/c sort  f filter  t range  r refresh",
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(
        Paragraph::new(Text::from(info)).alignment(Alignment::Center),
        area,
    );
}

fn render_partners(model: &mut WebModel, f: &mut Frame<'_>, area: Rect) {
    let page = model.dashboard.page();

    if page.rows.is_empty() {
        let paragraph = Paragraph::new("No partners available")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Type"),
        Cell::from("Country"),
        Cell::from("Actions"),
    ])
    .style(
        Style::default()
            .fg(Color::Rgb(0, 0, 238))
            .bg(Color::Rgb(200, 200, 200))
            .add_modifier(Modifier::BOLD),
    );

    let rows = page.rows.iter().map(|record| {
        Row::new(vec![
            Cell::from(record.display_name().to_string()),
            Cell::from(record.record_type.clone()),
            Cell::from(record.country_or_default().to_string()),
            Cell::from(record.action_count_or_default().to_string()),
        ])
        .style(Style::default().fg(partner_type_color(&record.record_type)))
    });

    let title = if page.needs_pagination {
        format!(
            "{} partners | Page {} of {}",
            page.matching, page.current_page, page.max_page
        )
    } else {
        format!("{} partners", page.matching)
    };

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(16),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(Block::default().title(title).borders(Borders::ALL))
    .column_spacing(1);

    f.render_widget(table, area);
}

fn render_impact(model: &WebModel, f: &mut Frame<'_>, area: Rect) {
    let records = &model.dashboard.chart;
    let block = Block::default()
        .title(format!(
            "Impact | {} | {} attestations",
            model.dashboard.time_range().label(),
            model.dashboard.attestations.len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if records.is_empty() {
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
    let tick_set = model.dashboard.ticks();
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
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(SERIES_COLORS[i % SERIES_COLORS.len()]))
                .data(points)
        })
        .collect::<Vec<_>>();
    datasets.push(
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::DarkGray))
            .data(&tick_marks),
    );

    let chart = Chart::new(datasets)
        .block(block)
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
                    format!("{:.0}", y_bounds[1]),
                ]),
        );

    f.render_widget(chart, area);
}

fn render_map(model: &WebModel, f: &mut Frame<'_>, area: Rect) {
    let markers = model.dashboard.markers();
    let traces = model.dashboard.trace_paths();
    let bounds = model
        .dashboard
        .viewport()
        .map_or(WORLD, |viewport| viewport.visible_box());

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(format!("Map | {} located", markers.len()))
                .borders(Borders::ALL),
        )
        .marker(symbols::Marker::Braille)
        .x_bounds([bounds.west, bounds.east])
        .y_bounds([bounds.south, bounds.north])
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::Low,
                color: Color::DarkGray,
            });
            ctx.layer();

            for trace in &traces {
                for pair in trace.points.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: pair[0].lng,
                        y1: pair[0].lat,
                        x2: pair[1].lng,
                        y2: pair[1].lat,
                        color: Color::LightMagenta,
                    });
                }
                for (anchor, heading) in arrow_anchors(&trace.points, trace.arrows) {
                    ctx.print(
                        anchor.lng,
                        anchor.lat,
                        Span::styled(
                            heading_glyph(heading).to_string(),
                            Style::default().fg(Color::LightMagenta),
                        ),
                    );
                }
            }

            for marker in &markers {
                ctx.print(
                    marker.position.lng,
                    marker.position.lat,
                    Span::styled(
                        "●",
                        Style::default().fg(partner_type_color(&marker.record.record_type)),
                    ),
                );
            }
        });

    f.render_widget(canvas, area);
}
