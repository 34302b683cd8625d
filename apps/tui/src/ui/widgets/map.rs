use impact_dashboard::map::{arrow_anchors, heading_glyph, BoundingBox, Marker, TracePath};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Map, MapResolution};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::ui::widgets::palette::partner_type_color;

pub const WORLD: BoundingBox = BoundingBox::new(-180.0, -90.0, 180.0, 90.0);

const TRACE_COLOR: Color = Color::LightMagenta;

pub fn render_world_map(
    f: &mut Frame<'_>,
    area: Rect,
    title: String,
    bounds: BoundingBox,
    markers: &[Marker<'_>],
    traces: &[TracePath],
) {
    let canvas = Canvas::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .marker(symbols::Marker::Braille)
        .x_bounds([bounds.west, bounds.east])
        .y_bounds([bounds.south, bounds.north])
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: Color::DarkGray,
            });
            ctx.layer();

            for trace in traces {
                for pair in trace.points.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: pair[0].lng,
                        y1: pair[0].lat,
                        x2: pair[1].lng,
                        y2: pair[1].lat,
                        color: TRACE_COLOR,
                    });
                }
                for (anchor, heading) in arrow_anchors(&trace.points, trace.arrows) {
                    ctx.print(
                        anchor.lng,
                        anchor.lat,
                        Span::styled(
                            heading_glyph(heading).to_string(),
                            Style::default().fg(TRACE_COLOR),
                        ),
                    );
                }
            }

            for marker in markers {
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
