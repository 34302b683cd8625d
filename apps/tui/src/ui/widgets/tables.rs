use impact_dashboard::PartnerPage;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};

/// `◀ Page 2 of 5 ▶` footer, arrows only toward pages that exist, or
/// nothing when everything fits on one page.
pub fn page_label(page: &PartnerPage<'_>) -> Option<String> {
    page.needs_pagination.then(|| {
        format!(
            "{}Page {} of {}{}",
            if page.has_previous { "◀ " } else { "" },
            page.current_page,
            page.max_page,
            if page.has_next { " ▶" } else { "" },
        )
    })
}

/// Key hint bar: bold yellow keys followed by their descriptions.
pub fn key_hints(hints: &[(&'static str, &'static str)]) -> TextLine<'static> {
    let spans = hints
        .iter()
        .flat_map(|(key, description)| {
            [
                Span::styled(
                    *key,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(": {description}   ")),
            ]
        })
        .collect::<Vec<_>>();
    TextLine::from(spans)
}
