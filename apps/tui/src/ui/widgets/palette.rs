use ratatui::style::Color;

pub fn partner_type_color(partner_type: &str) -> Color {
    match partner_type {
        "Port" => Color::Rgb(0, 0, 238),
        "Recycler" => Color::Green,
        "Manufacturer" => Color::Yellow,
        "Vessel" => Color::Cyan,
        _ => Color::Gray,
    }
}

const SERIES_COLORS: [Color; 5] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::LightRed,
];

pub const fn series_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_types_fall_back_to_gray() {
        assert_eq!(partner_type_color("Port"), Color::Rgb(0, 0, 238));
        assert_eq!(partner_type_color("Barge"), Color::Gray);
    }

    #[test]
    fn series_colors_repeat() {
        assert_eq!(series_color(0), series_color(5));
    }
}
