// Colors and small formatting helpers shared by the screens

use ratatui::style::{Color, Modifier, Style};

use crate::config::DisplayConfig;
use crate::store::{Course, Price};

/// Warm brown used for titles and labels (#8B4513)
pub const ACCENT: Color = Color::Rgb(139, 69, 19);
pub const BACKGROUND: Color = Color::Rgb(0, 0, 0);
pub const MUTED: Color = Color::DarkGray;

pub fn course_color(display: &DisplayConfig, course: Course) -> Color {
    let [r, g, b] = display.course_color(course);
    Color::Rgb(r, g, b)
}

pub fn format_price(display: &DisplayConfig, price: Price) -> String {
    format!("{}{}", display.currency_symbol, price)
}

/// "1 item", "3 items"
pub fn item_count(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

pub fn title_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Border color for a block depending on whether it has the cursor
pub fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(MUTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_count_pluralizes() {
        assert_eq!(item_count(1), "1 item");
        assert_eq!(item_count(0), "0 items");
        assert_eq!(item_count(4), "4 items");
    }

    #[test]
    fn test_price_uses_configured_symbol() {
        let mut display = DisplayConfig::default();
        assert_eq!(format_price(&display, Price::from_cents(999)), "$9.99");
        display.currency_symbol = "€".to_string();
        assert_eq!(format_price(&display, Price::from_cents(1050)), "€10.50");
    }
}
