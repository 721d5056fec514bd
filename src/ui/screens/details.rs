// Item details panel, drawn over the tab it was opened from

use ratatui::{
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::store::MenuItem;
use crate::ui::overlay::centered_rect;
use crate::ui::theme;

pub fn render(frame: &mut Frame, app: &App, item: &MenuItem, area: Rect) {
    let display = &app.config.display;
    let color = theme::course_color(display, item.course());

    let panel = centered_rect(64, 12, area);
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .title(" Dish Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(theme::BACKGROUND));
    frame.render_widget(block, panel);

    let lines = vec![
        Line::from(Span::styled(
            item.name().to_string(),
            theme::title_style().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Course  ", Style::default().fg(theme::MUTED)),
            Span::styled(item.course().label(), Style::default().fg(color)),
        ]),
        Line::from(vec![
            Span::styled("Price   ", Style::default().fg(theme::MUTED)),
            Span::styled(
                theme::format_price(display, item.price()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(item.description().to_string()),
        Line::from(""),
        Line::from(Span::styled("Esc: Back", Style::default().fg(theme::MUTED))),
    ];

    let body = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(body, panel.inner(Margin::new(2, 1)));
}
