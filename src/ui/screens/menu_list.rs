// My Menu tab: the full menu grouped into course sections

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::store::Course;
use crate::ui::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let store = app.store();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    let summary = Paragraph::new(Line::from(vec![
        Span::styled(
            "Your Complete Menu",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {} dishes", store.total_items()),
            Style::default().fg(theme::MUTED),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(summary, chunks[0]);

    let block = Block::default().borders(Borders::ALL);

    if store.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled("No dishes yet", theme::title_style())),
            Line::from(Span::styled(
                "Start building your menu!",
                Style::default().fg(theme::MUTED),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let display = &app.config.display;
    let mut rows: Vec<ListItem> = Vec::new();
    let mut selected_row = None;
    let mut flat_index = 0;

    // Section headers are extra rows, so map the item cursor onto list rows
    for course in Course::ALL {
        let course_items = store.items_by_course(course);
        if course_items.is_empty() {
            continue;
        }

        let color = theme::course_color(display, course);
        rows.push(ListItem::new(Line::from(vec![
            Span::styled(
                course.label(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", course_items.len()),
                Style::default().fg(theme::MUTED),
            ),
        ])));

        for item in course_items {
            if flat_index == app.menu_selected {
                selected_row = Some(rows.len());
            }
            flat_index += 1;

            rows.push(ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("  {:<28}", item.name()), theme::title_style()),
                    Span::styled(
                        theme::format_price(display, item.price()),
                        Style::default().fg(color),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("    {}", item.description()),
                    Style::default().fg(theme::MUTED),
                )),
            ]));
        }
    }

    let list = List::new(rows)
        .block(block)
        .highlight_style(theme::selected_style())
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(selected_row);
    frame.render_stateful_widget(list, chunks[1], &mut state);
}
