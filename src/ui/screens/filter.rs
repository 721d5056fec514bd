// Filter tab: browse the menu one course at a time

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, FilterChoice};
use crate::ui::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let store = app.store();
    let display = &app.config.display;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let titles: Vec<Line> = FilterChoice::ALL
        .iter()
        .map(|choice| {
            let color = match choice {
                FilterChoice::All => Color::White,
                FilterChoice::Only(course) => theme::course_color(display, *course),
            };
            Line::from(Span::styled(
                format!("{} ({})", choice.label(), choice.count(store)),
                Style::default().fg(color),
            ))
        })
        .collect();
    let selected = FilterChoice::ALL
        .iter()
        .position(|c| *c == app.filter)
        .unwrap_or(0);

    let filter_bar = Tabs::new(titles)
        .select(selected)
        .highlight_style(theme::selected_style().bg(Color::Rgb(40, 40, 40)))
        .divider("|")
        .block(
            Block::default()
                .title(" Guest Menu · ←/→ filter by course ")
                .borders(Borders::ALL),
        );
    frame.render_widget(filter_bar, chunks[0]);

    let items = app.filter.items(store);
    let block = Block::default().borders(Borders::ALL);

    if items.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled("No items in this course", theme::title_style())),
            Line::from(Span::styled(
                app.filter.empty_message(),
                Style::default().fg(theme::MUTED),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let color = theme::course_color(display, item.course());
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled("▌ ", Style::default().fg(color)),
                    Span::styled(format!("{:<28}", item.name()), theme::title_style()),
                    Span::styled(
                        theme::format_price(display, item.price()),
                        Style::default().fg(color),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("▌ ", Style::default().fg(color)),
                    Span::styled(
                        format!("{}  ", item.description()),
                        Style::default().fg(theme::MUTED),
                    ),
                    Span::styled(format!("[{}]", item.course()), Style::default().fg(color)),
                ]),
            ])
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(theme::selected_style())
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(app.filter_selected));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}
