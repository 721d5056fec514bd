// Manage tab: dishes on the menu plus the catalog of predefined dishes

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, ManageFocus};
use crate::catalog::CATALOG;
use crate::ui::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_added(frame, app, chunks[0]);
    render_catalog(frame, app, chunks[1]);
}

fn render_added(frame: &mut Frame, app: &App, area: Rect) {
    let store = app.store();
    let focused = app.manage_focus == ManageFocus::Added;
    let block = Block::default()
        .title(format!(" Your Menu Items ({}) ", store.total_items()))
        .borders(Borders::ALL)
        .border_style(theme::focus_border(focused));

    if store.is_empty() {
        let empty = Paragraph::new("Nothing on the menu yet. Add dishes from the catalog below.")
            .style(Style::default().fg(theme::MUTED))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let display = &app.config.display;
    let items: Vec<ListItem> = store
        .items()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(item.name().to_string(), theme::title_style()),
                Span::styled(
                    format!("  {} • ", item.course()),
                    Style::default().fg(theme::course_color(display, item.course())),
                ),
                Span::raw(theme::format_price(display, item.price())),
            ]))
        })
        .collect();

    let mut list = List::new(items).block(block);
    let mut state = ListState::default();
    if focused {
        list = list
            .highlight_style(theme::selected_style())
            .highlight_symbol("> ");
        state.select(Some(app.manage_selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_catalog(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.manage_focus == ManageFocus::Catalog;
    let display = &app.config.display;

    let items: Vec<ListItem> = CATALOG
        .iter()
        .map(|dish| {
            let added = dish.is_added(app.store());
            let status = if added {
                Span::styled("Added ✓", Style::default().fg(Color::Green))
            } else {
                Span::styled("Add +", Style::default().fg(Color::Yellow))
            };
            let name_style = if added {
                Style::default().fg(theme::MUTED)
            } else {
                theme::title_style()
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{:<26}", dish.name), name_style),
                    Span::styled(
                        format!("{:<14}", dish.course.label()),
                        Style::default().fg(theme::course_color(display, dish.course)),
                    ),
                    Span::raw(format!("{:>9}  ", theme::format_price(display, dish.price))),
                    status,
                ]),
                Line::from(Span::styled(
                    format!("  {}", dish.description),
                    Style::default().fg(theme::MUTED),
                )),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Add from Catalog ")
        .borders(Borders::ALL)
        .border_style(theme::focus_border(focused));

    let mut list = List::new(items).block(block);
    let mut state = ListState::default();
    if focused {
        list = list
            .highlight_style(theme::selected_style())
            .highlight_symbol("> ");
        state.select(Some(app.catalog_selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
