use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::overlay::{render_confirm_dialog, render_overlay};
use super::screens;
use super::theme;
use crate::app::{App, Tab};
use crate::config::Keymap;

// Layout: tab bar on top, active tab in the middle, key hints on the last row
const HEADER_ROWS: u16 = 3;
const FOOTER_ROWS: u16 = 1;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw background (true black RGB, not terminal default)
    let bg = Block::default().style(Style::default().bg(theme::BACKGROUND));
    frame.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_ROWS),
            Constraint::Min(5),
            Constraint::Length(FOOTER_ROWS),
        ])
        .split(area);

    render_tab_bar(frame, app, chunks[0]);

    match app.tab {
        Tab::Home => screens::home::render(frame, app, chunks[1]),
        Tab::Manage => screens::manage::render(frame, app, chunks[1]),
        Tab::Create => screens::create::render(frame, app, chunks[1]),
        Tab::MyMenu => screens::menu_list::render(frame, app, chunks[1]),
        Tab::Filter => screens::filter::render(frame, app, chunks[1]),
    }

    if let Some(item) = app.detail_item() {
        screens::details::render(frame, app, item, chunks[1]);
    }

    render_footer(frame, app, chunks[2]);

    if let Some(ref pending) = app.pending_removal {
        render_confirm_dialog(frame, &pending.name);
    } else if let Some(ref notification) = app.notification {
        render_overlay(frame, &notification.message, chunks[1]);
    }
}

fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(theme::MUTED)),
                Span::raw(tab.title()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Rgb(255, 107, 107))
                .add_modifier(Modifier::BOLD),
        )
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT))
                .title(Span::styled(
                    format!(
                        " menuboard · {} ",
                        theme::item_count(app.store().total_items())
                    ),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )),
        );

    frame.render_widget(tabs, area);
}

fn hint<'a>(key: String, action: &'a str) -> [Span<'a>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Gray)),
        Span::styled(format!(": {}  ", action), Style::default().fg(theme::MUTED)),
    ]
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let keys = &app.keymap;
    let mut hints: Vec<[Span; 2]> = Vec::new();

    if app.pending_removal.is_some() {
        hints.push(hint("Y".to_string(), "Remove"));
        hints.push(hint("N".to_string(), "Cancel"));
    } else if app.detail.is_some() {
        hints.push(hint(Keymap::label(keys.back), "Back"));
    } else if app.tab == Tab::Create {
        hints.push(hint("Tab/↑/↓".to_string(), "Field"));
        hints.push(hint("←/→".to_string(), "Course"));
        hints.push(hint("Ctrl+V".to_string(), "Paste"));
        hints.push(hint("Enter".to_string(), "Save"));
        hints.push(hint(Keymap::label(keys.back), "Cancel"));
    } else {
        hints.push(hint("1-5".to_string(), "Tabs"));
        hints.push(hint("↑/↓".to_string(), "Navigate"));
        match app.tab {
            Tab::Home => hints.push(hint(Keymap::label(keys.select), "Open")),
            Tab::Manage => {
                hints.push(hint("←/→".to_string(), "Switch list"));
                hints.push(hint(Keymap::label(keys.select), "Add/Details"));
                hints.push(hint(Keymap::label(keys.remove), "Remove"));
            }
            Tab::MyMenu => {
                hints.push(hint(Keymap::label(keys.select), "Details"));
                hints.push(hint(Keymap::label(keys.remove), "Remove"));
            }
            Tab::Filter => {
                hints.push(hint("←/→".to_string(), "Course"));
                hints.push(hint(Keymap::label(keys.select), "Details"));
            }
            Tab::Create => {}
        }
        hints.push(hint(Keymap::label(keys.quit), "Quit"));
    }

    let line = Line::from(hints.into_iter().flatten().collect::<Vec<Span>>());
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
