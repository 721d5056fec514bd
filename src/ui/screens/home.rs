// Home dashboard: item total, average price per course, quick actions

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, QuickAction};
use crate::ui::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                                    // Chef banner
            Constraint::Min(6),                                       // Averages
            Constraint::Length(QuickAction::ALL.len() as u16 * 2 + 2), // Quick actions
        ])
        .split(area);

    render_banner(frame, app, chunks[0]);
    render_averages(frame, app, chunks[1]);
    render_quick_actions(frame, app, chunks[2]);
}

fn render_banner(frame: &mut Frame, app: &App, area: Rect) {
    let total = app.store().total_items();
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Master Chef",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                format!(" {} ", total),
                theme::selected_style().add_modifier(Modifier::REVERSED),
            ),
            Span::styled(" Items", Style::default().fg(theme::MUTED)),
        ]),
        Line::from(Span::styled(
            "Menu Dashboard",
            Style::default().fg(theme::MUTED),
        )),
    ];

    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(banner, area);
}

fn render_averages(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Average Prices by Course ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT));

    let summaries = app.store().all_average_prices();
    if summaries.is_empty() {
        let empty = Paragraph::new("No items added yet. Start building your menu!")
            .style(Style::default().fg(theme::MUTED))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let display = &app.config.display;
    let lines: Vec<Line> = summaries
        .iter()
        .map(|summary| {
            let color = theme::course_color(display, summary.course);
            Line::from(vec![
                Span::styled("▌ ", Style::default().fg(color)),
                Span::styled(
                    format!("{:<14}", summary.course.label()),
                    theme::title_style(),
                ),
                Span::styled(
                    format!("{:>10}", theme::format_price(display, summary.average)),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("   {}", theme::item_count(summary.count)),
                    Style::default().fg(theme::MUTED),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_quick_actions(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = QuickAction::ALL
        .iter()
        .map(|action| {
            ListItem::new(vec![
                Line::from(Span::styled(action.title(), theme::title_style())),
                Line::from(Span::styled(
                    format!("  {}", action.subtitle()),
                    Style::default().fg(theme::MUTED),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Quick Actions ")
                .borders(Borders::ALL)
                .border_style(theme::focus_border(true)),
        )
        .highlight_style(theme::selected_style())
        .highlight_symbol("→ ");

    let mut state = ListState::default();
    state.select(Some(app.home_selected));
    frame.render_stateful_widget(list, area, &mut state);
}
