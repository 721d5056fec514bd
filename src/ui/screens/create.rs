// Create Dish tab: the new-dish form

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::form::FormField;
use crate::store::Course;
use crate::ui::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.form;
    let display = &app.config.display;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Name
            Constraint::Length(4), // Description
            Constraint::Length(3), // Course
            Constraint::Length(3), // Price
            Constraint::Length(1), // Error
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Create New Dish",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Craft your culinary masterpiece",
            Style::default().fg(theme::MUTED),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    render_text_field(
        frame,
        form.focus,
        FormField::Name,
        &form.name,
        "Enter dish name",
        chunks[1],
    );
    render_text_field(
        frame,
        form.focus,
        FormField::Description,
        &form.description,
        "Describe your creation",
        chunks[2],
    );
    render_course_picker(frame, app, chunks[3]);

    let price_focused = form.focus == FormField::Price;
    let price_label = format!(" {} ({}) ", FormField::Price.label(), display.currency_symbol);
    let price_input = input_paragraph(&form.price, "0.00", price_focused)
        .block(field_block(price_label, price_focused));
    frame.render_widget(price_input, chunks[4]);

    if let Some(ref error) = form.error {
        let error_line = Paragraph::new(error.to_string())
            .style(Style::default().fg(Color::LightRed))
            .alignment(Alignment::Center);
        frame.render_widget(error_line, chunks[5]);
    }

    let save_style = if form.is_valid() {
        Style::default()
            .fg(Color::White)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray).bg(Color::Rgb(60, 60, 60))
    };
    let buttons = Line::from(vec![
        Span::styled(
            " Esc: Cancel ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(108, 117, 125)),
        ),
        Span::raw("   "),
        Span::styled(" Enter: Add to Menu ", save_style),
    ]);
    frame.render_widget(
        Paragraph::new(buttons).alignment(Alignment::Center),
        chunks[6],
    );
}

fn field_block(title: String, focused: bool) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme::focus_border(focused))
}

fn input_paragraph<'a>(value: &'a str, placeholder: &'a str, focused: bool) -> Paragraph<'a> {
    let mut spans = if value.is_empty() {
        vec![Span::styled(placeholder, Style::default().fg(theme::MUTED))]
    } else {
        vec![Span::styled(value, Style::default().fg(Color::White))]
    };
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }
    Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false })
}

fn render_text_field(
    frame: &mut Frame,
    focus: FormField,
    field: FormField,
    value: &str,
    placeholder: &str,
    area: Rect,
) {
    let focused = focus == field;
    let block = field_block(format!(" {} ", field.label()), focused);
    frame.render_widget(input_paragraph(value, placeholder, focused).block(block), area);
}

fn render_course_picker(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.form.focus == FormField::Course;
    let display = &app.config.display;

    let mut spans = Vec::new();
    for course in Course::ALL {
        let color = theme::course_color(display, course);
        let style = if course == app.form.course {
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        spans.push(Span::styled(format!(" {} ", course.label()), style));
        spans.push(Span::raw(" "));
    }

    let title = if focused {
        format!(" {} · ←/→ to change ", FormField::Course.label())
    } else {
        format!(" {} ", FormField::Course.label())
    };
    let picker = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(field_block(title, focused));
    frame.render_widget(picker, area);
}
