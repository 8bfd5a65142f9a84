//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field, highlighting it when active or in error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let accent = match (error.is_some(), is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Magenta,
        (false, false) => Color::DarkGray,
    };
    let cursor = if is_active { "▌" } else { "" };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Magenta));

    let mut lines: Vec<Line> = if field.is_empty() {
        vec![Line::from(vec![
            cursor_span.clone(),
            Span::styled(
                field.name.placeholder(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])]
    } else {
        // Keep a trailing empty line so the cursor follows a typed newline
        let mut lines: Vec<Line> = field
            .as_text()
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
        lines
    };

    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
