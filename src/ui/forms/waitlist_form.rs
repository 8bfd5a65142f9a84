//! Waitlist form dialog rendering

use super::field_renderer::draw_field;
use crate::state::{FieldName, SubmissionStatus, WaitlistMount};
use crate::ui::components::{centered_rect, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const DIALOG_WIDTH: u16 = 64;
const FIELD_HEIGHT: u16 = 3;
const QUESTION_HEIGHT: u16 = 5;
const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Draw the "Join Our Waitlist" dialog for a mount point
pub fn draw_waitlist_form(frame: &mut Frame, mount: &WaitlistMount) {
    let rejection = mount.rejection();
    let error_field = rejection.map(|err| err.field());
    let error_message = rejection.map(|err| err.to_string());

    let height_of = |field: FieldName| {
        let base = if field.is_multiline() {
            QUESTION_HEIGHT
        } else {
            FIELD_HEIGHT
        };
        base + u16::from(error_field == Some(field))
    };

    let birth_row_height =
        height_of(FieldName::DateOfBirth).max(height_of(FieldName::PlaceOfBirth));
    let rows = [
        Constraint::Length(height_of(FieldName::Name)),
        Constraint::Length(birth_row_height),
        Constraint::Length(height_of(FieldName::Email)),
        Constraint::Length(1), // question hint
        Constraint::Length(height_of(FieldName::Question)),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Length(1), // key help
    ];
    let content_height: u16 = height_of(FieldName::Name)
        + birth_row_height
        + height_of(FieldName::Email)
        + 1
        + height_of(FieldName::Question)
        + BUTTON_HEIGHT
        + 1;

    let dialog_area = centered_rect(frame.area(), DIALOG_WIDTH, content_height + 2);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            " Join Our Waitlist ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(format!(" {} ", mount.mount().label())).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows)
        .split(inner);

    let birth_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let field_areas: [(FieldName, Rect); 5] = [
        (FieldName::Name, chunks[0]),
        (FieldName::DateOfBirth, birth_chunks[0]),
        (FieldName::PlaceOfBirth, birth_chunks[1]),
        (FieldName::Email, chunks[2]),
        (FieldName::Question, chunks[4]),
    ];

    let focused = mount.focus().field();
    for (field, area) in field_areas {
        let error = (error_field == Some(field))
            .then_some(error_message.as_deref())
            .flatten();
        draw_field(
            frame,
            area,
            mount.draft().field(field),
            focused == Some(field),
            error,
        );
    }

    if let Some(hint) = FieldName::Question.hint() {
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
            chunks[3],
        );
    }

    let submit_label = match mount.status() {
        SubmissionStatus::Submitting => "Submitting...",
        _ => "Submit",
    };
    render_button(
        frame,
        chunks[5],
        submit_label,
        mount.focus().is_submit_button(),
        Color::Magenta,
    );

    draw_help(frame, chunks[6]);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Magenta);
    let text = Style::default().fg(Color::DarkGray);
    let help = Line::from(vec![
        Span::styled("Tab", key),
        Span::styled(":next  ", text),
        Span::styled(SUBMIT_SHORTCUT, key),
        Span::styled(":submit  ", text),
        Span::styled("Ctrl+U", key),
        Span::styled(":clear  ", text),
        Span::styled("Esc", key),
        Span::styled(":close", text),
    ]);
    frame.render_widget(Paragraph::new(help).centered(), area);
}
