//! Thank-you dialog shown after a registration is submitted

use super::base::{render_dialog, DialogConfig};
use chrono::{DateTime, Local, Utc};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

const TITLE: &str = "Thank You!";
const MESSAGE: &str =
    "Thank you for joining the waitlist. We will notify you as soon as we launch.";

/// Render the thank-you overlay centered on the screen
pub fn render_thank_you_dialog(frame: &mut Frame, received_at: Option<DateTime<Utc>>) {
    let message = match received_at {
        Some(at) => format!(
            "{MESSAGE}\n\nReceived at {}",
            at.with_timezone(&Local).format("%H:%M")
        ),
        None => MESSAGE.to_string(),
    };

    let key_style = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to close"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: TITLE,
            title_color: Color::Magenta,
            border_color: Color::Magenta,
            message: &message,
            hint: Some(hint),
            max_width: 52,
        },
    );
}
