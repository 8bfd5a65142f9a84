//! Landing page: header, hero and services sections, status bar
//!
//! Each section carries one "Join Waitlist" entry point bound to its own
//! mount point.

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{MountPoint, SERVICES};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CTA_LABEL: &str = "Join Waitlist";
const CTA_WIDTH: u16 = 19;

/// Draw the landing page behind any dialog
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Header
            Constraint::Min(10),               // Hero
            Constraint::Min(10),               // Services
            Constraint::Length(1),             // Status bar
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_hero(frame, chunks[1], app);
    draw_services(frame, chunks[2], app);
    draw_status_bar(frame, chunks[3], app);
}

fn is_selected(app: &App, mount: MountPoint) -> bool {
    app.state.active_mount().is_none() && app.state.selected_mount == mount
}

/// Split off a right-aligned button slot of `CTA_WIDTH`
fn cta_slot(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(CTA_WIDTH)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Centered button slot of `CTA_WIDTH` x `BUTTON_HEIGHT`
fn centered_cta(area: Rect) -> Rect {
    let width = CTA_WIDTH.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: BUTTON_HEIGHT.min(area.height),
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let (logo_area, button_area) = cta_slot(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled("✦ ", Style::default().fg(Color::Yellow)),
        Span::styled(
            "Niyati",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("    Home  About  Services", Style::default().fg(Color::Gray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(logo, logo_area);

    render_button(
        frame,
        button_area,
        CTA_LABEL,
        is_selected(app, MountPoint::Header),
        Color::Magenta,
    );
}

fn draw_hero(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(6),             // Title block
            Constraint::Length(BUTTON_HEIGHT), // CTA
            Constraint::Length(2),             // Availability
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Niyati",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Your Personal AI Astrologer",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Trained by expert astrologers to guide you through life's journey",
            Style::default().fg(Color::Gray),
        )),
    ])
    .centered()
    .wrap(Wrap { trim: true });
    frame.render_widget(title, chunks[1]);

    render_button(
        frame,
        centered_cta(chunks[2]),
        CTA_LABEL,
        is_selected(app, MountPoint::Hero),
        Color::Magenta,
    );

    let availability = Paragraph::new(Span::styled(
        "Available 24/7 • Whenever you need guidance",
        Style::default().fg(Color::DarkGray),
    ))
    .centered();
    frame.render_widget(availability, chunks[3]);
}

fn draw_services(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            " Guidance & Services ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = SERVICES.len().div_ceil(2) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Tagline
            Constraint::Length(rows),          // Service list
            Constraint::Length(1),             // Spacer
            Constraint::Length(2),             // CTA heading
            Constraint::Length(BUTTON_HEIGHT), // CTA
            Constraint::Min(0),
        ])
        .split(inner);

    let tagline = Paragraph::new(Span::styled(
        "Explore the various ways Niyati can guide and support you on your spiritual journey",
        Style::default().fg(Color::Gray),
    ))
    .centered()
    .wrap(Wrap { trim: true });
    frame.render_widget(tagline, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    let (left, right) = SERVICES.split_at(SERVICES.len().div_ceil(2));
    for (column, services) in [(columns[0], left), (columns[1], right)] {
        let lines: Vec<Line> = services
            .iter()
            .map(|s| {
                Line::from(vec![
                    Span::styled("  ★ ", Style::default().fg(Color::Yellow)),
                    Span::raw(*s),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), column);
    }

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Ready to Begin Your Journey?",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Connect with Niyati today and start receiving personalized astrological guidance.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .centered();
    frame.render_widget(heading, chunks[3]);

    render_button(
        frame,
        centered_cta(chunks[4]),
        CTA_LABEL,
        is_selected(app, MountPoint::Services),
        Color::Magenta,
    );
}

/// Draw the status bar
fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", hints(app)),
        Style::default().fg(Color::Gray),
    )];

    let in_flight = app.state.submissions_in_flight();
    if in_flight > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("sending {in_flight}..."),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    let status =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for whatever currently has focus
fn hints(app: &App) -> &'static str {
    match app.state.active_mount() {
        Some(_) => "Esc:close",
        None => "←/→:select  Enter:join waitlist  1-3:jump  q:quit",
    }
}
