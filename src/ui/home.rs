//! Home page with attendance totals

use crate::app::App;
use crate::state::{AttendanceStats, StatsStatus};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(""),
        Line::styled(
            "You are invited to our wedding!",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("See where and when on the Venues page,"),
        Line::from("then let us know on the RSVP page."),
        Line::from(""),
    ];
    lines.extend(stats_lines(&app.state.stats));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Home ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, area);
}

fn stats_lines(status: &StatsStatus) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    match status {
        StatsStatus::Loading => vec![Line::styled("Loading guest count...", dim)],
        StatsStatus::Unavailable => vec![Line::styled("Guest count unavailable", dim)],
        StatsStatus::Loaded(AttendanceStats {
            total_guests,
            attending_guests,
            not_attending_guests,
        }) => vec![
            Line::from(format!("Replies so far: {total_guests}")),
            Line::styled(
                format!("Coming: {attending_guests}"),
                Style::default().fg(Color::Green),
            ),
            Line::styled(format!("Can't make it: {not_attending_guests}"), dim),
        ],
    }
}
