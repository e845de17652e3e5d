//! Layout components (navigation bar, status bar)

use crate::app::App;
use crate::state::{MessageKind, Page};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into navigation bar and content, reserving the bottom line for status
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navigation
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the page tabs
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];
    for page in Page::ALL {
        let style = if page == app.state.current_page {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!(" F{} {} ", page.number(), page.label()),
            style,
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    if app.controller.phase().is_sending() {
        spans.push(Span::styled(" Sending… ", Style::default().fg(Color::Yellow)));
    }

    let message = app.controller.message();
    if let (Some(kind), Some(text)) = (message.kind(), message.text()) {
        let color = match kind {
            MessageKind::Success => Color::Green,
            MessageKind::Error => Color::Red,
        };
        spans.push(Span::styled(
            format!(" {text} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled(
            get_page_hints(app.state.current_page),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}

fn get_page_hints(page: Page) -> &'static str {
    match page {
        Page::Home | Page::Venues => " 1-3/F1-F3: pages | Tab: next page | q: quit",
        Page::Rsvp => {
            " Tab/↑↓: field | ←→: option | Space: toggle | Ctrl+S: send | Esc: home"
        }
    }
}
