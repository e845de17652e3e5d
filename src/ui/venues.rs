//! Venue cards: static map links when available, otherwise plain text

use crate::app::App;
use crate::venues::VenueWidget;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let outer = Block::default()
        .title(" Venues ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let widgets = &app.state.venue_widgets;
    if widgets.is_empty() {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, widgets.len() as u32);
            widgets.len()
        ])
        .split(inner);

    for (widget, chunk) in widgets.iter().zip(chunks.iter()) {
        draw_widget(frame, *chunk, widget);
    }
}

fn draw_widget(frame: &mut Frame, area: Rect, widget: &VenueWidget) {
    let (title, lines) = match widget {
        VenueWidget::Interactive(map) => (
            map.title.clone(),
            vec![
                Line::from(map.placemark.clone()),
                Line::from(""),
                Line::styled(map.link_url.clone(), Style::default().fg(Color::Blue)),
            ],
        ),
        VenueWidget::Fallback(card) => {
            let mut lines = card.lines().into_iter();
            let title = lines.next().unwrap_or_default();
            (title, lines.map(Line::from).collect())
        }
    };

    let border_style = if widget.is_fallback() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Blue)
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(Line::styled(
                format!(" {title} "),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(paragraph, area);
}
