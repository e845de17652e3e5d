//! Form rendering

mod field_renderer;

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::Form;
use field_renderer::{draw_field, field_height};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the RSVP form, skipping fields in the hidden companion section
pub fn draw_rsvp_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.controller.form();

    let block = Block::default()
        .title(" RSVP ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible: Vec<usize> = (0..form.field_count())
        .filter(|&index| form.is_field_visible(index))
        .collect();

    let mut constraints: Vec<Constraint> = visible
        .iter()
        .map(|&index| {
            Constraint::Length(form.get_field(index).map_or(BUTTON_HEIGHT, field_height))
        })
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (&index, chunk) in visible.iter().zip(chunks.iter()) {
        let is_active = form.active_field() == index;
        match form.get_field(index) {
            Some(field) => draw_field(frame, *chunk, field, is_active),
            None => {
                let label = if app.controller.is_submit_enabled() {
                    "Send RSVP"
                } else {
                    "Sending…"
                };
                let width = chunk.width.min(20);
                let button_area = Rect { width, ..*chunk };
                render_button(
                    frame,
                    button_area,
                    label,
                    is_active,
                    app.controller.is_submit_enabled(),
                );
            }
        }
    }
}
