//! Field rendering utilities for forms

use crate::state::{field_names, Attendance, ChoiceGroup, FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field needs, borders included
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline {
        6
    } else {
        3
    }
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = match &field.value {
        FieldValue::Text(_) => text_content(field, is_active),
        FieldValue::Choices(group) => Paragraph::new(choice_line(field, group, is_active)),
    };

    let title = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

fn text_content(field: &FormField, is_active: bool) -> Paragraph<'static> {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    }
}

/// `(•) option  ( ) option` for radios, `[x] meat  [ ] fish` for checkboxes
fn choice_line(field: &FormField, group: &ChoiceGroup, is_active: bool) -> Line<'static> {
    let (on, off) = if group.is_exclusive() {
        ("(•)", "( )")
    } else {
        ("[x]", "[ ]")
    };

    let mut spans = vec![];
    for (index, option) in group.options().iter().enumerate() {
        let mark = if group.is_checked(index) { on } else { off };
        let mut style = if group.is_checked(index) {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        if is_active && index == group.cursor() {
            style = style.fg(Color::Cyan).add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(
            format!("{mark} {}", option_label(field, option)),
            style,
        ));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

/// Attendance options show a sentence, everything else its value
fn option_label(field: &FormField, option: &str) -> String {
    if field.name == field_names::ATTENDANCE {
        if let Some(attendance) = Attendance::parse(option) {
            return attendance.label().to_string();
        }
    }
    option.to_string()
}
