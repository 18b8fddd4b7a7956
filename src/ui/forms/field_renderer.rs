//! Field rendering utilities for forms

use crate::config::Theme;
use crate::state::{ErrorSlot, Field, FieldKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a field: bordered input plus its error slot line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a field and, below it, its error slot
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &Field,
    slot: Option<&ErrorSlot>,
    is_active: bool,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Error slot
        ])
        .split(area);

    let border_style = if field.marker {
        Style::default().fg(theme.error_color)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(theme.border_color)
    };

    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let content = match &field.kind {
        // Choice controls show arrows instead of a cursor
        FieldKind::Select { .. } | FieldKind::Range { .. } => Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
            Span::styled(display_str, text_style),
            Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
        ]),
        _ => {
            let cursor = if is_active { "▌" } else { "" };
            Line::from(vec![
                Span::styled(display_str, text_style),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ])
        }
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

    frame.render_widget(Paragraph::new(content).block(block), chunks[0]);

    if let Some(slot) = slot {
        let message = Paragraph::new(Span::styled(
            format!(" {}", slot.message),
            Style::default().fg(theme.error_color),
        ));
        frame.render_widget(message, chunks[1]);
    }
}

/// Draw a line of dimmed help text
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}
