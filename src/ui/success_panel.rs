//! Success panel shown once the account is created

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the success panel centered in `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let elements = app.state.validator.elements();
    let accent = elements.theme.success_color;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓ Account created successfully!",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Welcome aboard. You can now sign in with your new account."),
        Line::from(""),
    ];

    if let Some(receipt) = &elements.receipt {
        lines.push(Line::from(vec![
            Span::styled("Confirmation: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                receipt.confirmation_id.to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Created at:   ", Style::default().fg(Color::DarkGray)),
            Span::raw(receipt.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Press r to register another account",
        Style::default().fg(Color::DarkGray),
    )));

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Registration Complete ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent)),
    );

    frame.render_widget(panel, centered(area, 70, 14));
}

/// Rect of at most `width` x `height`, centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
