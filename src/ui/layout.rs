//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{QUIT_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::SubmissionPhase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout: content plus a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Submission phase indicator
    let phase = match app.state.validator.phase() {
        SubmissionPhase::Idle => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
        SubmissionPhase::Submitting => Span::styled(" ◐ ", Style::default().fg(Color::Yellow)),
        SubmissionPhase::Submitted => Span::styled(" ● ", Style::default().fg(Color::Green)),
    };
    spans.push(phase);

    // View-specific hints
    spans.push(Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::Black),
    ));

    // Feedback message
    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = format!(" {QUIT_SHORTCUT}:quit ");
    let quit_width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_width),
        width: quit_width.min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    if app.state.current_error().is_some() {
        "Enter/Esc:dismiss".to_string()
    } else if app.state.showing_success() {
        "y:copy id  r:register another  q:quit".to_string()
    } else if app.state.is_buttons_row_active() {
        format!("←/→:choose  Enter:press  Tab:next  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset")
    } else {
        format!("Tab/↑↓:move  ←/→:choose  Enter:submit  {RESET_SHORTCUT}:reset  Esc:quit")
    }
}
