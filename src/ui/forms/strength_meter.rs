//! Password strength meter rendering

use crate::state::StrengthMeter;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

/// Rows taken by the meter (bar + caption)
pub const METER_HEIGHT: u16 = 2;

/// Draw the bar at its current (possibly mid-transition) width and the caption
pub fn draw(frame: &mut Frame, area: Rect, meter: &StrengthMeter) {
    let inner_width = area.width.saturating_sub(2);
    let percent = meter.displayed_percent(Instant::now());
    let filled = bar_cells(inner_width, percent);
    let empty = inner_width.saturating_sub(filled);

    let bar = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            "█".repeat(filled as usize),
            Style::default().fg(meter.tier.color),
        ),
        Span::styled("░".repeat(empty as usize), Style::default().fg(Color::DarkGray)),
    ]);
    let caption = Line::from(Span::styled(
        format!(" {}", meter.tier.label),
        Style::default().fg(meter.tier.color),
    ));

    frame.render_widget(Paragraph::new(vec![bar, caption]), area);
}

/// Number of filled cells for `percent` of `width`
fn bar_cells(width: u16, percent: u16) -> u16 {
    ((width as u32 * percent.min(100) as u32) / 100) as u16
}
