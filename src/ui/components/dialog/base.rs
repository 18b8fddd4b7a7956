//! Centered overlay used by the form's dialogs

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Horizontal padding inside the border (both sides)
const PADDING: u16 = 4;

/// What a dialog shows
pub struct DialogConfig<'a> {
    pub title: &'a str,
    /// Title and border color
    pub accent: Color,
    /// Message content, may contain `\n`
    pub message: &'a str,
    /// Hint line shown below the message
    pub hint: Vec<Span<'a>>,
    pub max_width: u16,
}

/// Render a dialog centered over the whole frame
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let max_width = config.max_width.min(area.width);
    let wrapped = wrap_text(
        config.message,
        max_width.saturating_sub(PADDING + 2) as usize,
    );

    let content_width = wrapped
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let width = (content_width + PADDING + 2).min(max_width);

    // title + blank + message + blank + hint + borders
    let height = (wrapped.len() as u16 + 6).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped.into_iter().map(Line::from));
    content.push(Line::from(""));
    content.push(Line::from(config.hint));

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.accent)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Greedy word wrap; blank lines in `text` are kept
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}
