//! Registration form rendering

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use super::strength_meter::{self, METER_HEIGHT};
use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{FieldKey, FormButton, SubmitButton};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Fields of the left column, in display order
const LEFT_COLUMN: &[FieldKey] = &[
    FieldKey::FirstName,
    FieldKey::LastName,
    FieldKey::Email,
    FieldKey::Phone,
];

/// Fields of the right column; the strength meter follows the password
const RIGHT_COLUMN: &[FieldKey] = &[
    FieldKey::Password,
    FieldKey::ConfirmPassword,
    FieldKey::Country,
    FieldKey::Experience,
];

/// Draw the registration form with its action panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(22), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the form fields in two columns
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form_focused = !app.state.is_buttons_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Create Your Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(inner);

    draw_column(frame, columns[0], app, LEFT_COLUMN);
    draw_column(frame, columns[1], app, RIGHT_COLUMN);
}

fn draw_column(frame: &mut Frame, area: Rect, app: &App, keys: &[FieldKey]) {
    let elements = app.state.validator.elements();
    let active = app.state.active_field_key();

    let mut constraints = Vec::new();
    for key in keys {
        constraints.push(Constraint::Length(FIELD_HEIGHT));
        if *key == FieldKey::Password {
            constraints.push(Constraint::Length(METER_HEIGHT));
        }
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut row = 0;
    for key in keys {
        let Some(field) = app.state.validator.field(*key) else {
            continue;
        };
        draw_field(
            frame,
            chunks[row],
            field,
            elements.registry.error_slot(*key),
            active == Some(*key),
            &elements.theme,
        );
        if *key == FieldKey::Experience && chunks[row].height >= FIELD_HEIGHT {
            // Output sits in the (unused) error slot line
            let slot_line = Rect {
                y: chunks[row].y + 3,
                height: 1,
                ..chunks[row]
            };
            draw_help_text(frame, slot_line, &format!(" {}", elements.experience_output));
        }
        row += 1;

        if *key == FieldKey::Password {
            strength_meter::draw(frame, chunks[row], &elements.strength_meter);
            row += 1;
        }
    }
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.is_buttons_row_active();
    let selected = app.state.selected_button;
    let submit_button: &SubmitButton = &app.state.validator.elements().submit_button;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Length(1),
            Constraint::Length(1), // Submit shortcut
            Constraint::Length(1), // Reset shortcut
            Constraint::Min(0),
        ])
        .split(inner_area);

    for (idx, button) in FormButton::ALL.iter().enumerate() {
        let (label, enabled, color) = match button {
            FormButton::Submit => (
                submit_button.label.as_str(),
                submit_button.enabled,
                Color::Green,
            ),
            FormButton::Reset => ("Reset", true, Color::Gray),
        };
        render_action_button(
            frame,
            chunks[idx],
            label,
            is_focused && selected == *button,
            enabled,
            Some(color),
        );
    }

    draw_help_text(frame, chunks[3], &format!("{SUBMIT_SHORTCUT}: submit"));
    draw_help_text(frame, chunks[4], &format!("{RESET_SHORTCUT}: reset"));
}
