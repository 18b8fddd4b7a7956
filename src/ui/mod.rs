//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod success_panel;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    if app.state.showing_success() {
        success_panel::draw(frame, main_area, app);
    } else {
        forms::draw_registration(frame, main_area, app);
    }

    layout::draw_status_bar(frame, status_area, app);

    // Error dialog overlays everything
    if let Some(message) = app.state.current_error() {
        let color = app.state.validator.elements().theme.error_color;
        components::render_error_dialog(frame, message, color);
    }
}
