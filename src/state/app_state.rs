//! Application state definitions

use super::forms::{registration_fields, FieldKey, FieldRegistry, FormElements, FormValidator};
use crate::config::TuiConfig;
use anyhow::Result;
use std::collections::VecDeque;
use std::time::Instant;

/// Buttons on the form's action row, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Reset,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Submit, FormButton::Reset];

    pub fn toggle(&self) -> Self {
        match self {
            Self::Submit => Self::Reset,
            Self::Reset => Self::Submit,
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Controller bound to the registration form
    pub validator: FormValidator,
    /// Focused row: field index, or `field_count()` for the buttons row
    pub active_form_field: usize,
    pub selected_button: FormButton,
    /// Errors waiting to be shown in the error dialog
    pub error_queue: VecDeque<String>,
    /// Generation of the submission whose outcome is still accepted
    pub submission_generation: u64,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl AppState {
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let registry = FieldRegistry::build(registration_fields(config.experience_max()))?;
        let validator = FormValidator::new(FormElements::new(registry, config.theme()))?;
        Ok(Self {
            validator,
            active_form_field: 0,
            selected_button: FormButton::default(),
            error_queue: VecDeque::new(),
            submission_generation: 0,
            last_ctrl_c: None,
        })
    }

    pub fn field_count(&self) -> usize {
        self.validator.elements().registry.len()
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_form_field == self.field_count()
    }

    /// Key of the focused field, None on the buttons row
    pub fn active_field_key(&self) -> Option<FieldKey> {
        self.validator
            .elements()
            .registry
            .field_at(self.active_form_field)
            .map(|f| f.key)
    }

    /// Move focus to the next row (wraps around)
    pub fn next_form_field(&mut self) {
        let rows = self.field_count() + 1;
        self.active_form_field = (self.active_form_field + 1) % rows;
    }

    /// Move focus to the previous row (wraps around)
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = self.field_count();
        } else {
            self.active_form_field -= 1;
        }
    }

    /// Whether the success panel replaced the form
    pub fn showing_success(&self) -> bool {
        self.validator.elements().form_hidden
    }

    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push_back(message);
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
