//! Form field value objects

use serde::Serialize;
use std::fmt;

/// Stable identity of every control on the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Country,
    Experience,
}

impl FieldKey {
    /// Element id of the control
    pub fn id(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Country => "country",
            Self::Experience => "experience",
        }
    }

    /// Id of the slot rendering this field's message (`${id}Error`)
    pub fn error_slot_id(&self) -> String {
        format!("{}Error", self.id())
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Input type of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Password,
    /// First option is the empty placeholder
    Select { options: Vec<String> },
    Range { min: u32, max: u32 },
}

/// A single form control with its configuration and live value
#[derive(Debug, Clone)]
pub struct Field {
    pub key: FieldKey,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    /// Value restored on reset
    pub default_value: String,
    /// The "error" visual marker
    pub marker: bool,
}

impl Field {
    pub fn new(key: FieldKey, label: &str, kind: FieldKind, required: bool) -> Self {
        let default_value = match &kind {
            FieldKind::Range { min, max } => ((min + max) / 2).to_string(),
            _ => String::new(),
        };
        Self {
            key,
            label: label.to_string(),
            kind,
            required,
            value: default_value.clone(),
            default_value,
            marker: false,
        }
    }

    /// Whether the field accepts typed characters
    pub fn is_text_input(&self) -> bool {
        matches!(
            self.kind,
            FieldKind::Text | FieldKind::Email | FieldKind::Tel | FieldKind::Password
        )
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if self.is_text_input() {
            self.value.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if self.is_text_input() {
            self.value.pop();
        }
    }

    /// Move to the next option or increment the range
    pub fn step_forward(&mut self) {
        match &self.kind {
            FieldKind::Select { options } if !options.is_empty() => {
                let idx = options.iter().position(|o| *o == self.value).unwrap_or(0);
                self.value = options[(idx + 1) % options.len()].clone();
            }
            FieldKind::Range { min, max } => {
                let current = self.value.parse::<u32>().unwrap_or(*min);
                self.value = (current + 1).clamp(*min, *max).to_string();
            }
            _ => {}
        }
    }

    /// Move to the previous option or decrement the range
    pub fn step_back(&mut self) {
        match &self.kind {
            FieldKind::Select { options } if !options.is_empty() => {
                let idx = options.iter().position(|o| *o == self.value).unwrap_or(0);
                let prev = if idx == 0 { options.len() - 1 } else { idx - 1 };
                self.value = options[prev].clone();
            }
            FieldKind::Range { min, max } => {
                let current = self.value.parse::<u32>().unwrap_or(*min);
                self.value = current.saturating_sub(1).clamp(*min, *max).to_string();
            }
            _ => {}
        }
    }

    /// Restore the default value and drop the marker
    pub fn reset(&mut self) {
        self.value = self.default_value.clone();
        self.marker = false;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.kind {
            FieldKind::Password => "•".repeat(self.value.chars().count()),
            FieldKind::Select { .. } if self.value.is_empty() => "Select...".to_string(),
            _ => self.value.clone(),
        }
    }
}
