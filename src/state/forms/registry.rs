//! Field registry: the form's controls and their error slots

use super::field::{Field, FieldKey, FieldKind};
use std::collections::BTreeMap;
use thiserror::Error;

/// Structural problems detected while binding a form
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("required field `{0}` has no error slot `{slot}`", slot = .0.error_slot_id())]
    MissingErrorSlot(FieldKey),
    #[error("field `{0}` is registered more than once")]
    DuplicateField(FieldKey),
    #[error("field `{0}` is required by another field's rules but is not registered")]
    MissingField(FieldKey),
}

/// Text slot rendering a field's current validation message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSlot {
    pub message: String,
}

impl ErrorSlot {
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

/// Declaration of one control before the registry is built
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub field: Field,
    pub has_error_slot: bool,
}

impl FieldSpec {
    pub fn with_slot(field: Field) -> Self {
        Self {
            field,
            has_error_slot: true,
        }
    }

    pub fn without_slot(field: Field) -> Self {
        Self {
            field,
            has_error_slot: false,
        }
    }
}

/// Ordered controls plus an explicit key → error slot mapping
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    fields: Vec<Field>,
    error_slots: BTreeMap<FieldKey, ErrorSlot>,
}

impl FieldRegistry {
    /// Build the registry, failing fast on any broken binding
    pub fn build(specs: Vec<FieldSpec>) -> Result<Self, FormError> {
        let mut fields: Vec<Field> = Vec::with_capacity(specs.len());
        let mut error_slots = BTreeMap::new();

        for spec in specs {
            let key = spec.field.key;
            if fields.iter().any(|f| f.key == key) {
                return Err(FormError::DuplicateField(key));
            }
            if spec.has_error_slot {
                error_slots.insert(key, ErrorSlot::default());
            } else if spec.field.required {
                return Err(FormError::MissingErrorSlot(key));
            }
            fields.push(spec.field);
        }

        let has = |key: FieldKey| fields.iter().any(|f| f.key == key);
        if has(FieldKey::ConfirmPassword) && !has(FieldKey::Password) {
            return Err(FormError::MissingField(FieldKey::Password));
        }

        Ok(Self {
            fields,
            error_slots,
        })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: FieldKey) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn get_mut(&mut self, key: FieldKey) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.key == key)
    }

    /// Field at a display position
    pub fn field_at(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.iter_mut()
    }

    /// Keys of every required field, in display order
    pub fn required_keys(&self) -> Vec<FieldKey> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.key)
            .collect()
    }

    pub fn error_slot(&self, key: FieldKey) -> Option<&ErrorSlot> {
        self.error_slots.get(&key)
    }

    pub fn error_slot_mut(&mut self, key: FieldKey) -> Option<&mut ErrorSlot> {
        self.error_slots.get_mut(&key)
    }

    pub fn error_slots_mut(&mut self) -> impl Iterator<Item = &mut ErrorSlot> {
        self.error_slots.values_mut()
    }

    /// Raw (untrimmed) value of a field, empty when absent
    pub fn value(&self, key: FieldKey) -> &str {
        self.get(key).map(|f| f.value.as_str()).unwrap_or("")
    }
}

/// Controls of the registration form, in display order
pub fn registration_fields(experience_max: u32) -> Vec<FieldSpec> {
    let countries: Vec<String> = [
        "",
        "Canada",
        "France",
        "Germany",
        "Japan",
        "United Kingdom",
        "United States",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();

    vec![
        FieldSpec::with_slot(Field::new(
            FieldKey::FirstName,
            "First Name",
            FieldKind::Text,
            true,
        )),
        FieldSpec::with_slot(Field::new(
            FieldKey::LastName,
            "Last Name",
            FieldKind::Text,
            true,
        )),
        FieldSpec::with_slot(Field::new(FieldKey::Email, "Email", FieldKind::Email, true)),
        FieldSpec::with_slot(Field::new(
            FieldKey::Phone,
            "Phone (optional)",
            FieldKind::Tel,
            false,
        )),
        FieldSpec::with_slot(Field::new(
            FieldKey::Password,
            "Password",
            FieldKind::Password,
            true,
        )),
        FieldSpec::with_slot(Field::new(
            FieldKey::ConfirmPassword,
            "Confirm Password",
            FieldKind::Password,
            true,
        )),
        FieldSpec::with_slot(Field::new(
            FieldKey::Country,
            "Country",
            FieldKind::Select { options: countries },
            true,
        )),
        FieldSpec::without_slot(Field::new(
            FieldKey::Experience,
            "Years of Experience",
            FieldKind::Range {
                min: 0,
                max: experience_max,
            },
            false,
        )),
    ]
}
