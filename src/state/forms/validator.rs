//! Form validator: per-field errors, submit gate, strength meter and the
//! submit flow of the registration form.

use super::field::{Field, FieldKey, FieldKind};
use super::registry::{FieldRegistry, FormError};
use super::rules::{self, MIN_PASSWORD_LENGTH};
use super::strength::{calculate_password_strength, StrengthMeter, StrengthTier};
use crate::config::Theme;
use crate::state::{RegistrationPayload, SubmissionPhase, SubmissionReceipt};

/// Submit control label while idle
pub const SUBMIT_LABEL: &str = "Create Account";
/// Submit control label while the submission is in flight
pub const SUBMITTING_LABEL: &str = "Creating Account...";

/// The submission control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub enabled: bool,
    pub label: String,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            enabled: false,
            label: SUBMIT_LABEL.to_string(),
        }
    }
}

/// Everything the validator is bound to: the controls, their error slots,
/// the submit control, the strength meter, the experience output and the
/// form / success panel visibility.
#[derive(Debug, Clone)]
pub struct FormElements {
    pub registry: FieldRegistry,
    pub submit_button: SubmitButton,
    pub strength_meter: StrengthMeter,
    pub experience_output: String,
    pub form_hidden: bool,
    pub success_hidden: bool,
    /// Receipt shown on the success panel
    pub receipt: Option<SubmissionReceipt>,
    pub theme: Theme,
}

impl FormElements {
    pub fn new(registry: FieldRegistry, theme: Theme) -> Self {
        Self {
            registry,
            submit_button: SubmitButton::default(),
            strength_meter: StrengthMeter::new(&theme),
            experience_output: String::new(),
            form_hidden: false,
            success_hidden: true,
            receipt: None,
            theme,
        }
    }

    /// Restore every control's default value
    pub fn reset_values(&mut self) {
        for field in self.registry.iter_mut() {
            field.reset();
        }
    }
}

/// Reactive controller for a single form
#[derive(Debug)]
pub struct FormValidator {
    elements: FormElements,
    phase: SubmissionPhase,
}

impl FormValidator {
    /// Bind a validator to `elements`
    pub fn new(elements: FormElements) -> Result<Self, FormError> {
        if !elements.registry.contains(FieldKey::Password) {
            return Err(FormError::MissingField(FieldKey::Password));
        }
        let mut validator = Self {
            elements,
            phase: SubmissionPhase::Idle,
        };
        validator.update_experience_output();
        Ok(validator)
    }

    pub fn elements(&self) -> &FormElements {
        &self.elements
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn field(&self, key: FieldKey) -> Option<&Field> {
        self.elements.registry.get(key)
    }

    /// Apply an edit to a field and, if the value changed, process it as
    /// one input event. Edits are dropped unless the form is idle.
    pub fn edit_field(&mut self, key: FieldKey, edit: impl FnOnce(&mut Field)) -> bool {
        if self.phase != SubmissionPhase::Idle {
            return false;
        }
        let Some(field) = self.elements.registry.get_mut(key) else {
            return false;
        };
        let before = field.value.clone();
        edit(field);
        if field.value == before {
            return false;
        }
        self.handle_input(key);
        true
    }

    /// Input event: re-validate the field and recompute the submit gate
    pub fn handle_input(&mut self, key: FieldKey) {
        self.validate_field(key);
        self.update_submit_button();
        match key {
            FieldKey::Password => self.update_password_strength(),
            FieldKey::Experience => self.update_experience_output(),
            _ => {}
        }
    }

    /// Render the field's error slot; no-op for fields without one
    pub fn validate_field(&mut self, key: FieldKey) {
        if self.elements.registry.error_slot(key).is_none() {
            return;
        }

        match self.get_field_error(key) {
            Some(message) => self.show_error(key, &message),
            None => self.clear_error(key),
        }
    }

    /// Current validation message of a field, if any
    pub fn get_field_error(&self, key: FieldKey) -> Option<String> {
        let field = self.elements.registry.get(key)?;
        let value = field.value.trim();

        if field.required && value.is_empty() {
            return Some(rules::REQUIRED_MESSAGE.to_string());
        }

        if !value.is_empty() {
            let type_error = match field.kind {
                FieldKind::Email if !rules::is_valid_email(value) => Some(rules::EMAIL_MESSAGE),
                FieldKind::Tel if !rules::is_valid_phone(value) => Some(rules::PHONE_MESSAGE),
                FieldKind::Password if value.chars().count() < MIN_PASSWORD_LENGTH => {
                    Some(rules::PASSWORD_LENGTH_MESSAGE)
                }
                _ => None,
            };
            if let Some(message) = type_error {
                return Some(message.to_string());
            }
        }

        match key {
            // Trimmed confirmation against the raw password
            FieldKey::ConfirmPassword => {
                if value != self.elements.registry.value(FieldKey::Password) {
                    return Some(rules::PASSWORD_MISMATCH_MESSAGE.to_string());
                }
            }
            FieldKey::FirstName | FieldKey::LastName => {
                if !value.is_empty() && !rules::is_valid_name(value) {
                    return Some(rules::NAME_MESSAGE.to_string());
                }
            }
            _ => {}
        }

        None
    }

    /// Re-validate every required field; true if none shows an error
    pub fn validate_form(&mut self) -> bool {
        let mut is_valid = true;

        for key in self.elements.registry.required_keys() {
            self.validate_field(key);
            if self
                .elements
                .registry
                .error_slot(key)
                .is_some_and(|slot| !slot.is_empty())
            {
                is_valid = false;
            }
        }

        tracing::debug!("Form validation result: {is_valid}");
        is_valid
    }

    pub fn show_error(&mut self, key: FieldKey, message: &str) {
        let registry = &mut self.elements.registry;
        let Some(slot) = registry.error_slot_mut(key) else {
            return;
        };
        slot.message = message.to_string();
        if let Some(field) = registry.get_mut(key) {
            field.marker = true;
        }
    }

    pub fn clear_error(&mut self, key: FieldKey) {
        let registry = &mut self.elements.registry;
        let Some(slot) = registry.error_slot_mut(key) else {
            return;
        };
        slot.message.clear();
        if let Some(field) = registry.get_mut(key) {
            field.marker = false;
        }
    }

    /// Clear every error slot and marker, valid or not
    pub fn clear_all_errors(&mut self) {
        let registry = &mut self.elements.registry;
        for slot in registry.error_slots_mut() {
            slot.message.clear();
        }
        for field in registry.iter_mut() {
            field.marker = false;
        }
    }

    /// Enable submit once every required field is non-blank.
    /// Presence only: validity is checked on submit.
    pub fn update_submit_button(&mut self) {
        let all_filled = self
            .elements
            .registry
            .iter()
            .filter(|f| f.required)
            .all(|f| !f.value.trim().is_empty());
        self.elements.submit_button.enabled = all_filled;
    }

    pub fn update_password_strength(&mut self) {
        let password = self.elements.registry.value(FieldKey::Password);
        let theme = self.elements.theme;

        let tier = if password.is_empty() {
            StrengthTier::neutral(&theme)
        } else {
            let strength = calculate_password_strength(password);
            tracing::trace!(score = strength.score, "Password scored");
            StrengthTier::for_level(strength.level, &theme)
        };
        self.elements.strength_meter.set_tier(tier);
    }

    /// Mirror the experience range into its output ("N years")
    pub fn update_experience_output(&mut self) {
        if let Some(field) = self.elements.registry.get(FieldKey::Experience) {
            self.elements.experience_output = format!("{} years", field.value);
        }
    }

    /// Submit event: validate and, when valid, start the submission.
    /// Returns the payload to hand to the submission collaborator.
    pub fn submit(&mut self) -> Option<RegistrationPayload> {
        if self.phase != SubmissionPhase::Idle {
            return None;
        }
        if !self.validate_form() {
            return None;
        }
        Some(self.handle_form_submission())
    }

    /// Lock the submit control and enter the in-flight state
    pub fn handle_form_submission(&mut self) -> RegistrationPayload {
        let button = &mut self.elements.submit_button;
        button.enabled = false;
        button.label = SUBMITTING_LABEL.to_string();
        self.phase = SubmissionPhase::Submitting;
        tracing::info!("Submitting registration");
        self.payload()
    }

    /// Hide the form and reveal the success panel
    pub fn complete_submission(&mut self, receipt: SubmissionReceipt) -> bool {
        if self.phase != SubmissionPhase::Submitting {
            return false;
        }
        tracing::info!("Registration accepted: {}", receipt.confirmation_id);
        self.elements.form_hidden = true;
        self.elements.success_hidden = false;
        self.elements.receipt = Some(receipt);
        self.phase = SubmissionPhase::Submitted;
        true
    }

    /// Return to idle after the collaborator rejected the submission
    pub fn fail_submission(&mut self) {
        if self.phase != SubmissionPhase::Submitting {
            return;
        }
        self.elements.submit_button.label = SUBMIT_LABEL.to_string();
        self.phase = SubmissionPhase::Idle;
        self.update_submit_button();
    }

    fn payload(&self) -> RegistrationPayload {
        let registry = &self.elements.registry;
        let trimmed = |key| registry.value(key).trim().to_string();
        let phone = trimmed(FieldKey::Phone);

        RegistrationPayload {
            first_name: trimmed(FieldKey::FirstName),
            last_name: trimmed(FieldKey::LastName),
            email: trimmed(FieldKey::Email),
            phone: (!phone.is_empty()).then_some(phone),
            password: registry.value(FieldKey::Password).to_string(),
            country: trimmed(FieldKey::Country),
            experience_years: registry.value(FieldKey::Experience).parse().unwrap_or(0),
        }
    }
}

/// Restore the form to pristine state and replace the controller with a
/// fresh one bound to the same elements
pub fn reset_form(validator: &mut FormValidator) -> Result<(), FormError> {
    let elements = &mut validator.elements;
    elements.reset_values();
    elements.form_hidden = false;
    elements.success_hidden = true;
    elements.receipt = None;
    elements.submit_button.label = SUBMIT_LABEL.to_string();

    let mut fresh = FormValidator::new(elements.clone())?;
    fresh.clear_all_errors();
    fresh.update_submit_button();
    fresh.update_password_strength();
    *validator = fresh;
    tracing::debug!("Form reset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::registry::{registration_fields, FieldSpec};
    use crate::state::forms::rules::*;

    fn validator() -> FormValidator {
        let registry = FieldRegistry::build(registration_fields(20)).unwrap();
        FormValidator::new(FormElements::new(registry, Theme::default())).unwrap()
    }

    fn set(v: &mut FormValidator, key: FieldKey, value: &str) {
        assert!(v.edit_field(key, |f| f.value = value.to_string()));
    }

    fn fill_valid(v: &mut FormValidator) {
        set(v, FieldKey::FirstName, "Ada");
        set(v, FieldKey::LastName, "Lovelace");
        set(v, FieldKey::Email, "ada@example.com");
        set(v, FieldKey::Password, "Abcdef123!@#");
        set(v, FieldKey::ConfirmPassword, "Abcdef123!@#");
        set(v, FieldKey::Country, "United Kingdom");
    }

    fn message(v: &FormValidator, key: FieldKey) -> String {
        v.elements()
            .registry
            .error_slot(key)
            .map(|s| s.message.clone())
            .unwrap_or_default()
    }

    mod construction {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_requires_password_field() {
            let registry = FieldRegistry::build(vec![FieldSpec::with_slot(Field::new(
                FieldKey::Email,
                "Email",
                FieldKind::Email,
                true,
            ))])
            .unwrap();
            let err = FormValidator::new(FormElements::new(registry, Theme::default()))
                .unwrap_err();
            assert_eq!(err, FormError::MissingField(FieldKey::Password));
        }

        #[test]
        fn test_new_starts_pristine() {
            let v = validator();
            assert_eq!(v.phase(), SubmissionPhase::Idle);
            assert!(!v.elements().submit_button.enabled);
            assert_eq!(v.elements().submit_button.label, SUBMIT_LABEL);
            assert!(!v.elements().form_hidden);
            assert!(v.elements().success_hidden);
            assert_eq!(v.elements().experience_output, "10 years");
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        fn slot(v: &FormValidator, key: FieldKey) -> String {
            v.elements().registry.error_slot(key).unwrap().message.clone()
        }

        #[test]
        fn test_unchanged_value_is_not_an_input_event() {
            let mut v = validator();
            assert!(!v.edit_field(FieldKey::FirstName, |f| f.step_forward()));
            assert!(!v.edit_field(FieldKey::FirstName, |f| f.step_back()));
            assert!(!v.edit_field(FieldKey::LastName, |f| f.pop_char()));
            assert!(!v.edit_field(FieldKey::Country, |f| f.push_char('x')));

            for key in [FieldKey::FirstName, FieldKey::LastName, FieldKey::Country] {
                assert_eq!(slot(&v, key), "");
                assert!(!v.field(key).unwrap().marker);
            }
        }

        #[test]
        fn test_changed_value_validates() {
            let mut v = validator();
            assert!(v.edit_field(FieldKey::FirstName, |f| f.push_char('A')));
            assert_eq!(slot(&v, FieldKey::FirstName), NAME_MESSAGE);

            assert!(v.edit_field(FieldKey::FirstName, |f| f.pop_char()));
            assert_eq!(slot(&v, FieldKey::FirstName), REQUIRED_MESSAGE);
        }

        #[test]
        fn test_range_at_bound_is_not_an_input_event() {
            let mut v = validator();
            for _ in 0..30 {
                v.edit_field(FieldKey::Experience, |f| f.step_forward());
            }
            assert_eq!(v.elements().experience_output, "20 years");
            assert!(!v.edit_field(FieldKey::Experience, |f| f.step_forward()));
        }
    }

    mod field_errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_overrides_type_rules() {
            let mut v = validator();
            set(&mut v, FieldKey::Email, "   ");
            assert_eq!(
                v.get_field_error(FieldKey::Email).as_deref(),
                Some(REQUIRED_MESSAGE)
            );
            set(&mut v, FieldKey::Password, " ");
            assert_eq!(
                v.get_field_error(FieldKey::Password).as_deref(),
                Some(REQUIRED_MESSAGE)
            );
        }

        #[test]
        fn test_email_rules() {
            let mut v = validator();
            set(&mut v, FieldKey::Email, "a@b.co");
            assert_eq!(v.get_field_error(FieldKey::Email), None);
            for bad in ["a@b", "@b.com", "a@.com"] {
                set(&mut v, FieldKey::Email, bad);
                assert_eq!(
                    v.get_field_error(FieldKey::Email).as_deref(),
                    Some(EMAIL_MESSAGE),
                    "{bad}"
                );
            }
        }

        #[test]
        fn test_optional_empty_field_has_no_error() {
            let registry = FieldRegistry::build(vec![
                FieldSpec::with_slot(Field::new(FieldKey::Email, "Email", FieldKind::Email, false)),
                FieldSpec::with_slot(Field::new(
                    FieldKey::Password,
                    "Password",
                    FieldKind::Password,
                    false,
                )),
            ])
            .unwrap();
            let v = FormValidator::new(FormElements::new(registry, Theme::default())).unwrap();
            assert_eq!(v.get_field_error(FieldKey::Email), None);
        }

        #[test]
        fn test_phone_rules() {
            let mut v = validator();
            assert_eq!(v.get_field_error(FieldKey::Phone), None);
            set(&mut v, FieldKey::Phone, "(555) 123-4567");
            assert_eq!(v.get_field_error(FieldKey::Phone), None);
            set(&mut v, FieldKey::Phone, "555-123-456");
            assert_eq!(
                v.get_field_error(FieldKey::Phone).as_deref(),
                Some(PHONE_MESSAGE)
            );
            set(&mut v, FieldKey::Phone, "15551234567");
            assert_eq!(
                v.get_field_error(FieldKey::Phone).as_deref(),
                Some(PHONE_MESSAGE)
            );
        }

        #[test]
        fn test_password_length_boundary() {
            let mut v = validator();
            set(&mut v, FieldKey::Password, "abcdefg");
            assert_eq!(
                v.get_field_error(FieldKey::Password).as_deref(),
                Some(PASSWORD_LENGTH_MESSAGE)
            );
            set(&mut v, FieldKey::Password, "abcdefgh");
            assert_eq!(v.get_field_error(FieldKey::Password), None);
        }

        #[test]
        fn test_password_length_counts_chars() {
            let mut v = validator();
            set(&mut v, FieldKey::Password, "😀😀😀😀");
            assert_eq!(
                v.get_field_error(FieldKey::Password).as_deref(),
                Some(PASSWORD_LENGTH_MESSAGE)
            );
            set(&mut v, FieldKey::Password, "ééééééée");
            assert_eq!(v.get_field_error(FieldKey::Password), None);
        }

        #[test]
        fn test_confirm_password_match_and_mismatch() {
            let mut v = validator();
            set(&mut v, FieldKey::Password, "Secret123");
            set(&mut v, FieldKey::ConfirmPassword, "Secret123");
            assert_eq!(v.get_field_error(FieldKey::ConfirmPassword), None);
            set(&mut v, FieldKey::ConfirmPassword, "Secret124");
            assert_eq!(
                v.get_field_error(FieldKey::ConfirmPassword).as_deref(),
                Some(PASSWORD_MISMATCH_MESSAGE)
            );
        }

        #[test]
        fn test_confirm_password_compares_trimmed_against_raw() {
            let mut v = validator();
            set(&mut v, FieldKey::Password, "Secret123 ");
            set(&mut v, FieldKey::ConfirmPassword, "Secret123 ");
            assert_eq!(
                v.get_field_error(FieldKey::ConfirmPassword).as_deref(),
                Some(PASSWORD_MISMATCH_MESSAGE)
            );
        }

        #[test]
        fn test_short_confirmation_reports_length_first() {
            let mut v = validator();
            set(&mut v, FieldKey::Password, "Secret123");
            set(&mut v, FieldKey::ConfirmPassword, "Sec");
            assert_eq!(
                v.get_field_error(FieldKey::ConfirmPassword).as_deref(),
                Some(PASSWORD_LENGTH_MESSAGE)
            );
        }

        #[test]
        fn test_name_rules() {
            let mut v = validator();
            set(&mut v, FieldKey::FirstName, "José");
            assert_eq!(v.get_field_error(FieldKey::FirstName), None);
            set(&mut v, FieldKey::LastName, "X");
            assert_eq!(
                v.get_field_error(FieldKey::LastName).as_deref(),
                Some(NAME_MESSAGE)
            );
        }

        #[test]
        fn test_unknown_field_has_no_error() {
            let registry = FieldRegistry::build(vec![FieldSpec::with_slot(Field::new(
                FieldKey::Password,
                "Password",
                FieldKind::Password,
                true,
            ))])
            .unwrap();
            let v = FormValidator::new(FormElements::new(registry, Theme::default())).unwrap();
            assert_eq!(v.get_field_error(FieldKey::Email), None);
        }
    }

    mod error_display {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_marker_tracks_message() {
            let mut v = validator();
            set(&mut v, FieldKey::Email, "nope");
            assert_eq!(message(&v, FieldKey::Email), EMAIL_MESSAGE);
            assert!(v.field(FieldKey::Email).unwrap().marker);

            set(&mut v, FieldKey::Email, "ok@example.com");
            assert_eq!(message(&v, FieldKey::Email), "");
            assert!(!v.field(FieldKey::Email).unwrap().marker);
        }

        #[test]
        fn test_show_and_clear_are_idempotent() {
            let mut v = validator();
            v.show_error(FieldKey::Email, "bad");
            v.show_error(FieldKey::Email, "bad");
            assert_eq!(message(&v, FieldKey::Email), "bad");
            v.clear_error(FieldKey::Email);
            v.clear_error(FieldKey::Email);
            assert_eq!(message(&v, FieldKey::Email), "");
            assert!(!v.field(FieldKey::Email).unwrap().marker);
        }

        #[test]
        fn test_field_without_slot_is_skipped() {
            let mut v = validator();
            v.validate_field(FieldKey::Experience);
            v.show_error(FieldKey::Experience, "never shown");
            assert!(!v.field(FieldKey::Experience).unwrap().marker);
        }

        #[test]
        fn test_clear_all_errors() {
            let mut v = validator();
            assert!(!v.validate_form());
            assert_eq!(message(&v, FieldKey::FirstName), REQUIRED_MESSAGE);
            v.clear_all_errors();
            assert!(v.elements().registry.iter().all(|f| !f.marker));
            for key in v.elements().registry.required_keys() {
                assert_eq!(message(&v, key), "");
            }
        }
    }

    mod validate_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_is_invalid_and_renders_all_slots() {
            let mut v = validator();
            assert!(!v.validate_form());
            for key in v.elements().registry.required_keys() {
                assert_eq!(message(&v, key), REQUIRED_MESSAGE);
            }
        }

        #[test]
        fn test_valid_form() {
            let mut v = validator();
            fill_valid(&mut v);
            assert!(v.validate_form());
        }

        #[test]
        fn test_optional_fields_do_not_block() {
            let mut v = validator();
            fill_valid(&mut v);
            set(&mut v, FieldKey::Phone, "123");
            assert_eq!(message(&v, FieldKey::Phone), PHONE_MESSAGE);
            assert!(v.validate_form());
        }
    }

    mod submit_gate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_disabled_while_required_blank() {
            let mut v = validator();
            fill_valid(&mut v);
            set(&mut v, FieldKey::Email, " ");
            assert!(!v.elements().submit_button.enabled);
        }

        #[test]
        fn test_enabled_when_filled_even_if_invalid() {
            let mut v = validator();
            fill_valid(&mut v);
            set(&mut v, FieldKey::Email, "not-an-email");
            assert!(v.elements().submit_button.enabled);
            assert_eq!(message(&v, FieldKey::Email), EMAIL_MESSAGE);
        }
    }

    mod strength_meter {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_password_input_updates_meter() {
            let mut v = validator();
            set(&mut v, FieldKey::Password, "abc");
            assert_eq!(v.elements().strength_meter.tier.label, "Weak password");
            set(&mut v, FieldKey::Password, "abcABC12");
            assert_eq!(v.elements().strength_meter.tier.label, "Medium password");
            set(&mut v, FieldKey::Password, "Abcdef123!@#");
            assert_eq!(v.elements().strength_meter.tier.label, "Strong password");
            assert_eq!(v.elements().strength_meter.tier.width_percent, 100);
        }

        #[test]
        fn test_empty_password_resets_meter() {
            let mut v = validator();
            set(&mut v, FieldKey::Password, "Abcdef123!@#");
            set(&mut v, FieldKey::Password, "");
            let theme = Theme::default();
            assert_eq!(v.elements().strength_meter.tier, StrengthTier::neutral(&theme));
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_submit_stays_idle() {
            let mut v = validator();
            fill_valid(&mut v);
            set(&mut v, FieldKey::ConfirmPassword, "Different123!");
            assert!(v.submit().is_none());
            assert_eq!(v.phase(), SubmissionPhase::Idle);
            assert_eq!(message(&v, FieldKey::ConfirmPassword), PASSWORD_MISMATCH_MESSAGE);
        }

        #[test]
        fn test_valid_submit_locks_button() {
            let mut v = validator();
            fill_valid(&mut v);
            set(&mut v, FieldKey::Phone, " 555 123 4567 ");
            let payload = v.submit().unwrap();
            assert_eq!(payload.first_name, "Ada");
            assert_eq!(payload.phone.as_deref(), Some("555 123 4567"));
            assert_eq!(payload.experience_years, 10);
            assert_eq!(v.phase(), SubmissionPhase::Submitting);
            assert!(!v.elements().submit_button.enabled);
            assert_eq!(v.elements().submit_button.label, SUBMITTING_LABEL);
        }

        #[test]
        fn test_edits_ignored_while_submitting() {
            let mut v = validator();
            fill_valid(&mut v);
            v.submit().unwrap();
            assert!(!v.edit_field(FieldKey::FirstName, |f| f.push_char('x')));
            assert_eq!(v.field(FieldKey::FirstName).unwrap().value, "Ada");
            assert!(!v.elements().submit_button.enabled);
            assert!(v.submit().is_none());
        }

        #[test]
        fn test_complete_shows_success_panel() {
            let mut v = validator();
            fill_valid(&mut v);
            v.submit().unwrap();
            assert!(v.complete_submission(SubmissionReceipt::new()));
            assert_eq!(v.phase(), SubmissionPhase::Submitted);
            assert!(v.elements().form_hidden);
            assert!(!v.elements().success_hidden);
            assert!(v.elements().receipt.is_some());
        }

        #[test]
        fn test_complete_without_submission_is_ignored() {
            let mut v = validator();
            assert!(!v.complete_submission(SubmissionReceipt::new()));
            assert!(!v.elements().form_hidden);
        }

        #[test]
        fn test_failure_returns_to_idle() {
            let mut v = validator();
            fill_valid(&mut v);
            v.submit().unwrap();
            v.fail_submission();
            assert_eq!(v.phase(), SubmissionPhase::Idle);
            assert!(v.elements().submit_button.enabled);
            assert_eq!(v.elements().submit_button.label, SUBMIT_LABEL);
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_restores_pristine_state() {
            let mut v = validator();
            fill_valid(&mut v);
            set(&mut v, FieldKey::Experience, "15");
            v.submit().unwrap();
            v.complete_submission(SubmissionReceipt::new());

            reset_form(&mut v).unwrap();
            assert_eq!(v.phase(), SubmissionPhase::Idle);
            assert!(!v.elements().form_hidden);
            assert!(v.elements().success_hidden);
            assert!(v.elements().receipt.is_none());
            assert!(!v.elements().submit_button.enabled);
            assert_eq!(v.elements().submit_button.label, SUBMIT_LABEL);
            assert!(v.elements().registry.iter().all(|f| !f.marker));
            assert_eq!(v.field(FieldKey::FirstName).unwrap().value, "");
            assert_eq!(v.elements().experience_output, "10 years");
            assert_eq!(v.elements().strength_meter.tier.label, "Password strength");
        }

        #[test]
        fn test_reset_clears_visible_errors() {
            let mut v = validator();
            assert!(!v.validate_form());
            reset_form(&mut v).unwrap();
            for key in v.elements().registry.required_keys() {
                assert_eq!(message(&v, key), "");
            }
            assert!(!v.elements().submit_button.enabled);
        }
    }
}
