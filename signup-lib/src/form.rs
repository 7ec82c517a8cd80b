//! The registration form state machine.

use crate::fields::FieldId;
use crate::result::ValidationResult;
use crate::rules;
use crate::validator::Validator;

/// As-you-type feedback for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// The field currently satisfies its rule.
    Valid,
    /// The field fails its rule; show this message.
    Invalid(&'static str),
    /// No feedback at this stage (empty value whose "required" check is
    /// deferred to submit).
    None,
}

/// Current values of the six form fields.
///
/// The form is a plain value holder: rules live in [`crate::rules`], and
/// the display of errors is entirely the front-end's concern. Submit
/// validation runs all six rules in fixed order without short-circuit.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    full_name: String,
    email: String,
    password: String,
    confirm_password: String,
    phone: String,
    terms: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a text field's current value. `Terms` has no text value.
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
            FieldId::Phone => &self.phone,
            FieldId::Terms => "",
        }
    }

    /// Set a text field's value. Setting `Terms` here is a no-op; use
    /// [`set_terms`](Self::set_terms).
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldId::FullName => self.full_name = value,
            FieldId::Email => self.email = value,
            FieldId::Password => self.password = value,
            FieldId::ConfirmPassword => self.confirm_password = value,
            FieldId::Phone => self.phone = value,
            FieldId::Terms => log::warn!("set_value called for terms checkbox"),
        }
    }

    pub fn terms(&self) -> bool {
        self.terms
    }

    pub fn set_terms(&mut self, checked: bool) {
        self.terms = checked;
    }

    /// Run the full submit-time rule set.
    ///
    /// All six rules always run; every failing field is reported so the
    /// front-end can show all errors simultaneously.
    pub fn validate(&self) -> ValidationResult {
        let password = self.password.clone();
        let result = Validator::new()
            .field(self.full_name.clone(), FieldId::FullName)
            .rule(|v: &String| rules::full_name_ok(v), rules::MSG_FULL_NAME)
            .field(self.email.clone(), FieldId::Email)
            .required(rules::MSG_EMAIL_REQUIRED)
            .rule(|v: &String| rules::email_ok(v), rules::MSG_EMAIL_INVALID)
            .field(self.password.clone(), FieldId::Password)
            .required(rules::MSG_PASSWORD_REQUIRED)
            .rule(|v: &String| rules::password_ok(v), rules::MSG_PASSWORD_WEAK)
            .field(self.confirm_password.clone(), FieldId::ConfirmPassword)
            .rule(
                move |v: &String| rules::confirm_ok(v, &password),
                rules::MSG_CONFIRM_MISMATCH,
            )
            .field(self.phone.clone(), FieldId::Phone)
            .required(rules::MSG_PHONE_REQUIRED)
            .rule(|v: &String| rules::phone_ok(v), rules::MSG_PHONE_INVALID)
            .field(self.terms, FieldId::Terms)
            .checked(rules::MSG_TERMS)
            .validate();

        log::debug!(
            "submit validation: {}",
            if result.is_valid() { "accepted" } else { "rejected" }
        );
        result
    }

    /// Run the as-you-type rule for a single field.
    ///
    /// Same predicates as [`validate`](Self::validate); the only
    /// divergence is that empty phone and empty password-type fields get
    /// no feedback, their "required" check being deferred to submit.
    pub fn live_feedback(&self, field: FieldId) -> Feedback {
        match field {
            FieldId::FullName => {
                if rules::full_name_ok(&self.full_name) {
                    Feedback::Valid
                } else {
                    Feedback::Invalid(rules::MSG_FULL_NAME)
                }
            }
            FieldId::Email => {
                if !self.email.contains('@') {
                    Feedback::Invalid(rules::MSG_EMAIL_MISSING_AT)
                } else if !rules::email_ok(&self.email) {
                    Feedback::Invalid(rules::MSG_EMAIL_INVALID)
                } else {
                    Feedback::Valid
                }
            }
            FieldId::Password => {
                if self.password.is_empty() {
                    Feedback::None
                } else if rules::password_ok(&self.password) {
                    Feedback::Valid
                } else {
                    Feedback::Invalid(rules::MSG_PASSWORD_WEAK)
                }
            }
            FieldId::ConfirmPassword => {
                if self.confirm_password.is_empty() {
                    Feedback::None
                } else if rules::confirm_ok(&self.confirm_password, &self.password) {
                    Feedback::Valid
                } else {
                    Feedback::Invalid(rules::MSG_CONFIRM_MISMATCH)
                }
            }
            FieldId::Phone => {
                if self.phone.trim().is_empty() {
                    Feedback::None
                } else if rules::phone_ok(&self.phone) {
                    Feedback::Valid
                } else {
                    Feedback::Invalid(rules::MSG_PHONE_INVALID)
                }
            }
            FieldId::Terms => Feedback::None,
        }
    }

    /// Reset every field to empty/unchecked (post-submit reset).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set_value(FieldId::FullName, "Ada Lovelace");
        form.set_value(FieldId::Email, "ada@example.com");
        form.set_value(FieldId::Password, "Abcdefg1!");
        form.set_value(FieldId::ConfirmPassword, "Abcdefg1!");
        form.set_value(FieldId::Phone, "0123456789");
        form.set_terms(true);
        form
    }

    #[test]
    fn fully_valid_form_passes() {
        assert!(valid_form().validate().is_valid());
    }

    #[test]
    fn short_full_name_blocks_submit_with_exact_message() {
        for name in ["", "A", "Al", "  Al  "] {
            let mut form = valid_form();
            form.set_value(FieldId::FullName, name);
            let result = form.validate();
            assert_eq!(
                result.error_for(FieldId::FullName),
                Some(rules::MSG_FULL_NAME),
                "name {name:?}"
            );
        }
    }

    #[test]
    fn mismatched_confirmation_always_reported() {
        let mut form = valid_form();
        form.set_value(FieldId::Password, "Abcdefg1!");
        form.set_value(FieldId::ConfirmPassword, "Abcdefg2!");
        let result = form.validate();
        assert_eq!(
            result.error_for(FieldId::ConfirmPassword),
            Some(rules::MSG_CONFIRM_MISMATCH)
        );
    }

    #[test]
    fn unchecked_terms_is_the_only_missing_piece() {
        let mut form = valid_form();
        form.set_terms(false);
        let result = form.validate();
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.error_for(FieldId::Terms), Some(rules::MSG_TERMS));

        form.set_terms(true);
        assert!(form.validate().is_valid());
    }

    #[test]
    fn all_errors_surface_simultaneously() {
        // Empty confirm equals empty password, so that one rule passes;
        // everything else fails at once.
        let form = RegistrationForm::new();
        let result = form.validate();
        let fields: Vec<_> = result.errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                FieldId::FullName,
                FieldId::Email,
                FieldId::Password,
                FieldId::Phone,
                FieldId::Terms,
            ]
        );
    }

    #[test]
    fn live_email_distinguishes_missing_at() {
        let mut form = RegistrationForm::new();
        form.set_value(FieldId::Email, "ada.example.com");
        assert_eq!(
            form.live_feedback(FieldId::Email),
            Feedback::Invalid(rules::MSG_EMAIL_MISSING_AT)
        );

        form.set_value(FieldId::Email, "ada@examplecom");
        assert_eq!(
            form.live_feedback(FieldId::Email),
            Feedback::Invalid(rules::MSG_EMAIL_INVALID)
        );

        form.set_value(FieldId::Email, "ada@example.com");
        assert_eq!(form.live_feedback(FieldId::Email), Feedback::Valid);
    }

    #[test]
    fn live_phone_defers_required_to_submit() {
        let mut form = RegistrationForm::new();
        assert_eq!(form.live_feedback(FieldId::Phone), Feedback::None);

        form.set_value(FieldId::Phone, "012");
        assert_eq!(
            form.live_feedback(FieldId::Phone),
            Feedback::Invalid(rules::MSG_PHONE_INVALID)
        );

        form.set_value(FieldId::Phone, "0123456789");
        assert_eq!(form.live_feedback(FieldId::Phone), Feedback::Valid);
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = valid_form();
        form.reset();
        for field in FieldId::ALL {
            assert_eq!(form.value(field), "");
        }
        assert!(!form.terms());
    }
}
