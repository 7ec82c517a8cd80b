//! Validator builder for fluent validation API.

use crate::fields::FieldId;
use crate::result::{FieldError, ValidationResult};

/// Type alias for validation rule closures.
type Rule<V> = Box<dyn Fn(&V) -> Result<(), String>>;

/// Builder for validating multiple form fields.
///
/// Every field added to the builder is evaluated — failures in one field
/// never short-circuit the rest, so all applicable errors surface at
/// once. Within a single field the first failing rule supplies the
/// message.
///
/// # Example
///
/// ```
/// use signup_lib::{FieldId, Validator};
///
/// let result = Validator::new()
///     .field("Ada".to_string(), FieldId::FullName)
///         .min_length(3, "Full name must be at least 3 characters")
///     .field(true, FieldId::Terms)
///         .checked("You must accept the terms and conditions")
///     .validate();
///
/// assert!(result.is_valid());
/// ```
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add a field to validate.
    pub fn field<V>(self, value: V, field: FieldId) -> FieldBuilder<V> {
        FieldBuilder {
            validator: self,
            value,
            field,
            rules: Vec::new(),
        }
    }

    /// Collect the outcome of all evaluated fields.
    pub fn validate(self) -> ValidationResult {
        if self.errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(self.errors)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder<V> {
    validator: Validator,
    value: V,
    field: FieldId,
    rules: Vec<Rule<V>>,
}

impl<V> FieldBuilder<V> {
    /// Add a custom validation rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&V) -> bool + 'static,
    {
        let msg = msg.into();
        self.rules
            .push(Box::new(move |v| if f(v) { Ok(()) } else { Err(msg.clone()) }));
        self
    }

    /// Continue to the next field.
    pub fn field<V2>(self, value: V2, field: FieldId) -> FieldBuilder<V2> {
        let validator = self.finalize();
        validator.field(value, field)
    }

    /// Finalize and collect the outcome of all evaluated fields.
    pub fn validate(self) -> ValidationResult {
        self.finalize().validate()
    }

    /// Run this field's rules and record its first error.
    fn finalize(self) -> Validator {
        let mut validator = self.validator;
        for rule in &self.rules {
            if let Err(message) = rule(&self.value) {
                validator.errors.push(FieldError {
                    field: self.field,
                    message,
                });
                break;
            }
        }
        validator
    }
}

// Built-in rules for String values
impl FieldBuilder<String> {
    /// Require the field to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters) after trimming.
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(move |v| v.trim().chars().count() >= min, msg)
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        let re = regex::Regex::new(pattern).expect("Invalid regex pattern");
        self.rule(move |v| re.is_match(v.trim()), msg)
    }

    /// Require the value to equal another value, post-trim.
    pub fn equals(self, other: String, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(move |v| v.trim() == other.trim(), msg)
    }
}

// Built-in rules for bool values
impl FieldBuilder<bool> {
    /// Require the checkbox to be checked.
    pub fn checked(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(|&v| v, msg)
    }
}
