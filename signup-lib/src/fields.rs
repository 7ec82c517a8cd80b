//! Field identities for the signup form.

/// The six form fields, in their fixed evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Phone,
    Terms,
}

impl FieldId {
    /// All fields, in submit evaluation order.
    pub const ALL: [FieldId; 6] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::Phone,
        FieldId::Terms,
    ];

    /// Key under which this field's value is persisted.
    pub fn storage_key(self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
            FieldId::Phone => "phone",
            FieldId::Terms => "terms",
        }
    }

    /// Secret fields are never persisted or rehydrated.
    pub fn is_secret(self) -> bool {
        matches!(self, FieldId::Password | FieldId::ConfirmPassword)
    }

    /// Whether the field holds free text (everything except the checkbox).
    pub fn is_text(self) -> bool {
        !matches!(self, FieldId::Terms)
    }

    /// Display label for the field group.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::FullName => "Full name",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
            FieldId::ConfirmPassword => "Confirm password",
            FieldId::Phone => "Phone",
            FieldId::Terms => "I accept the terms and conditions",
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.storage_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_are_exactly_the_password_fields() {
        let secret: Vec<_> = FieldId::ALL.into_iter().filter(|f| f.is_secret()).collect();
        assert_eq!(secret, vec![FieldId::Password, FieldId::ConfirmPassword]);
    }

    #[test]
    fn storage_keys_are_unique() {
        let mut keys: Vec<_> = FieldId::ALL.iter().map(|f| f.storage_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 6);
    }
}
