//! Per-field validation rules as pure predicates.
//!
//! Each field has exactly one predicate, shared by the submit validator
//! and the live as-you-type feedback. The two sites differ only in how
//! they treat empty values (live defers "required" checks to submit).

use std::sync::LazyLock;

use regex::Regex;

/// One or more non-space/non-`@` chars, `@`, same, `.`, same.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Digits only, at least ten of them.
pub const PHONE_PATTERN: &str = r"^\d{10,}$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("Invalid regex pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("Invalid regex pattern"));

pub const MSG_FULL_NAME: &str = "Full name must be at least 3 characters";
pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_EMAIL_MISSING_AT: &str = "Email must include @";
pub const MSG_EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required";
pub const MSG_PASSWORD_WEAK: &str =
    "Password must be at least 8 characters with an uppercase letter, a lowercase letter, and a number";
pub const MSG_CONFIRM_MISMATCH: &str = "Passwords do not match";
pub const MSG_PHONE_REQUIRED: &str = "Phone number is required";
pub const MSG_PHONE_INVALID: &str = "Phone number must be at least 10 digits";
pub const MSG_TERMS: &str = "You must accept the terms and conditions";

/// Trimmed name has at least three characters.
pub fn full_name_ok(value: &str) -> bool {
    value.trim().chars().count() >= 3
}

/// Matches [`EMAIL_PATTERN`] after trimming.
pub fn email_ok(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// At least 8 characters with one ASCII lowercase, one uppercase and one
/// digit. Same acceptance set as `^(?=.*[a-z])(?=.*[A-Z])(?=.*\d).{8,}$`,
/// written as character scans since the regex crate has no lookahead.
pub fn password_ok(value: &str) -> bool {
    let value = value.trim();
    value.chars().count() >= 8
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

/// Confirmation equals the password exactly, post-trim.
pub fn confirm_ok(confirm: &str, password: &str) -> bool {
    confirm.trim() == password.trim()
}

/// Matches [`PHONE_PATTERN`] after trimming.
pub fn phone_ok(value: &str) -> bool {
    PHONE_RE.is_match(value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_needs_three_chars() {
        assert!(!full_name_ok(""));
        assert!(!full_name_ok("Al"));
        assert!(!full_name_ok("  A  "));
        assert!(full_name_ok("Ada"));
        assert!(full_name_ok("  Ada Lovelace  "));
    }

    #[test]
    fn email_pattern_rfc_light() {
        assert!(email_ok("user@example.com"));
        assert!(email_ok("a@b.c"));
        assert!(!email_ok("userexample.com"));
        assert!(!email_ok("user@examplecom"));
        assert!(!email_ok("user @example.com"));
        assert!(!email_ok("user@exam ple.com"));
        assert!(!email_ok(""));
        // The pattern is deliberately RFC-light: a dot anywhere after
        // the @ is enough.
        assert!(!email_ok("user@@x.y"));
        assert!(email_ok("a@b.c.d"));
    }

    #[test]
    fn password_strength() {
        assert!(password_ok("Abcdefgh1"));
        assert!(!password_ok("abcdefgh"));
        assert!(!password_ok("ABCDEFGH1"));
        assert!(!password_ok("Abcdef1")); // 7 chars
        assert!(!password_ok("Abcdefghi")); // no digit
    }

    #[test]
    fn password_no_symbol_required() {
        // No special character is enforced, only length + case + digit.
        assert!(password_ok("Abcdefg1"));
        assert!(password_ok("Abcdefg1!"));
    }

    #[test]
    fn confirm_compares_post_trim() {
        assert!(confirm_ok("Secret1A", "Secret1A"));
        assert!(confirm_ok(" Secret1A ", "Secret1A"));
        assert!(!confirm_ok("Secret1A", "Secret2A"));
    }

    #[test]
    fn phone_digits_only_ten_plus() {
        assert!(phone_ok("0123456789"));
        assert!(phone_ok("01234567890123"));
        assert!(!phone_ok("012345678"));
        assert!(!phone_ok("01234 56789"));
        assert!(!phone_ok("+3212345678"));
        assert!(!phone_ok(""));
    }
}
