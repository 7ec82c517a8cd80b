//! Password strength checklist lifecycle.
//!
//! The checklist exists only while the password field is non-empty: the
//! first non-empty keystroke attaches it, clearing the field detaches it
//! and resets the flag so a later keystroke can re-attach. The attached
//! flag is instance state, never a module-level global, so independent
//! form instances (and repeated test setups) cannot leak into each other.

/// Characters counted as symbols by the advisory symbol row.
pub const SYMBOLS: &str = "@$!%*?&";

/// The five independent sub-rules shown while the checklist is attached.
///
/// No aggregate pass/fail is derived from these; they only drive the
/// per-item satisfied markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requirements {
    /// At least 8 characters.
    pub length: bool,
    /// Contains an ASCII uppercase letter.
    pub uppercase: bool,
    /// Contains an ASCII lowercase letter.
    pub lowercase: bool,
    /// Contains an ASCII digit.
    pub digit: bool,
    /// Contains a character from [`SYMBOLS`].
    pub symbol: bool,
}

impl Requirements {
    /// Recompute all five sub-rules for the current value.
    pub fn of(value: &str) -> Self {
        Self {
            length: value.chars().count() >= 8,
            uppercase: value.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: value.chars().any(|c| c.is_ascii_lowercase()),
            digit: value.chars().any(|c| c.is_ascii_digit()),
            symbol: value.chars().any(|c| SYMBOLS.contains(c)),
        }
    }
}

/// What a call to [`StrengthChecklist::observe`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistTransition {
    /// First non-empty value: the checklist appeared.
    Attached,
    /// Still non-empty: the five markers were recomputed.
    Updated,
    /// Value became empty: the checklist was removed.
    Detached,
    /// Still empty, nothing to show.
    Idle,
}

/// Checklist state machine attached to the password field's input events.
#[derive(Debug, Clone, Default)]
pub struct StrengthChecklist {
    attached: bool,
    requirements: Requirements,
}

impl StrengthChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the checklist is currently shown.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Current sub-rule markers, present only while attached.
    pub fn requirements(&self) -> Option<&Requirements> {
        self.attached.then_some(&self.requirements)
    }

    /// Feed the password field's current value through the state machine.
    pub fn observe(&mut self, value: &str) -> ChecklistTransition {
        if value.is_empty() {
            if self.attached {
                self.attached = false;
                self.requirements = Requirements::default();
                log::debug!("strength checklist detached");
                ChecklistTransition::Detached
            } else {
                ChecklistTransition::Idle
            }
        } else {
            self.requirements = Requirements::of(value);
            if self.attached {
                ChecklistTransition::Updated
            } else {
                self.attached = true;
                log::debug!("strength checklist attached");
                ChecklistTransition::Attached
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_detach_reattach_cycle() {
        let mut checklist = StrengthChecklist::new();
        assert_eq!(checklist.observe(""), ChecklistTransition::Idle);

        assert_eq!(checklist.observe("a"), ChecklistTransition::Attached);
        assert!(checklist.is_attached());

        assert_eq!(checklist.observe("ab"), ChecklistTransition::Updated);

        assert_eq!(checklist.observe(""), ChecklistTransition::Detached);
        assert!(!checklist.is_attached());
        assert!(checklist.requirements().is_none());

        // Flag reset correctly: a later keystroke re-creates it.
        assert_eq!(checklist.observe("x"), ChecklistTransition::Attached);
    }

    #[test]
    fn requirements_recomputed_independently() {
        let mut checklist = StrengthChecklist::new();
        checklist.observe("aB3@");
        let req = *checklist.requirements().unwrap();
        assert!(!req.length);
        assert!(req.uppercase);
        assert!(req.lowercase);
        assert!(req.digit);
        assert!(req.symbol);

        checklist.observe("abcdefgh");
        let req = *checklist.requirements().unwrap();
        assert!(req.length);
        assert!(!req.uppercase);
        assert!(req.lowercase);
        assert!(!req.digit);
        assert!(!req.symbol);
    }

    #[test]
    fn only_the_listed_symbols_count() {
        let req = Requirements::of("abc#");
        assert!(!req.symbol);
        let req = Requirements::of("abc%");
        assert!(req.symbol);
    }
}
