//! Read-only validation queries against the owning form.

use std::collections::BTreeSet;
use std::fmt;

/// Message shown when a required field is empty.
pub const REQUIRED_MESSAGE: &str = "required";
/// Message shown when a field does not hold an email address.
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// A validation failure kind. Ordering is display priority: `Required` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// The value is empty but must not be.
    Required,
    /// The value is not an email address.
    Email,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Required => f.write_str("required"),
            ErrorKind::Email => f.write_str("email"),
        }
    }
}

/// Snapshot of a control's validation status as the form sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
    /// The user has changed the value through the UI.
    pub dirty: bool,
    /// Focus has left the control at least once.
    pub touched: bool,
    /// Failures currently reported for the value.
    pub errors: BTreeSet<ErrorKind>,
}

impl ValidationState {
    /// Whether `kind` is among the current failures.
    pub fn has_error(&self, kind: ErrorKind) -> bool {
        self.errors.contains(&kind)
    }

    /// The single message to show, if any.
    ///
    /// Nothing is shown while the control is pristine and untouched. After
    /// that, `required` wins over `email`.
    pub fn message(&self) -> Option<&'static str> {
        if !self.dirty && !self.touched {
            return None;
        }
        if self.has_error(ErrorKind::Required) {
            Some(REQUIRED_MESSAGE)
        } else if self.has_error(ErrorKind::Email) {
            Some(EMAIL_MESSAGE)
        } else {
            None
        }
    }
}

/// Query capability handed to a field by the form that owns its state.
///
/// The field only ever reads through it.
pub trait ValidationLookup {
    /// Returns the state of the named control, or `None` if the form has no
    /// control by that name.
    fn lookup(&self, field_name: &str) -> Option<ValidationState>;
}

/// Resolves the message for `field_name`. Unknown fields show nothing.
pub fn validation_message(lookup: &dyn ValidationLookup, field_name: &str) -> Option<&'static str> {
    lookup.lookup(field_name).and_then(|state| state.message())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(dirty: bool, touched: bool, errors: &[ErrorKind]) -> ValidationState {
        ValidationState {
            dirty,
            touched,
            errors: errors.iter().copied().collect(),
        }
    }

    #[test]
    fn test_pristine_shows_nothing() {
        let s = state(false, false, &[ErrorKind::Required, ErrorKind::Email]);
        assert_eq!(s.message(), None);
    }

    #[test]
    fn test_required_wins_over_email() {
        let s = state(false, true, &[ErrorKind::Email, ErrorKind::Required]);
        assert_eq!(s.message(), Some(REQUIRED_MESSAGE));

        let s = state(true, false, &[ErrorKind::Email]);
        assert_eq!(s.message(), Some(EMAIL_MESSAGE));
    }

    #[test]
    fn test_valid_interacted_field_shows_nothing() {
        assert_eq!(state(true, true, &[]).message(), None);
    }

    struct Fixed(ValidationState);

    impl ValidationLookup for Fixed {
        fn lookup(&self, field_name: &str) -> Option<ValidationState> {
            (field_name == "email").then(|| self.0.clone())
        }
    }

    #[test]
    fn test_validation_message_unknown_field() {
        let lookup = Fixed(state(true, true, &[ErrorKind::Required]));
        assert_eq!(validation_message(&lookup, "email"), Some(REQUIRED_MESSAGE));
        assert_eq!(validation_message(&lookup, "other"), None);
    }
}
