//! A minimal form model that owns control state and binds fields to it.
//!
//! [`FormGroup`] keeps one control per field name: its value, whether the user
//! has changed it (dirty), whether focus has left it (touched), and the
//! validators it runs. Fields read from it through
//! [`ValidationLookup`](crate::field::ValidationLookup) and write to it through
//! the notifiers that [`bind`] registers.
//!
//! ```rust
//! use bubbletea_formfield::field::{new, FieldConfig, InputType};
//! use bubbletea_formfield::form::{bind, FormGroup, Validator};
//! use std::sync::{Arc, Mutex};
//!
//! let mut group = FormGroup::new();
//! group
//!     .add_control("email", "", vec![Validator::Required, Validator::Email])
//!     .unwrap();
//! let form = Arc::new(Mutex::new(group));
//!
//! let mut field = new(FieldConfig::new("email", "Email").with_input_type(InputType::Email));
//! bind(&form, &mut field).unwrap();
//!
//! // Nothing is shown until the user interacts with the field.
//! assert_eq!(field.validation_message(), None);
//! field.focus();
//! field.blur();
//! assert_eq!(field.validation_message(), Some("required"));
//! ```

use crate::field::{ErrorKind, Model, ValidationLookup, ValidationState, ValueAccessor};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

/// Errors raised by [`FormGroup`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The form has no control by this name.
    #[error("no control named `{0}`")]
    UnknownControl(String),
    /// A control by this name was already added.
    #[error("a control named `{0}` already exists")]
    DuplicateControl(String),
}

/// A check run against a control's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Fails on empty text.
    Required,
    /// Fails on non-empty text that is not an email address.
    Email,
}

// Local part and domain labels as in the WHATWG address grammar. The length
// limits are checked separately since the regex crate has no lookahead.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;

/// Reports whether `value` looks like an email address.
pub fn is_valid_email(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    match value.split_once('@') {
        Some((local, _)) if local.len() <= MAX_LOCAL_PART_LENGTH => EMAIL_RE.is_match(value),
        _ => false,
    }
}

impl Validator {
    /// Returns the failure this validator reports for `value`, if any.
    pub fn check(&self, value: &str) -> Option<ErrorKind> {
        match self {
            Validator::Required if value.is_empty() => Some(ErrorKind::Required),
            // Empty values are the required validator's concern.
            Validator::Email if !value.is_empty() && !is_valid_email(value) => {
                Some(ErrorKind::Email)
            }
            _ => None,
        }
    }
}

/// One named control inside a [`FormGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Current value.
    pub value: String,
    /// Changed by the user since the last reset.
    pub dirty: bool,
    /// Left by the user since the last reset.
    pub touched: bool,
    /// Checks run against the value.
    pub validators: Vec<Validator>,
}

impl Control {
    /// Failures the validators report for the current value.
    pub fn errors(&self) -> BTreeSet<ErrorKind> {
        self.validators
            .iter()
            .filter_map(|v| v.check(&self.value))
            .collect()
    }

    fn state(&self) -> ValidationState {
        ValidationState {
            dirty: self.dirty,
            touched: self.touched,
            errors: self.errors(),
        }
    }
}

/// Controls in insertion order. Forms hold a handful of fields, so a linear
/// scan is all the lookup needs.
#[derive(Debug, Clone, Default)]
struct ControlMap(Vec<(String, Control)>);

impl ControlMap {
    fn get(&self, name: &str) -> Option<&Control> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Control> {
        self.0.iter_mut().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    fn insert(&mut self, name: String, control: Control) {
        self.0.push((name, control));
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &Control)> {
        self.0.iter().map(|(n, c)| (n.as_str(), c))
    }
}

/// The state of every control in a form.
#[derive(Debug, Clone, Default)]
pub struct FormGroup {
    controls: ControlMap,
}

impl FormGroup {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pristine, untouched control.
    pub fn add_control(
        &mut self,
        name: impl Into<String>,
        initial: impl Into<String>,
        validators: Vec<Validator>,
    ) -> Result<(), FormError> {
        let name = name.into();
        if self.controls.get(&name).is_some() {
            return Err(FormError::DuplicateControl(name));
        }
        self.controls.insert(
            name,
            Control {
                value: initial.into(),
                dirty: false,
                touched: false,
                validators,
            },
        );
        Ok(())
    }

    /// The named control.
    pub fn control(&self, name: &str) -> Option<&Control> {
        self.controls.get(name)
    }

    fn control_mut(&mut self, name: &str) -> Result<&mut Control, FormError> {
        self.controls
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownControl(name.to_string()))
    }

    /// The named control's value.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.controls.get(name).map(|c| c.value.as_str())
    }

    /// Sets a value from code. The control stays pristine.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.control_mut(name)?.value = value.into();
        Ok(())
    }

    /// Records a value the user typed into a field, marking the control dirty.
    pub fn update_from_view(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let control = self.control_mut(name)?;
        control.value = value.to_string();
        control.dirty = true;
        Ok(())
    }

    /// Records that focus left the named field.
    pub fn mark_touched(&mut self, name: &str) -> Result<(), FormError> {
        self.control_mut(name)?.touched = true;
        Ok(())
    }

    /// Makes the control pristine and untouched again. The value is kept.
    pub fn reset(&mut self, name: &str) -> Result<(), FormError> {
        let control = self.control_mut(name)?;
        control.dirty = false;
        control.touched = false;
        Ok(())
    }

    /// Failures for the named control.
    pub fn errors(&self, name: &str) -> Option<BTreeSet<ErrorKind>> {
        self.controls.get(name).map(Control::errors)
    }

    /// True when no control reports an error.
    pub fn is_valid(&self) -> bool {
        self.controls.iter().all(|(_, c)| c.errors().is_empty())
    }

    /// Field names in the order they were added.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.controls.iter().map(|(n, _)| n)
    }
}

impl ValidationLookup for FormGroup {
    fn lookup(&self, field_name: &str) -> Option<ValidationState> {
        self.controls.get(field_name).map(Control::state)
    }
}

impl ValidationLookup for Mutex<FormGroup> {
    fn lookup(&self, field_name: &str) -> Option<ValidationState> {
        lock(self).lookup(field_name)
    }
}

// A panic inside a notifier must not take the whole form down with it.
fn lock(form: &Mutex<FormGroup>) -> MutexGuard<'_, FormGroup> {
    form.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Binds `field` to the control with the same name in `form`.
///
/// Writes the control's current value into the field, routes edits to
/// [`FormGroup::update_from_view`] and blur to [`FormGroup::mark_touched`],
/// and makes the form the field's validation source.
pub fn bind(form: &Arc<Mutex<FormGroup>>, field: &mut Model) -> Result<(), FormError> {
    let name = field.field_name().to_string();
    let initial = lock(form)
        .value(&name)
        .map(str::to_string)
        .ok_or_else(|| FormError::UnknownControl(name.clone()))?;

    field.write_value(&initial);

    let on_change_form = Arc::clone(form);
    let on_change_name = name.clone();
    field.register_on_change(Box::new(move |value: &str| {
        if let Err(e) = lock(&on_change_form).update_from_view(&on_change_name, value) {
            log::warn!("{}", e);
        }
    }));

    let on_touched_form = Arc::clone(form);
    let on_touched_name = name.clone();
    field.register_on_touched(Box::new(move || {
        if let Err(e) = lock(&on_touched_form).mark_touched(&on_touched_name) {
            log::warn!("{}", e);
        }
    }));

    field.set_parent_form(Arc::clone(form) as crate::field::ParentForm);
    log::debug!("field `{}` bound to form", name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{new, FieldConfig, EMAIL_MESSAGE, REQUIRED_MESSAGE};
    use bubbletea_rs::{KeyMsg, Msg};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn type_char(field: &mut Model, c: char) {
        let msg = Box::new(KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
        }) as Msg;
        field.update(msg);
    }

    fn email_form() -> Arc<Mutex<FormGroup>> {
        let mut group = FormGroup::new();
        group
            .add_control("email", "", vec![Validator::Required, Validator::Email])
            .unwrap();
        Arc::new(Mutex::new(group))
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co"));
        assert!(is_valid_email("root@localhost"));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("ada@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email("ada @example.com"));
        assert!(!is_valid_email(&format!("{}@example.com", "a".repeat(65))));
    }

    #[test]
    fn test_validators() {
        assert_eq!(Validator::Required.check(""), Some(ErrorKind::Required));
        assert_eq!(Validator::Required.check(" "), None);
        assert_eq!(Validator::Email.check(""), None);
        assert_eq!(Validator::Email.check("nope"), Some(ErrorKind::Email));
        assert_eq!(Validator::Email.check("a@b.c"), None);
    }

    #[test]
    fn test_add_control_rejects_duplicates() {
        let mut group = FormGroup::new();
        group.add_control("name", "", vec![]).unwrap();
        assert_eq!(
            group.add_control("name", "x", vec![]),
            Err(FormError::DuplicateControl("name".to_string()))
        );
        assert_eq!(group.names().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn test_unknown_control() {
        let mut group = FormGroup::new();
        assert_eq!(
            group.mark_touched("missing"),
            Err(FormError::UnknownControl("missing".to_string()))
        );
        assert!(group.lookup("missing").is_none());
    }

    #[test]
    fn test_set_value_keeps_control_pristine() {
        let mut group = FormGroup::new();
        group.add_control("name", "", vec![Validator::Required]).unwrap();
        group.set_value("name", "Ada").unwrap();
        let state = group.lookup("name").unwrap();
        assert!(!state.dirty);
        assert!(state.errors.is_empty());
        assert!(group.is_valid());

        group.update_from_view("name", "").unwrap();
        let state = group.lookup("name").unwrap();
        assert!(state.dirty);
        assert!(state.has_error(ErrorKind::Required));
        assert!(!group.is_valid());

        group.reset("name").unwrap();
        let state = group.lookup("name").unwrap();
        assert!(!state.dirty && !state.touched);
        assert_eq!(group.value("name"), Some(""));
    }

    #[test]
    fn test_bind_unknown_field_fails() {
        let form = email_form();
        let mut field = new(FieldConfig::new("phone", "Phone"));
        assert_eq!(
            bind(&form, &mut field).err(),
            Some(FormError::UnknownControl("phone".to_string()))
        );
    }

    #[test]
    fn test_bind_writes_initial_value() {
        let mut group = FormGroup::new();
        group.add_control("name", "Grace", vec![]).unwrap();
        let form = Arc::new(Mutex::new(group));
        let mut field = new(FieldConfig::new("name", "Name"));
        bind(&form, &mut field).unwrap();
        assert_eq!(field.value(), "Grace");
        assert!(!lock(&form).control("name").unwrap().dirty);
    }

    #[test]
    fn test_bound_field_round_trip() {
        let form = email_form();
        let mut field = new(FieldConfig::new("email", "Email"));
        bind(&form, &mut field).unwrap();
        field.focus();

        assert_eq!(field.validation_message(), None);

        type_char(&mut field, 'a');
        assert_eq!(lock(&form).value("email"), Some("a"));
        assert_eq!(field.validation_message(), Some(EMAIL_MESSAGE));

        for c in "@example.com".chars() {
            type_char(&mut field, c);
        }
        assert_eq!(lock(&form).value("email"), Some("a@example.com"));
        assert_eq!(field.validation_message(), None);
    }

    #[test]
    fn test_blur_marks_touched_and_shows_required() {
        let form = email_form();
        let mut field = new(FieldConfig::new("email", "Email"));
        bind(&form, &mut field).unwrap();

        field.focus();
        field.blur();
        assert!(lock(&form).control("email").unwrap().touched);
        assert_eq!(field.validation_message(), Some(REQUIRED_MESSAGE));
    }
}
