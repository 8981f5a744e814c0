//! The value accessor contract between a form and a control.

use super::types::{ChangeFn, TouchFn};

/// The four operations a form needs from any control it binds to.
///
/// The form pushes values in with [`write_value`](ValueAccessor::write_value)
/// and learns about user activity through the two notifiers it registers.
/// Registration is expected to happen while the form is built, before the user
/// can interact with the control.
///
/// ```rust
/// use bubbletea_formfield::field::{new, FieldConfig, ValueAccessor};
/// use std::sync::{Arc, Mutex};
///
/// let mut field = new(FieldConfig::new("name", "Name"));
/// let seen = Arc::new(Mutex::new(Vec::<String>::new()));
/// let sink = Arc::clone(&seen);
/// field.register_on_change(Box::new(move |v: &str| {
///     sink.lock().unwrap().push(v.to_string());
/// }));
/// field.write_value("Ada");
/// assert_eq!(field.value(), "Ada");
/// // writes from the form are not echoed back to it
/// assert!(seen.lock().unwrap().is_empty());
/// ```
pub trait ValueAccessor {
    /// Replaces the displayed value. Any text is accepted, unvalidated.
    fn write_value(&mut self, value: &str);

    /// Stores the notifier called with the new text after each user edit,
    /// replacing any earlier one.
    fn register_on_change(&mut self, f: ChangeFn);

    /// Stores the notifier called when focus leaves the control, replacing any
    /// earlier one.
    fn register_on_touched(&mut self, f: TouchFn);

    /// Enables or disables the control. A disabled control accepts no edits.
    fn set_disabled_state(&mut self, disabled: bool);
}
