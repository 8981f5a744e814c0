//! Core types for the form field component.

use bubbletea_rs::Msg;
use serde::Deserialize;
use std::fmt;

/// Message carrying text read from the clipboard.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste error message.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// The declared semantic type of a field.
///
/// Only [`InputType::Password`] changes how the value is drawn; the rest are
/// carried so the owning form can reason about the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    /// Free text.
    #[default]
    Text,
    /// A number.
    Number,
    /// An email address.
    Email,
    /// A telephone number.
    Tel,
    /// A URL.
    Url,
    /// A calendar date.
    Date,
    /// A local date and time (`datetime-local`).
    DatetimeLocal,
    /// A time of day.
    Time,
    /// A secret, drawn masked until revealed.
    Password,
}

impl InputType {
    /// The attribute name of the type, e.g. `datetime-local`.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Number => "number",
            InputType::Email => "email",
            InputType::Tel => "tel",
            InputType::Url => "url",
            InputType::Date => "date",
            InputType::DatetimeLocal => "datetime-local",
            InputType::Time => "time",
            InputType::Password => "password",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static configuration of a field, supplied by the owning form.
///
/// Field definitions can be loaded from JSON (or any serde format) using the
/// attribute names the form templates use:
///
/// ```rust
/// use bubbletea_formfield::field::{FieldConfig, InputType};
///
/// let config = FieldConfig::new("email", "Email address")
///     .with_placeholder("you@example.com")
///     .with_input_type(InputType::Email);
/// assert_eq!(config.field_name, "email");
/// assert!(!config.is_readonly);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldConfig {
    /// Text shown while the value is empty.
    #[serde(rename = "placeholderValue")]
    pub placeholder: String,
    /// Key used to look the field up in the parent form.
    pub field_name: String,
    /// Text drawn above the input.
    pub label: String,
    /// Readonly fields can be focused but not edited.
    pub is_readonly: bool,
    /// Declared type of the field.
    pub input_type: InputType,
}

impl FieldConfig {
    /// A text field with the given name and label and no placeholder.
    pub fn new(field_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the readonly flag.
    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.is_readonly = readonly;
        self
    }

    /// Sets the declared type.
    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }
}

/// Change notifier: receives the whole new text after each edit.
/// `Send` keeps the field usable inside a bubbletea program.
pub type ChangeFn = Box<dyn FnMut(&str) + Send>;

/// Touch notifier: fired when focus leaves the field.
pub type TouchFn = Box<dyn FnMut() + Send>;

/// Which notifier slot an operation needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notifier {
    /// The change notifier.
    Change,
    /// The touch notifier.
    Touch,
}

impl fmt::Display for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notifier::Change => f.write_str("change"),
            Notifier::Touch => f.write_str("touch"),
        }
    }
}

/// Errors raised by the field itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// A notifier fired before the owning form registered it.
    #[error("field `{field}` fired its {notifier} notifier before one was registered")]
    NotifierMissing {
        /// Name of the field.
        field: String,
        /// The slot that was empty.
        notifier: Notifier,
    },
}
