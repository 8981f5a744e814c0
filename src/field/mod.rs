//! Form field component for Bubble Tea applications.
//!
//! A field is a labelled single-line input that a form binds to through the
//! [`ValueAccessor`] contract: the form writes values in and registers two
//! notifiers, the field reports edits and loss of focus back out. The field
//! reads its validation state from the form through [`ValidationLookup`] and
//! shows at most one message under the input.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_formfield::field::{new, FieldConfig, ValueAccessor};
//!
//! let mut field = new(FieldConfig::new("name", "Name").with_placeholder("Ada Lovelace"));
//! field.register_on_change(Box::new(|v: &str| println!("changed: {v}")));
//! field.register_on_touched(Box::new(|| println!("touched")));
//! field.focus();
//! ```
//!
//! # Password Fields
//!
//! Password fields render masked and draw a `[show]` control; `ctrl+r` (or
//! [`Model::toggle_visibility`]) reveals the value and the control becomes
//! `[hide]`. Toggling never notifies the form.
//!
//! Most applications bind fields with [`crate::form::bind`] instead of
//! registering notifiers by hand.

pub mod accessor;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod types;
pub mod validation;
pub mod view;


pub use accessor::ValueAccessor;
pub use keymap::{default_key_map, KeyMap};
pub use model::{new, paste, Model, ParentForm};
pub use types::{
    ChangeFn, FieldConfig, FieldError, InputType, Notifier, PasteErrMsg, PasteMsg, TouchFn,
};
pub use validation::{
    validation_message, ErrorKind, ValidationLookup, ValidationState, EMAIL_MESSAGE,
    REQUIRED_MESSAGE,
};
