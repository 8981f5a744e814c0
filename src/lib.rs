#![warn(missing_docs)]

//! # bubbletea-formfield
//!
//! A form field component for terminal applications built with
//! [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs): a labelled,
//! two-way-bound text input with a password reveal control and inline
//! validation messages.
//!
//! ## Pieces
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`field`] | The field component and the [`ValueAccessor`] contract forms bind through |
//! | [`form`] | [`FormGroup`], the form model that owns control state, and [`bind`](form::bind) |
//! | [`key`] | Key bindings the field reacts to |
//! | [`runeutil`] | Sanitizer mapping text onto one printable row |
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_formfield::prelude::*;
//! use bubbletea_rs::{KeyMsg, Msg};
//! use crossterm::event::{KeyCode, KeyModifiers};
//! use std::sync::{Arc, Mutex};
//!
//! let mut group = FormGroup::new();
//! group.add_control("password", "", vec![Validator::Required]).unwrap();
//! let form = Arc::new(Mutex::new(group));
//!
//! let mut field = field_new(
//!     FieldConfig::new("password", "Password").with_input_type(InputType::Password),
//! );
//! bind(&form, &mut field).unwrap();
//! field.focus();
//!
//! let key = Box::new(KeyMsg { key: KeyCode::Char('x'), modifiers: KeyModifiers::NONE }) as Msg;
//! field.update(key);
//! assert_eq!(form.lock().unwrap().value("password"), Some("x"));
//! ```

pub mod field;
pub mod form;
pub mod key;
pub mod runeutil;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// Focus decides which component receives key messages. For a form field,
/// losing focus is also what marks the field as touched.
pub trait Component {
    /// Sets the component to focused state. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use field::{
    new as field_new, FieldConfig, FieldError, InputType, Model as Field, ValueAccessor,
};
pub use form::{bind, FormError, FormGroup, Validator};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::field::{
        default_key_map as field_default_key_map, new as field_new, paste, ErrorKind,
        FieldConfig, FieldError, InputType, KeyMap as FieldKeyMap, Model as Field, PasteErrMsg,
        PasteMsg, ValidationLookup, ValidationState, ValueAccessor,
    };
    pub use crate::form::{bind, FormError, FormGroup, Validator};
    pub use crate::key::{matches_binding, new_binding, with_help, with_keys_str, Binding};
    pub use crate::Component;
}
