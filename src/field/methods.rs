//! Core methods for the Model struct.

use super::accessor::ValueAccessor;
use super::model::{paste, Model, ParentForm};
use super::types::{
    ChangeFn, FieldConfig, FieldError, InputType, Notifier, PasteErrMsg, PasteMsg, TouchFn,
};
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

impl ValueAccessor for Model {
    fn write_value(&mut self, value: &str) {
        log::debug!("field `{}`: value written by form", self.config.field_name);
        self.value = value.chars().collect();
        self.pos = self.value.len();
    }

    fn register_on_change(&mut self, f: ChangeFn) {
        self.on_change = Some(f);
    }

    fn register_on_touched(&mut self, f: TouchFn) {
        self.on_touched = Some(f);
    }

    fn set_disabled_state(&mut self, disabled: bool) {
        log::debug!(
            "field `{}`: disabled set to {}",
            self.config.field_name,
            disabled
        );
        self.is_disabled = disabled;
        // A disabled field cannot hold focus. Dropping it here is not a blur
        // by the user, so the form is not told.
        if disabled {
            self.focus = false;
        }
    }
}

impl Model {
    /// Returns the current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Returns the cursor position, in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// The current configuration.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Replaces the configuration. Switching away from a password field masks
    /// the value again so a later switch back starts hidden.
    pub fn set_config(&mut self, config: FieldConfig) {
        if config.input_type != InputType::Password {
            self.hide = true;
        }
        self.config = config;
    }

    /// The name the field is looked up by.
    pub fn field_name(&self) -> &str {
        &self.config.field_name
    }

    /// Sets the placeholder shown while the value is empty.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.config.placeholder = placeholder.into();
    }

    /// Sets the readonly flag.
    pub fn set_readonly(&mut self, readonly: bool) {
        self.config.is_readonly = readonly;
    }

    /// Whether edits are refused because the field is readonly.
    pub fn is_readonly(&self) -> bool {
        self.config.is_readonly
    }

    /// Whether the field is disabled.
    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    /// Installs the form the field reads its validation state from.
    pub fn set_parent_form(&mut self, form: ParentForm) {
        self.parent_form = Some(form);
    }

    /// The form installed with [`set_parent_form`](Self::set_parent_form).
    pub fn parent_form(&self) -> Option<&ParentForm> {
        self.parent_form.as_ref()
    }

    /// Whether a password field is currently masked.
    pub fn is_hidden(&self) -> bool {
        self.hide
    }

    /// The type the value is drawn as: the declared type while masked, plain
    /// text once a password has been revealed.
    pub fn effective_input_type(&self) -> InputType {
        if self.hide {
            self.config.input_type
        } else {
            InputType::Text
        }
    }

    /// Whether the reveal control is shown at all.
    pub fn has_visibility_toggle(&self) -> bool {
        self.config.input_type == InputType::Password
    }

    /// Flips password masking. Returns `false`, changing nothing, for fields
    /// that are not password fields. Never notifies the form.
    pub fn toggle_visibility(&mut self) -> bool {
        if !self.has_visibility_toggle() {
            return false;
        }
        self.hide = !self.hide;
        log::debug!(
            "field `{}`: password {}",
            self.config.field_name,
            if self.hide { "masked" } else { "revealed" }
        );
        true
    }

    /// Gives the field keyboard focus. Disabled fields cannot be focused.
    pub fn focus(&mut self) {
        if !self.is_disabled {
            self.focus = true;
        }
    }

    /// Takes focus away and tells the form the field was touched.
    ///
    /// Blurring a field that does not have focus does nothing.
    pub fn blur(&mut self) {
        if !self.focus {
            return;
        }
        self.focus = false;
        if let Err(e) = self.notify_touched() {
            log::warn!("{}", e);
        }
    }

    /// Whether the field has keyboard focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Whether user edits are currently accepted.
    pub fn editable(&self) -> bool {
        !self.is_disabled && !self.config.is_readonly
    }

    /// Calls the change notifier with the current value.
    pub fn notify_changed(&mut self) -> Result<(), FieldError> {
        let value = self.value();
        match self.on_change.as_mut() {
            Some(f) => {
                f(&value);
                Ok(())
            }
            None => Err(self.missing(Notifier::Change)),
        }
    }

    /// Calls the touch notifier.
    pub fn notify_touched(&mut self) -> Result<(), FieldError> {
        match self.on_touched.as_mut() {
            Some(f) => {
                f();
                Ok(())
            }
            None => Err(self.missing(Notifier::Touch)),
        }
    }

    fn missing(&self, notifier: Notifier) -> FieldError {
        FieldError::NotifierMissing {
            field: self.config.field_name.clone(),
            notifier,
        }
    }

    /// Update handles key and paste messages while the field is focused.
    ///
    /// Every edit that changes the value fires the change notifier once with
    /// the whole new value. Readonly and disabled fields still move the cursor
    /// and toggle visibility but never change their value.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        let before = self.value.clone();

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if matches_binding(key_msg, &self.key_map.toggle_visibility) {
                self.toggle_visibility();
                return None;
            }
            if matches_binding(key_msg, &self.key_map.paste) {
                return if self.editable() { Some(paste()) } else { None };
            }

            self.handle_movement_keys(key_msg);
            if self.editable() {
                self.handle_deletion_keys(key_msg);
                self.handle_character_input(key_msg);
            }
        } else if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            if self.editable() {
                self.err = None;
                let runes: Vec<char> = paste_msg.0.chars().collect();
                let clean = self.sanitizer.sanitize_runes(&runes);
                self.insert_runes(clean);
            }
        } else if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            log::warn!("field `{}`: {}", self.config.field_name, paste_err.0);
            self.err = Some(paste_err.0.clone());
        }

        if self.value != before {
            if let Err(e) = self.notify_changed() {
                log::warn!("{}", e);
            }
        }
        None
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.character_backward) {
            self.pos = self.pos.saturating_sub(1);
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            if self.pos < self.value.len() {
                self.pos += 1;
            }
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.pos = 0;
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.pos = self.value.len();
        }
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.delete_word_backward) {
            self.delete_word_backward();
        } else if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if matches_binding(key_msg, &self.key_map.delete_before_cursor) {
            self.value.drain(..self.pos);
            self.pos = 0;
        } else if matches_binding(key_msg, &self.key_map.delete_after_cursor) {
            self.value.truncate(self.pos);
        }
    }

    /// Regular character input (no Ctrl/Alt modifiers).
    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        if let KeyCode::Char(ch) = key_msg.key {
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_runes(std::iter::once(ch));
            }
        }
    }

    fn insert_runes(&mut self, runes: impl IntoIterator<Item = char>) {
        let tail = self.value.split_off(self.pos);
        for r in runes {
            self.value.push(r);
        }
        self.pos = self.value.len();
        self.value.extend(tail);
    }

    /// Deletes back to the start of the previous word, skipping any
    /// whitespace directly before the cursor first.
    fn delete_word_backward(&mut self) {
        let mut start = self.pos;
        while start > 0 && self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        self.value.drain(start..self.pos);
        self.pos = start;
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus();
        None
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
